//! Wallet-history model for balance-affecting transactions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Minor units per whole currency unit (satoshis per BTC).
pub const MINOR_UNITS_PER_UNIT: Decimal = dec!(100_000_000);

/// A single wallet-history record.
///
/// `amount` stays raw text so a malformed value only drops the record from
/// the PnL metrics, not from the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletEntry {
    /// Exchange-assigned transaction identifier
    #[serde(rename = "transactID", default)]
    pub transact_id: String,

    /// Transaction type (RealisedPNL, Funding, ...)
    #[serde(rename = "transactType", default)]
    pub transact_type: String,

    /// Amount in minor units as exported
    #[serde(default)]
    pub amount: String,

    /// Wallet balance after the transaction, in minor units as exported
    #[serde(rename = "walletBalance", default)]
    pub wallet_balance: String,

    /// ISO-8601 transaction time as exported
    #[serde(default)]
    pub timestamp: String,
}

impl WalletEntry {
    pub fn is_realised_pnl(&self) -> bool {
        self.transact_type == "RealisedPNL"
    }

    /// Amount converted from minor units to whole units, `None` if not numeric.
    pub fn pnl_amount(&self) -> Option<Decimal> {
        let minor: Decimal = self.amount.trim().parse().ok()?;
        Some(minor / MINOR_UNITS_PER_UNIT)
    }
}
