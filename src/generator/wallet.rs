//! Synthetic wallet history: daily realised PnL plus occasional funding rows.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

const MINOR_UNITS: f64 = 1e8;

/// One wallet-history row in the BitMEX export column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletRow {
    #[serde(rename = "transactID")]
    pub transact_id: String,
    pub account: u64,
    pub currency: String,
    #[serde(rename = "transactType")]
    pub transact_type: String,
    pub amount: i64,
    pub fee: i64,
    #[serde(rename = "transactStatus")]
    pub transact_status: String,
    pub address: String,
    pub tx: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "walletBalance")]
    pub wallet_balance: i64,
    #[serde(rename = "marginBalance")]
    pub margin_balance: i64,
}

impl WalletRow {
    fn new(
        transact_id: String,
        transact_type: &str,
        amount_btc: f64,
        balance_btc: f64,
        text: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let balance_minor = (balance_btc * MINOR_UNITS).round() as i64;
        Self {
            transact_id,
            account: 123_456,
            currency: "XBt".to_string(),
            transact_type: transact_type.to_string(),
            amount: (amount_btc * MINOR_UNITS).round() as i64,
            fee: 0,
            transact_status: "Completed".to_string(),
            address: String::new(),
            tx: String::new(),
            text: text.to_string(),
            timestamp,
            wallet_balance: balance_minor,
            margin_balance: balance_minor,
        }
    }
}

/// Generate one RealisedPNL row per day (Gaussian, mean 0.001 BTC) over a
/// running balance that starts at 1 BTC, with funding rows at p = 0.3.
pub fn generate(rng: &mut impl Rng, days: i64) -> Result<Vec<WalletRow>> {
    let start = Utc::now() - Duration::days(days);
    let pnl_dist = Normal::new(0.001, 0.005).context("invalid pnl distribution")?;
    let funding_dist = Normal::new(0.0, 0.000_1).context("invalid funding distribution")?;

    let mut history = Vec::new();
    let mut balance = 1.0f64;

    for day in 0..days {
        let timestamp = start + Duration::days(day);

        let pnl = pnl_dist.sample(rng);
        balance += pnl;
        history.push(WalletRow::new(
            format!("trans-{day}"),
            "RealisedPNL",
            pnl,
            balance,
            "",
            timestamp,
        ));

        if rng.gen_bool(0.3) {
            let funding = funding_dist.sample(rng) * balance;
            history.push(WalletRow::new(
                format!("fund-{day}"),
                "Funding",
                funding,
                balance,
                "Funding",
                timestamp,
            ));
        }
    }

    Ok(history)
}
