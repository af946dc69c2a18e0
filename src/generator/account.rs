//! Synthetic account-summary document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountUser {
    pub id: u64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub wallet_balance: i64,
    pub margin_balance: i64,
    pub available_margin: i64,
    pub unrealised_pnl: i64,
    pub realised_pnl: i64,
}

/// Account summary as exported alongside the trading history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    #[serde(rename = "exportDate")]
    pub export_date: DateTime<Utc>,
    pub user: AccountUser,
    pub wallet: WalletSnapshot,
    pub positions: Vec<serde_json::Value>,
}

/// Build the fixed demo account summary.
pub fn summary(export_date: DateTime<Utc>) -> AccountSummary {
    AccountSummary {
        export_date,
        user: AccountUser {
            id: 123_456,
            username: "demo_trader".to_string(),
            email: "demo@example.com".to_string(),
        },
        wallet: WalletSnapshot {
            wallet_balance: 150_000_000, // 1.5 BTC in satoshis
            margin_balance: 155_000_000,
            available_margin: 120_000_000,
            unrealised_pnl: 5_000_000,
            realised_pnl: 25_000_000,
        },
        positions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_export_keys() {
        let doc = summary(Utc::now());
        let json = serde_json::to_string(&doc).unwrap();

        assert!(json.contains("\"exportDate\""));
        assert!(json.contains("\"walletBalance\":150000000"));
        assert!(json.contains("\"demo_trader\""));
        assert!(json.contains("\"positions\":[]"));
    }
}
