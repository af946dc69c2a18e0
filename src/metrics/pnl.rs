//! Realised-PnL analysis from the wallet history.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::metrics::round_dp;
use crate::models::{PnlAnalysis, ProfitFactor, WalletEntry};

/// Build the PnL section from RealisedPNL wallet entries.
///
/// Returns `None` when no entry with a parseable amount exists; the section
/// is then omitted rather than zero-filled. Exactly-zero amounts count toward
/// the trade total but toward neither wins nor losses.
pub fn pnl_analysis(wallet: &[WalletEntry]) -> Option<PnlAnalysis> {
    let amounts: Vec<Decimal> = wallet
        .iter()
        .filter(|entry| entry.is_realised_pnl())
        .filter_map(|entry| entry.pnl_amount())
        .collect();

    if amounts.is_empty() {
        return None;
    }

    let wins: Vec<Decimal> = amounts.iter().copied().filter(|p| *p > Decimal::ZERO).collect();
    let losses: Vec<Decimal> = amounts.iter().copied().filter(|p| *p < Decimal::ZERO).collect();

    let total_pnl: Decimal = amounts.iter().copied().sum();
    let win_rate = wins.len() as f64 / amounts.len() as f64 * 100.0;

    let avg_win = if wins.is_empty() {
        Decimal::ZERO
    } else {
        wins.iter().copied().sum::<Decimal>() / Decimal::from(wins.len() as u64)
    };

    let avg_loss = if losses.is_empty() {
        Decimal::ZERO
    } else {
        (losses.iter().copied().sum::<Decimal>() / Decimal::from(losses.len() as u64)).abs()
    };

    let profit_factor = if avg_loss > Decimal::ZERO {
        let ratio = (avg_win / avg_loss).to_f64().unwrap_or(0.0);
        ProfitFactor::Finite(round_dp(ratio, 2))
    } else {
        ProfitFactor::Infinite
    };

    Some(PnlAnalysis {
        total_pnl_btc: total_pnl.round_dp(8),
        total_trades: amounts.len(),
        winning_trades: wins.len(),
        losing_trades: losses.len(),
        win_rate: round_dp(win_rate, 2),
        avg_win_btc: avg_win.round_dp(8),
        avg_loss_btc: avg_loss.round_dp(8),
        profit_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(transact_type: &str, amount_minor: i64) -> WalletEntry {
        WalletEntry {
            transact_type: transact_type.to_string(),
            amount: amount_minor.to_string(),
            ..WalletEntry::default()
        }
    }

    #[test]
    fn test_no_realised_pnl_omits_section() {
        assert!(pnl_analysis(&[]).is_none());
        assert!(pnl_analysis(&[entry("Funding", 5000), entry("Deposit", 100)]).is_none());
    }

    #[test]
    fn test_win_loss_partition() {
        let wallet = vec![
            entry("RealisedPNL", 100_000_000),  // +1 BTC
            entry("RealisedPNL", -50_000_000),  // -0.5 BTC
            entry("RealisedPNL", 0),            // neither win nor loss
            entry("Funding", 999),              // ignored
        ];

        let pnl = pnl_analysis(&wallet).unwrap();
        assert_eq!(pnl.total_trades, 3);
        assert_eq!(pnl.winning_trades, 1);
        assert_eq!(pnl.losing_trades, 1);
        assert_eq!(pnl.total_pnl_btc, dec!(0.5));
        assert_eq!(pnl.win_rate, 33.33);
        assert_eq!(pnl.avg_win_btc, dec!(1));
        assert_eq!(pnl.avg_loss_btc, dec!(0.5));
        assert_eq!(pnl.profit_factor, ProfitFactor::Finite(2.0));
    }

    #[test]
    fn test_profit_factor_sentinel_without_losses() {
        let wallet = vec![
            entry("RealisedPNL", 10_000_000),
            entry("RealisedPNL", 20_000_000),
        ];

        let pnl = pnl_analysis(&wallet).unwrap();
        assert_eq!(pnl.losing_trades, 0);
        assert_eq!(pnl.avg_loss_btc, Decimal::ZERO);
        assert_eq!(pnl.profit_factor, ProfitFactor::Infinite);
    }

    #[test]
    fn test_malformed_amounts_skipped() {
        let mut bad = entry("RealisedPNL", 0);
        bad.amount = "not-a-number".to_string();

        let wallet = vec![bad, entry("RealisedPNL", 25_000_000)];
        let pnl = pnl_analysis(&wallet).unwrap();
        assert_eq!(pnl.total_trades, 1);
        assert_eq!(pnl.total_pnl_btc, dec!(0.25));
    }

    #[test]
    fn test_rounding_to_eight_places() {
        // 1/3 satoshi-scale splits get rounded to 8 decimals
        let wallet = vec![
            entry("RealisedPNL", 1),
            entry("RealisedPNL", 1),
            entry("RealisedPNL", 1),
        ];
        let pnl = pnl_analysis(&wallet).unwrap();
        assert_eq!(pnl.avg_win_btc, dec!(0.00000001));
    }
}
