//! Console rendering and JSON persistence of the composed profile.

use std::fmt;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::TraderProfile;

impl fmt::Display for TraderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{:=^60}", " TRADER PROFILE ")?;

        writeln!(f, "\n--- Basic Statistics ---")?;
        let basic = &self.basic_stats;
        writeln!(f, "Total Orders:    {}", basic.total_orders)?;
        writeln!(f, "Filled Orders:   {}", basic.filled_orders)?;
        writeln!(f, "Canceled Orders: {}", basic.canceled_orders)?;
        writeln!(f, "Fill Rate:       {:.2}%", basic.fill_rate)?;
        for (label, count) in &basic.order_types {
            writeln!(f, "  {:<14} {}", format!("{label}:"), count)?;
        }

        writeln!(f, "\n--- Risk Preference ---")?;
        match &self.risk_preference {
            Some(risk) => {
                writeln!(f, "Avg Order Size:    {:.2}", risk.avg_order_size)?;
                writeln!(f, "Max Order Size:    {}", risk.max_order_size)?;
                writeln!(f, "Min Order Size:    {}", risk.min_order_size)?;
                writeln!(f, "Large Order Ratio: {:.2}%", risk.large_order_ratio)?;
                writeln!(f, "Risk Score:        {}/10", risk.risk_score)?;
                writeln!(f, "Risk Level:        {}", risk.risk_level)?;
            }
            None => writeln!(f, "(insufficient data)")?,
        }

        writeln!(f, "\n--- Trading Frequency ---")?;
        match &self.trading_frequency {
            Some(freq) => {
                writeln!(f, "Trading Days:    {}", freq.total_trading_days)?;
                writeln!(f, "Daily Avg:       {:.2} trades", freq.daily_avg_trades)?;
                writeln!(f, "Avg Interval:    {:.2} minutes", freq.avg_trade_interval_minutes)?;
                writeln!(f, "Frequency Score: {}/10", freq.frequency_score)?;
                writeln!(f, "Frequency Level: {}", freq.frequency_level)?;
            }
            None => writeln!(f, "(insufficient data)")?,
        }

        writeln!(f, "\n--- Discipline Assessment ---")?;
        let discipline = &self.discipline_scores;
        writeln!(f, "Limit Order Ratio: {:.2}%", discipline.limit_order_ratio)?;
        writeln!(f, "Cancel Ratio:      {:.2}%", discipline.cancel_ratio)?;
        writeln!(f, "Discipline Score:  {}/10", discipline.discipline_score)?;
        writeln!(f, "Patience Score:    {}/10", discipline.patience_score)?;
        writeln!(f, "Discipline Level:  {}", discipline.discipline_level)?;
        writeln!(f, "Patience Level:    {}", discipline.patience_level)?;

        if let Some(pnl) = &self.pnl_analysis {
            writeln!(f, "\n--- PnL Analysis ---")?;
            writeln!(f, "Total PnL:      {} BTC", pnl.total_pnl_btc)?;
            writeln!(f, "Total Trades:   {}", pnl.total_trades)?;
            writeln!(f, "Winning Trades: {}", pnl.winning_trades)?;
            writeln!(f, "Losing Trades:  {}", pnl.losing_trades)?;
            writeln!(f, "Win Rate:       {:.2}%", pnl.win_rate)?;
            writeln!(f, "Avg Win:        {} BTC", pnl.avg_win_btc)?;
            writeln!(f, "Avg Loss:       {} BTC", pnl.avg_loss_btc)?;
            writeln!(f, "Profit Factor:  {}", pnl.profit_factor)?;
        }

        if let Some(patterns) = &self.trading_patterns {
            writeln!(f, "\n--- Trading Patterns ---")?;
            writeln!(f, "Most Active Hour: {}:00 UTC", patterns.most_active_hour)?;
            writeln!(f, "Most Active Day:  {}", patterns.most_active_day)?;
        }

        writeln!(f, "\n--- Summary ---")?;
        let summary = &self.summary;
        writeln!(f, "Trader Type:      {}", summary.trader_type)?;
        writeln!(f, "Overall Score:    {}/10", summary.overall_score)?;
        writeln!(f, "Risk Level:       {}", summary.risk_level)?;
        writeln!(f, "Frequency Level:  {}", summary.frequency_level)?;
        writeln!(f, "Discipline Level: {}", summary.discipline_level)?;

        writeln!(f, "\n--- Advice ---")?;
        for (i, advice) in summary.advice.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, advice)?;
        }

        writeln!(f, "{:=^60}", "")?;
        Ok(())
    }
}

/// Write the profile document as pretty-printed JSON.
pub fn save_json<P: AsRef<Path>>(profile: &TraderProfile, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, profile)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
