//! Data models for orders, executions, wallet history, and the trader profile.

mod order;
mod execution;
mod wallet;
mod profile;

pub use order::Order;
pub use execution::{ExecSide, Execution};
pub use wallet::WalletEntry;
pub use profile::{
    BasicStats, DisciplineScores, PnlAnalysis, ProfileSummary, ProfitFactor, RiskPreference,
    TraderProfile, TradingFrequency, TradingPatterns,
};
