//! Loading of delimited trading-history exports.

mod loader;

pub use loader::{load_executions, load_orders, load_wallet_history};
