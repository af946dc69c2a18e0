//! Synthetic demo-data generator: OHLCV bars, executions, wallet history,
//! and an account summary, all driven by one explicitly seeded RNG.

mod ohlcv;
mod executions;
mod wallet;
mod account;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

pub use account::AccountSummary;
pub use executions::ExecutionRow;
pub use ohlcv::Bar;
pub use wallet::WalletRow;

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the dataset files are written into
    pub out_dir: PathBuf,

    /// Days of execution and wallet history
    pub days: i64,

    /// Seed for the pseudo-random generator; identical seeds produce
    /// identical datasets
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            days: 180,
            seed: 42,
        }
    }
}

/// Generate the full demo dataset.
pub fn generate_all(config: &GeneratorConfig) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let ohlcv_dir = config.out_dir.join("data").join("ohlcv");
    fs::create_dir_all(&ohlcv_dir)
        .with_context(|| format!("failed to create {}", ohlcv_dir.display()))?;

    for symbol in ["XBTUSD", "ETHUSD"] {
        for (timeframe, days) in [("1d", 365i64), ("1h", 90), ("5m", 30)] {
            let bars = ohlcv::generate_bars(&mut rng, symbol, timeframe, days)?;
            let path = ohlcv_dir.join(format!("{symbol}_{timeframe}.csv"));
            write_csv(&path, &bars)?;
            info!(path = %path.display(), records = bars.len(), "generated OHLCV bars");
        }
    }

    let executions = executions::generate(&mut rng, config.days)?;
    let path = config.out_dir.join("bitmex_executions.csv");
    write_csv(&path, &executions)?;
    info!(path = %path.display(), records = executions.len(), "generated executions");

    let history = wallet::generate(&mut rng, config.days)?;
    let path = config.out_dir.join("bitmex_wallet_history.csv");
    write_csv(&path, &history)?;
    info!(path = %path.display(), records = history.len(), "generated wallet history");

    let summary = account::summary(Utc::now());
    let path = config.out_dir.join("bitmex_account_summary.json");
    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, &summary)?;
    info!(path = %path.display(), "generated account summary");

    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_all_writes_expected_files() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig {
            out_dir: dir.path().to_path_buf(),
            days: 5,
            seed: 7,
        };

        generate_all(&config).unwrap();

        for name in [
            "bitmex_executions.csv",
            "bitmex_wallet_history.csv",
            "bitmex_account_summary.json",
        ] {
            assert!(dir.path().join(name).exists(), "missing {name}");
        }
        assert!(dir.path().join("data/ohlcv/XBTUSD_1d.csv").exists());
        assert!(dir.path().join("data/ohlcv/ETHUSD_5m.csv").exists());
    }

    #[test]
    fn test_generated_dataset_loads_back() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig {
            out_dir: dir.path().to_path_buf(),
            days: 10,
            seed: 42,
        };
        generate_all(&config).unwrap();

        let history =
            crate::data::load_wallet_history(dir.path().join("bitmex_wallet_history.csv")).unwrap();
        assert!(history.iter().any(|entry| entry.is_realised_pnl()));
        assert!(history.iter().all(|entry| entry.pnl_amount().is_some()));

        let executions =
            crate::data::load_executions(dir.path().join("bitmex_executions.csv")).unwrap();
        for execution in &executions {
            assert!(execution.last_qty > 0.0);
            assert!(execution.exec_id.starts_with("exec-"));
        }
    }
}
