//! CSV record loading.
//!
//! A missing input file is an empty record set, not an error; a row that
//! fails to deserialize is logged and skipped.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::{Execution, Order, WalletEntry};

/// Load the order-history export.
pub fn load_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>> {
    load_records(path.as_ref())
}

/// Load the wallet-history export.
pub fn load_wallet_history<P: AsRef<Path>>(path: P) -> Result<Vec<WalletEntry>> {
    load_records(path.as_ref())
}

/// Load the execution export.
pub fn load_executions<P: AsRef<Path>>(path: P) -> Result<Vec<Execution>> {
    load_records(path.as_ref())
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "input file missing, treating as empty");
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        match result {
            Ok(record) => records.push(record),
            // Header is line 1, first record line 2
            Err(e) => warn!(path = %path.display(), line = index + 2, error = %e, "skipping malformed row"),
        }
    }

    Ok(records)
}
