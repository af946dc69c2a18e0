//! Trader Profile Toolkit
//!
//! Analyzes trading-history exports (orders, wallet history, executions)
//! into a descriptive trader profile, and generates synthetic demo datasets
//! from an explicitly seeded random generator.

mod config;
mod data;
mod generator;
mod metrics;
mod models;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::ProfileConfig;
use crate::generator::GeneratorConfig;

/// Trader profile analysis CLI.
#[derive(Parser)]
#[command(name = "traderscope")]
#[command(about = "Analyze trading history exports into a trader profile", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze order/wallet/execution exports and write the profile report
    Analyze {
        /// Directory containing the export files
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,

        /// Order-history file name within the data directory
        #[arg(long, default_value = "bitmex_orders.csv")]
        orders: String,

        /// Wallet-history file name within the data directory
        #[arg(long, default_value = "bitmex_wallet_history.csv")]
        wallet: String,

        /// Execution file name within the data directory
        #[arg(long, default_value = "bitmex_executions.csv")]
        executions: String,

        /// Output path for the JSON profile (relative paths resolve against
        /// the data directory)
        #[arg(short, long, default_value = "trader_profile_analysis.json")]
        output: PathBuf,
    },

    /// Generate synthetic demo datasets (OHLCV, executions, wallet history)
    Generate {
        /// Directory to write the dataset files into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Random seed; identical seeds reproduce identical datasets
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Days of execution and wallet history
        #[arg(short, long, default_value = "180")]
        days: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze {
            data_dir,
            orders,
            wallet,
            executions,
            output,
        } => {
            info!(data_dir = %data_dir.display(), "Loading trading history");

            let orders = data::load_orders(data_dir.join(orders))?;
            let wallet_history = data::load_wallet_history(data_dir.join(wallet))?;
            let executions = data::load_executions(data_dir.join(executions))?;

            println!("\nLoaded data:");
            println!("  Orders:         {}", orders.len());
            println!("  Wallet History: {}", wallet_history.len());
            println!("  Executions:     {}", executions.len());

            let profile_config = ProfileConfig::default();
            let profile = metrics::compose(&orders, &wallet_history, &executions, &profile_config);

            println!("{}", profile);

            let output = if output.is_absolute() {
                output
            } else {
                data_dir.join(output)
            };
            report::save_json(&profile, &output)?;
            println!("\nAnalysis results saved to: {}", output.display());
        }

        Commands::Generate { out_dir, seed, days } => {
            info!(out_dir = %out_dir.display(), seed = seed, days = days, "Generating demo data");

            let generator_config = GeneratorConfig { out_dir, days, seed };
            generator::generate_all(&generator_config)?;

            println!("\nDemo data generated in: {}", generator_config.out_dir.display());
        }
    }

    Ok(())
}
