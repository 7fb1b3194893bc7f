//! # Pizzeria CLI
//!
//! Prices the sample orders with the configured discount policy and prints
//! a receipt for each.
//!
//! ## Usage
//! ```bash
//! # Default config location
//! cargo run -p pizzeria-cli
//!
//! # Explicit config file
//! cargo run -p pizzeria-cli -- --config ./pizzeria.toml
//!
//! # More logging
//! RUST_LOG=trace cargo run -p pizzeria-cli
//! ```

mod config;
mod demo;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pizzeria_core::Receipt;

use crate::config::{AppConfig, LoggingSettings};
use crate::error::{AppError, AppResult};

const USAGE: &str = "Usage: pizzeria [--config <path>]";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(message)) => {
            eprintln!("{message}\n{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Pizzeria failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let Some(config_path) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let apply_filter = init_tracing(&LoggingSettings::default().filter);
    let config = AppConfig::load(config_path)?;
    apply_filter(&config.logging.filter);

    info!(
        large_order_min_items = config.discounts.large_order.min_items,
        large_order_rate_bps = config.discounts.large_order.rate_bps,
        online_rate_bps = config.discounts.online_order.rate_bps,
        "Configuration loaded"
    );

    let pipeline = config.discounts.pipeline()?;

    for sample in demo::orders()? {
        let quote = pipeline.quote(&sample.order);
        println!("== {} ==", sample.title);
        println!("{}\n", Receipt::new(&sample.order, &quote));
    }

    Ok(())
}

/// Parses `--config <path>`.
///
/// Returns `Ok(None)` when help was requested, `Ok(Some(path))` otherwise
/// (`path` is `None` when no config flag was given).
fn parse_args<I>(args: I) -> AppResult<Option<Option<PathBuf>>>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| AppError::Usage("--config requires a path".into()))?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Ok(None),
            other => return Err(AppError::Usage(format!("Unknown argument: {other}"))),
        }
    }

    Ok(Some(config_path))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Installed before the config is read, so config loading is logged with
/// `bootstrap_filter`. The returned closure swaps in the configured filter.
/// `RUST_LOG` wins over both.
fn init_tracing(bootstrap_filter: &str) -> impl Fn(&str) {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(bootstrap_filter), false),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter_reloading();
    let handle = builder.reload_handle();
    builder.init();

    move |configured: &str| {
        if from_env {
            return;
        }
        if let Err(e) = handle.reload(EnvFilter::new(configured)) {
            warn!(error = %e, "Failed to apply configured log filter");
        }
    }
}
