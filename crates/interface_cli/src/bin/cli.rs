//! Insurance Ledger - Terminal Binary
//!
//! Starts an empty in-memory registry and runs the interactive menus on
//! stdin/stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin insurance-cli
//!
//! # JSON logs at debug level, amounts in euros
//! cargo run --bin insurance-cli -- --log-level debug --log-format json --currency EUR
//! ```
//!
//! # Environment Variables
//!
//! * `INSURANCE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `INSURANCE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `INSURANCE_CURRENCY` - ISO currency code for entered amounts (default: USD)
//! * `RUST_LOG` - Overrides the log level with a full filter directive

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_memory::SharedRegistry;
use interface_cli::{CliConfig, Console, LogFormat, Session};

/// Insurance record-keeping in the terminal
#[derive(Debug, Parser)]
#[command(name = "insurance-cli", version, about)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Currency for entered amounts
    #[arg(long)]
    currency: Option<String>,
}

/// Main entry point for the terminal front end.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded or names an unknown currency
/// - The terminal cannot be read or written
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = load_config(&args)?;

    init_tracing(&config.log_level, config.log_format);

    let currency = config.currency().context("invalid currency in configuration")?;
    let session = Session::new(SharedRegistry::default()).with_currency(currency);
    tracing::info!(session_id = %session.id(), %currency, "Starting insurance CLI");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), session);
    console.run().context("terminal session failed")?;

    tracing::info!("Insurance CLI exited");
    Ok(())
}

/// Loads configuration, then applies command-line overrides.
///
/// # Errors
///
/// Returns error if the config file or environment values are invalid
fn load_config(args: &Args) -> anyhow::Result<CliConfig> {
    let mut config = CliConfig::load(args.config.as_deref()).context("failed to load configuration")?;

    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = args.log_format {
        config.log_format = format;
    }
    if let Some(currency) = &args.currency {
        config.currency = currency.clone();
    }
    Ok(config)
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// # Arguments
///
/// * `log_level` - Fallback filter when `RUST_LOG` is unset
/// * `format` - Pretty or JSON lines
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
