//! # ethcall
//!
//! Command-line front end for the ABI call codec.
//!
//! ## Usage
//!
//! ```bash
//! # Function selectors
//! ethcall selector "transfer(address,uint256)"
//!
//! # Call encoding
//! ethcall encode "baz(uint32,bool)" 69 true
//! ethcall encode "sam(bytes,bool,uint256[])" 0x64617665 true "[1,2,3]"
//!
//! # Return decoding
//! ethcall decode --types uint256 0x000...02a
//! ethcall decode --function balanceOf 0x000...02a
//!
//! # Configuration
//! ethcall config --show
//! ethcall config --add-function "balanceOf(address) returns (uint256)"
//! ethcall config --add-function "balanceOf(address)" --outputs uint256
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// Ethereum ABI call encoder
#[derive(Parser, Debug)]
#[command(name = "ethcall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute a function selector
    Selector(commands::selector::SelectorCommand),
    /// Encode a function call
    Encode(commands::encode::EncodeCommand),
    /// Decode static return values
    Decode(commands::decode::DecodeCommand),
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the default log filter
        #[arg(long)]
        set_log_level: Option<String>,
        /// Set JSON output as the default
        #[arg(long)]
        set_json: Option<bool>,
        /// Register a known function signature
        #[arg(long)]
        add_function: Option<String>,
        /// Return types for --add-function, e.g. "uint256,bool"
        #[arg(long, requires = "add_function")]
        outputs: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::load();
    let json = cli.json || config.json;

    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let result = match cli.command {
        Commands::Selector(cmd) => cmd.execute(json),
        Commands::Encode(cmd) => cmd.execute(json),
        Commands::Decode(cmd) => cmd.execute(&config, json),
        Commands::Config {
            show,
            set_log_level,
            set_json,
            add_function,
            outputs,
        } => handle_config(
            &mut config,
            show,
            set_log_level,
            set_json,
            add_function.map(|signature| (signature, outputs)),
            json,
        ),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_log_level: Option<String>,
    set_json: Option<bool>,
    add_function: Option<(String, Option<String>)>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(level) = set_log_level {
        EnvFilter::try_new(&level)
            .map_err(|e| CliError::InvalidInput(format!("log level {:?}: {}", level, e)))?;
        config.log_level = level;
        modified = true;
    }

    if let Some(value) = set_json {
        config.json = value;
        modified = true;
    }

    if let Some((signature, outputs)) = add_function {
        let function = config.add_function(&signature, outputs.as_deref())?;
        tracing::info!(function = %function, "registered function");
        modified = true;
    }

    if modified {
        config.save()?;
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print();
    } else if show {
        Output::new(json)
            .field("log_level", &config.log_level)
            .field_value("json", serde_json::Value::Bool(config.json))
            .field_value(
                "functions",
                serde_json::to_value(&config.functions)
                    .map_err(|e| CliError::Config(e.to_string()))?,
            )
            .message(&format!(
                "Log level: {}\nJSON output: {}\nFunctions:\n{}",
                config.log_level,
                config.json,
                config
                    .functions
                    .iter()
                    .map(|f| format!("  {} returns ({})", f.signature, f.outputs.join(",")))
                    .collect::<Vec<_>>()
                    .join("\n")
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-log-level/--set-json/--add-function to modify")
            .print();
    }

    Ok(())
}
