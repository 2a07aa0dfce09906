//! CLI command definitions for the `payloadd` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` starts the HTTP
//! server; the other commands talk to the payload registry directly.

pub mod payload;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use serde_json::Value;

/// Run named payloads over HTTP or from the command line.
#[derive(Parser)]
#[command(name = "payloadd", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file.
    #[arg(long, global = true, env = "PAYLOADD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file).
        #[arg(long)]
        host: Option<String>,
    },

    /// List registered payloads.
    #[command(alias = "ls")]
    List,

    /// Show a payload's description and parameters.
    Info {
        /// Payload name.
        name: String,
    },

    /// Run a payload directly, without going through the HTTP server.
    Run {
        /// Payload name.
        name: String,

        /// Argument as key=value. The value is always passed as a string;
        /// use `--args` for numbers, booleans or nested values. Repeatable.
        #[arg(short, long = "arg", value_parser = parse_key_value)]
        arg: Vec<(String, Value)>,

        /// All arguments as one JSON object. `--arg` entries override its keys.
        #[arg(long)]
        args: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Parse a `key=value` pair for `run --arg`. The value is kept verbatim.
pub fn parse_key_value(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), Value::String(value.to_string())))
}
