//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's
//! derive macros. It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Cpekit -- CPE identifier parsing and conversion tool.
///
/// Use `cpekit <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "cpekit", version, about, long_about = None)]
pub struct Cli {
    /// Path to the cpekit.toml configuration file.
    #[arg(short, long, default_value = "cpekit.toml")]
    pub config: PathBuf,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a CPE string and print its fields.
    Parse(ParseArgs),

    /// Convert a CPE string (either dialect) to the CPE 2.2 URI form.
    Convert(ConvertArgs),

    /// Check whether a CPE string is well-formed.
    Validate(ValidateArgs),
}

// ---- parse ----

/// Parse a CPE 2.2 or 2.3 string into a structured record.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// The CPE string (e.g. `cpe:/a:vendor:product:1.0` or `cpe:2.3:...`).
    pub cpe: String,
}

// ---- convert ----

/// Emit the CPE 2.2 URI rendering of a CPE string.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// The CPE string to convert.
    pub cpe: String,
}

// ---- validate ----

/// Report dialect and validity of a CPE string.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The CPE string to check.
    pub cpe: String,
}
