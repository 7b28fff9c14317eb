use clap::{Parser, ValueEnum};

use crate::domain::config::{default_output_name, DEFAULT_DATE_FORMAT};

/// Command line arguments for SenaGen
#[derive(Parser, Debug)]
#[command(
    name = "senagen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mega-Sena lottery game generator",
    long_about = "Generates randomized Mega-Sena game combinations, writes them to a flat text file and optionally echoes them to the console."
)]
pub struct Args {
    /// Number of games to generate [default: 1]
    #[arg(short, long)]
    pub quantity: Option<u32>,

    /// Numbers per game, between 6 and 15 [default: 6]
    #[arg(short = 't', long = "size", value_parser = clap::value_parser!(u8).range(6..=15))]
    pub size: Option<u8>,

    /// Output file name
    #[arg(short, long, help = output_help())]
    pub output: Option<String>,

    /// Echo generated games to standard output
    #[arg(short, long)]
    pub print: bool,

    /// Console output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(long)]
    pub quiet: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
    /// CSV output
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

fn output_help() -> String {
    format!(
        "Output file name [default: {}]",
        default_output_name(DEFAULT_DATE_FORMAT)
    )
}
