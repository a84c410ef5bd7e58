//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Extract every record of a datos.gov.co dataset
///
/// Without flags, pages through the departments and municipalities dataset
/// 1000 records at a time and keeps the records in memory.
#[derive(Parser, Debug)]
#[command(name = "datos-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Base URL of the API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Endpoint appended verbatim to the base URL
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Records per page
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Starting offset
    #[arg(short, long)]
    pub offset: Option<u64>,

    /// Log file (truncated on each run)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Socrata application token (sent as `X-App-Token`)
    #[arg(long)]
    pub app_token: Option<String>,

    /// Stop after this many records
    #[arg(long)]
    pub max_records: Option<usize>,

    /// Print extracted records to stdout, one JSON object per line
    #[arg(short, long)]
    pub print: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
