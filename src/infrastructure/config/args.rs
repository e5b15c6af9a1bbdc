use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "portrait-resolver",
    version,
    about = "Resolves a displayable portrait URL for each character",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Rendition to resolve (e.g. `standard_xlarge`).
    #[arg(long, value_name = "NAME")]
    pub size: Option<String>,

    /// Seconds a single probe may take.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Minimum accepted width and height, exclusive.
    #[arg(long, value_name = "PIXELS")]
    pub min_dimension: Option<u32>,

    /// JSON character payload; the demo roster is used when absent.
    #[arg(long, value_name = "PATH", env = "PORTRAIT_RESOLVER_CHARACTERS")]
    pub characters: Option<PathBuf>,

    /// Only resolve characters whose name starts with this prefix.
    #[arg(long, value_name = "PREFIX")]
    pub name_starts_with: Option<String>,

    /// Warm the cache at the preload size before resolving.
    #[arg(long)]
    pub preload: bool,
}
