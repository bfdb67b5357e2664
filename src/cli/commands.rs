use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "td", about = concat!("[+] today v", env!("CARGO_PKG_VERSION"), " - today's tasks in your terminal"), version)]
pub struct Cli {
    /// Read configuration from a specific file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the temp directory
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}
