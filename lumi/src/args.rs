use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Lumi story summarizer
#[derive(Debug, Parser)]
#[command(name = "lumi", about = "Summarize stories and books, then read the summary aloud")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "lumi.toml", env = "LUMI_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "LUMI_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, default_value = "info", env = "LUMI_LOG")]
    pub log: String,
}
