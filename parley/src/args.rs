use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Parley voice assistant backend
#[derive(Debug, Parser)]
#[command(name = "parley", about = "Voice assistant backend: speech-to-text, replies and speech synthesis")]
pub struct Args {
    /// Path to configuration file, built-in defaults when it does not exist
    #[arg(short, long, default_value = "parley.toml", env = "PARLEY_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PARLEY_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter in `EnvFilter` syntax
    #[arg(long, default_value = "info", env = "PARLEY_LOG")]
    pub log_filter: String,
}
