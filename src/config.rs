use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "issue-tracker")]
#[command(about = "In-memory issue tracker served over HTTP")]
pub struct Config {
    /// Port for HTTP API
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory of static files served outside /api
    #[arg(long, env = "PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,
}

impl Config {
    /// `host:port`, resolved when binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
