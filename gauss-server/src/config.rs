//! Server configuration

use clap::Parser;

/// Normal-distribution dashboard server
#[derive(Parser, Clone, Debug)]
#[command(name = "gauss-server")]
#[command(about = "Interactive pdf/cdf dashboard for the normal distribution")]
pub struct Config {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Open the dashboard in the default browser after startup
    #[arg(long)]
    pub open: bool,
}
