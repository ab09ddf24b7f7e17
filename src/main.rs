//! route53-ddns - keep a Route 53 A record pointed at this host's public IP.

use clap::Parser;
use route53_ddns::config::{Config, DEFAULT_CONFIG_PATH};
use route53_ddns::providers::Route53Upserter;
use route53_ddns::resolver::{IpResolver, DEFAULT_IP_ENDPOINT};
use route53_ddns::{DdnsError, DiscoveredAddress};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "route53-ddns")]
#[command(about = "Point a Route 53 A record at this host's current public IP")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// IP discovery endpoint
    #[arg(long, default_value = DEFAULT_IP_ENDPOINT)]
    ip_endpoint: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match update(cli).await {
        Ok(address) => {
            // The address is response-controlled data; print it as such,
            // never as a format template.
            println!("{}", address.ip);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn update(cli: Cli) -> Result<DiscoveredAddress, DdnsError> {
    let config = Config::load_from(&cli.config)?;
    let resolver = IpResolver::with_endpoint(cli.ip_endpoint);
    let upserter = Route53Upserter::new(&config);

    route53_ddns::run(&config, &resolver, &upserter).await
}
