//! # route53-ddns
//!
//! A small dynamic DNS updater for Amazon Route 53.
//!
//! Each run walks three steps in a fixed order:
//!
//! 1. Load the YAML configuration (region, record name, hosted zone).
//! 2. Ask an IP echo service for the caller's current public IPv4 address.
//! 3. Upsert the configured A record to point at that address.
//!
//! Any failure aborts the run with a kind-specific exit code; nothing is
//! retried. Pair the binary with cron or a systemd timer to keep a record
//! pointed at a moving IP.
//!
//! ## Usage
//!
//! ```bash
//! # config.yml in the working directory
//! route53-ddns
//!
//! # or with explicit inputs
//! route53-ddns --config /etc/route53-ddns/config.yml
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod resolver;

pub use config::Config;
pub use error::{DdnsError, Result};
pub use resolver::{DiscoveredAddress, IpResolver};

use providers::{RecordUpsert, RecordUpserter};

/// Discover the public IP and upsert the configured record to match.
///
/// Returns the discovered address so the caller can report it. The upsert
/// is never attempted when IP discovery fails.
pub async fn run(
    config: &Config,
    resolver: &IpResolver,
    upserter: &dyn RecordUpserter,
) -> Result<DiscoveredAddress> {
    let address = resolver.resolve().await?;
    let change = RecordUpsert::for_address(config, &address);
    upserter.upsert(change).await?;
    Ok(address)
}
