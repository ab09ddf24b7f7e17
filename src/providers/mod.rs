//! DNS provider plumbing: the upsert payload and the submission seam.

mod route53;

pub use route53::Route53Upserter;

use crate::config::Config;
use crate::error::Result;
use crate::resolver::DiscoveredAddress;
use async_trait::async_trait;

/// TTL applied to the managed record, in seconds.
pub const RECORD_TTL_SECS: i64 = 3600;

/// A single create-or-replace change for an A record.
///
/// This is the entire payload later encoded into the provider's change
/// request; building it has no side effects, so tests can verify the exact
/// shape without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpsert {
    /// Hosted zone the change is scoped to.
    pub hosted_zone_id: String,
    /// Change action; always "UPSERT".
    pub action: &'static str,
    /// Record type; always "A".
    pub record_type: &'static str,
    /// Fully-qualified record name.
    pub name: String,
    /// Record TTL in seconds.
    pub ttl: i64,
    /// Record value, the discovered IP.
    pub value: String,
}

impl RecordUpsert {
    /// Build the change pointing the configured record at `address`.
    pub fn for_address(config: &Config, address: &DiscoveredAddress) -> Self {
        Self {
            hosted_zone_id: config.hosted_zone_id.clone(),
            action: "UPSERT",
            record_type: "A",
            name: config.record.clone(),
            ttl: RECORD_TTL_SECS,
            value: address.ip.clone(),
        }
    }
}

/// Trait for submitting record changes to a DNS provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordUpserter: Send + Sync {
    /// Submit one upsert change.
    async fn upsert(&self, change: RecordUpsert) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            aws_region: "us-east-1".to_string(),
            record: "home.example.com".to_string(),
            hosted_zone_id: "Z123".to_string(),
        }
    }

    #[test]
    fn test_change_shape() {
        let address = DiscoveredAddress {
            ip: "198.51.100.5".to_string(),
        };

        let change = RecordUpsert::for_address(&test_config(), &address);

        assert_eq!(
            change,
            RecordUpsert {
                hosted_zone_id: "Z123".to_string(),
                action: "UPSERT",
                record_type: "A",
                name: "home.example.com".to_string(),
                ttl: 3600,
                value: "198.51.100.5".to_string(),
            }
        );
    }

    #[test]
    fn test_repeated_change_is_identical() {
        let address = DiscoveredAddress {
            ip: "198.51.100.5".to_string(),
        };
        let config = test_config();

        let first = RecordUpsert::for_address(&config, &address);
        let second = RecordUpsert::for_address(&config, &address);
        assert_eq!(first, second);
    }

    #[test]
    fn test_value_kept_verbatim() {
        // The discovered address is opaque; whatever the echo service said
        // is what gets submitted.
        let address = DiscoveredAddress {
            ip: "203.0.113.007".to_string(),
        };

        let change = RecordUpsert::for_address(&test_config(), &address);
        assert_eq!(change.value, "203.0.113.007");
    }
}
