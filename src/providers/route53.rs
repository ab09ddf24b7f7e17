//! Route 53 record upserter.

use super::{RecordUpsert, RecordUpserter};
use crate::config::Config;
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::types::{Change, ChangeBatch, ResourceRecord, ResourceRecordSet};

/// Route 53 upserter using the SDK's default credential chain.
pub struct Route53Upserter {
    aws_region: String,
}

impl Route53Upserter {
    /// Create an upserter for the configured region.
    pub fn new(config: &Config) -> Self {
        Self {
            aws_region: config.aws_region.clone(),
        }
    }

    /// Resolve credentials and build a Route 53 client.
    ///
    /// Runs at submission time so a credential failure cannot pre-empt the
    /// earlier pipeline steps.
    async fn client(&self) -> Result<aws_sdk_route53::Client> {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.aws_region.clone()))
            .load()
            .await;

        let credentials = shared.credentials_provider().ok_or_else(|| {
            DdnsError::Credential("no credential provider in the default chain".to_string())
        })?;

        credentials
            .provide_credentials()
            .await
            .map_err(|e| DdnsError::Credential(e.to_string()))?;

        Ok(aws_sdk_route53::Client::new(&shared))
    }

    /// Encode the change into the SDK's batch type.
    fn change_batch(change: &RecordUpsert) -> Result<ChangeBatch> {
        let value = ResourceRecord::builder()
            .value(&change.value)
            .build()
            .map_err(|e| DdnsError::ProviderApi(e.to_string()))?;

        let record_set = ResourceRecordSet::builder()
            .name(&change.name)
            .r#type(change.record_type.into())
            .ttl(change.ttl)
            .resource_records(value)
            .build()
            .map_err(|e| DdnsError::ProviderApi(e.to_string()))?;

        let change = Change::builder()
            .action(change.action.into())
            .resource_record_set(record_set)
            .build()
            .map_err(|e| DdnsError::ProviderApi(e.to_string()))?;

        ChangeBatch::builder()
            .changes(change)
            .build()
            .map_err(|e| DdnsError::ProviderApi(e.to_string()))
    }
}

#[async_trait]
impl RecordUpserter for Route53Upserter {
    async fn upsert(&self, change: RecordUpsert) -> Result<()> {
        let client = self.client().await?;
        let batch = Self::change_batch(&change)?;

        tracing::info!(
            "Upserting {} record {} -> {} (zone {}, ttl {}s)",
            change.record_type,
            change.name,
            change.value,
            change.hosted_zone_id,
            change.ttl
        );

        client
            .change_resource_record_sets()
            .hosted_zone_id(&change.hosted_zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| DdnsError::ProviderApi(DisplayErrorContext(e).to_string()))?;

        Ok(())
    }
}
