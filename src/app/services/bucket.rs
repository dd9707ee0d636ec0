//! Object store publication for archived source bundles
//!
//! Abstraction over the S3-compatible bucket that serves the archived MSCL
//! exports. The pipeline only needs one operation: publish a bundle and get
//! back the URL it will be reachable at.

use std::path::Path;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use crate::config::BucketConfig;
use crate::{Error, Result};

/// Storage backend that makes dataset bundles publicly reachable
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Upload a bundle and return its public URL.
    ///
    /// Called once per source file; a failure aborts the run before any
    /// container is written.
    async fn publish(&self, local_path: &Path) -> Result<String>;
}

/// S3-backed bundle store
pub struct S3BucketStore {
    client: Client,
    config: BucketConfig,
}

impl S3BucketStore {
    /// Connect using the default AWS credential chain
    pub async fn connect(config: BucketConfig) -> Result<Self> {
        if config.name.is_empty() {
            return Err(Error::configuration("bucket name cannot be empty"));
        }

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        let client = Client::new(&shared_config);

        Ok(Self { client, config })
    }
}

#[async_trait]
impl BucketStore for S3BucketStore {
    async fn publish(&self, local_path: &Path) -> Result<String> {
        let file_name = local_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::upload(format!(
                    "bundle path has no file name: {}",
                    local_path.display()
                ))
            })?;

        let body = ByteStream::from_path(local_path).await.map_err(|e| {
            Error::upload(format!(
                "failed to read bundle {}: {}",
                local_path.display(),
                e
            ))
        })?;

        info!("Uploading {} to {}", local_path.display(), self.config.name);
        self.client
            .put_object()
            .bucket(&self.config.name)
            .key(self.config.object_key(file_name))
            .body(body)
            .content_type("application/zip")
            .send()
            .await
            .map_err(|e| Error::upload(e.to_string()))?;

        Ok(self.config.public_url(file_name))
    }
}
