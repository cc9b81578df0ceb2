//! AWS Secrets Manager store.
//!
//! Reads secrets with `GetSecretValue`. Enable with `--features aws`.
//!
//! Credentials come from the default provider chain (environment,
//! profile, or the Lambda execution role).

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tracing::trace;

use super::{non_empty, SecretStore};
use crate::error::{Result, SecretError};

/// AWS Secrets Manager backend.
#[derive(Debug, Clone)]
pub struct SecretsManager {
    client: Client,
}

impl SecretsManager {
    /// Load shared AWS config for `region` and build a client.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::from_client(Client::new(&config))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SecretsManager {
    async fn fetch(&self, secret_id: &str) -> Result<Option<String>> {
        trace!(secret_id, "GetSecretValue");

        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| SecretError::Store(format!("{}", DisplayErrorContext(e))))?;

        Ok(non_empty(output.secret_string()))
    }

    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }
}
