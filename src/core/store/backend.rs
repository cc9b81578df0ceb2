//! Backend selection for the secret store.
//!
//! Builds with the `aws` feature use AWS Secrets Manager. Other builds have
//! no remote store and can only resolve in development mode.

use tracing::info;

use super::SecretStore;
use crate::core::config::ResolverConfig;
use crate::error::Result;
#[cfg(not(feature = "aws"))]
use crate::error::SecretError;

/// Default store for the given configuration.
///
/// # Errors
///
/// Returns `SecretError::Unsupported` when no store backend is compiled in.
pub async fn default_backend(config: &ResolverConfig) -> Result<Box<dyn SecretStore>> {
    #[cfg(feature = "aws")]
    {
        info!(region = %config.region, "Using AWS Secrets Manager backend");
        let store = super::aws::SecretsManager::connect(&config.region).await;
        Ok(Box::new(store))
    }

    #[cfg(not(feature = "aws"))]
    {
        info!(region = %config.region, "No secret store backend compiled in");
        Err(SecretError::Unsupported(
            "deployed mode needs a secret store backend; rebuild with --features aws".to_string(),
        )
        .into())
    }
}
