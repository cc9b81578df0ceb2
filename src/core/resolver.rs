//! Database connection string resolution.
//!
//! In development the locally configured connection string is returned
//! unchanged. Otherwise the credentials are fetched from the secret store
//! once and cached for the lifetime of the resolver.
//!
//! Concurrent callers that arrive before the first fetch finishes wait on
//! that fetch instead of starting their own. A failed fetch leaves the cache
//! empty, so the next caller tries again.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, trace};

use crate::core::config::{ExecutionMode, ResolverConfig};
use crate::core::constants;
use crate::core::credentials::{ConnectionString, DbSecret};
use crate::core::store::{self, SecretStore};
use crate::error::{Result, SecretError};

/// Resolves the database connection string for the current process.
///
/// Build one at startup and share it (e.g. behind an `Arc`) with every
/// consumer; the cache lives inside the resolver.
#[derive(Debug)]
pub struct SecretResolver {
    config: ResolverConfig,
    store: Option<Arc<dyn SecretStore>>,
    secret: OnceCell<DbSecret>,
}

impl SecretResolver {
    /// Create a resolver backed by `store`.
    pub fn new(config: ResolverConfig, store: Arc<dyn SecretStore>) -> Self {
        Self {
            config,
            store: Some(store),
            secret: OnceCell::new(),
        }
    }

    /// Create a resolver with no secret store.
    ///
    /// Only development mode can succeed; deployed resolution fails with
    /// `SecretError::Unsupported`.
    pub fn local(config: ResolverConfig) -> Self {
        Self {
            config,
            store: None,
            secret: OnceCell::new(),
        }
    }

    /// Whether credentials have already been fetched.
    pub fn is_cached(&self) -> bool {
        self.secret.initialized()
    }

    /// Resolve the connection string.
    ///
    /// # Errors
    ///
    /// - `SecretError::ConfigurationMissing` if the local URL (development)
    ///   or the secret identifier (deployed) is not configured
    /// - `SecretError::SecretFetchEmpty` if the store returned no payload
    /// - `SecretError::SecretFetchTimeout` if the store did not answer in time
    /// - `SecretError::SecretMalformed` if the payload cannot be parsed
    /// - `SecretError::Store` on store transport failures
    pub async fn resolve(&self) -> Result<ConnectionString> {
        match self.config.mode {
            ExecutionMode::Development => {
                let url = self.config.local_url.as_deref().ok_or(
                    SecretError::ConfigurationMissing {
                        what: constants::DATABASE_URL_ENV,
                    },
                )?;
                trace!("using local connection string");
                Ok(ConnectionString::new(url))
            }
            ExecutionMode::Deployed => {
                let secret = self.secret().await?;
                Ok(secret.connection_string())
            }
        }
    }

    /// Cached credentials, fetching them on first use.
    pub async fn secret(&self) -> Result<&DbSecret> {
        let secret_id =
            self.config
                .secret_id
                .as_deref()
                .ok_or(SecretError::ConfigurationMissing {
                    what: constants::SECRET_ID_ENV,
                })?;

        if let Some(secret) = self.secret.get() {
            trace!(host = secret.host(), "secret already fetched");
            return Ok(secret);
        }

        self.secret.get_or_try_init(|| self.fetch(secret_id)).await
    }

    async fn fetch(&self, secret_id: &str) -> Result<DbSecret> {
        let backend = self.store.as_ref().ok_or_else(|| {
            SecretError::Unsupported(format!(
                "no secret store configured to fetch {}",
                secret_id
            ))
        })?;

        debug!(secret_id, store = backend.name(), "fetching secret");

        let timeout = self.config.fetch_timeout;
        let payload = tokio::time::timeout(timeout, backend.fetch(secret_id))
            .await
            .map_err(|_| SecretError::SecretFetchTimeout {
                secret_id: secret_id.to_string(),
                timeout,
            })??;

        let payload = store::non_empty(payload.as_deref())
            .ok_or_else(|| SecretError::SecretFetchEmpty {
                secret_id: secret_id.to_string(),
            })?;

        let secret = DbSecret::from_json(&payload)?;
        debug!(host = secret.host(), "secret fetched");
        Ok(secret)
    }
}
