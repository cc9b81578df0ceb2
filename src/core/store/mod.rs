//! Secret store backends.
//!
//! A store turns an opaque secret identifier into the raw secret string. It
//! knows nothing about caching or parsing; [`SecretResolver`] handles both.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`, `gcp.rs`)
//! 3. Feature-gate it if it pulls in a cloud SDK
//! 4. Select it in `backend::default_backend`
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Debug)]
//! struct Vault { /* ... */ }
//!
//! #[async_trait]
//! impl SecretStore for Vault {
//!     async fn fetch(&self, secret_id: &str) -> Result<Option<String>> {
//!         // Read from vault
//!     }
//!     fn name(&self) -> &'static str {
//!         "vault"
//!     }
//! }
//! ```
//!
//! [`SecretResolver`]: crate::core::resolver::SecretResolver

use async_trait::async_trait;

use crate::error::Result;

mod backend;

#[cfg(feature = "aws")]
pub mod aws;

pub use backend::default_backend;

/// Remote secret store.
#[async_trait]
pub trait SecretStore: Send + Sync + std::fmt::Debug {
    /// Fetch the secret string stored under `secret_id`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the store answered but carried no payload.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::Store` on transport or service failures.
    async fn fetch(&self, secret_id: &str) -> Result<Option<String>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Normalise a raw payload: blank strings count as absent.
pub(crate) fn non_empty(payload: Option<&str>) -> Option<String> {
    payload
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}
