//! Resolver configuration.
//!
//! The resolver never reads the process environment itself. Callers build a
//! [`ResolverConfig`] at the edge (CLI flags, [`ResolverConfig::from_env`])
//! and hand it over at construction.

use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::core::constants;
use crate::core::credentials::ConnectionString;

/// Where the process runs, which decides how the connection string is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Local development: a configured connection string is used as-is.
    Development,
    /// Anything deployed: credentials come from the secret store.
    #[default]
    Deployed,
}

impl ExecutionMode {
    /// Interpret an environment indicator such as `NODE_ENV`.
    ///
    /// Only the exact value `development` selects development; every other
    /// value, including a missing one, means deployed.
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            Some("development") => Self::Development,
            _ => Self::Deployed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Deployed => "deployed",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_indicator(Some(s)))
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the secret resolver needs to know.
///
/// `Debug` masks the password of `local_url`.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub mode: ExecutionMode,
    /// Connection string used verbatim in development mode.
    pub local_url: Option<String>,
    /// Secret store identifier used in deployed mode.
    pub secret_id: Option<String>,
    /// Secret store region.
    pub region: String,
    /// Upper bound on the remote fetch.
    pub fetch_timeout: Duration,
}

impl std::fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let local_url = self
            .local_url
            .as_deref()
            .map(|url| ConnectionString::new(url).redacted());
        f.debug_struct("ResolverConfig")
            .field("mode", &self.mode)
            .field("local_url", &local_url)
            .field("secret_id", &self.secret_id)
            .field("region", &self.region)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            local_url: None,
            secret_id: None,
            region: constants::DEFAULT_REGION.to_string(),
            fetch_timeout: constants::DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl ResolverConfig {
    /// Development configuration with a local connection string.
    pub fn development(local_url: impl Into<String>) -> Self {
        Self {
            mode: ExecutionMode::Development,
            local_url: Some(local_url.into()),
            ..Self::default()
        }
    }

    /// Deployed configuration reading the given secret.
    pub fn deployed(secret_id: impl Into<String>) -> Self {
        Self {
            mode: ExecutionMode::Deployed,
            secret_id: Some(secret_id.into()),
            ..Self::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads `NODE_ENV`, `DATABASE_URL`, `DB_SECRET_ARN`, `AWS_REGION` and
    /// `STAGEKEY_FETCH_TIMEOUT` (seconds). Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mode = ExecutionMode::from_indicator(var(constants::MODE_ENV).as_deref());
        let fetch_timeout = var(constants::TIMEOUT_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(constants::DEFAULT_FETCH_TIMEOUT);

        let config = Self {
            mode,
            local_url: var(constants::DATABASE_URL_ENV),
            secret_id: var(constants::SECRET_ID_ENV),
            region: var(constants::REGION_ENV)
                .unwrap_or_else(|| constants::DEFAULT_REGION.to_string()),
            fetch_timeout,
        };

        debug!(
            mode = %config.mode,
            has_local_url = config.local_url.is_some(),
            secret_id = config.secret_id.as_deref().unwrap_or("-"),
            region = %config.region,
            "resolver config loaded"
        );

        config
    }
}
