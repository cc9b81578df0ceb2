//! Url command.
//!
//! Resolves the database connection string the same way the API does at
//! cold start and prints it to stdout.

use std::sync::Arc;

use tracing::debug;

use crate::cli::UrlArgs;
use crate::core::config::{ExecutionMode, ResolverConfig};
use crate::core::constants;
use crate::core::resolver::SecretResolver;
use crate::core::store;
use crate::error::Result;

/// Resolve and print the connection string.
pub fn execute(args: UrlArgs) -> Result<()> {
    let config = resolver_config(&args, |name| std::env::var(name).ok());
    debug!(mode = %config.mode, "resolving connection string");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let url = rt.block_on(async {
        let resolver = build_resolver(config).await?;
        resolver.resolve().await
    })?;

    if args.redact {
        println!("{}", url.redacted());
    } else {
        println!("{}", url);
    }
    Ok(())
}

/// Layer explicit flags over `env` and hand the result to
/// [`ResolverConfig::from_lookup`], so flags and variables share its rules.
fn resolver_config<F>(args: &UrlArgs, env: F) -> ResolverConfig
where
    F: Fn(&str) -> Option<String>,
{
    ResolverConfig::from_lookup(|name| {
        let flag = match name {
            constants::MODE_ENV => args.mode.clone(),
            constants::DATABASE_URL_ENV => args.local_url.clone(),
            constants::SECRET_ID_ENV => args.secret_id.clone(),
            constants::REGION_ENV => args.region.clone(),
            constants::TIMEOUT_ENV => args.timeout.map(|secs| secs.to_string()),
            _ => None,
        };
        flag.or_else(|| env(name))
    })
}

/// Only deployed mode with a secret identifier needs a store; everything
/// else is answered (or rejected) without one.
async fn build_resolver(config: ResolverConfig) -> Result<SecretResolver> {
    if config.mode == ExecutionMode::Deployed && config.secret_id.is_some() {
        let backend = store::default_backend(&config).await?;
        Ok(SecretResolver::new(config, Arc::from(backend)))
    } else {
        Ok(SecretResolver::local(config))
    }
}
