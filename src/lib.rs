//! stagekey - database URL and deploy context bootstrap for serverless apps.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── url           # Print the resolved connection string
//! │   ├── context       # Stage-scoped context lookups
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Resolver configuration and execution mode
//!     ├── credentials   # Database secret and connection string
//!     ├── resolver      # Single-flight cached connection string resolution
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   └── aws       # AWS Secrets Manager (feature `aws`)
//!     ├── context       # Two-level stage context reader
//!     └── deploy        # Deploy target bootstrap
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stagekey::core::{config::ResolverConfig, resolver::SecretResolver, store};
//!
//! let config = ResolverConfig::from_env();
//! let backend = store::default_backend(&config).await?;
//! let resolver = Arc::new(SecretResolver::new(config, Arc::from(backend)));
//! let url = resolver.resolve().await?;
//! ```

pub mod cli;
pub mod core;
pub mod error;
