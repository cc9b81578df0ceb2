//! Core library components.
//!
//! This module contains the reusable bootstrap logic: connection string
//! resolution, secret store backends and deployment-stage context.

pub mod config;
pub mod constants;
pub mod context;
pub mod credentials;
pub mod deploy;
pub mod resolver;
pub mod store;
