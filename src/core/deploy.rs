//! Deploy target bootstrap.
//!
//! Collects the per-stage settings every stack needs before anything is
//! synthesized: the target account and region plus the public hostnames.

use serde::Serialize;

use crate::core::context::StageContext;
use crate::error::Result;

/// Settings for one deployment of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTarget {
    pub stage: String,
    pub production: bool,
    pub account: String,
    pub region: String,
    /// Hosted zone the records live in.
    pub domain: String,
    /// Frontend hostname.
    pub url: String,
    /// API hostname.
    pub api_url: String,
}

impl DeployTarget {
    /// Read the target from the active stage of `ctx`.
    ///
    /// # Errors
    ///
    /// Propagates `StageError` for the first missing setting, in the order
    /// account, region, domain, url, apiUrl.
    pub fn from_context(ctx: &StageContext) -> Result<Self> {
        let stage = ctx.stage()?;
        Ok(Self {
            production: ctx.is_production()?,
            account: ctx.get_stage_string("account")?,
            region: ctx.get_stage_string("region")?,
            domain: ctx.get_stage_string("domain")?,
            url: ctx.get_stage_string("url")?,
            api_url: ctx.get_stage_string("apiUrl")?,
            stage,
        })
    }
}
