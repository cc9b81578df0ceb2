//! Context commands.
//!
//! Read stage-scoped values from the deployment context (`cdk.json` plus
//! `-c key=value` overrides).

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{output, ContextSource};
use crate::core::constants;
use crate::core::context::StageContext;
use crate::core::deploy::DeployTarget;
use crate::error::Result;

/// Load the context file (if any) and apply overrides.
///
/// An explicit `--context-file` must exist; the default `cdk.json` is
/// optional so overrides alone are enough.
pub fn load(source: &ContextSource) -> Result<StageContext> {
    let base = match &source.context_file {
        Some(path) => StageContext::load(path)?,
        None => {
            let default = PathBuf::from(constants::CONTEXT_FILE);
            if default.exists() {
                StageContext::load(&default)?
            } else {
                debug!("no {} found, using overrides only", constants::CONTEXT_FILE);
                StageContext::default()
            }
        }
    };
    base.with_overrides(&source.overrides)
}

/// Print one context value.
pub fn get(source: &ContextSource, key: &str, global: bool) -> Result<()> {
    let ctx = load(source)?;
    let value = if global {
        ctx.get_string(key)?
    } else {
        ctx.get_stage_string(key)?
    };
    println!("{}", value);
    Ok(())
}

/// Print the active stage.
pub fn stage(source: &ContextSource) -> Result<()> {
    let ctx = load(source)?;
    println!("{}", ctx.stage()?);
    Ok(())
}

/// Print the deploy target for the active stage.
pub fn target(source: &ContextSource, json: bool) -> Result<()> {
    let ctx = load(source)?;
    let target = DeployTarget::from_context(&ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&target)?);
        return Ok(());
    }

    output::header(&format!("Stage {}", target.stage));
    output::kv("production", target.production);
    output::kv("account", &target.account);
    output::kv("region", &target.region);
    output::kv("domain", &target.domain);
    output::kv("url", &target.url);
    output::kv("api url", &target.api_url);
    Ok(())
}
