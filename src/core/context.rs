//! Deployment-stage context.
//!
//! The context is a two-level mapping: a top-level `stage` key names the
//! active stage, and each stage name maps to that stage's settings:
//!
//! ```json
//! {
//!   "stage": "prod",
//!   "prod": { "account": "123456789012", "region": "eu-central-1" },
//!   "dev":  { "account": "210987654321", "region": "eu-central-1" }
//! }
//! ```
//!
//! Context files are either `cdk.json`-style JSON (the `context` object is
//! used when present) or TOML. Command-line overrides (`-c stage=prod`) are
//! layered on top.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::constants;
use crate::error::{ContextError, Result, StageError};

/// Read-only view over a deployment context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageContext {
    values: Map<String, Value>,
}

impl StageContext {
    /// Wrap an already parsed top-level map.
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Load a context file.
    ///
    /// `.toml` files are parsed as TOML, everything else as JSON. A JSON
    /// document with a top-level `context` object uses that object.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::ReadFile` if the file cannot be read, or
    /// `ContextError::Parse` if it is not a valid object.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading deployment context");

        let contents = std::fs::read_to_string(path).map_err(|source| ContextError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |reason: String| ContextError::Parse {
            path: path.to_path_buf(),
            reason,
        };

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let document: Value = if is_toml {
            let table: toml::Table =
                toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?;
            serde_json::to_value(table).map_err(|e| parse_error(e.to_string()))?
        } else {
            serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        };

        let context = Self::from_document(document)
            .ok_or_else(|| parse_error("expected an object at the top level".to_string()))?;

        debug!(keys = context.values.len(), "deployment context loaded");
        Ok(context)
    }

    /// Parse a JSON string as a context document.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Parse` if it is not a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parse_error = |reason: String| ContextError::Parse {
            path: "<inline>".into(),
            reason,
        };
        let document: Value = serde_json::from_str(json).map_err(|e| parse_error(e.to_string()))?;
        Self::from_document(document)
            .ok_or_else(|| parse_error("expected an object at the top level".to_string()).into())
    }

    fn from_document(document: Value) -> Option<Self> {
        let Value::Object(mut root) = document else {
            return None;
        };
        match root.remove("context") {
            Some(Value::Object(context)) => Some(Self::new(context)),
            Some(other) => {
                root.insert("context".to_string(), other);
                Some(Self::new(root))
            }
            None => Some(Self::new(root)),
        }
    }

    /// Set a top-level string value, replacing any existing one.
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Apply `key=value` overrides in order.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::InvalidOverride` for entries without `=` or
    /// with an empty key.
    pub fn with_overrides<I, S>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in overrides {
            let entry = entry.as_ref();
            let (key, value) = entry
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| ContextError::InvalidOverride(entry.to_string()))?;
            self = self.with_override(key.trim(), value);
        }
        Ok(self)
    }

    /// Name of the active stage.
    ///
    /// # Errors
    ///
    /// Returns `StageError::StageNotSpecified` if the `stage` key is absent.
    pub fn stage(&self) -> Result<String> {
        match self.values.get(constants::STAGE_KEY) {
            None | Some(Value::Null) => Err(StageError::StageNotSpecified.into()),
            Some(value) => render(constants::STAGE_KEY, value),
        }
    }

    /// Whether the active stage is production.
    pub fn is_production(&self) -> Result<bool> {
        Ok(self.stage()? == constants::PRODUCTION_STAGE)
    }

    /// Read a value scoped to the active stage.
    ///
    /// # Errors
    ///
    /// - `StageError::StageNotSpecified` if no stage is set
    /// - `StageError::StageConfigMissing` if the stage has no settings
    /// - `StageError::ConfigKeyMissing` if the stage lacks `key`
    /// - `StageError::NotAString` if the value is an object, array or null
    pub fn get_stage_string(&self, key: &str) -> Result<String> {
        let stage = self.stage()?;

        let settings = match self.values.get(&stage) {
            Some(Value::Object(settings)) => settings,
            _ => return Err(StageError::StageConfigMissing { stage }.into()),
        };

        match settings.get(key) {
            Some(value) => render(key, value),
            None => Err(StageError::ConfigKeyMissing {
                key: key.to_string(),
                stage: Some(stage),
            }
            .into()),
        }
    }

    /// Read a top-level value, ignoring stages.
    ///
    /// # Errors
    ///
    /// Returns `StageError::ConfigKeyMissing` if `key` is absent, or
    /// `StageError::NotAString` if it is not a scalar.
    pub fn get_string(&self, key: &str) -> Result<String> {
        match self.values.get(key) {
            Some(value) => render(key, value),
            None => Err(StageError::ConfigKeyMissing {
                key: key.to_string(),
                stage: None,
            }
            .into()),
        }
    }
}

/// Render scalars as text; numbers and booleans keep their JSON spelling.
fn render(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(StageError::NotAString {
            key: key.to_string(),
        }
        .into()),
    }
}
