//! Rendering configuration.
//!
//! Everything has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! dialect = "postgres"
//!
//! [trace]
//! enabled = true
//! max_sql_length = 120
//! ```

use crate::dialect::Dialect;
use crate::error::{QbError, QbResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for DDL rendering and statement tracing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Dialect used for `CREATE TABLE` type and auto-increment clauses.
    pub dialect: Dialect,
    /// How built statements are reported through `tracing`.
    pub trace: TraceConfig,
}

impl Config {
    /// Create a new configuration with defaults (Derby, tracing on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> QbResult<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> QbResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            QbError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
            .map_err(|e| QbError::Config(format!("{}: {e}", path.display())))
    }

    /// Set the DDL dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Replace the trace settings.
    pub fn with_trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    fn validate(&self) -> QbResult<()> {
        if self.trace.max_sql_length == Some(0) {
            return Err(QbError::Config(
                "trace.max_sql_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the `querybaker.sql` tracing events.
///
/// Has no effect when the crate is built without the `tracing` feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Whether built statements are emitted at all.
    pub enabled: bool,
    /// Truncate long SQL strings (in bytes, on a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_sql_length: Some(200),
        }
    }
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn emission off.
    pub fn disable(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }
}
