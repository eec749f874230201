//! CLI configuration loading
//!
//! Loads parser options from an optional `cpekit.toml` file, then applies
//! `CPEKIT_PARSER_*` environment overrides, then validates. A missing config
//! file is not an error; defaults apply.
//!
//! ```toml
//! [parser]
//! ignore_prefix_case = true
//! max_input_len = 8192
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cpekit_core::ParserConfig;

use crate::error::CliError;

/// Environment override for `parser.ignore_prefix_case`.
const ENV_IGNORE_PREFIX_CASE: &str = "CPEKIT_PARSER_IGNORE_PREFIX_CASE";

/// Environment override for `parser.max_input_len`.
const ENV_MAX_INPUT_LEN: &str = "CPEKIT_PARSER_MAX_INPUT_LEN";

/// Top-level structure of `cpekit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Parser options, forwarded to `cpekit-core`.
    pub parser: ParserConfig,
}

impl CliConfig {
    /// Load configuration: file (if present) -> env overrides -> validate.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config
            .parser
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from a TOML file (no env overrides).
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, CliError> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("failed to parse config: {e}")))
    }

    /// Apply `CPEKIT_PARSER_*` environment variable overrides.
    ///
    /// Unparseable values are logged and ignored rather than failing the
    /// whole invocation.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(ENV_IGNORE_PREFIX_CASE) {
            self.override_ignore_prefix_case(&value);
        }
        if let Ok(value) = std::env::var(ENV_MAX_INPUT_LEN) {
            self.override_max_input_len(&value);
        }
    }

    fn override_ignore_prefix_case(&mut self, value: &str) {
        match value.parse::<bool>() {
            Ok(flag) => self.parser.ignore_prefix_case = flag,
            Err(_) => warn!(
                value = %value,
                "invalid {ENV_IGNORE_PREFIX_CASE} (expected true/false), ignoring"
            ),
        }
    }

    fn override_max_input_len(&mut self, value: &str) {
        match value.parse::<usize>() {
            Ok(len) => self.parser.max_input_len = len,
            Err(_) => warn!(
                value = %value,
                "invalid {ENV_MAX_INPUT_LEN} (expected integer), ignoring"
            ),
        }
    }
}
