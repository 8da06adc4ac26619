//! # Runtime Configuration Module
//!
//! Configuration for the RESTful router, loaded from an optional YAML file
//! and then overridden by environment variables.
//!
//! ## Environment Variables
//!
//! ### `RESTROUTE_STRATEGY`
//!
//! Routing strategy: `numeric` (identifiers are decimal numbers) or `pair`
//! (strict resource/identifier alternation). Default: `numeric`.
//!
//! ### `RESTROUTE_VIRTUAL_LIST`
//!
//! Enables the virtual list marker for GET requests whose path ends with a
//! resource name. Accepts `true`/`false`, `1`/`0`, `yes`/`no`. Default: `false`.
//!
//! ### `RESTROUTE_LIST_MARKER`
//!
//! Literal inserted as the virtual list marker. Default: `list`.
//!
//! ### `RESTROUTE_RESERVED_PREFIXES`
//!
//! Comma-separated first segments that are never RESTful (documentation
//! endpoints). Default: `swagger`.
//!
//! ## File Format
//!
//! ```yaml
//! strategy: numeric
//! virtual_list_handling: true
//! list_marker: list
//! reserved_prefixes: [swagger, api-docs]
//! placeholder: "{}"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ## Usage
//!
//! ```rust
//! use restroute::runtime_config::RouterConfig;
//!
//! let config = RouterConfig::default();
//! assert_eq!(config.list_marker, "list");
//! assert!(config.validate().is_ok());
//! ```

use crate::path::is_number;
use crate::restful::RestfulStrategy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Default literal for the virtual list marker.
pub const DEFAULT_LIST_MARKER: &str = "list";

/// Default placeholder for unresolved template variables in generated URLs.
pub const DEFAULT_PLACEHOLDER: &str = "{}";

/// Default documentation prefix excluded from RESTful routing.
pub const DEFAULT_RESERVED_PREFIX: &str = "swagger";

/// Configuration validation error
///
/// Returned when a configuration value or declared metadata cannot be used
/// to build a router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The virtual list marker is empty or contains a slash
    InvalidListMarker {
        /// The rejected marker
        marker: String,
    },
    /// The virtual list marker would be classified as an identifier
    NumericListMarker {
        /// The rejected marker
        marker: String,
    },
    /// The placeholder token is empty
    EmptyPlaceholder,
    /// Unknown strategy name
    UnknownStrategy {
        /// The unrecognized value
        value: String,
    },
    /// A hyphenated alias without a hyphen or with an empty part
    InvalidHyphenatedName {
        /// The rejected alias
        name: String,
    },
    /// An environment flag that is not a recognizable boolean
    InvalidFlag {
        /// Environment variable name
        var: String,
        /// The rejected value
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidListMarker { marker } => {
                write!(
                    f,
                    "Router configuration error: Invalid list marker '{}'. \
                    The marker must be a single non-empty path segment.",
                    marker
                )
            }
            ConfigError::NumericListMarker { marker } => {
                write!(
                    f,
                    "Router configuration error: List marker '{}' is numeric \
                    and would be read as an identifier.",
                    marker
                )
            }
            ConfigError::EmptyPlaceholder => {
                write!(f, "Router configuration error: Placeholder token must not be empty.")
            }
            ConfigError::UnknownStrategy { value } => {
                write!(
                    f,
                    "Router configuration error: Unknown strategy '{}'. \
                    Expected 'numeric' or 'pair'.",
                    value
                )
            }
            ConfigError::InvalidHyphenatedName { name } => {
                write!(
                    f,
                    "Action metadata error: Invalid hyphenated name '{}'. \
                    Expected at least two non-empty words joined by '-' (e.g. ballet-dancers).",
                    name
                )
            }
            ConfigError::InvalidFlag { var, value } => {
                write!(
                    f,
                    "Router configuration error: {}='{}' is not a boolean \
                    (use true/false, 1/0 or yes/no).",
                    var, value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Router configuration.
///
/// Load this once at startup with [`RouterConfig::load()`] and build a
/// [`RestfulRouter`](crate::restful::RestfulRouter) from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Segment classification strategy
    pub strategy: RestfulStrategy,
    /// Insert the list marker for GET requests ending with a resource name
    pub virtual_list_handling: bool,
    /// Literal used as the virtual list marker (default: `list`)
    pub list_marker: String,
    /// First segments that are never RESTful (default: `swagger`)
    pub reserved_prefixes: Vec<String>,
    /// Token treated as a parameter in generated URLs (default: `{}`)
    pub placeholder: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            strategy: RestfulStrategy::default(),
            virtual_list_handling: false,
            list_marker: DEFAULT_LIST_MARKER.to_string(),
            reserved_prefixes: vec![DEFAULT_RESERVED_PREFIX.to_string()],
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl RouterConfig {
    /// Load configuration: defaults, then the YAML file (if any), then environment.
    ///
    /// The result is validated before it is returned.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.apply_env()?;
        config.validate()?;
        debug!(
            strategy = %config.strategy,
            virtual_list_handling = config.virtual_list_handling,
            list_marker = %config.list_marker,
            reserved_prefixes = ?config.reserved_prefixes,
            "Router configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read router config {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse router config {}", path.display()))
    }

    /// Parse YAML configuration text.
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Override fields from `RESTROUTE_*` environment variables.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|name| env::var(name).ok())
    }

    /// Override fields from an arbitrary variable source.
    ///
    /// `lookup` receives the environment variable name and returns its value.
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("RESTROUTE_STRATEGY") {
            self.strategy = value.parse()?;
        }
        if let Some(value) = lookup("RESTROUTE_VIRTUAL_LIST") {
            self.virtual_list_handling = parse_flag("RESTROUTE_VIRTUAL_LIST", &value)?;
        }
        if let Some(value) = lookup("RESTROUTE_LIST_MARKER") {
            self.list_marker = value;
        }
        if let Some(value) = lookup("RESTROUTE_RESERVED_PREFIXES") {
            self.reserved_prefixes = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(self)
    }

    /// Check that the configuration can drive a router.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list_marker.is_empty() || self.list_marker.contains('/') {
            return Err(ConfigError::InvalidListMarker {
                marker: self.list_marker.clone(),
            });
        }
        if is_number(&self.list_marker) {
            return Err(ConfigError::NumericListMarker {
                marker: self.list_marker.clone(),
            });
        }
        if self.placeholder.is_empty() {
            return Err(ConfigError::EmptyPlaceholder);
        }
        if self.virtual_list_handling && !self.strategy.supports_virtual_list() {
            warn!(
                strategy = %self.strategy,
                "Virtual list handling has no effect with this strategy"
            );
        }
        Ok(())
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
