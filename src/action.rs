//! # Action Module
//!
//! Precomputed metadata about the actions the host framework dispatches to.
//! The reverse conversion needs to know, per action, how many leading URL
//! segments name the resource and which hyphenated aliases it declares.
//!
//! ## Business Element Count
//!
//! Conventional action names decompose into resource words:
//!
//! | Action name                    | Words                          | Count |
//! |--------------------------------|--------------------------------|-------|
//! | `ProductsAction`               | products                       | 1     |
//! | `ProductsPurchasesAction`      | products, purchases            | 2     |
//! | `BalletDancersGreetingsAction` | ballet, dancers, greetings     | 3     |
//!
//! ## Registry File
//!
//! ```yaml
//! actions:
//!   - name: ProductsPurchasesAction
//!   - name: BalletDancersAction
//!     hyphenated_names: [ballet-dancers]
//!   - name: ProductsAction
//!     event_suffix_hyphenated_names: [sales-history]
//!   - name: SignupAction
//!     restful: false
//! ```

use crate::restful::HyphenatedName;
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Suffix stripped from conventional action type names.
pub const ACTION_SUFFIX: &str = "Action";

#[allow(clippy::expect_used)]
static CAMEL_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]?[a-z0-9]+|[A-Z]").expect("camel word regex is valid"));

/// Split a camel-case action name into lowercase resource words.
///
/// ```
/// use restroute::action::resource_words;
///
/// assert_eq!(resource_words("ProductsPurchasesAction"), vec!["products", "purchases"]);
/// ```
#[must_use]
pub fn resource_words(action_name: &str) -> Vec<String> {
    let simple = action_name.rsplit("::").next().unwrap_or(action_name);
    let base = simple.strip_suffix(ACTION_SUFFIX).unwrap_or(simple);
    CAMEL_WORD
        .find_iter(base)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Routing metadata for one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMeta {
    /// Action type name (e.g. `ProductsPurchasesAction`)
    pub name: String,
    /// Whether the action takes part in RESTful routing
    pub restful: bool,
    /// Leading logical segments that name the resource
    pub business_element_count: usize,
    /// Aliases for multi-word resource names
    pub hyphenated_names: Vec<HyphenatedName>,
    /// Aliases for multi-word event keywords
    pub event_suffix_hyphenated_names: Vec<HyphenatedName>,
}

impl ActionMeta {
    /// RESTful action with an explicit business element count.
    #[must_use]
    pub fn new(name: impl Into<String>, business_element_count: usize) -> Self {
        Self {
            name: name.into(),
            restful: true,
            business_element_count,
            hyphenated_names: Vec::new(),
            event_suffix_hyphenated_names: Vec::new(),
        }
    }

    /// RESTful action whose business element count comes from its name.
    #[must_use]
    pub fn from_action_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let count = resource_words(&name).len();
        Self::new(name, count)
    }

    #[must_use]
    pub fn with_hyphenated_names(mut self, names: Vec<HyphenatedName>) -> Self {
        self.hyphenated_names = names;
        self
    }

    #[must_use]
    pub fn with_event_suffix_hyphenated_names(mut self, names: Vec<HyphenatedName>) -> Self {
        self.event_suffix_hyphenated_names = names;
        self
    }

    /// Exclude the action from RESTful routing.
    #[must_use]
    pub fn not_restful(mut self) -> Self {
        self.restful = false;
        self
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    actions: Vec<ActionEntry>,
}

#[derive(Debug, Deserialize)]
struct ActionEntry {
    name: String,
    #[serde(default = "default_restful")]
    restful: bool,
    business_element_count: Option<usize>,
    #[serde(default)]
    hyphenated_names: Vec<HyphenatedName>,
    #[serde(default)]
    event_suffix_hyphenated_names: Vec<HyphenatedName>,
}

fn default_restful() -> bool {
    true
}

impl From<ActionEntry> for ActionMeta {
    fn from(entry: ActionEntry) -> Self {
        let count = entry
            .business_element_count
            .unwrap_or_else(|| resource_words(&entry.name).len());
        ActionMeta {
            name: entry.name,
            restful: entry.restful,
            business_element_count: count,
            hyphenated_names: entry.hyphenated_names,
            event_suffix_hyphenated_names: entry.event_suffix_hyphenated_names,
        }
    }
}

/// Action metadata indexed by action name.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionMeta>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a YAML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read action registry {}", path.display()))?;
        let registry = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse action registry {}", path.display()))?;
        info!(
            path = %path.display(),
            actions_count = registry.len(),
            "Action registry loaded"
        );
        Ok(registry)
    }

    /// Parse registry YAML text.
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let file: RegistryFile = serde_yaml::from_str(content)?;
        let mut registry = Self::new();
        for entry in file.actions {
            registry.register(entry.into());
        }
        Ok(registry)
    }

    /// Add or replace an action.
    pub fn register(&mut self, meta: ActionMeta) {
        debug!(
            action = %meta.name,
            restful = meta.restful,
            business_element_count = meta.business_element_count,
            "Action registered"
        );
        self.actions.insert(meta.name.clone(), meta);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActionMeta> {
        self.actions.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
