//! Validator configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Settings for [`RuleValidator`](crate::RuleValidator).
///
/// Deserializes from the `[validator]` table of `trellis.toml`:
///
/// ```toml
/// [validator]
/// bail = true
///
/// [validator.messages]
/// required = "Please fill in :attribute."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Stop at the first failing rule of every field.
    pub bail: bool,

    /// Replacement message templates keyed by rule name.
    ///
    /// These sit between per-call custom messages and the built-in English
    /// templates.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub messages: IndexMap<String, String>,
}

impl ValidatorConfig {
    /// Enable bail mode (builder-style).
    #[must_use]
    pub fn with_bail(mut self, bail: bool) -> Self {
        self.bail = bail;
        self
    }

    /// Override the default template for a rule (builder-style).
    #[must_use]
    pub fn with_message(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(rule.into(), template.into());
        self
    }
}
