use serde::{Deserialize, Serialize};
use trellis_validator::path::humanize;

/// Identity and visibility flags shared by every component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// Key identifying the component within its container. For
    /// value-bearing components this is also the last state path segment.
    pub key: String,

    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Statically hidden, regardless of display rules.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,

    /// Keep the value (and its validation) even while hidden.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dehydrated_when_hidden: bool,
}

impl ComponentMetadata {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Label for `:attribute`: the explicit override, else the lower-cased
    /// label, else the humanized key.
    #[must_use]
    pub fn attribute_label(&self, validation_attribute: Option<&str>) -> String {
        if let Some(attribute) = validation_attribute {
            return attribute.to_owned();
        }
        match &self.label {
            Some(label) => label.to_lowercase(),
            None => humanize(&self.key),
        }
    }
}
