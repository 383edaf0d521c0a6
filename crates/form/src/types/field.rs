use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use trellis_validator::Rule;

use crate::capability::HasValidationRules;
use crate::display::ComponentDisplay;
use crate::metadata::ComponentMetadata;

/// A value-bearing input such as a text box, select, or checkbox.
///
/// The widget itself is a rendering concern; for validation a field is its
/// key, label, rules, and custom messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    pub metadata: ComponentMetadata,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,

    /// Custom messages keyed by rule name (`"required"`, `"max"`).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub messages: IndexMap<String, String>,

    /// Overrides the label used in error messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_attribute: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ComponentDisplay>,
}

impl Field {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            metadata: ComponentMetadata::new(key),
            required: false,
            rules: Vec::new(),
            messages: IndexMap::new(),
            validation_attribute: None,
            display: None,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.metadata.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Set a custom message for one of the field's rules.
    #[must_use]
    pub fn message(mut self, rule: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(rule.into(), message.into());
        self
    }

    #[must_use]
    pub fn validation_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.validation_attribute = Some(attribute.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.metadata.hidden = true;
        self
    }

    #[must_use]
    pub fn dehydrated_when_hidden(mut self) -> Self {
        self.metadata.dehydrated_when_hidden = true;
        self
    }

    #[must_use]
    pub fn display(mut self, display: ComponentDisplay) -> Self {
        self.display = Some(display);
        self
    }
}

impl HasValidationRules for Field {
    /// `required` (or `nullable` when optional and otherwise constrained)
    /// followed by the declared rules.
    fn validation_rules(&self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(self.rules.len() + 1);
        if self.required {
            if !self.rules.contains(&Rule::Required) {
                rules.push(Rule::Required);
            }
        } else if !self.rules.is_empty() && !self.rules.contains(&Rule::Nullable) {
            rules.push(Rule::Nullable);
        }
        rules.extend(self.rules.iter().cloned());
        rules
    }

    fn validation_messages(&self) -> &IndexMap<String, String> {
        &self.messages
    }

    fn validation_attribute(&self) -> String {
        self.metadata
            .attribute_label(self.validation_attribute.as_deref())
    }
}
