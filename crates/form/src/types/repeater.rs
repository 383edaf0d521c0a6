use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use trellis_validator::Rule;

use crate::capability::HasValidationRules;
use crate::component::Component;
use crate::container::ComponentContainer;
use crate::display::ComponentDisplay;
use crate::metadata::ComponentMetadata;

/// A list of items that all share one schema.
///
/// The repeater's own value is an array; each element gets a child
/// container at `key.<index>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeater {
    #[serde(flatten)]
    pub metadata: ComponentMetadata,

    /// Schema applied to every item.
    #[serde(default)]
    pub schema: ComponentContainer,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,

    /// Extra rules for the array itself.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub messages: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_attribute: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ComponentDisplay>,
}

impl Repeater {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            metadata: ComponentMetadata::new(key),
            schema: ComponentContainer::new(),
            required: false,
            min_items: None,
            max_items: None,
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

    /// Add a component to the item schema.
    #[must_use]
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.schema.add(component);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    #[must_use]
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

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

    fn is_bounded(&self) -> bool {
        self.min_items.is_some() || self.max_items.is_some()
    }
}

impl HasValidationRules for Repeater {
    fn validation_rules(&self) -> Vec<Rule> {
        let mut rules = Vec::new();
        if self.required {
            rules.push(Rule::Required);
        }
        if (self.required || self.is_bounded()) && !self.rules.contains(&Rule::Array) {
            rules.push(Rule::Array);
        }
        if let Some(min) = self.min_items {
            rules.push(Rule::Min(min as f64));
        }
        if let Some(max) = self.max_items {
            rules.push(Rule::Max(max as f64));
        }
        rules.extend(
            self.rules
                .iter()
                .filter(|r| !(self.required && **r == Rule::Required))
                .cloned(),
        );

        if !self.required && !rules.is_empty() && !rules.contains(&Rule::Nullable) {
            rules.insert(0, Rule::Nullable);
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn unbounded_optional_repeater_has_no_rules() {
        let r = Repeater::new("items").with(Field::new("sku").required());
        assert!(r.validation_rules().is_empty());
        assert_eq!(r.schema.len(), 1);
    }

    #[test]
    fn bounds_become_array_size_rules() {
        let r = Repeater::new("items").required().min_items(1).max_items(5);
        assert_eq!(
            r.validation_rules(),
            vec![Rule::Required, Rule::Array, Rule::min(1), Rule::max(5)]
        );
    }

    #[test]
    fn optional_bounded_repeater_is_nullable() {
        let r = Repeater::new("tags").max_items(3);
        assert_eq!(
            r.validation_rules(),
            vec![Rule::Nullable, Rule::Array, Rule::max(3)]
        );
    }

    #[test]
    fn custom_rules_follow_generated_ones() {
        let r = Repeater::new("items")
            .required()
            .rule(Rule::Required)
            .rule(Rule::Size(2.0));
        assert_eq!(
            r.validation_rules(),
            vec![Rule::Required, Rule::Array, Rule::Size(2.0)]
        );
    }

    #[test]
    fn deserializes_with_nested_schema() {
        let r: Repeater = serde_json::from_value(serde_json::json!({
            "key": "items",
            "min_items": 1,
            "schema": {"components": [{"type": "field", "key": "sku", "required": true}]}
        }))
        .unwrap();
        assert_eq!(r.min_items, Some(1));
        assert_eq!(r.schema.len(), 1);
        assert_eq!(r.schema.get("sku").map(Component::key), Some("sku"));
    }
}
