use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::display::ComponentDisplay;

/// An ordered group of components with its own visibility.
///
/// A form's root schema is a container, and so is every section body, tab,
/// and repeater item schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentContainer {
    #[serde(default)]
    components: Vec<Component>,

    /// Statically hidden. Nothing inside a hidden container is validated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,

    /// Display rules, evaluated against the container's own values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ComponentDisplay>,
}

impl ComponentContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component to the container.
    pub fn add(&mut self, component: impl Into<Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    /// Add a component (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Get a direct child by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.components.iter().any(|c| c.key() == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(Component::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }
}

impl<'a> IntoIterator for &'a ComponentContainer {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl FromIterator<Component> for ComponentContainer {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Field, Placeholder};

    #[test]
    fn new_is_empty() {
        let container = ComponentContainer::new();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
        assert!(!container.hidden);
    }

    #[test]
    fn with_builder_and_lookup() {
        let container = ComponentContainer::new()
            .with(Field::new("name"))
            .with(Placeholder::new("hint", "Use your legal name"));

        assert_eq!(container.len(), 2);
        assert!(container.contains("hint"));
        assert!(!container.contains("missing"));
        assert_eq!(container.get("name").map(Component::key), Some("name"));
        assert_eq!(container.keys().collect::<Vec<_>>(), vec!["name", "hint"]);
    }

    #[test]
    fn from_iterator_keeps_order() {
        let container: ComponentContainer = ["b", "a"]
            .into_iter()
            .map(|k| Component::from(Field::new(k)))
            .collect();
        let keys: Vec<&str> = (&container).into_iter().map(Component::key).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
