//! Schema nodes bound to form state.
//!
//! Visibility and state paths depend on the current values, so aggregation
//! walks these borrowed views rather than the schema types directly.

use crate::capability::HasValidationRules;
use crate::component::Component;
use crate::container::ComponentContainer;
use crate::state::{FormState, StatePath};

/// A component together with the state it is evaluated against and the
/// path of the container it lives in.
#[derive(Debug, Clone)]
pub struct BoundComponent<'a> {
    component: &'a Component,
    state: &'a FormState,
    scope: StatePath,
}

impl<'a> BoundComponent<'a> {
    #[must_use]
    pub fn new(component: &'a Component, state: &'a FormState, scope: StatePath) -> Self {
        Self {
            component,
            state,
            scope,
        }
    }

    #[must_use]
    pub fn component(&self) -> &'a Component {
        self.component
    }

    #[must_use]
    pub fn key(&self) -> &'a str {
        self.component.key()
    }

    /// Where the component's value lives. Layout components share their
    /// container's path.
    #[must_use]
    pub fn state_path(&self) -> StatePath {
        if self.component.has_state() {
            self.scope.join(self.component.key())
        } else {
            self.scope.clone()
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.component.is_hidden(self.state, &self.scope)
    }

    #[must_use]
    pub fn is_hidden_and_not_dehydrated(&self) -> bool {
        self.is_hidden() && !self.component.is_dehydrated_when_hidden()
    }

    #[must_use]
    pub fn validation_capability(&self) -> Option<&'a dyn HasValidationRules> {
        self.component.validation_capability()
    }

    /// Child containers in document order.
    ///
    /// A repeater yields one container per item currently in state.
    #[must_use]
    pub fn child_containers(&self) -> Vec<BoundContainer<'a>> {
        match self.component {
            Component::Field(_) | Component::Placeholder(_) => Vec::new(),
            Component::Section(section) => {
                vec![BoundContainer::new(&section.schema, self.state, self.scope.clone())]
            }
            Component::Tabs(tabs) => tabs
                .tabs
                .iter()
                .map(|tab| BoundContainer::new(&tab.schema, self.state, self.scope.clone()))
                .collect(),
            Component::Repeater(repeater) => {
                let path = self.state_path();
                (0..self.state.array_len(path.as_str()))
                    .map(|index| BoundContainer::new(&repeater.schema, self.state, path.join(index)))
                    .collect()
            }
        }
    }
}

/// A container together with the state it is evaluated against and its
/// own path.
#[derive(Debug, Clone)]
pub struct BoundContainer<'a> {
    schema: &'a ComponentContainer,
    state: &'a FormState,
    path: StatePath,
}

impl<'a> BoundContainer<'a> {
    #[must_use]
    pub fn new(schema: &'a ComponentContainer, state: &'a FormState, path: StatePath) -> Self {
        Self {
            schema,
            state,
            path,
        }
    }

    #[must_use]
    pub fn path(&self) -> &StatePath {
        &self.path
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.schema.hidden
            || self
                .schema
                .display
                .as_ref()
                .is_some_and(|display| !display.is_visible(self.state, &self.path))
    }

    /// Every direct child, hidden ones included.
    #[must_use]
    pub fn components(&self) -> Vec<BoundComponent<'a>> {
        self.schema
            .iter()
            .map(|component| BoundComponent::new(component, self.state, self.path.clone()))
            .collect()
    }

    /// Depth-first search through every nested container, hidden ones
    /// included. An exact state path match wins over a bare key match.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<BoundComponent<'a>> {
        self.find_by(&|c: &BoundComponent<'a>| c.state_path().as_str() == key)
            .or_else(|| self.find_by(&|c: &BoundComponent<'a>| c.key() == key))
    }

    fn find_by(&self, matches: &dyn Fn(&BoundComponent<'a>) -> bool) -> Option<BoundComponent<'a>> {
        for component in self.components() {
            if matches(&component) {
                return Some(component);
            }
            for container in component.child_containers() {
                if let Some(found) = container.find_by(matches) {
                    return Some(found);
                }
            }
        }
        None
    }
}
