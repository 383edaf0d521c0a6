use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::container::ComponentContainer;
use crate::display::ComponentDisplay;
use crate::metadata::ComponentMetadata;

/// A titled group of components.
///
/// Sections are pure layout: they hold no value and add no segment to the
/// state paths of their children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(flatten)]
    pub metadata: ComponentMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Collapsed sections are still validated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,

    #[serde(default)]
    pub schema: ComponentContainer,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ComponentDisplay>,
}

impl Section {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            metadata: ComponentMetadata::new(key),
            heading: None,
            collapsed: false,
            schema: ComponentContainer::new(),
            display: None,
        }
    }

    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    #[must_use]
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.schema.add(component);
        self
    }

    /// Hide the section's container while keeping the section itself.
    #[must_use]
    pub fn container_hidden(mut self) -> Self {
        self.schema.hidden = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.metadata.hidden = true;
        self
    }

    #[must_use]
    pub fn display(mut self, display: ComponentDisplay) -> Self {
        self.display = Some(display);
        self
    }
}
