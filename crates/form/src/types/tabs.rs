use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::container::ComponentContainer;
use crate::display::ComponentDisplay;
use crate::metadata::ComponentMetadata;

/// One tab: a label and the container shown under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The tab's components. Its `hidden` flag and display rules hide the
    /// whole tab.
    #[serde(default)]
    pub schema: ComponentContainer,
}

impl Tab {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            schema: ComponentContainer::new(),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.schema.add(component);
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.schema.hidden = true;
        self
    }

    #[must_use]
    pub fn display(mut self, display: ComponentDisplay) -> Self {
        self.schema.display = Some(display);
        self
    }
}

/// A set of tabs. Layout only, like [`Section`](super::Section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tabs {
    #[serde(flatten)]
    pub metadata: ComponentMetadata,

    #[serde(default)]
    pub tabs: Vec<Tab>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ComponentDisplay>,
}

impl Tabs {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            metadata: ComponentMetadata::new(key),
            tabs: Vec::new(),
            display: None,
        }
    }

    #[must_use]
    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.metadata.hidden = true;
        self
    }
}
