use serde::{Deserialize, Serialize};

use crate::display::ComponentDisplay;
use crate::metadata::ComponentMetadata;

/// Static text shown in the form. Holds no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    #[serde(flatten)]
    pub metadata: ComponentMetadata,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<ComponentDisplay>,
}

impl Placeholder {
    #[must_use]
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            metadata: ComponentMetadata::new(key),
            content: content.into(),
            display: None,
        }
    }
}
