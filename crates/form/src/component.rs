use serde::{Deserialize, Serialize};

use crate::capability::HasValidationRules;
use crate::display::ComponentDisplay;
use crate::metadata::ComponentMetadata;
use crate::state::{FormState, StatePath};
use crate::types::*;

/// A node in a form schema, tagged by type.
///
/// The `type` field in JSON selects the variant during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Field(Field),
    Repeater(Repeater),
    Section(Section),
    Tabs(Tabs),
    Placeholder(Placeholder),
}

macro_rules! delegate {
    ($self:ident => |$p:ident| $body:expr) => {
        match $self {
            Self::Field($p) => $body,
            Self::Repeater($p) => $body,
            Self::Section($p) => $body,
            Self::Tabs($p) => $body,
            Self::Placeholder($p) => $body,
        }
    };
}

impl Component {
    /// The key identifying this component within its container.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.metadata().key
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.metadata().label.as_deref()
    }

    #[must_use]
    pub fn metadata(&self) -> &ComponentMetadata {
        delegate!(self => |p| &p.metadata)
    }

    #[must_use]
    pub fn display(&self) -> Option<&ComponentDisplay> {
        delegate!(self => |p| p.display.as_ref())
    }

    /// Whether the component is hidden: statically, or by display rules
    /// evaluated against the values of its container at `scope`.
    #[must_use]
    pub fn is_hidden(&self, state: &FormState, scope: &StatePath) -> bool {
        self.metadata().hidden
            || self
                .display()
                .is_some_and(|display| !display.is_visible(state, scope))
    }

    /// Whether the component keeps its value, and its validation, while
    /// hidden.
    #[must_use]
    pub fn is_dehydrated_when_hidden(&self) -> bool {
        self.metadata().dehydrated_when_hidden
    }

    /// Whether the component owns a value in form state. Layout components
    /// do not, and add no segment to their children's paths.
    #[must_use]
    pub fn has_state(&self) -> bool {
        matches!(self, Self::Field(_) | Self::Repeater(_))
    }

    /// The validation-rules capability, for components that have it.
    #[must_use]
    pub fn validation_capability(&self) -> Option<&dyn HasValidationRules> {
        match self {
            Self::Field(p) => Some(p),
            Self::Repeater(p) => Some(p),
            Self::Section(_) | Self::Tabs(_) | Self::Placeholder(_) => None,
        }
    }
}

impl From<Field> for Component {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}

impl From<Repeater> for Component {
    fn from(value: Repeater) -> Self {
        Self::Repeater(value)
    }
}

impl From<Section> for Component {
    fn from(value: Section) -> Self {
        Self::Section(value)
    }
}

impl From<Tabs> for Component {
    fn from(value: Tabs) -> Self {
        Self::Tabs(value)
    }
}

impl From<Placeholder> for Component {
    fn from(value: Placeholder) -> Self {
        Self::Placeholder(value)
    }
}
