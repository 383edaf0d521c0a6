//! Common imports for building and validating forms.

pub use crate::bound::{BoundComponent, BoundContainer};
pub use crate::capability::HasValidationRules;
pub use crate::component::Component;
pub use crate::container::ComponentContainer;
pub use crate::display::{ComponentDisplay, DisplayCondition, DisplayRule, DisplayRuleSet};
pub use crate::error::FormError;
pub use crate::form::Form;
pub use crate::state::{FormState, StatePath};
pub use crate::types::{Field, Placeholder, Repeater, Section, Tab, Tabs};
pub use crate::validation::{CanBeValidated, CollectsValidationData};

pub use trellis_validator::prelude::*;
