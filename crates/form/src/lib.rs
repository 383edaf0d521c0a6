//! # trellis-form
//!
//! Form schemas as component trees, and the aggregation that turns a tree
//! plus its current state into the rule, message, and attribute maps a
//! host validator consumes.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trellis_form::prelude::*;
//!
//! let schema = ComponentContainer::new()
//!     .with(Field::new("name").label("Full Name").required())
//!     .with(
//!         Repeater::new("items")
//!             .min_items(1)
//!             .with(Field::new("sku").required()),
//!     );
//!
//! let form = Form::new(schema)
//!     .with_state(FormState::new().with_value("items", json!([{"sku": ""}])));
//!
//! let rules = form.validation_rules();
//! assert_eq!(
//!     rules.keys().collect::<Vec<_>>(),
//!     vec!["name", "items", "items.0.sku"]
//! );
//!
//! let err = form.validate().unwrap_err();
//! assert_eq!(err.first("name"), Some("The full name field is required."));
//! assert!(err.has("items.0.sku"));
//! ```

pub mod bound;
pub mod capability;
pub mod component;
pub mod container;
pub mod display;
pub mod error;
pub mod form;
pub mod metadata;
pub mod prelude;
pub mod state;
pub mod types;
pub mod validation;

pub use bound::{BoundComponent, BoundContainer};
pub use capability::HasValidationRules;
pub use component::Component;
pub use container::ComponentContainer;
pub use display::{ComponentDisplay, DisplayCondition, DisplayRule, DisplayRuleSet};
pub use error::FormError;
pub use form::Form;
pub use metadata::ComponentMetadata;
pub use state::{FormState, StatePath};
pub use types::{Field, Placeholder, Repeater, Section, Tab, Tabs};
pub use validation::{CanBeValidated, CollectsValidationData};
