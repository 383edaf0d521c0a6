//! # trellis-validator
//!
//! The host-validator side of Trellis: rule descriptors, the ordered
//! rule/message/attribute maps that form aggregation produces, and a
//! reference engine that evaluates them against JSON form data.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trellis_validator::prelude::*;
//!
//! let mut rules = RuleSet::new();
//! rules.insert("name".into(), vec![Rule::Required, Rule::max(50)]);
//!
//! let mut attributes = AttributeMap::new();
//! attributes.insert("name".into(), "full name".into());
//!
//! let err = RuleValidator::new()
//!     .validate(&json!({"name": ""}), &rules, &MessageMap::new(), &attributes)
//!     .unwrap_err();
//! assert_eq!(err.first("name"), Some("The full name field is required."));
//! ```
//!
//! Any other engine can stand in for [`RuleValidator`] by implementing
//! [`HostValidator`].

pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod maps;
mod messages;
pub mod path;
pub mod prelude;
pub mod rule;

pub use config::ValidatorConfig;
pub use engine::RuleValidator;
pub use error::{RuleParseError, ValidationError};
pub use host::{DataOverrides, HostValidator, ValidatedData};
pub use maps::{AttributeMap, MessageMap, RuleSet};
pub use rule::Rule;
