//! Commonly used types.

pub use crate::config::ValidatorConfig;
pub use crate::engine::RuleValidator;
pub use crate::error::{RuleParseError, ValidationError};
pub use crate::host::{DataOverrides, HostValidator, ValidatedData};
pub use crate::maps::{AttributeMap, MessageMap, RuleSet};
pub use crate::rule::Rule;
