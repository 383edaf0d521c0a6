//! The host-validator seam.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::maps::{AttributeMap, MessageMap, RuleSet};

/// Data that passed validation, nested by field path.
pub type ValidatedData = Map<String, Value>;

/// Overrides applied to form data during single-field validation.
pub type DataOverrides = Map<String, Value>;

/// An engine that evaluates aggregated rules against form data.
///
/// Implementations report unmet rules as a [`ValidationError`]; callers pass
/// that error through untouched.
pub trait HostValidator {
    /// Validates every field named in `rules`.
    fn validate(
        &self,
        data: &Value,
        rules: &RuleSet,
        messages: &MessageMap,
        attributes: &AttributeMap,
    ) -> Result<ValidatedData, ValidationError>;

    /// Validates a single field, with `data_overrides` written over `data`
    /// first so cross-field rules can be satisfied without the whole form.
    fn validate_only(
        &self,
        field: &str,
        data: &Value,
        rules: &RuleSet,
        messages: &MessageMap,
        attributes: &AttributeMap,
        data_overrides: &DataOverrides,
    ) -> Result<ValidatedData, ValidationError>;
}
