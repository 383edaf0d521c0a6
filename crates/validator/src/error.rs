//! Error types for validation failures and rule parsing.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Raised by a host validator when one or more rules are unmet.
///
/// Carries an ordered mapping from field key to its human-readable failure
/// messages. Fields appear in the order the validator evaluated them; each
/// field's messages appear in rule order.
///
/// # Examples
///
/// ```
/// use trellis_validator::ValidationError;
///
/// let error = ValidationError::new()
///     .with_message("email", "The email field is required.")
///     .with_message("name", "The name must be a string.");
///
/// assert_eq!(error.first("email"), Some("The email field is required."));
/// assert_eq!(error.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    errors: IndexMap<String, Vec<String>>,
}

impl ValidationError {
    /// Creates an error with no messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message for a field (builder-style).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Appends a message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns true if no field has failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of messages across all fields.
    #[must_use]
    pub fn total_message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Whether the given field has failed.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// All messages for a field.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// The first message for a field.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    /// Iterates over failing fields in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Borrow the underlying field → messages map.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    /// Converts the error to the `{message, errors}` JSON shape.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.to_string(),
            "errors": self.errors,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.errors.values().flatten().next() else {
            return f.write_str("The given data was invalid.");
        };

        f.write_str(first)?;
        let remaining = self.total_message_count() - 1;
        match remaining {
            0 => Ok(()),
            1 => write!(f, " (and 1 more error)"),
            n => write!(f, " (and {n} more errors)"),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// RULE PARSE ERROR
// ============================================================================

/// A rule string could not be turned into a [`Rule`](crate::Rule).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleParseError {
    /// The rule name is not part of the vocabulary.
    #[error("unknown validation rule `{rule}`")]
    UnknownRule { rule: String },

    /// The rule needs an argument (`max:255`) but none was given.
    #[error("validation rule `{rule}` requires an argument")]
    MissingArgument { rule: String },

    /// The argument could not be interpreted.
    #[error("invalid argument `{argument}` for validation rule `{rule}`")]
    InvalidArgument { rule: String, argument: String },

    /// A `regex:` rule carries a pattern that does not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl RuleParseError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownRule { .. } => "RULE_UNKNOWN",
            Self::MissingArgument { .. } => "RULE_MISSING_ARGUMENT",
            Self::InvalidArgument { .. } => "RULE_INVALID_ARGUMENT",
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
        }
    }
}
