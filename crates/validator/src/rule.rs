//! Rule descriptors.
//!
//! A [`Rule`] is pure data: the shape of a constraint, not the code that
//! checks it. Rules travel through the aggregator as plain values and are
//! only interpreted by a [`HostValidator`](crate::HostValidator).
//!
//! Rules serialize to the compact string form used in schemas:
//!
//! ```
//! use trellis_validator::Rule;
//!
//! let rule: Rule = "max:255".parse().unwrap();
//! assert_eq!(rule, Rule::Max(255.0));
//! assert_eq!(rule.to_string(), "max:255");
//! assert_eq!(rule.name(), "max");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleParseError;

/// A single validation constraint attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rule {
    /// Stop evaluating the field after its first failing rule.
    Bail,
    /// Value must be present and not blank.
    Required,
    /// `null` is accepted and skips the remaining rules.
    Nullable,
    /// Value must be `true`, `1`, `"yes"`, `"on"`, or `"true"`.
    Accepted,
    /// Value must be a string.
    String,
    /// Value must be a number or a numeric string.
    Numeric,
    /// Value must be an integer or an integer string.
    Integer,
    /// Value must be a boolean.
    Boolean,
    /// Value must be an array or object.
    Array,
    /// Value must be an email address.
    Email,
    /// Value must be an http(s) URL.
    Url,
    /// Size must be at least the bound.
    Min(f64),
    /// Size must be at most the bound.
    Max(f64),
    /// Size must lie within the inclusive bounds.
    Between(f64, f64),
    /// Size must equal the bound.
    Size(f64),
    /// Value must be one of the listed options.
    In(Vec<String>),
    /// Value must not be one of the listed options.
    NotIn(Vec<String>),
    /// String value must match the pattern.
    Regex(String),
    /// Value must equal the value of another field.
    Same(String),
    /// Value must differ from the value of another field.
    Different(String),
    /// Value must equal `<field>_confirmation`.
    Confirmed,
    /// Value is required when any of the listed fields is present.
    RequiredWith(Vec<String>),
}

impl Rule {
    /// The rule name used in message keys (`"email.required"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bail => "bail",
            Self::Required => "required",
            Self::Nullable => "nullable",
            Self::Accepted => "accepted",
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Email => "email",
            Self::Url => "url",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Between(..) => "between",
            Self::Size(_) => "size",
            Self::In(_) => "in",
            Self::NotIn(_) => "not_in",
            Self::Regex(_) => "regex",
            Self::Same(_) => "same",
            Self::Different(_) => "different",
            Self::Confirmed => "confirmed",
            Self::RequiredWith(_) => "required_with",
        }
    }

    /// Implicit rules run even when the field is absent from the data.
    #[must_use]
    pub fn is_implicit(&self) -> bool {
        matches!(self, Self::Required | Self::Accepted | Self::RequiredWith(_))
    }

    /// Require a minimum size.
    #[must_use]
    pub fn min(value: impl Into<f64>) -> Self {
        Self::Min(value.into())
    }

    /// Require a maximum size.
    #[must_use]
    pub fn max(value: impl Into<f64>) -> Self {
        Self::Max(value.into())
    }

    /// Require one of the given options.
    #[must_use]
    pub fn one_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::In(options.into_iter().map(Into::into).collect())
    }
}

fn parse_number(rule: &str, raw: &str) -> Result<f64, RuleParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RuleParseError::InvalidArgument {
            rule: rule.to_owned(),
            argument: raw.to_owned(),
        })
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_owned()).collect()
}

fn require_argument<'a>(rule: &str, argument: Option<&'a str>) -> Result<&'a str, RuleParseError> {
    match argument {
        Some(arg) if !arg.is_empty() => Ok(arg),
        _ => Err(RuleParseError::MissingArgument {
            rule: rule.to_owned(),
        }),
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (s.trim(), None),
        };

        let rule = match name {
            "bail" => Self::Bail,
            "required" => Self::Required,
            "nullable" => Self::Nullable,
            "accepted" => Self::Accepted,
            "string" => Self::String,
            "numeric" => Self::Numeric,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            "email" => Self::Email,
            "url" => Self::Url,
            "confirmed" => Self::Confirmed,
            "min" => Self::Min(parse_number(name, require_argument(name, argument)?)?),
            "max" => Self::Max(parse_number(name, require_argument(name, argument)?)?),
            "size" => Self::Size(parse_number(name, require_argument(name, argument)?)?),
            "between" => {
                let arg = require_argument(name, argument)?;
                let (lo, hi) =
                    arg.split_once(',')
                        .ok_or_else(|| RuleParseError::InvalidArgument {
                            rule: name.to_owned(),
                            argument: arg.to_owned(),
                        })?;
                Self::Between(parse_number(name, lo)?, parse_number(name, hi)?)
            }
            "in" => Self::In(parse_list(require_argument(name, argument)?)),
            "not_in" => Self::NotIn(parse_list(require_argument(name, argument)?)),
            "regex" => {
                let pattern = require_argument(name, argument)?;
                regex::Regex::new(pattern).map_err(|e| RuleParseError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    reason: e.to_string(),
                })?;
                Self::Regex(pattern.to_owned())
            }
            "same" => Self::Same(require_argument(name, argument)?.trim().to_owned()),
            "different" => Self::Different(require_argument(name, argument)?.trim().to_owned()),
            "required_with" => Self::RequiredWith(parse_list(require_argument(name, argument)?)),
            other => {
                return Err(RuleParseError::UnknownRule {
                    rule: other.to_owned(),
                });
            }
        };

        Ok(rule)
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min(n) | Self::Max(n) | Self::Size(n) => write!(f, "{}:{n}", self.name()),
            Self::Between(lo, hi) => write!(f, "between:{lo},{hi}"),
            Self::In(list) | Self::NotIn(list) | Self::RequiredWith(list) => {
                write!(f, "{}:{}", self.name(), list.join(","))
            }
            Self::Regex(arg) | Self::Same(arg) | Self::Different(arg) => {
                write!(f, "{}:{arg}", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
