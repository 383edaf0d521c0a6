//! The reference rule engine.

use std::sync::LazyLock;

use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::ValidationError;
use crate::host::{DataOverrides, HostValidator, ValidatedData};
use crate::maps::{AttributeMap, MessageMap, RuleSet};
use crate::messages::{self, SizeKind};
use crate::path;
use crate::rule::Rule;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// Evaluates [`Rule`]s against JSON form data.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trellis_validator::{AttributeMap, HostValidator, MessageMap, Rule, RuleSet, RuleValidator};
///
/// let mut rules = RuleSet::new();
/// rules.insert("email".into(), vec![Rule::Required, Rule::Email]);
///
/// let data = json!({"email": "not-an-email"});
/// let err = RuleValidator::new()
///     .validate(&data, &rules, &MessageMap::new(), &AttributeMap::new())
///     .unwrap_err();
///
/// assert_eq!(err.first("email"), Some("The email must be a valid email address."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleValidator {
    config: ValidatorConfig,
}

/// Inputs shared by every field evaluated in one pass.
struct Pass<'a> {
    data: &'a Value,
    messages: &'a MessageMap,
    attributes: &'a AttributeMap,
}

impl RuleValidator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Evaluates one field, recording failures into `errors`.
    ///
    /// On success the field's value (when present) is copied into `validated`.
    fn check_field(
        &self,
        pass: &Pass<'_>,
        field: &str,
        rules: &[Rule],
        errors: &mut ValidationError,
        validated: &mut ValidatedData,
    ) {
        let value = path::get(pass.data, field);
        let bail = self.config.bail || rules.contains(&Rule::Bail);
        let nullable = rules.contains(&Rule::Nullable);
        let kind = size_kind(value, rules);

        let present = value.is_some_and(|v| match v {
            Value::Null => !nullable,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        });

        let mut failed = false;
        for rule in rules {
            if matches!(rule, Rule::Bail | Rule::Nullable) {
                continue;
            }
            if !present && !rule.is_implicit() {
                continue;
            }
            if passes(rule, field, value, kind, pass.data) {
                continue;
            }

            tracing::trace!(field, rule = %rule, "rule failed");
            errors.add(
                field,
                messages::render(
                    field,
                    rule,
                    kind,
                    pass.messages,
                    pass.attributes,
                    &self.config,
                ),
            );
            failed = true;
            if bail {
                break;
            }
        }

        if !failed {
            if let Some(value) = value {
                let mut root = Value::Object(std::mem::take(validated));
                path::set(&mut root, field, value.clone());
                if let Value::Object(map) = root {
                    *validated = map;
                }
            }
        }
    }
}

impl HostValidator for RuleValidator {
    fn validate(
        &self,
        data: &Value,
        rules: &RuleSet,
        messages: &MessageMap,
        attributes: &AttributeMap,
    ) -> Result<ValidatedData, ValidationError> {
        let pass = Pass {
            data,
            messages,
            attributes,
        };
        let mut errors = ValidationError::new();
        let mut validated = ValidatedData::new();

        for (field, field_rules) in rules {
            self.check_field(&pass, field, field_rules, &mut errors, &mut validated);
        }

        tracing::debug!(
            fields = rules.len(),
            failed = errors.len(),
            "validated form data"
        );

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(errors)
        }
    }

    fn validate_only(
        &self,
        field: &str,
        data: &Value,
        rules: &RuleSet,
        messages: &MessageMap,
        attributes: &AttributeMap,
        data_overrides: &DataOverrides,
    ) -> Result<ValidatedData, ValidationError> {
        let Some(field_rules) = rules.get(field) else {
            tracing::debug!(field, "no rules for field, nothing to validate");
            return Ok(ValidatedData::new());
        };

        let data = path::with_overrides(data, data_overrides);
        let pass = Pass {
            data: &data,
            messages,
            attributes,
        };
        let mut errors = ValidationError::new();
        let mut validated = ValidatedData::new();

        self.check_field(&pass, field, field_rules, &mut errors, &mut validated);

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(errors)
        }
    }
}

fn size_kind(value: Option<&Value>, rules: &[Rule]) -> SizeKind {
    let numeric_rule = rules
        .iter()
        .any(|r| matches!(r, Rule::Numeric | Rule::Integer));

    match value {
        Some(Value::Number(_)) => SizeKind::Numeric,
        Some(Value::Array(_) | Value::Object(_)) => SizeKind::Array,
        Some(Value::String(s)) if numeric_rule && s.trim().parse::<f64>().is_ok() => {
            SizeKind::Numeric
        }
        _ if rules.iter().any(|r| matches!(r, Rule::Array)) => SizeKind::Array,
        _ if numeric_rule => SizeKind::Numeric,
        _ => SizeKind::String,
    }
}

fn size_of(value: &Value, kind: SizeKind) -> Option<f64> {
    match (kind, value) {
        (SizeKind::Numeric, Value::Number(n)) => n.as_f64(),
        (SizeKind::Numeric, Value::String(s)) => s.trim().parse().ok(),
        (SizeKind::Array, Value::Array(items)) => Some(items.len() as f64),
        (SizeKind::Array, Value::Object(map)) => Some(map.len() as f64),
        (SizeKind::String, Value::String(s)) => Some(s.chars().count() as f64),
        _ => None,
    }
}

/// String form of a scalar for `in` / `not_in` comparisons.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_in(value: &Value, options: &[String]) -> bool {
    match value {
        Value::Array(items) => items.iter().all(|item| is_in(item, options)),
        other => scalar_text(other).is_some_and(|text| options.contains(&text)),
    }
}

fn passes(rule: &Rule, field: &str, value: Option<&Value>, kind: SizeKind, data: &Value) -> bool {
    let filled = |v: Option<&Value>| v.is_some_and(|v| !path::is_blank(v));

    match rule {
        Rule::Bail | Rule::Nullable => true,
        Rule::Required => filled(value),
        Rule::RequiredWith(others) => {
            !others.iter().any(|other| filled(path::get(data, other))) || filled(value)
        }
        Rule::Accepted => matches!(
            value,
            Some(Value::Bool(true))
        ) || value.and_then(scalar_text).is_some_and(|text| {
            matches!(text.as_str(), "1" | "yes" | "on" | "true")
        }),
        Rule::String => value.is_some_and(Value::is_string),
        Rule::Numeric => value.is_some_and(|v| match v {
            Value::Number(_) => true,
            Value::String(s) => s.trim().parse::<f64>().is_ok(),
            _ => false,
        }),
        Rule::Integer => value.is_some_and(|v| match v {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        }),
        Rule::Boolean => value.is_some_and(|v| match v {
            Value::Bool(_) => true,
            Value::Number(n) => matches!(n.as_u64(), Some(0 | 1)),
            Value::String(s) => matches!(s.as_str(), "0" | "1"),
            _ => false,
        }),
        Rule::Array => value.is_some_and(|v| v.is_array() || v.is_object()),
        Rule::Email => value
            .and_then(Value::as_str)
            .is_some_and(|s| EMAIL_REGEX.is_match(s)),
        Rule::Url => value
            .and_then(Value::as_str)
            .is_some_and(|s| URL_REGEX.is_match(s)),
        Rule::Min(min) => value
            .and_then(|v| size_of(v, kind))
            .is_some_and(|size| size >= *min),
        Rule::Max(max) => value
            .and_then(|v| size_of(v, kind))
            .is_some_and(|size| size <= *max),
        Rule::Between(min, max) => value
            .and_then(|v| size_of(v, kind))
            .is_some_and(|size| size >= *min && size <= *max),
        Rule::Size(expected) => value
            .and_then(|v| size_of(v, kind))
            .is_some_and(|size| (size - expected).abs() < f64::EPSILON),
        Rule::In(options) => value.is_some_and(|v| is_in(v, options)),
        Rule::NotIn(options) => value.is_some_and(|v| match v {
            Value::Array(items) => !items.iter().any(|item| is_in(item, options)),
            other => !is_in(other, options),
        }),
        Rule::Regex(pattern) => value.and_then(Value::as_str).is_some_and(|s| {
            regex::Regex::new(pattern).is_ok_and(|re| re.is_match(s))
        }),
        Rule::Same(other) => value == path::get(data, other),
        Rule::Different(other) => value != path::get(data, other),
        Rule::Confirmed => value == path::get(data, &format!("{field}_confirmation")),
    }
}
