//! Error message templates and placeholder interpolation.

use crate::config::ValidatorConfig;
use crate::maps::{AttributeMap, MessageMap};
use crate::path;
use crate::rule::Rule;

/// Which flavour of a size rule applies to the value under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SizeKind {
    String,
    Numeric,
    Array,
}

/// Built-in English template for a rule.
fn default_template(rule: &Rule, kind: SizeKind) -> &'static str {
    match (rule, kind) {
        (Rule::Required | Rule::RequiredWith(_), _) => "The :attribute field is required.",
        (Rule::Accepted, _) => "The :attribute must be accepted.",
        (Rule::String, _) => "The :attribute must be a string.",
        (Rule::Numeric, _) => "The :attribute must be a number.",
        (Rule::Integer, _) => "The :attribute must be an integer.",
        (Rule::Boolean, _) => "The :attribute field must be true or false.",
        (Rule::Array, _) => "The :attribute must be an array.",
        (Rule::Email, _) => "The :attribute must be a valid email address.",
        (Rule::Url, _) => "The :attribute must be a valid URL.",
        (Rule::Min(_), SizeKind::String) => "The :attribute must be at least :min characters.",
        (Rule::Min(_), SizeKind::Numeric) => "The :attribute must be at least :min.",
        (Rule::Min(_), SizeKind::Array) => "The :attribute must have at least :min items.",
        (Rule::Max(_), SizeKind::String) => {
            "The :attribute must not be greater than :max characters."
        }
        (Rule::Max(_), SizeKind::Numeric) => "The :attribute must not be greater than :max.",
        (Rule::Max(_), SizeKind::Array) => "The :attribute must not have more than :max items.",
        (Rule::Between(..), SizeKind::String) => {
            "The :attribute must be between :min and :max characters."
        }
        (Rule::Between(..), SizeKind::Numeric) => "The :attribute must be between :min and :max.",
        (Rule::Between(..), SizeKind::Array) => {
            "The :attribute must have between :min and :max items."
        }
        (Rule::Size(_), SizeKind::String) => "The :attribute must be :size characters.",
        (Rule::Size(_), SizeKind::Numeric) => "The :attribute must be :size.",
        (Rule::Size(_), SizeKind::Array) => "The :attribute must contain :size items.",
        (Rule::In(_) | Rule::NotIn(_), _) => "The selected :attribute is invalid.",
        (Rule::Regex(_), _) => "The :attribute format is invalid.",
        (Rule::Same(_), _) => "The :attribute and :other must match.",
        (Rule::Different(_), _) => "The :attribute and :other must be different.",
        (Rule::Confirmed, _) => "The :attribute confirmation does not match.",
        (Rule::Bail | Rule::Nullable, _) => "The :attribute is invalid.",
    }
}

/// Resolves and interpolates the message for a failed rule.
///
/// Precedence: `"<field>.<rule>"` custom message, then a bare `"<rule>"`
/// custom message, then the configured template, then the built-in one.
pub(crate) fn render(
    field: &str,
    rule: &Rule,
    kind: SizeKind,
    messages: &MessageMap,
    attributes: &AttributeMap,
    config: &ValidatorConfig,
) -> String {
    let name = rule.name();
    let template = messages
        .get(&format!("{field}.{name}"))
        .or_else(|| messages.get(name))
        .or_else(|| config.messages.get(name))
        .map_or_else(|| default_template(rule, kind), String::as_str);

    interpolate(template, field, rule, attributes)
}

fn attribute_label(field: &str, attributes: &AttributeMap) -> String {
    attributes
        .get(field)
        .cloned()
        .unwrap_or_else(|| path::humanize(field))
}

fn interpolate(template: &str, field: &str, rule: &Rule, attributes: &AttributeMap) -> String {
    let mut out = template.replace(":attribute", &attribute_label(field, attributes));

    match rule {
        Rule::Min(n) => out = out.replace(":min", &n.to_string()),
        Rule::Max(n) => out = out.replace(":max", &n.to_string()),
        Rule::Size(n) => out = out.replace(":size", &n.to_string()),
        Rule::Between(lo, hi) => {
            out = out.replace(":min", &lo.to_string()).replace(":max", &hi.to_string());
        }
        Rule::In(values) | Rule::NotIn(values) | Rule::RequiredWith(values) => {
            out = out.replace(":values", &values.join(", "));
        }
        Rule::Same(other) | Rule::Different(other) => {
            out = out.replace(":other", &attribute_label(other, attributes));
        }
        _ => {}
    }

    out
}
