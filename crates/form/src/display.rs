use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{FormState, StatePath};

/// A condition evaluated against one sibling value to decide visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum DisplayCondition {
    /// Value equals the given value.
    Equals { value: Value },
    /// Value does not equal the given value.
    NotEquals { value: Value },
    /// Value is present and not null.
    IsSet,
    /// Value is null or missing.
    IsNull,
    /// Value is null, an empty string, or an empty array.
    IsEmpty,
    /// Value is a non-empty string or array, or any other non-null scalar.
    IsNotEmpty,
    /// Value is boolean true.
    IsTrue,
    /// Value is boolean false.
    IsFalse,
    /// Numeric value is greater than the threshold.
    GreaterThan { value: f64 },
    /// Numeric value is less than the threshold.
    LessThan { value: f64 },
    /// Value is one of the given values.
    OneOf { values: Vec<Value> },
}

impl DisplayCondition {
    /// Evaluate this condition against a concrete value.
    #[must_use]
    pub fn evaluate(&self, value: &Value) -> bool {
        match self {
            Self::Equals { value: expected } => value == expected,
            Self::NotEquals { value: expected } => value != expected,
            Self::IsSet => !value.is_null(),
            Self::IsNull => value.is_null(),
            Self::IsEmpty => match value {
                Value::String(s) => s.is_empty(),
                Value::Array(a) => a.is_empty(),
                Value::Null => true,
                _ => false,
            },
            Self::IsNotEmpty => match value {
                Value::String(s) => !s.is_empty(),
                Value::Array(a) => !a.is_empty(),
                Value::Null => false,
                _ => true,
            },
            Self::IsTrue => value.as_bool() == Some(true),
            Self::IsFalse => value.as_bool() == Some(false),
            Self::GreaterThan { value: threshold } => {
                value.as_f64().is_some_and(|n| n > *threshold)
            }
            Self::LessThan { value: threshold } => value.as_f64().is_some_and(|n| n < *threshold),
            Self::OneOf { values } => values.contains(value),
        }
    }
}

/// Check a sibling field against a condition.
///
/// `field` is resolved relative to the container the component lives in, so
/// a rule inside a repeater item looks at that item's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRule {
    pub field: String,
    pub condition: DisplayCondition,
}

impl DisplayRule {
    #[must_use]
    pub fn new(field: impl Into<String>, condition: DisplayCondition) -> Self {
        Self {
            field: field.into(),
            condition,
        }
    }

    /// Evaluate this rule against form state at the given scope.
    #[must_use]
    pub fn evaluate(&self, state: &FormState, scope: &StatePath) -> bool {
        let value = state
            .get(scope.join(&self.field).as_str())
            .unwrap_or(&Value::Null);
        self.condition.evaluate(value)
    }
}

/// Composable display logic: combine rules with AND, OR, NOT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "logic", rename_all = "snake_case")]
pub enum DisplayRuleSet {
    Single(DisplayRule),
    All { rules: Vec<DisplayRuleSet> },
    Any { rules: Vec<DisplayRuleSet> },
    Not { rule: Box<DisplayRuleSet> },
}

impl DisplayRuleSet {
    #[must_use]
    pub fn evaluate(&self, state: &FormState, scope: &StatePath) -> bool {
        match self {
            Self::Single(rule) => rule.evaluate(state, scope),
            Self::All { rules } => rules.iter().all(|r| r.evaluate(state, scope)),
            Self::Any { rules } => rules.iter().any(|r| r.evaluate(state, scope)),
            Self::Not { rule } => !rule.evaluate(state, scope),
        }
    }

    /// Collect all field names referenced by this rule set.
    #[must_use]
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps = Vec::new();
        self.collect_dependencies(&mut deps);
        deps.sort();
        deps.dedup();
        deps
    }

    fn collect_dependencies(&self, deps: &mut Vec<String>) {
        match self {
            Self::Single(rule) => deps.push(rule.field.clone()),
            Self::All { rules } | Self::Any { rules } => {
                for r in rules {
                    r.collect_dependencies(deps);
                }
            }
            Self::Not { rule } => rule.collect_dependencies(deps),
        }
    }
}

impl From<DisplayRule> for DisplayRuleSet {
    fn from(rule: DisplayRule) -> Self {
        Self::Single(rule)
    }
}

/// Controls when a component or container is shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDisplay {
    /// Rules of which at least one must match for the component to show.
    /// If empty, the component is visible by default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub show_when: Vec<DisplayRuleSet>,

    /// Rules that, if any matches, hide the component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hide_when: Vec<DisplayRuleSet>,
}

impl ComponentDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a show rule (builder-style).
    #[must_use]
    pub fn show_when(mut self, rule: impl Into<DisplayRuleSet>) -> Self {
        self.show_when.push(rule.into());
        self
    }

    /// Add a hide rule (builder-style).
    #[must_use]
    pub fn hide_when(mut self, rule: impl Into<DisplayRuleSet>) -> Self {
        self.hide_when.push(rule.into());
        self
    }

    /// Whether the owner is visible given current state.
    ///
    /// Hide rules win over show rules.
    #[must_use]
    pub fn is_visible(&self, state: &FormState, scope: &StatePath) -> bool {
        if self.hide_when.iter().any(|r| r.evaluate(state, scope)) {
            return false;
        }

        if self.show_when.is_empty() {
            return true;
        }

        self.show_when.iter().any(|r| r.evaluate(state, scope))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.show_when.is_empty() && self.hide_when.is_empty()
    }

    /// Collect all field names that this display configuration depends on.
    #[must_use]
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps: Vec<String> = self
            .show_when
            .iter()
            .chain(&self.hide_when)
            .flat_map(DisplayRuleSet::dependencies)
            .collect();
        deps.sort();
        deps.dedup();
        deps
    }
}
