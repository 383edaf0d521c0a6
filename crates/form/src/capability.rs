//! The validation-rules capability.

use indexmap::IndexMap;
use trellis_validator::{AttributeMap, MessageMap, Rule, RuleSet};

use crate::state::StatePath;

/// Implemented by components that contribute validation data.
///
/// Implementors describe their own rules, messages, and label; the
/// provided `dehydrate_*` methods write those into the caller's
/// accumulators under the component's state path.
pub trait HasValidationRules {
    /// The component's full rule list, in evaluation order.
    fn validation_rules(&self) -> Vec<Rule>;

    /// Custom messages keyed by rule name.
    fn validation_messages(&self) -> &IndexMap<String, String>;

    /// Label used for `:attribute` in error messages.
    fn validation_attribute(&self) -> String;

    /// Writes `rules[state_path]` when the rule list is non-empty.
    ///
    /// The list replaces any earlier entry for the same path.
    fn dehydrate_validation_rules(&self, state_path: &StatePath, rules: &mut RuleSet) {
        let own = self.validation_rules();
        if !own.is_empty() {
            rules.insert(state_path.to_string(), own);
        }
    }

    /// Writes `messages["{state_path}.{rule}"]` for every custom message.
    fn dehydrate_validation_messages(&self, state_path: &StatePath, messages: &mut MessageMap) {
        for (rule, message) in self.validation_messages() {
            messages.insert(format!("{state_path}.{rule}"), message.clone());
        }
    }

    /// Writes `attributes[state_path]`.
    fn dehydrate_validation_attributes(&self, state_path: &StatePath, attributes: &mut AttributeMap) {
        attributes.insert(state_path.to_string(), self.validation_attribute());
    }
}
