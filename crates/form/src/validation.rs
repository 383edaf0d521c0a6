//! Aggregating validation data over a component tree.
//!
//! Every collector walks the tree the same way: top-level components in
//! document order (hidden ones included), skipping those that are hidden and
//! not dehydrated. A capable component writes its own entries, then each of
//! its visible child containers contributes its own recursively collected
//! map. Merges are positional and the last write wins, so a descendant
//! overrides an ancestor that used the same key.

use indexmap::IndexMap;
use serde_json::Value;
use trellis_validator::maps::merge;
use trellis_validator::{
    AttributeMap, DataOverrides, HostValidator, MessageMap, RuleSet, ValidatedData, ValidationError,
};

use crate::bound::{BoundComponent, BoundContainer};
use crate::capability::HasValidationRules;
use crate::state::StatePath;

/// A node whose subtree can be searched and whose rules, messages, and
/// attributes can be collected.
pub trait CollectsValidationData {
    /// Top-level components, hidden ones included.
    fn components_with_hidden(&self) -> Vec<BoundComponent<'_>>;

    /// Looks a component up anywhere in the subtree by state path, falling
    /// back to its bare key.
    fn find_component(&self, key: &str) -> Option<BoundComponent<'_>>;

    fn validation_attributes(&self) -> AttributeMap {
        aggregate(
            self,
            |capability, path, attributes| capability.dehydrate_validation_attributes(path, attributes),
            |container| container.validation_attributes(),
        )
    }

    fn validation_messages(&self) -> MessageMap {
        aggregate(
            self,
            |capability, path, messages| capability.dehydrate_validation_messages(path, messages),
            |container| container.validation_messages(),
        )
    }

    /// Collected rule lists. A list for a key seen earlier replaces the
    /// earlier list.
    fn validation_rules(&self) -> RuleSet {
        aggregate(
            self,
            |capability, path, rules| capability.dehydrate_validation_rules(path, rules),
            |container| container.validation_rules(),
        )
    }
}

/// A tree with data and a host validator to run collected rules against.
pub trait CanBeValidated: CollectsValidationData {
    /// The data handed to the host validator.
    fn data(&self) -> &Value;

    fn host_validator(&self) -> &dyn HostValidator;

    /// Validates every visible field.
    ///
    /// Returns empty data without consulting the host validator when no
    /// top-level component is eligible or no rules were collected. A
    /// failure from the host validator is returned unchanged.
    fn validate(&self) -> Result<ValidatedData, ValidationError> {
        let all_skipped = self
            .components_with_hidden()
            .iter()
            .all(BoundComponent::is_hidden_and_not_dehydrated);
        if all_skipped {
            tracing::debug!("no visible components, skipping validation");
            return Ok(ValidatedData::new());
        }

        let rules = self.validation_rules();
        if rules.is_empty() {
            tracing::debug!("no validation rules collected, skipping validation");
            return Ok(ValidatedData::new());
        }

        let messages = self.validation_messages();
        let attributes = self.validation_attributes();
        tracing::debug!(fields = rules.len(), "delegating to host validator");

        self.host_validator()
            .validate(self.data(), &rules, &messages, &attributes)
    }

    /// Validates a single field.
    ///
    /// The caller's maps are the starting point; the field's own rules,
    /// messages, and attribute are written over them. When the field is
    /// found, the host validator receives its full state path. A key that
    /// matches nothing is still handed to the host validator as given.
    fn validate_only(
        &self,
        field: &str,
        rules: Option<RuleSet>,
        messages: Option<MessageMap>,
        attributes: Option<AttributeMap>,
        data_overrides: Option<DataOverrides>,
    ) -> Result<ValidatedData, ValidationError> {
        let mut rules = rules.unwrap_or_default();
        let mut messages = messages.unwrap_or_default();
        let mut attributes = attributes.unwrap_or_default();
        let data_overrides = data_overrides.unwrap_or_default();

        let target = match self.find_component(field) {
            Some(component) => {
                let path = component.state_path();
                if let Some(capability) = component.validation_capability() {
                    capability.dehydrate_validation_rules(&path, &mut rules);
                    capability.dehydrate_validation_messages(&path, &mut messages);
                    capability.dehydrate_validation_attributes(&path, &mut attributes);
                }
                path
            }
            None => {
                tracing::debug!(field, "no component for field, using caller rules");
                StatePath::from(field)
            }
        };

        self.host_validator().validate_only(
            target.as_str(),
            self.data(),
            &rules,
            &messages,
            &attributes,
            &data_overrides,
        )
    }
}

impl CollectsValidationData for BoundContainer<'_> {
    fn components_with_hidden(&self) -> Vec<BoundComponent<'_>> {
        self.components()
    }

    fn find_component(&self, key: &str) -> Option<BoundComponent<'_>> {
        self.find(key)
    }
}

/// The shared walk behind the three collectors.
fn aggregate<T, V>(
    tree: &T,
    contribute: impl Fn(&dyn HasValidationRules, &StatePath, &mut IndexMap<String, V>),
    nested: impl Fn(&BoundContainer<'_>) -> IndexMap<String, V>,
) -> IndexMap<String, V>
where
    T: CollectsValidationData + ?Sized,
{
    let mut collected = IndexMap::new();

    for component in tree.components_with_hidden() {
        if component.is_hidden_and_not_dehydrated() {
            tracing::trace!(key = component.key(), "skipping hidden component");
            continue;
        }

        if let Some(capability) = component.validation_capability() {
            contribute(capability, &component.state_path(), &mut collected);
        }

        for container in component.child_containers() {
            if container.is_hidden() {
                tracing::trace!(path = %container.path(), "skipping hidden container");
                continue;
            }
            merge(&mut collected, nested(&container));
        }
    }

    collected
}
