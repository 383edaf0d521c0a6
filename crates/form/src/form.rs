use std::fmt;

use serde_json::Value;
use trellis_validator::{HostValidator, RuleValidator};

use crate::bound::{BoundComponent, BoundContainer};
use crate::container::ComponentContainer;
use crate::error::FormError;
use crate::state::{FormState, StatePath};
use crate::validation::{CanBeValidated, CollectsValidationData};

/// A form: a root schema, its current state, and the validator that checks
/// it.
///
/// ```
/// use serde_json::json;
/// use trellis_form::prelude::*;
///
/// let schema = ComponentContainer::new().with(Field::new("email").required().rule(Rule::Email));
/// let form = Form::new(schema).with_state(FormState::new().with_value("email", json!("nope")));
///
/// let err = form.validate().unwrap_err();
/// assert_eq!(err.first("email"), Some("The email must be a valid email address."));
/// ```
pub struct Form {
    schema: ComponentContainer,
    state: FormState,
    validator: Box<dyn HostValidator>,
}

impl Form {
    /// A form with empty state and the built-in [`RuleValidator`].
    #[must_use]
    pub fn new(schema: ComponentContainer) -> Self {
        Self {
            schema,
            state: FormState::new(),
            validator: Box::new(RuleValidator::new()),
        }
    }

    /// Parse a schema from JSON (`{"components": [...]}`).
    pub fn from_json_schema(json: &str) -> Result<Self, FormError> {
        let schema: ComponentContainer = serde_json::from_str(json)?;
        Ok(Self::new(schema))
    }

    #[must_use]
    pub fn with_state(mut self, state: FormState) -> Self {
        self.state = state;
        self
    }

    /// Swap in a different host validator.
    #[must_use]
    pub fn with_validator(mut self, validator: impl HostValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    #[must_use]
    pub fn schema(&self) -> &ComponentContainer {
        &self.schema
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// The root container bound to the current state.
    #[must_use]
    pub fn root(&self) -> BoundContainer<'_> {
        BoundContainer::new(&self.schema, &self.state, StatePath::root())
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("schema", &self.schema)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CollectsValidationData for Form {
    fn components_with_hidden(&self) -> Vec<BoundComponent<'_>> {
        self.root().components()
    }

    fn find_component(&self, key: &str) -> Option<BoundComponent<'_>> {
        self.root().find(key)
    }
}

impl CanBeValidated for Form {
    fn data(&self) -> &Value {
        self.state.as_value()
    }

    fn host_validator(&self) -> &dyn HostValidator {
        self.validator.as_ref()
    }
}
