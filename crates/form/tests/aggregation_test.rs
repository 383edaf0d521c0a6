use mockall::mock;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use trellis_form::prelude::*;

mock! {
    Host {}

    impl HostValidator for Host {
        fn validate(
            &self,
            data: &Value,
            rules: &RuleSet,
            messages: &MessageMap,
            attributes: &AttributeMap,
        ) -> Result<ValidatedData, ValidationError>;

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
}

fn host_never_called() -> MockHost {
    let mut host = MockHost::new();
    host.expect_validate().times(0);
    host.expect_validate_only().times(0);
    host
}

fn is_company() -> DisplayRule {
    DisplayRule::new(
        "kind",
        DisplayCondition::Equals {
            value: json!("company"),
        },
    )
}

// ---------------------------------------------------------------------------
// 1. Short-circuits
// ---------------------------------------------------------------------------

#[test]
fn all_hidden_top_level_skips_host() {
    let schema = ComponentContainer::new()
        .with(Field::new("a").required().hidden())
        .with(Field::new("b").required().hidden());
    let form = Form::new(schema).with_validator(host_never_called());

    assert_eq!(form.validate(), Ok(ValidatedData::new()));
}

#[test]
fn empty_tree_skips_host() {
    let form = Form::new(ComponentContainer::new()).with_validator(host_never_called());
    assert_eq!(form.validate(), Ok(ValidatedData::new()));
}

#[test]
fn empty_rules_skip_host() {
    let schema = ComponentContainer::new()
        .with(Field::new("nickname"))
        .with(Placeholder::new("hint", "Optional"));
    let form = Form::new(schema).with_validator(host_never_called());

    assert!(form.validation_rules().is_empty());
    assert_eq!(form.validate(), Ok(ValidatedData::new()));
}

#[test]
fn hidden_by_display_rules_counts_as_hidden() {
    let schema = ComponentContainer::new().with(
        Field::new("vat")
            .required()
            .display(ComponentDisplay::new().show_when(is_company())),
    );
    let form = Form::new(schema)
        .with_state(FormState::new().with_value("kind", json!("person")))
        .with_validator(host_never_called());

    assert_eq!(form.validate(), Ok(ValidatedData::new()));
}

// ---------------------------------------------------------------------------
// 2. Delegation to the host validator
// ---------------------------------------------------------------------------

#[test]
fn validate_passes_collected_maps_and_data() {
    let schema = ComponentContainer::new().with(
        Field::new("email")
            .label("Email")
            .required()
            .rule(Rule::Email)
            .message("required", "Email please."),
    );
    let state = FormState::new().with_value("email", json!("ada@example.com"));

    let mut host = MockHost::new();
    host.expect_validate()
        .withf(|data, rules, messages, attributes| {
            data == &json!({"email": "ada@example.com"})
                && rules["email"] == vec![Rule::Required, Rule::Email]
                && messages["email.required"] == "Email please."
                && attributes["email"] == "email"
        })
        .times(1)
        .returning(|data, _, _, _| Ok(data.as_object().cloned().unwrap_or_default()));

    let form = Form::new(schema).with_state(state).with_validator(host);
    let validated = form.validate().unwrap();
    assert_eq!(validated.get("email"), Some(&json!("ada@example.com")));
}

#[test]
fn host_failure_is_returned_unchanged() {
    let schema = ComponentContainer::new().with(Field::new("email").required());
    let expected = ValidationError::new().with_message("email", "Already taken.");

    let mut host = MockHost::new();
    let returned = expected.clone();
    host.expect_validate()
        .times(1)
        .returning(move |_, _, _, _| Err(returned.clone()));

    let form = Form::new(schema).with_validator(host);
    assert_eq!(form.validate(), Err(expected));
}

#[test]
fn one_visible_component_is_enough_to_validate() {
    let schema = ComponentContainer::new()
        .with(Field::new("a").required().hidden())
        .with(Field::new("b").required());

    let mut host = MockHost::new();
    host.expect_validate()
        .withf(|_, rules, _, _| rules.keys().eq(["b"]))
        .times(1)
        .returning(|_, _, _, _| Ok(ValidatedData::new()));

    let form = Form::new(schema).with_validator(host);
    assert!(form.validate().is_ok());
}

// ---------------------------------------------------------------------------
// 3. Collection
// ---------------------------------------------------------------------------

#[test]
fn every_contributing_field_has_a_rule_key() {
    let schema = ComponentContainer::new()
        .with(Field::new("name").required())
        .with(Section::new("address").with(Field::new("city").required()))
        .with(
            Tabs::new("tabs")
                .tab(Tab::new("billing").with(Field::new("iban").rule(Rule::String)))
                .tab(
                    Tab::new("company")
                        .display(ComponentDisplay::new().show_when(is_company()))
                        .with(Field::new("vat").required()),
                ),
        )
        .with(Field::new("secret").required().hidden())
        .with(
            Field::new("kept")
                .required()
                .hidden()
                .dehydrated_when_hidden(),
        );
    let form = Form::new(schema);

    let rules = form.validation_rules();
    assert_eq!(
        rules.keys().collect::<Vec<_>>(),
        vec!["name", "city", "iban", "kept"]
    );
}

#[test]
fn collection_is_deterministic() {
    let schema = ComponentContainer::new()
        .with(Field::new("name").required().message("required", "Name!"))
        .with(
            Repeater::new("items")
                .with(Field::new("sku").required().message("required", "SKU!")),
        );
    let form = Form::new(schema)
        .with_state(FormState::new().with_value("items", json!([{}, {}, {}])));

    assert_eq!(form.validation_rules(), form.validation_rules());
    assert_eq!(form.validation_messages(), form.validation_messages());
    assert_eq!(form.validation_attributes(), form.validation_attributes());
}

#[test]
fn descendant_wins_on_key_collision() {
    let schema = ComponentContainer::new()
        .with(Field::new("email").label("Email").rule(Rule::Email))
        .with(
            Section::new("override").with(
                Field::new("email")
                    .validation_attribute("contact address")
                    .required(),
            ),
        );
    let form = Form::new(schema);

    let rules = form.validation_rules();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules["email"], vec![Rule::Required]);
    assert_eq!(form.validation_attributes()["email"], "contact address");
}

#[test]
fn hidden_container_contributes_nothing() {
    let schema = ComponentContainer::new()
        .with(
            Section::new("visible")
                .container_hidden()
                .with(Field::new("inner").required().message("required", "x")),
        )
        .with(Field::new("outer").required());
    let form = Form::new(schema);

    assert!(!form.validation_rules().contains_key("inner"));
    assert!(!form.validation_messages().contains_key("inner.required"));
    assert!(!form.validation_attributes().contains_key("inner"));
    assert!(form.validation_rules().contains_key("outer"));
}

#[test]
fn repeater_items_are_collected_per_index() {
    let schema = ComponentContainer::new().with(
        Repeater::new("items")
            .required()
            .with(Field::new("sku").label("SKU").required().message("required", "SKU needed."))
            .with(Field::new("qty").rule(Rule::Integer)),
    );
    let form = Form::new(schema)
        .with_state(FormState::new().with_value("items", json!([{"sku": "a"}, {}])));

    let rules = form.validation_rules();
    assert_eq!(
        rules.keys().collect::<Vec<_>>(),
        vec!["items", "items.0.sku", "items.0.qty", "items.1.sku", "items.1.qty"]
    );
    assert_eq!(form.validation_messages()["items.1.sku.required"], "SKU needed.");
    assert_eq!(form.validation_attributes()["items.0.sku"], "sku");

    let err = form.validate().unwrap_err();
    assert!(!err.has("items.0.sku"));
    assert!(err.has("items.1.sku"));
}

#[test]
fn repeater_item_display_rules_see_item_values() {
    let schema = ComponentContainer::new().with(
        Repeater::new("items").with(Field::new("sku").required()).with(
            Field::new("download_url")
                .required()
                .display(ComponentDisplay::new().show_when(DisplayRule::new(
                    "type",
                    DisplayCondition::Equals {
                        value: json!("digital"),
                    },
                ))),
        ),
    );
    let form = Form::new(schema).with_state(FormState::new().with_value(
        "items",
        json!([{"type": "digital"}, {"type": "physical"}]),
    ));

    let rules = form.validation_rules();
    assert!(rules.contains_key("items.0.download_url"));
    assert!(!rules.contains_key("items.1.download_url"));
}

// ---------------------------------------------------------------------------
// 4. validate_only
// ---------------------------------------------------------------------------

#[test]
fn validate_only_merges_field_messages_over_caller_messages() {
    let schema = ComponentContainer::new()
        .with(Field::new("email").required().message("required", "Mine."));

    let mut caller_messages = MessageMap::new();
    caller_messages.insert("email.required".into(), "Theirs.".into());
    caller_messages.insert("email.email".into(), "Kept.".into());

    let mut host = MockHost::new();
    host.expect_validate_only()
        .withf(|field, _, rules, messages, attributes, overrides| {
            field == "email"
                && rules["email"] == vec![Rule::Required]
                && messages["email.required"] == "Mine."
                && messages["email.email"] == "Kept."
                && attributes["email"] == "email"
                && overrides.is_empty()
        })
        .times(1)
        .returning(|_, _, _, _, _, _| Ok(ValidatedData::new()));
    host.expect_validate().times(0);

    let form = Form::new(schema).with_validator(host);
    let result = form.validate_only("email", None, Some(caller_messages), None, None);
    assert_eq!(result, Ok(ValidatedData::new()));
}

#[test]
fn validate_only_component_rules_replace_caller_rules() {
    let schema = ComponentContainer::new().with(Field::new("email").required().rule(Rule::max(255)));

    let mut caller_rules = RuleSet::new();
    caller_rules.insert("email".into(), vec![Rule::Required, Rule::Email]);
    caller_rules.insert("name".into(), vec![Rule::Required]);

    let mut host = MockHost::new();
    host.expect_validate_only()
        .withf(|field, _, rules, _, _, _| {
            field == "email"
                && rules.keys().eq(["email", "name"])
                && rules["email"] == vec![Rule::Required, Rule::max(255)]
                && rules["name"] == vec![Rule::Required]
        })
        .times(1)
        .returning(|_, _, _, _, _, _| Ok(ValidatedData::new()));

    let form = Form::new(schema).with_validator(host);
    let result = form.validate_only("email", Some(caller_rules), None, None, None);
    assert_eq!(result, Ok(ValidatedData::new()));
}

#[test]
fn validate_only_unknown_field_still_delegates() {
    let mut caller_rules = RuleSet::new();
    caller_rules.insert("ghost".into(), vec![Rule::Required]);

    let mut host = MockHost::new();
    host.expect_validate_only()
        .withf(|field, _, rules, messages, _, _| {
            field == "ghost" && rules.keys().eq(["ghost"]) && messages.is_empty()
        })
        .times(1)
        .returning(|field, _, _, _, _, _| {
            Err(ValidationError::new().with_message(field, "Missing."))
        });

    let form = Form::new(ComponentContainer::new().with(Field::new("name")))
        .with_validator(host);
    let err = form
        .validate_only("ghost", Some(caller_rules), None, None, None)
        .unwrap_err();
    assert_eq!(err.first("ghost"), Some("Missing."));
}

#[test]
fn validate_only_resolves_bare_key_to_state_path() {
    let schema = ComponentContainer::new().with(
        Repeater::new("items").with(Field::new("sku").required()),
    );
    let form = Form::new(schema)
        .with_state(FormState::new().with_value("items", json!([{"sku": ""}])));

    let err = form.validate_only("sku", None, None, None, None).unwrap_err();
    assert!(err.has("items.0.sku"));
    assert_eq!(err.len(), 1);
}

#[test]
fn validate_only_applies_data_overrides() {
    let schema = ComponentContainer::new()
        .with(Field::new("password").required().rule(Rule::Confirmed))
        .with(Field::new("name").required());
    let form = Form::new(schema)
        .with_state(FormState::new().with_value("password", json!("hunter22")));

    assert!(form.validate_only("password", None, None, None, None).is_err());

    let mut overrides = DataOverrides::new();
    overrides.insert("password_confirmation".into(), json!("hunter22"));
    let validated = form
        .validate_only("password", None, None, None, Some(overrides))
        .unwrap();
    assert_eq!(validated.get("password"), Some(&json!("hunter22")));
    assert!(validated.get("name").is_none());
}
