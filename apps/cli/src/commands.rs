use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use serde_json::{Map, Value, json};
use trellis_form::{CanBeValidated, CollectsValidationData, Form, FormState};
use trellis_validator::{RuleValidator, ValidatedData, ValidationError};

use crate::cli::Cmd;
use crate::config::AppConfig;

pub fn dispatch(cmd: Cmd, config: &AppConfig) -> anyhow::Result<ExitCode> {
    match cmd {
        Cmd::Inspect { schema, state } => {
            let state = match state {
                Some(path) => load_state(&path)?,
                None => FormState::new(),
            };
            let form = load_form(&schema, state, config)?;
            print_json(&inspect(&form))?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Validate {
            schema,
            state,
            field,
            overrides,
        } => {
            let state = load_state(&state)?;
            let mut form = load_form(&schema, state, config)?;

            let result = match field {
                Some(field) => {
                    let overrides: Map<String, Value> = overrides.into_iter().collect();
                    form.validate_only(&field, None, None, None, Some(overrides))
                }
                None => {
                    for (path, value) in overrides {
                        form.state_mut().set(&path, value);
                    }
                    form.validate()
                }
            };
            report(result)
        }
    }
}

/// The maps a form would hand to its validator.
fn inspect(form: &Form) -> Value {
    json!({
        "rules": form.validation_rules(),
        "messages": form.validation_messages(),
        "attributes": form.validation_attributes(),
    })
}

fn report(result: Result<ValidatedData, ValidationError>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(validated) => {
            print_json(&Value::Object(validated))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(fields = err.len(), "validation failed");
            print_json(&err.to_json_value())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_form(path: &Path, state: FormState, config: &AppConfig) -> anyhow::Result<Form> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    let form = Form::from_json_schema(&raw)
        .with_context(|| format!("failed to load schema {}", path.display()))?;

    Ok(form
        .with_state(state)
        .with_validator(RuleValidator::with_config(config.validator.clone())))
}

fn load_state(path: &Path) -> anyhow::Result<FormState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read state {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("state {} is not valid JSON", path.display()))?;
    FormState::from_value(value).with_context(|| format!("invalid state in {}", path.display()))
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
