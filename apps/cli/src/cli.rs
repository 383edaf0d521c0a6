use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "trellis", version, about = "Inspect and validate form schemas")]
pub struct Cli {
    /// Config file (defaults to ./trellis.toml when present)
    #[arg(long, global = true, env = "TRELLIS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the rules, messages, and attributes a form would validate with
    Inspect {
        /// Form schema (JSON)
        #[arg(long)]
        schema: PathBuf,

        /// Form state (JSON object); empty when omitted
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Validate form state against a schema
    Validate {
        /// Form schema (JSON)
        #[arg(long)]
        schema: PathBuf,

        /// Form state (JSON object)
        #[arg(long)]
        state: PathBuf,

        /// Validate a single field by key or state path
        #[arg(long)]
        field: Option<String>,

        /// Override a value before validating, as `path=json`
        #[arg(long = "set", value_name = "PATH=JSON", value_parser = parse_override)]
        overrides: Vec<(String, Value)>,
    },
}

/// Parses `path=value`. The value is read as JSON, falling back to a plain
/// string.
fn parse_override(raw: &str) -> anyhow::Result<(String, Value)> {
    let (path, value) = raw
        .split_once('=')
        .with_context(|| format!("expected PATH=JSON, got '{raw}'"))?;
    anyhow::ensure!(!path.is_empty(), "override path must not be empty");

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((path.to_owned(), value))
}
