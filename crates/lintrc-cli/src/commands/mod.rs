//! Command implementations

pub mod config;

use lintrc_core::{ConfigDocument, ConfigLoader, LintrcError, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::OutputFormat;
use crate::output;

/// Load the document named by `--config`, or the nearest discovered one
pub(crate) fn load_document(config_path: Option<PathBuf>) -> Result<ConfigDocument> {
    let loader = ConfigLoader::new();
    let document = loader.load(config_path.as_deref(), None)?;
    if let Some(source) = document.source() {
        info!("Using configuration {}", source.display());
    }
    Ok(document)
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| LintrcError::config_error(format!("Failed to serialize output: {e}")))
}

/// Resolve command implementation
pub fn resolve_command(
    rules: &[String],
    format: OutputFormat,
    config_path: Option<PathBuf>,
) -> Result<()> {
    debug!("Resolving {} rule(s)", rules.len());
    let document = load_document(config_path)?;
    let resolved: Vec<_> = rules.iter().map(|rule| document.resolve(rule)).collect();

    match format {
        OutputFormat::Human => output::print_rules(&resolved),
        OutputFormat::Json => println!("{}", to_json(&resolved)?),
    }
    Ok(())
}

/// Rules command implementation
pub fn rules_command(all: bool, format: OutputFormat, config_path: Option<PathBuf>) -> Result<()> {
    let document = load_document(config_path)?;
    let rules: Vec<_> = document
        .effective_rules()
        .into_iter()
        .filter(|rule| all || rule.is_enabled())
        .collect();
    debug!("{} effective rule(s) (all: {})", rules.len(), all);

    match format {
        OutputFormat::Human => {
            output::print_rules(&rules);
            output::print_rule_summary(&rules);
        }
        OutputFormat::Json => println!("{}", to_json(&rules)?),
    }
    Ok(())
}

/// Env command implementation
pub fn env_command(format: OutputFormat, config_path: Option<PathBuf>) -> Result<()> {
    let document = load_document(config_path)?;

    match format {
        OutputFormat::Human => output::print_environments(&document),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "env": document.environments(),
                "ecmaVersion": document.ecma_version(),
            });
            println!("{}", to_json(&value)?);
        }
    }
    Ok(())
}
