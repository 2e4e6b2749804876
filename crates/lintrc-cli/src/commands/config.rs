//! `config` subcommands

use lintrc_core::{ConfigLoader, LintConfiguration, LintrcError, Result, RuleEntry};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use super::{load_document, to_json};

/// Config validate command implementation
pub fn validate_command(path: Option<PathBuf>) -> Result<()> {
    debug!("Validating configuration file: {:?}", path);

    match load_document(path) {
        Ok(document) => {
            println!("✅ Configuration is valid");
            if let Some(source) = document.source() {
                println!("   File: {}", source.display());
            }
            println!(
                "   Extends: {}",
                if document.base_rule_set().sources().is_empty() {
                    "(none)".to_string()
                } else {
                    document.base_rule_set().sources().join(", ")
                }
            );
            let base = document.base_rule_set();
            if base.is_empty() {
                println!("   Base rules: (none)");
            } else {
                println!("   Base rules: {}", base.len());
            }
            println!("   Rule overrides: {}", document.rule_overrides().len());
            Ok(())
        }
        Err(e) => {
            error!("❌ Configuration validation failed: {}", e);
            Err(e)
        }
    }
}

/// Config show command implementation
pub fn show_command(resolved: bool, config_path: Option<PathBuf>) -> Result<()> {
    debug!("Showing configuration (resolved: {})", resolved);

    let config = if resolved {
        let document = load_document(config_path)?;
        LintConfiguration {
            env: document.environments().clone(),
            extends: None,
            rules: document
                .effective_rules()
                .into_iter()
                .map(|rule| {
                    (
                        rule.name,
                        RuleEntry::with_parameters(rule.severity, rule.parameters),
                    )
                })
                .collect(),
        }
    } else {
        let path = match config_path {
            Some(path) => path,
            None => ConfigLoader::auto_discover(Path::new("."))?
                .ok_or_else(|| LintrcError::config_error("No config file found"))?,
        };
        ConfigLoader::read_configuration(&path)?
    };

    println!("{}", to_json(&config)?);
    Ok(())
}

/// Config schema command implementation
pub fn schema_command() -> Result<()> {
    println!("{}", to_json(&LintConfiguration::json_schema())?);
    Ok(())
}
