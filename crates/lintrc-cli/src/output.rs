//! Human-readable output
//!
//! JSON output goes straight through serde; everything here is for people.

use colored::*;
use lintrc_core::{ConfigDocument, ResolvedRule, RuleOrigin, RuleSeverity};

fn severity_label(severity: RuleSeverity) -> ColoredString {
    let label = format!("{:<5}", severity.as_str());
    match severity {
        RuleSeverity::Error => label.red().bold(),
        RuleSeverity::Warn => label.yellow().bold(),
        RuleSeverity::Off => label.dimmed(),
    }
}

fn origin_label(origin: &RuleOrigin) -> String {
    match origin {
        RuleOrigin::Override => "(config)".to_string(),
        RuleOrigin::Base(source) => format!("(from {source})"),
        RuleOrigin::Unconfigured => "(unconfigured)".to_string(),
    }
}

fn format_parameters(rule: &ResolvedRule) -> String {
    rule.parameters
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per rule: severity, name, options, origin
pub fn print_rules(rules: &[ResolvedRule]) {
    let width = rules.iter().map(|rule| rule.name.len()).max().unwrap_or(0);

    for rule in rules {
        let parameters = format_parameters(rule);
        let mut line = format!("{} {:<width$}", severity_label(rule.severity), rule.name);
        if !parameters.is_empty() {
            line.push_str(&format!("  [{parameters}]"));
        }
        println!("{}  {}", line, origin_label(&rule.origin).dimmed());
    }
}

pub fn print_rule_summary(rules: &[ResolvedRule]) {
    let count = |severity: RuleSeverity| rules.iter().filter(|r| r.severity == severity).count();

    println!();
    println!(
        "{} rules: {} error, {} warn, {} off",
        rules.len(),
        count(RuleSeverity::Error),
        count(RuleSeverity::Warn),
        count(RuleSeverity::Off)
    );
}

pub fn print_environments(document: &ConfigDocument) {
    if document.environments().is_empty() {
        println!("No environments configured");
    }

    for (name, enabled) in document.environments() {
        let marker = if *enabled { "✓".green() } else { "✗".red() };
        println!("{marker} {name}");
    }

    if let Some(version) = document.ecma_version() {
        println!();
        println!("ecmaVersion: {version}");
    }
}
