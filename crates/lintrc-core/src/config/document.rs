//! The loaded configuration document and rule resolution

use super::lint_config::{Extends, LintConfiguration, RuleEntry, RuleSeverity};
use crate::environment;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where a resolved rule setting came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum RuleOrigin {
    /// The document's own `rules`
    Override,
    /// A preset or extended file, by name
    Base(String),
    /// Configured nowhere
    Unconfigured,
}

/// Effective setting for one rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRule {
    pub name: String,
    pub severity: RuleSeverity,
    pub parameters: Vec<serde_json::Value>,
    pub origin: RuleOrigin,
}

impl ResolvedRule {
    pub fn is_enabled(&self) -> bool {
        self.severity.is_enabled()
    }

    pub fn is_configured(&self) -> bool {
        self.origin != RuleOrigin::Unconfigured
    }
}

/// Rules contributed by everything named in `extends`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseRuleSet {
    /// `extends` entries as written, in application order
    pub(crate) sources: Vec<String>,
    /// Merged rule table; value carries the source that set it last
    pub(crate) rules: IndexMap<String, (RuleEntry, String)>,
}

impl BaseRuleSet {
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn get(&self, rule: &str) -> Option<&RuleEntry> {
        self.rules.get(rule).map(|(entry, _)| entry)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Layer `rules` from `source` on top of what is already there
    pub(crate) fn apply<'a>(
        &mut self,
        source: &str,
        rules: impl IntoIterator<Item = (&'a String, &'a RuleEntry)>,
    ) {
        for (name, entry) in rules {
            self.rules
                .insert(name.clone(), (entry.clone(), source.to_string()));
        }
    }
}

/// A fully loaded, immutable lint configuration
///
/// Built once by [`ConfigLoader`](super::ConfigLoader); every accessor is a
/// pure read, so a document can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    pub(crate) source: Option<PathBuf>,
    /// `env` as written in this document
    pub(crate) own_environment: IndexMap<String, bool>,
    /// `env` merged with everything extended
    pub(crate) environment: IndexMap<String, bool>,
    pub(crate) base: BaseRuleSet,
    pub(crate) overrides: IndexMap<String, RuleEntry>,
}

impl ConfigDocument {
    /// Resolve a rule against the overrides, then the base rule set
    ///
    /// Unknown rules are not an error: they come back as `off` with
    /// [`RuleOrigin::Unconfigured`].
    pub fn resolve(&self, rule: &str) -> ResolvedRule {
        if let Some(entry) = self.overrides.get(rule) {
            return resolved(rule, entry, RuleOrigin::Override);
        }

        if let Some((entry, source)) = self.base.rules.get(rule) {
            return resolved(rule, entry, RuleOrigin::Base(source.clone()));
        }

        ResolvedRule {
            name: rule.to_string(),
            severity: RuleSeverity::Off,
            parameters: Vec::new(),
            origin: RuleOrigin::Unconfigured,
        }
    }

    pub fn is_enabled(&self, rule: &str) -> bool {
        self.resolve(rule).is_enabled()
    }

    /// Every rule either layer mentions, base order first
    pub fn effective_rules(&self) -> Vec<ResolvedRule> {
        let names: IndexSet<&str> = self
            .base
            .rules
            .keys()
            .chain(self.overrides.keys())
            .map(String::as_str)
            .collect();
        names.iter().map(|name| self.resolve(name)).collect()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn base_rule_set(&self) -> &BaseRuleSet {
        &self.base
    }

    pub fn rule_overrides(&self) -> &IndexMap<String, RuleEntry> {
        &self.overrides
    }

    pub fn environments(&self) -> &IndexMap<String, bool> {
        &self.environment
    }

    pub fn is_environment_enabled(&self, name: &str) -> bool {
        self.environment.get(name).copied().unwrap_or(false)
    }

    /// Highest language level implied by the enabled environments
    pub fn ecma_version(&self) -> Option<u32> {
        self.environment
            .iter()
            .filter(|(_, enabled)| **enabled)
            .filter_map(|(name, _)| environment::ecma_version(name))
            .max()
    }

    /// Back to the file model: own env, `extends` as written, own rules
    ///
    /// Inherited settings stay with the files they came from, so the
    /// result re-extends them on the next load.
    pub fn to_configuration(&self) -> LintConfiguration {
        LintConfiguration {
            env: self.own_environment.clone(),
            extends: Extends::from_names(self.base.sources.clone()),
            rules: self.overrides.clone(),
        }
    }
}

fn resolved(rule: &str, entry: &RuleEntry, origin: RuleOrigin) -> ResolvedRule {
    ResolvedRule {
        name: rule.to_string(),
        severity: entry.severity,
        parameters: entry.parameters.clone(),
        origin,
    }
}
