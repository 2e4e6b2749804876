//! Named rule presets
//!
//! A preset is a bundle of default rule settings that a configuration pulls
//! in through `extends`. The built-in registry carries `eslint:recommended`;
//! callers can register their own bundles (shareable configs, plugin presets)
//! before loading.

use crate::config::{RuleEntry, RuleSeverity};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the built-in recommended preset
pub const RECOMMENDED: &str = "eslint:recommended";

/// Rules switched on by `eslint:recommended`, all at `error`
const RECOMMENDED_RULES: &[&str] = &[
    "constructor-super",
    "for-direction",
    "getter-return",
    "no-async-promise-executor",
    "no-case-declarations",
    "no-class-assign",
    "no-compare-neg-zero",
    "no-cond-assign",
    "no-const-assign",
    "no-constant-condition",
    "no-control-regex",
    "no-debugger",
    "no-delete-var",
    "no-dupe-args",
    "no-dupe-class-members",
    "no-dupe-else-if",
    "no-dupe-keys",
    "no-duplicate-case",
    "no-empty",
    "no-empty-character-class",
    "no-empty-pattern",
    "no-ex-assign",
    "no-extra-boolean-cast",
    "no-extra-semi",
    "no-fallthrough",
    "no-func-assign",
    "no-global-assign",
    "no-import-assign",
    "no-inner-declarations",
    "no-invalid-regexp",
    "no-irregular-whitespace",
    "no-loss-of-precision",
    "no-misleading-character-class",
    "no-mixed-spaces-and-tabs",
    "no-new-symbol",
    "no-nonoctal-decimal-escape",
    "no-obj-calls",
    "no-octal",
    "no-prototype-builtins",
    "no-redeclare",
    "no-regex-spaces",
    "no-self-assign",
    "no-setter-return",
    "no-shadow-restricted-names",
    "no-sparse-arrays",
    "no-this-before-super",
    "no-undef",
    "no-unexpected-multiline",
    "no-unreachable",
    "no-unsafe-finally",
    "no-unsafe-negation",
    "no-unsafe-optional-chaining",
    "no-unused-labels",
    "no-unused-vars",
    "no-useless-backreference",
    "no-useless-catch",
    "no-useless-escape",
    "no-with",
    "require-yield",
    "use-isnan",
    "valid-typeof",
];

/// A named bundle of rule settings
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    name: String,
    rules: IndexMap<String, RuleEntry>,
}

impl Preset {
    pub fn new(name: impl Into<String>, rules: IndexMap<String, RuleEntry>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// The upstream recommended rule set
    pub fn recommended() -> Self {
        let rules = RECOMMENDED_RULES
            .iter()
            .map(|rule| (rule.to_string(), RuleEntry::new(RuleSeverity::Error)))
            .collect();
        Self::new(RECOMMENDED, rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &IndexMap<String, RuleEntry> {
        &self.rules
    }

    pub fn get(&self, rule: &str) -> Option<&RuleEntry> {
        self.rules.get(rule)
    }
}

/// Lookup table of presets by name
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: HashMap<String, Arc<Preset>>,
}

impl PresetRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in presets
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Preset::recommended());
        registry
    }

    /// Add a preset, replacing any existing one with the same name
    pub fn register(&mut self, preset: Preset) {
        tracing::debug!(
            "Registering preset '{}' ({} rules)",
            preset.name(),
            preset.rules().len()
        );
        self.presets
            .insert(preset.name().to_string(), Arc::new(preset));
    }

    pub fn get(&self, name: &str) -> Option<Arc<Preset>> {
        self.presets.get(name).cloned()
    }

    /// Registered preset names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether an `extends` entry names a preset rather than a file
    ///
    /// Preset names are namespaced (`eslint:recommended`, `plugin:foo/bar`);
    /// anything without a colon is a path.
    pub fn is_preset_reference(entry: &str) -> bool {
        entry.contains(':') && !looks_like_windows_path(entry)
    }
}

fn looks_like_windows_path(entry: &str) -> bool {
    let bytes = entry.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/')
}
