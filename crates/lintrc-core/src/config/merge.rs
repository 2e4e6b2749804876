//! Configuration merging logic
//!
//! Extended configurations are layered in `extends` order, later entries
//! over earlier ones; the extending document's own settings go on top.

use super::document::{BaseRuleSet, ConfigDocument};
use indexmap::IndexMap;

impl BaseRuleSet {
    /// Layer an extended document onto the base rule set
    ///
    /// Rules the extended document inherited keep their original source;
    /// its own rules are credited to `source`, the `extends` entry that
    /// pulled it in.
    pub(crate) fn absorb(&mut self, source: &str, extended: ConfigDocument) {
        for (name, inherited) in extended.base.rules {
            self.rules.insert(name, inherited);
        }
        self.apply(source, &extended.overrides);
    }
}

/// Merge environment flags (current takes precedence)
pub(crate) fn merge_environment(
    target: &mut IndexMap<String, bool>,
    source: IndexMap<String, bool>,
) {
    for (name, enabled) in source {
        target.entry(name).or_insert(enabled);
    }
}
