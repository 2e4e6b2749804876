//! Configuration system for lintrc
//!
//! This module loads ESLint-style configuration documents and resolves rule
//! settings against the presets and files they extend:
//! - JSON, JSONC/JSON5, YAML and TOML documents
//! - Auto-discovery by traversing up directories
//! - Configuration extension (`extends` field) from presets and other files
//! - Strong typing with serde and JSON Schema generation via schemars
//!
//! ## Example Configuration
//!
//! ```jsonc
//! {
//!   "env": { "es6": true, "node": true },
//!   "extends": "eslint:recommended",
//!   "rules": {
//!     "eqeqeq": "error",
//!     "no-console": "off",
//!     "indent": ["error", 2],
//!     "linebreak-style": ["error", "unix"]
//!   }
//! }
//! ```
//!
//! ## Resolution
//!
//! A rule's effective setting is the document's own entry if it has one,
//! otherwise whatever the `extends` chain produced, otherwise `off`.

mod document;
mod lint_config;
mod loader;
mod merge;

pub use document::{BaseRuleSet, ConfigDocument, ResolvedRule, RuleOrigin};
pub use lint_config::{Extends, LintConfiguration, RuleEntry, RuleSeverity};
pub use loader::{CONFIG_FILE_NAMES, ConfigFormat, ConfigLoader};
