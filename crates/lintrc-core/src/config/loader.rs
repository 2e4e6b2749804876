//! Configuration file discovery and loading

use super::document::{BaseRuleSet, ConfigDocument};
use super::lint_config::LintConfiguration;
use super::merge::merge_environment;
use crate::environment;
use crate::error::LintrcError;
use crate::presets::PresetRegistry;
use crate::result::Result;
use indexmap::IndexMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names tried in each directory, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".eslintrc.json",
    ".eslintrc.jsonc",
    ".eslintrc.yaml",
    ".eslintrc.yml",
    ".eslintrc.toml",
    ".eslintrc",
];

/// Syntax of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Strict JSON
    Json,
    /// JSON with comments, trailing commas and unquoted keys
    Json5,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension, sniffing the content when
    /// there is none
    pub fn detect(path: &Path, content: &str) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(ConfigFormat::Json),
            Some("jsonc") | Some("json5") => Some(ConfigFormat::Json5),
            Some("yaml") | Some("yml") => Some(ConfigFormat::Yaml),
            Some("toml") => Some(ConfigFormat::Toml),
            Some(_) => None,
            None => {
                if content.trim_start().starts_with('{') {
                    Some(ConfigFormat::Json5)
                } else {
                    Some(ConfigFormat::Yaml)
                }
            }
        }
    }

    /// Parse a document in this format
    pub fn parse(self, content: &str) -> std::result::Result<LintConfiguration, String> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json5 => json5::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Json5 => "json5",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Configuration loader for discovering and loading config files
///
/// Holds the preset registry `extends` entries are resolved against.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    presets: PresetRegistry,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader backed by the built-in presets
    pub fn new() -> Self {
        Self::with_presets(PresetRegistry::builtin())
    }

    pub fn with_presets(presets: PresetRegistry) -> Self {
        Self { presets }
    }

    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Tries [`CONFIG_FILE_NAMES`] in order in each directory, moving up the
    /// tree until a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintrcError::io_error(start_path, e))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Parse a single file without resolving `extends`
    pub fn read_configuration(path: &Path) -> Result<LintConfiguration> {
        let content = fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;
        let content = strip_bom(&content);
        let format = ConfigFormat::detect(path, content).ok_or_else(|| {
            LintrcError::config_error(format!(
                "Unsupported config file extension: {} (expected json, jsonc, yaml, yml or toml)",
                path.display()
            ))
        })?;
        debug!("Parsing {} as {}", path.display(), format);
        format
            .parse(content)
            .map_err(|message| LintrcError::parse_error(path, message))
    }

    /// Load and fully resolve a configuration file
    pub fn load_from_file(&self, path: &Path) -> Result<ConfigDocument> {
        let path = path
            .canonicalize()
            .map_err(|e| LintrcError::io_error(path, e))?;
        let mut chain = Vec::new();
        self.load_file_in_chain(&path, &mut chain)
    }

    /// Load a document from memory; relative `extends` paths resolve
    /// against `base_dir`
    pub fn load_from_str(
        &self,
        content: &str,
        format: ConfigFormat,
        base_dir: &Path,
    ) -> Result<ConfigDocument> {
        let config = format
            .parse(strip_bom(content))
            .map_err(|message| LintrcError::parse_error("<memory>", message))?;
        let mut chain = Vec::new();
        self.build(config, base_dir, None, &mut chain)
    }

    /// Load config from path or auto-discover
    ///
    /// If a custom path is provided, loads from that path. Otherwise
    /// searches upward from `start_dir` (or the current directory).
    pub fn load(
        &self,
        custom_path: Option<&Path>,
        start_dir: Option<&Path>,
    ) -> Result<ConfigDocument> {
        let config_path = if let Some(path) = custom_path {
            if !path.exists() {
                return Err(LintrcError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        } else {
            let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
            Self::auto_discover(search_dir)?.ok_or_else(|| {
                LintrcError::config_error(format!(
                    "No config file found ({}) in {} or any parent directory",
                    CONFIG_FILE_NAMES.join(", "),
                    search_dir.display()
                ))
            })?
        };

        self.load_from_file(&config_path)
    }

    fn load_file_in_chain(
        &self,
        path: &Path,
        chain: &mut Vec<PathBuf>,
    ) -> Result<ConfigDocument> {
        if chain.iter().any(|seen| seen == path) {
            let cycle = chain
                .iter()
                .chain(std::iter::once(&path.to_path_buf()))
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(LintrcError::CircularExtends { chain: cycle });
        }

        let config = Self::read_configuration(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        chain.push(path.to_path_buf());
        let document = self.build(config, base_dir, Some(path.to_path_buf()), chain);
        chain.pop();
        document
    }

    fn build(
        &self,
        config: LintConfiguration,
        base_dir: &Path,
        source: Option<PathBuf>,
        chain: &mut Vec<PathBuf>,
    ) -> Result<ConfigDocument> {
        validate(&config)?;

        let mut base = BaseRuleSet::default();
        let mut inherited_env = IndexMap::new();

        if let Some(extends) = &config.extends {
            for entry in extends.entries() {
                base.sources.push(entry.to_string());

                if PresetRegistry::is_preset_reference(entry) {
                    let preset = self
                        .presets
                        .get(entry)
                        .ok_or_else(|| LintrcError::UnknownPreset {
                            name: entry.to_string(),
                        })?;
                    debug!("Applying preset '{}' ({} rules)", entry, preset.rules().len());
                    base.apply(entry, preset.rules());
                } else {
                    let target = base_dir.join(entry);
                    let target = target
                        .canonicalize()
                        .map_err(|e| LintrcError::io_error(&target, e))?;
                    debug!("Extending {}", target.display());
                    let extended = self.load_file_in_chain(&target, chain)?;

                    let mut env = extended.environment.clone();
                    merge_environment(&mut env, inherited_env);
                    inherited_env = env;
                    base.absorb(entry, extended);
                }
            }
        }

        let own_environment = config.env.clone();
        let mut environment = config.env;
        merge_environment(&mut environment, inherited_env);

        debug!(
            "Loaded config{}: {} base rules from [{}], {} overrides",
            source
                .as_ref()
                .map(|p| format!(" {}", p.display()))
                .unwrap_or_default(),
            base.len(),
            base.sources.join(", "),
            config.rules.len()
        );

        Ok(ConfigDocument {
            source,
            own_environment,
            environment,
            base,
            overrides: config.rules,
        })
    }
}

/// Editors on Windows like to prefix UTF-8 files with a byte order mark
fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Semantic checks serde cannot express
fn validate(config: &LintConfiguration) -> Result<()> {
    for name in config.env.keys() {
        if !environment::is_known(name) {
            return Err(LintrcError::UnknownEnvironment { name: name.clone() });
        }
    }

    for name in config.rules.keys() {
        if name.trim().is_empty() {
            return Err(LintrcError::InvalidRule {
                rule_id: name.clone(),
                message: "rule name must not be empty".to_string(),
            });
        }
    }

    if let Some(extends) = &config.extends {
        if extends.entries().iter().any(|entry| entry.trim().is_empty()) {
            return Err(LintrcError::config_error("extends entries must not be empty"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleOrigin, RuleSeverity};
    use crate::error::ErrorKind;
    use crate::presets::{Preset, RECOMMENDED};
    use serde_json::json;
    use tempfile::TempDir;

    const LITERAL_EXAMPLE: &str = r#"{
        "env": { "es6": true, "node": true },
        "extends": "eslint:recommended",
        "rules": {
            "eqeqeq": "error",
            "strict": "error",
            "no-var": "error",
            "prefer-const": "error",
            "no-console": "off",
            "indent": ["error", 2],
            "linebreak-style": ["error", "unix"],
            "semi": ["error", "always"]
        }
    }"#;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_literal_example_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(temp_dir.path(), ".eslintrc.json", LITERAL_EXAMPLE);
        let doc = ConfigLoader::new().load_from_file(&path).unwrap();

        let eqeqeq = doc.resolve("eqeqeq");
        assert_eq!(eqeqeq.severity, RuleSeverity::Error);
        assert!(eqeqeq.parameters.is_empty());

        let indent = doc.resolve("indent");
        assert_eq!(indent.severity, RuleSeverity::Error);
        assert_eq!(indent.parameters, vec![json!(2)]);

        assert_eq!(doc.resolve("no-console").severity, RuleSeverity::Off);

        let unknown = doc.resolve("unknown-rule");
        assert_eq!(unknown.origin, RuleOrigin::Unconfigured);
        assert_eq!(unknown.severity, RuleSeverity::Off);

        let from_preset = doc.resolve("no-undef");
        assert_eq!(from_preset.origin, RuleOrigin::Base(RECOMMENDED.into()));
        assert_eq!(doc.ecma_version(), Some(6));
        assert_eq!(doc.source(), Some(path.canonicalize().unwrap().as_path()));
    }

    #[test]
    fn test_round_trip_preserves_mapping() {
        let loader = ConfigLoader::new();
        let doc = loader
            .load_from_str(LITERAL_EXAMPLE, ConfigFormat::Json, Path::new("."))
            .unwrap();

        let serialized = serde_json::to_string_pretty(&doc.to_configuration()).unwrap();
        let reparsed = loader
            .load_from_str(&serialized, ConfigFormat::Json, Path::new("."))
            .unwrap();

        assert_eq!(reparsed.to_configuration(), doc.to_configuration());
        assert_eq!(reparsed.effective_rules(), doc.effective_rules());
    }

    #[test]
    fn test_round_trip_through_yaml_and_toml() {
        let loader = ConfigLoader::new();
        let doc = loader
            .load_from_str(LITERAL_EXAMPLE, ConfigFormat::Json, Path::new("."))
            .unwrap();
        let config = doc.to_configuration();

        let yaml = serde_yaml::to_string(&config).unwrap();
        let from_yaml = ConfigFormat::Yaml.parse(&yaml).unwrap();
        assert_eq!(from_yaml, config);

        let toml_text = toml::to_string(&config).unwrap();
        let from_toml = ConfigFormat::Toml.parse(&toml_text).unwrap();
        assert_eq!(from_toml, config);
    }

    #[test]
    fn test_json5_literal_syntax() {
        let content = r#"
        // eslint config file
        {
          env: { es6: true, node: true },
          extends: "eslint:recommended",
          rules: {
            eqeqeq: "error",
            "no-console": "off",
            indent: ["error", 2],
            semi: ["error", "always"],
          },
        }
        "#;
        let doc = ConfigLoader::new()
            .load_from_str(content, ConfigFormat::Json5, Path::new("."))
            .unwrap();

        assert_eq!(doc.resolve("eqeqeq").severity, RuleSeverity::Error);
        assert_eq!(doc.resolve("no-console").severity, RuleSeverity::Off);
        let indent = doc.resolve("indent");
        assert_eq!(indent.parameters.len(), 1);
        assert_eq!(indent.parameters[0].as_f64(), Some(2.0));
        assert_eq!(doc.resolve("semi").parameters, vec![json!("always")]);
    }

    #[test]
    fn test_yaml_and_toml_files() {
        let temp_dir = TempDir::new().unwrap();
        let yaml = create_temp_config(
            temp_dir.path(),
            ".eslintrc.yaml",
            "env:\n  browser: true\nrules:\n  quotes: [warn, single]\n  semi: 2\n",
        );
        let toml_path = create_temp_config(
            temp_dir.path(),
            ".eslintrc.toml",
            "[env]\nnode = true\n\n[rules]\nquotes = [\"warn\", \"double\"]\nsemi = 0\n",
        );

        let loader = ConfigLoader::new();
        let from_yaml = loader.load_from_file(&yaml).unwrap();
        assert_eq!(from_yaml.resolve("quotes").severity, RuleSeverity::Warn);
        assert_eq!(from_yaml.resolve("quotes").parameters, vec![json!("single")]);
        assert_eq!(from_yaml.resolve("semi").severity, RuleSeverity::Error);
        assert!(from_yaml.is_environment_enabled("browser"));

        let from_toml = loader.load_from_file(&toml_path).unwrap();
        assert_eq!(from_toml.resolve("quotes").parameters, vec![json!("double")]);
        assert_eq!(from_toml.resolve("semi").severity, RuleSeverity::Off);
    }

    #[test]
    fn test_extensionless_file_detection() {
        assert_eq!(
            ConfigFormat::detect(Path::new(".eslintrc"), "  {\"rules\": {}}"),
            Some(ConfigFormat::Json5)
        );
        assert_eq!(
            ConfigFormat::detect(Path::new(".eslintrc"), "rules:\n  semi: off\n"),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::detect(Path::new("config.ini"), ""), None);
    }

    #[test]
    fn test_extends_file_chain() {
        let temp_dir = TempDir::new().unwrap();
        let shared = temp_dir.path().join("shared");
        fs::create_dir_all(&shared).unwrap();

        create_temp_config(
            &shared,
            "base.json",
            r#"{
                "env": { "browser": true, "es2017": true },
                "extends": "eslint:recommended",
                "rules": { "no-empty": "warn", "quotes": ["error", "double"] }
            }"#,
        );
        let path = create_temp_config(
            temp_dir.path(),
            ".eslintrc.json",
            r#"{
                "env": { "browser": false },
                "extends": ["./shared/base.json"],
                "rules": { "quotes": ["error", "single"] }
            }"#,
        );

        let doc = ConfigLoader::new().load_from_file(&path).unwrap();

        assert_eq!(doc.resolve("quotes").parameters, vec![json!("single")]);
        assert_eq!(doc.resolve("quotes").origin, RuleOrigin::Override);

        let no_empty = doc.resolve("no-empty");
        assert_eq!(no_empty.severity, RuleSeverity::Warn);
        assert_eq!(no_empty.origin, RuleOrigin::Base("./shared/base.json".into()));

        assert_eq!(
            doc.resolve("no-undef").origin,
            RuleOrigin::Base(RECOMMENDED.into())
        );

        assert!(!doc.is_environment_enabled("browser"));
        assert!(doc.is_environment_enabled("es2017"));
        assert_eq!(doc.ecma_version(), Some(8));
        assert_eq!(doc.base_rule_set().sources(), ["./shared/base.json"]);

        let own = doc.to_configuration();
        assert_eq!(own.env.len(), 1);
        assert_eq!(own.env.get("browser"), Some(&false));
        assert!(!own.env.contains_key("es2017"));
    }

    #[test]
    fn test_later_extends_file_env_wins() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "a.json", r#"{"env": {"browser": true}}"#);
        create_temp_config(temp_dir.path(), "b.json", r#"{"env": {"browser": false}}"#);
        let path = create_temp_config(
            temp_dir.path(),
            ".eslintrc.json",
            r#"{"extends": ["./a.json", "./b.json"]}"#,
        );

        let doc = ConfigLoader::new().load_from_file(&path).unwrap();
        assert!(!doc.is_environment_enabled("browser"));
        assert!(doc.to_configuration().env.is_empty());
    }

    #[test]
    fn test_diamond_extends_loads() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(
            temp_dir.path(),
            "a.json",
            r#"{"extends": ["./b.json", "./c.json"]}"#,
        );
        create_temp_config(temp_dir.path(), "b.json", r#"{"extends": "./d.json"}"#);
        create_temp_config(
            temp_dir.path(),
            "c.json",
            r#"{"extends": "./d.json", "rules": {"semi": "warn"}}"#,
        );
        create_temp_config(
            temp_dir.path(),
            "d.json",
            r#"{"env": {"node": true}, "rules": {"eqeqeq": "error"}}"#,
        );

        let doc = ConfigLoader::new()
            .load_from_file(&temp_dir.path().join("a.json"))
            .unwrap();

        let eqeqeq = doc.resolve("eqeqeq");
        assert_eq!(eqeqeq.severity, RuleSeverity::Error);
        assert_eq!(eqeqeq.origin, RuleOrigin::Base("./d.json".into()));
        assert_eq!(doc.resolve("semi").origin, RuleOrigin::Base("./c.json".into()));
        assert!(doc.is_environment_enabled("node"));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let json = create_temp_config(
            temp_dir.path(),
            ".eslintrc.json",
            "\u{feff}{\"rules\": {\"semi\": \"error\"}}",
        );
        let doc = ConfigLoader::new().load_from_file(&json).unwrap();
        assert_eq!(doc.resolve("semi").severity, RuleSeverity::Error);

        let nested = temp_dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        let bare = create_temp_config(
            &nested,
            ".eslintrc",
            "\u{feff}{ rules: { quotes: [\"warn\", \"single\"] } }",
        );
        let doc = ConfigLoader::new().load_from_file(&bare).unwrap();
        assert_eq!(doc.resolve("quotes").severity, RuleSeverity::Warn);
        assert_eq!(doc.resolve("quotes").parameters, vec![json!("single")]);

        let doc = ConfigLoader::new()
            .load_from_str("\u{feff}{}", ConfigFormat::Json, Path::new("."))
            .unwrap();
        assert!(doc.effective_rules().is_empty());
    }

    #[test]
    fn test_circular_extends_detected() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "a.json", r#"{"extends": "./b.json"}"#);
        create_temp_config(temp_dir.path(), "b.json", r#"{"extends": ["./a.json"]}"#);

        let err = ConfigLoader::new()
            .load_from_file(&temp_dir.path().join("a.json"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Extends);
        assert!(err.to_string().contains("a.json"));
        assert!(err.to_string().contains("b.json"));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let err = ConfigLoader::new()
            .load_from_str(
                r#"{"extends": "plugin:react/recommended"}"#,
                ConfigFormat::Json,
                Path::new("."),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Preset);
    }

    #[test]
    fn test_registered_preset_resolves() {
        let mut presets = PresetRegistry::builtin();
        presets.register(Preset::new(
            "plugin:house/style",
            IndexMap::from([(
                "max-len".to_string(),
                crate::config::RuleEntry::with_parameters(RuleSeverity::Warn, vec![json!(100)]),
            )]),
        ));

        let doc = ConfigLoader::with_presets(presets)
            .load_from_str(
                r#"{"extends": ["eslint:recommended", "plugin:house/style"]}"#,
                ConfigFormat::Json,
                Path::new("."),
            )
            .unwrap();

        let max_len = doc.resolve("max-len");
        assert_eq!(max_len.severity, RuleSeverity::Warn);
        assert_eq!(max_len.origin, RuleOrigin::Base("plugin:house/style".into()));
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let err = ConfigLoader::new()
            .load_from_str(r#"{"env": {"deno": true}}"#, ConfigFormat::Json, Path::new("."))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Environment);
    }

    #[test]
    fn test_empty_rule_name_rejected() {
        let err = ConfigLoader::new()
            .load_from_str(r#"{"rules": {"": "error"}}"#, ConfigFormat::Json, Path::new("."))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Rule);
    }

    #[test]
    fn test_invalid_severity_is_parse_error() {
        let err = ConfigLoader::new()
            .load_from_str(r#"{"rules": {"semi": "fatal"}}"#, ConfigFormat::Json, Path::new("."))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(temp_dir.path(), ".eslintrc.json", "{ invalid json }");
        let err = ConfigLoader::new().load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::new().load_from_file(Path::new("nonexistent.json"));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Io);
    }

    #[test]
    fn test_auto_discover_from_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();
        create_temp_config(temp_dir.path(), ".eslintrc.yml", "rules:\n  semi: error\n");

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".eslintrc.yml");
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), ".eslintrc", "{}");
        create_temp_config(temp_dir.path(), ".eslintrc.yaml", "rules: {}\n");
        create_temp_config(temp_dir.path(), ".eslintrc.json", "{}");

        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".eslintrc.json");
    }

    #[test]
    fn test_load_with_custom_path_missing() {
        let err = ConfigLoader::new()
            .load(Some(Path::new("does/not/exist.json")), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_load_discovers_from_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("lib");
        fs::create_dir_all(&nested).unwrap();
        create_temp_config(temp_dir.path(), ".eslintrc.json", LITERAL_EXAMPLE);

        let doc = ConfigLoader::new().load(None, Some(&nested)).unwrap();
        assert_eq!(doc.resolve("semi").parameters, vec![json!("always")]);
    }
}
