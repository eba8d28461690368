use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

/// Optional registry override, read from the directory the config lives in.
pub const LANGUAGES_FILE_NAME: &str = "languages.json";

/// Stock document list synchronized when `files` is not configured.
pub const DEFAULT_FILES: &[&str] = &[
    "Challenge",
    "ContextMenu",
    "DynamicRadio",
    "EvolvedRecipeName",
    "Farming",
    "GameSound",
    "IG_UI",
    "ItemName",
    "Items",
    "MakeUp",
    "Moodles",
    "Moveables",
    "MultiStageBuild",
    "Recipes",
    "Recorded_Media",
    "Sandbox",
    "Stash",
    "SurvivalGuide",
    "Tooltip",
    "UI",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root directory holding one subdirectory per language.
    #[serde(default = "default_translate_root")]
    pub translate_root: String,

    /// Language the source files are written in.
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Document names to synchronize (file `<name>_<LANG>.txt` per language).
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Languages to synchronize; empty means every known language.
    #[serde(default)]
    pub languages_translate: Vec<String>,

    /// Languages never synchronized (the source language always is).
    #[serde(default)]
    pub languages_exclude: Vec<String>,

    /// Languages whose missing directory may be created; empty means all
    /// resolved languages.
    #[serde(default)]
    pub languages_create: Vec<String>,

    /// Optional overlay directory with pre-translated files, consulted
    /// before the provider. Same layout as `translateRoot`, never written.
    #[serde(default)]
    pub import_root: Option<String>,

    /// Translation provider filling entries no layer could.
    #[serde(default = "default_provider")]
    pub provider: String,
}

fn default_translate_root() -> String {
    "./Translate".to_string()
}

fn default_source_language() -> String {
    "EN".to_string()
}

fn default_files() -> Vec<String> {
    DEFAULT_FILES.iter().map(|s| s.to_string()).collect()
}

fn default_provider() -> String {
    "copy".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_root: default_translate_root(),
            source_language: default_source_language(),
            files: default_files(),
            languages_translate: Vec::new(),
            languages_exclude: Vec::new(),
            languages_create: Vec::new(),
            import_root: None,
            provider: default_provider(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.source_language.trim().is_empty() {
            bail!("'sourceLanguage' must not be empty");
        }
        crate::provider::create(&self.provider)
            .with_context(|| format!("invalid 'provider': \"{}\"", self.provider))?;
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Path of the loaded config file, if any.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            path: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.translate_root, "./Translate");
        assert_eq!(config.source_language, "EN");
        assert_eq!(config.files.len(), DEFAULT_FILES.len());
        assert!(config.languages_translate.is_empty());
        assert_eq!(config.provider, "copy");
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "translateRoot": "./mods/Translate",
              "sourceLanguage": "EN",
              "languagesTranslate": ["DE", "FR"],
              "files": ["Items", "Recipes"]
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.translate_root, "./mods/Translate");
        assert_eq!(config.languages_translate, vec!["DE", "FR"]);
        assert_eq!(config.files, vec!["Items", "Recipes"]);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "languagesExclude": ["KO"] }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.languages_exclude, vec!["KO"]);
        assert_eq!(config.source_language, "EN");
        assert_eq!(config.files, default_files());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("mods").join("mymod");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let found = find_config_file(dir.path());
        assert!(found.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "sourceLanguage": "FR" }"#).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.source_language, "FR");
        assert_eq!(result.path, Some(config_path));
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert!(result.path.is_none());
        assert_eq!(result.config.source_language, "EN");
    }

    #[test]
    fn test_validate_unknown_provider_fails() {
        let config = Config {
            provider: "babelfish".to_string(),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("babelfish"));
    }

    #[test]
    fn test_validate_empty_source_language_fails() {
        let config = Config {
            source_language: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_with_invalid_provider_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "provider": "none-such" }"#).unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("translateRoot"));
        assert!(json.contains("sourceLanguage"));
        assert!(!json.contains("translate_root"));
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.source_language, "EN");
    }
}
