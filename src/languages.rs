//! Language descriptors and the registry that holds them.
//!
//! The registry is an explicit object built once at startup and passed by
//! reference to whatever needs language metadata; there is no process-wide
//! table. The built-in set can be replaced wholesale by a `languages.json`
//! file living next to the configuration file.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata for one language, immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    /// Directory and file-suffix identifier, e.g. "DE".
    pub id: String,
    /// Human-readable name, e.g. "Deutsch".
    pub text: String,
    /// Charset label used to read and write this language's files.
    pub charset: String,
    /// Language code understood by the translation provider, e.g. "de".
    pub tr_code: String,
}

/// id, text, charset, provider code of the stock language set.
const BUILTIN: &[(&str, &str, &str, &str)] = &[
    ("AR", "Español (AR)", "windows-1252", "es"),
    ("CA", "Català", "ISO-8859-15", "ca"),
    ("CH", "繁體中文", "UTF-8", "zh-TW"),
    ("CN", "简体中文", "UTF-8", "zh-CN"),
    ("CS", "Čeština", "windows-1250", "cs"),
    ("DA", "Dansk", "windows-1252", "da"),
    ("DE", "Deutsch", "windows-1252", "de"),
    ("EN", "English", "UTF-8", "en"),
    ("ES", "Español", "windows-1252", "es"),
    ("FI", "Suomi", "windows-1252", "fi"),
    ("FR", "Français", "windows-1252", "fr"),
    ("HU", "Magyar", "windows-1250", "hu"),
    ("ID", "Bahasa Indonesia", "UTF-8", "id"),
    ("IT", "Italiano", "windows-1252", "it"),
    ("JP", "日本語", "UTF-8", "ja"),
    ("KO", "한국어", "EUC-KR", "ko"),
    ("NL", "Nederlands", "windows-1252", "nl"),
    ("NO", "Norsk", "windows-1252", "no"),
    ("PH", "Tagalog", "UTF-8", "tl"),
    ("PL", "Polski", "windows-1250", "pl"),
    ("PT", "Português", "windows-1252", "pt"),
    ("PTBR", "Português (BR)", "windows-1252", "pt"),
    ("RO", "Română", "UTF-8", "ro"),
    ("RU", "Русский", "windows-1251", "ru"),
    ("TH", "ภาษาไทย", "UTF-8", "th"),
    ("TR", "Türkçe", "windows-1254", "tr"),
    ("UA", "Українська", "windows-1251", "uk"),
];

/// Ordered table of known languages, keyed by id.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: IndexMap<String, LanguageDescriptor>,
}

impl LanguageRegistry {
    /// The stock language set.
    pub fn builtin() -> Self {
        let languages = BUILTIN
            .iter()
            .map(|&(id, text, charset, tr_code)| {
                (
                    id.to_string(),
                    LanguageDescriptor {
                        id: id.to_string(),
                        text: text.to_string(),
                        charset: charset.to_string(),
                        tr_code: tr_code.to_string(),
                    },
                )
            })
            .collect();
        Self { languages }
    }

    /// Load a registry from a JSON array of descriptors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read language file: {}", path.display()))?;
        let list: Vec<LanguageDescriptor> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse language file: {}", path.display()))?;
        if list.is_empty() {
            bail!("language file {} defines no languages", path.display());
        }
        let languages = list
            .into_iter()
            .map(|descriptor| (descriptor.id.clone(), descriptor))
            .collect();
        Ok(Self { languages })
    }

    pub fn get(&self, id: &str) -> Option<&LanguageDescriptor> {
        self.languages.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.languages.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.values()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
