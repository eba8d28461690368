use std::fmt;

/// Structural separator found in raw key tokens.
const SEPARATOR: char = '.';

/// Replacement for the separator. Keys name template placeholders, so they
/// must not contain characters that alias placeholder syntax downstream.
const SUBSTITUTE: &str = "-";

/// Reserved key bound to the target language id in every translation map.
const LANGUAGE: &str = "language";

/// A normalized translation key, unique within one file's extracted mapping.
///
/// Keys are only created through [`Key::normalize`] (or [`Key::language`]),
/// so two `Key` values that compare equal went through the same
/// normalization regardless of which file they came from. Raw keys that
/// normalize identically are not distinguished; within one parse the later
/// entry overwrites the earlier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    /// Normalize a raw key token: trim surrounding whitespace, then replace
    /// every structural separator with the substitute character.
    ///
    /// Pure and total; there is no failure mode. Applied identically to keys
    /// read from source files, target files, and overlay files.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().replace(SEPARATOR, SUBSTITUTE))
    }

    /// The reserved key carrying the target language id.
    pub fn language() -> Self {
        Self(LANGUAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
