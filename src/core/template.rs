use anyhow::{Result, bail};

use super::key::Key;
use super::merge::TranslationMap;

/// One piece of a decomposed script file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text reproduced exactly at render time. Stored with literal braces
    /// doubled so substitution can never misread them as placeholder syntax.
    Verbatim(String),
    /// A named slot filled from the translation map at render time.
    Placeholder(Key),
}

/// Reusable skeleton of a script file: verbatim fragments interspersed with
/// named placeholders standing in for the translatable literals.
///
/// Rendering with a map that covers every referenced key reproduces the
/// non-placeholder spans byte-for-byte, line terminators included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    fragments: Vec<Fragment>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text, escaping literal braces. Consecutive verbatim
    /// fragments are coalesced.
    pub fn push_verbatim(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let escaped = escape_braces(raw);
        if let Some(Fragment::Verbatim(prev)) = self.fragments.last_mut() {
            prev.push_str(&escaped);
        } else {
            self.fragments.push(Fragment::Verbatim(escaped));
        }
    }

    pub fn push_placeholder(&mut self, key: Key) {
        self.fragments.push(Fragment::Placeholder(key));
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Keys referenced by placeholders, in order of appearance.
    pub fn placeholder_keys(&self) -> impl Iterator<Item = &Key> {
        self.fragments.iter().filter_map(|fragment| match fragment {
            Fragment::Placeholder(key) => Some(key),
            Fragment::Verbatim(_) => None,
        })
    }

    /// Substitute a completed translation map into the template.
    ///
    /// The merge step guarantees the map covers every placeholder key, so a
    /// miss here is a bug in merging or template construction, not a user
    /// error; it surfaces as an error rather than being papered over.
    pub fn render(&self, map: &TranslationMap) -> Result<String> {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Verbatim(text) => out.push_str(&unescape_braces(text)),
                Fragment::Placeholder(key) => match map.get(key) {
                    Some(text) => out.push_str(text),
                    None => bail!(
                        "no value for placeholder '{key}': the merged map must cover every key"
                    ),
                },
            }
        }
        Ok(out)
    }
}

fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

fn unescape_braces(text: &str) -> String {
    text.replace("{{", "{").replace("}}", "}")
}
