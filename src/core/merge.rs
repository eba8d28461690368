use indexmap::IndexMap;

use super::key::Key;

/// Completed key → text mapping for one (file, language) pair.
///
/// Always carries the reserved `language` key bound to the target language
/// id, so the header placeholder renders without special casing. Entries keep
/// insertion order; iteration and the missing-key list are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationMap {
    entries: IndexMap<Key, String>,
}

impl TranslationMap {
    pub fn new(language_id: &str) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(Key::language(), language_id.to_string());
        Self { entries }
    }

    pub fn insert(&mut self, key: Key, text: String) {
        self.entries.insert(key, text);
    }

    pub fn get(&self, key: &Key) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &str)> {
        self.entries.iter().map(|(key, text)| (key, text.as_str()))
    }
}

/// Result of layering texts over the source key set: the (possibly still
/// incomplete) map, and the keys that found no text anywhere, in source
/// order, paired with the source text the provider should translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub map: TranslationMap,
    pub missing: Vec<(Key, String)>,
}

/// Layer existing-target and overlay texts over the source key set.
///
/// Coverage is exactly the source keys plus `language`: keys present only in
/// the target or overlay are dropped, which is how stale keys get pruned
/// when the source changes. Per key, the overlay wins over the existing
/// target text; keys with neither join the missing list for the provider to
/// fill before rendering.
pub fn merge(
    source: &IndexMap<Key, String>,
    language_id: &str,
    existing: Option<&IndexMap<Key, String>>,
    overlay: Option<&IndexMap<Key, String>>,
) -> MergeOutcome {
    let mut map = TranslationMap::new(language_id);
    let mut missing = Vec::new();

    for (key, source_text) in source {
        let found = overlay
            .and_then(|entries| entries.get(key))
            .or_else(|| existing.and_then(|entries| entries.get(key)));
        match found {
            Some(text) => map.insert(key.clone(), text.clone()),
            None => missing.push((key.clone(), source_text.clone())),
        }
    }

    MergeOutcome { map, missing }
}
