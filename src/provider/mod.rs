//! The translation-provider seam.
//!
//! The synchronizer only ever talks to [`TranslationProvider`]; backends are
//! swappable per run. The shipped `copy` provider fills untranslated entries
//! with the source text so files stay complete offline; a real machine
//! translation backend plugs in behind the same trait.

mod markup;

pub use markup::{shield, unshield};

use anyhow::{Result, bail};

use crate::languages::LanguageDescriptor;

/// External translation backend for one run.
///
/// The target language is a mutable selector set once before each call
/// batch. Failures are fatal for the current (file, language) pair only;
/// the caller never retries.
pub trait TranslationProvider: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Select the language for subsequent calls.
    fn set_target(&mut self, language: &LanguageDescriptor);

    fn translate(&mut self, text: &str) -> Result<String>;

    /// Translate a batch, returning one result per input in the same order.
    fn translate_batch(&mut self, texts: &[String]) -> Result<Vec<String>> {
        texts.iter().map(|text| self.translate(text)).collect()
    }
}

/// Fills untranslated entries with the source text unchanged.
#[derive(Debug, Default)]
pub struct CopyProvider;

impl TranslationProvider for CopyProvider {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn set_target(&mut self, _language: &LanguageDescriptor) {}

    fn translate(&mut self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn translate_batch(&mut self, texts: &[String]) -> Result<Vec<String>> {
        Ok(texts.to_vec())
    }
}

/// Create a provider by its configured name.
pub fn create(name: &str) -> Result<Box<dyn TranslationProvider>> {
    match name {
        "copy" => Ok(Box::new(CopyProvider)),
        _ => bail!("unknown translation provider '{name}' (available: copy)"),
    }
}
