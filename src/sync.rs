//! Thin orchestration over parse → merge → translate → render → write.
//!
//! One pass, single-threaded: each document's source file is parsed once,
//! then every resolved target language is brought up to date. A document
//! whose source vanished (or extracts no keys) has its target files deleted
//! instead. Failures on one (file, language) pair never abort the run; a
//! render invariant violation does.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;

use crate::{
    config::Config,
    core::{Key, ParsedScript, merge, parse_script},
    encoding,
    languages::{LanguageDescriptor, LanguageRegistry},
    provider::{self, TranslationProvider},
    report,
};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub files_written: usize,
    pub files_deleted: usize,
    /// Recoverable parse warnings across every file read during the run.
    pub warning_count: usize,
    pub write_failures: usize,
    pub provider_failures: usize,
    /// True when the run only reported what it would have done.
    pub dry_run: bool,
}

impl RunResult {
    pub fn failure_count(&self) -> usize {
        self.write_failures + self.provider_failures
    }
}

/// Filesystem and behavior options resolved from config plus CLI overrides.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub root: PathBuf,
    pub import_root: Option<PathBuf>,
    pub files: Vec<String>,
    pub dry_run: bool,
    pub verbose: bool,
}

/// Path of one document's script file for one language:
/// `<root>/<LANG>/<file>_<LANG>.txt`.
pub fn script_path(root: &Path, language_id: &str, file: &str) -> PathBuf {
    root.join(language_id)
        .join(format!("{file}_{language_id}.txt"))
}

pub struct Synchronizer {
    options: SyncOptions,
    source: LanguageDescriptor,
    languages: Vec<LanguageDescriptor>,
    provider: Box<dyn TranslationProvider>,
    result: RunResult,
}

impl Synchronizer {
    pub fn new(config: &Config, registry: &LanguageRegistry, options: SyncOptions) -> Result<Self> {
        let source = registry
            .get(&config.source_language)
            .with_context(|| format!("unknown source language '{}'", config.source_language))?
            .clone();
        let provider = provider::create(&config.provider)?;
        let languages = resolve_languages(config, registry, &options)?;
        let result = RunResult {
            dry_run: options.dry_run,
            ..RunResult::default()
        };
        Ok(Self {
            options,
            source,
            languages,
            provider,
            result,
        })
    }

    /// Swap the translation backend; used by tests and library callers.
    pub fn with_provider(mut self, provider: Box<dyn TranslationProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn run(mut self) -> Result<RunResult> {
        let source_dir = self.options.root.join(&self.source.id);
        if !source_dir.is_dir() {
            bail!("missing source directory: {}", source_dir.display());
        }

        let files = self.options.files.clone();
        let languages = self.languages.clone();
        for file in &files {
            let parsed = self.parse_source(file)?;
            for language in &languages {
                match &parsed {
                    Some(parsed) if !parsed.entries.is_empty() => {
                        self.sync_pair(parsed, language, file)?;
                    }
                    // Source gone (or key-less): targets are stale.
                    _ => self.delete_target(language, file)?,
                }
            }
        }

        Ok(self.result)
    }

    fn parse_source(&mut self, file: &str) -> Result<Option<ParsedScript>> {
        let path = script_path(&self.options.root, &self.source.id, file);
        if !path.is_file() {
            return Ok(None);
        }
        let content = encoding::read_to_string(&path, &self.source.charset)?;
        let parsed = parse_script(&content, &self.source.id);
        self.report_warnings(&path, &parsed);
        Ok(Some(parsed))
    }

    fn sync_pair(
        &mut self,
        parsed: &ParsedScript,
        language: &LanguageDescriptor,
        file: &str,
    ) -> Result<()> {
        if self.options.verbose {
            report::checking(file, &language.id, &language.text);
        }

        let target = script_path(&self.options.root, &language.id, file);
        let existing = self.load_entries(&target, language)?;
        let overlay = match self.options.import_root.clone() {
            Some(root) => {
                self.load_entries(&script_path(&root, &language.id, file), language)?
            }
            None => None,
        };

        let outcome = merge(
            &parsed.entries,
            &language.id,
            existing.as_ref(),
            overlay.as_ref(),
        );
        let mut map = outcome.map;

        if !outcome.missing.is_empty() {
            if self.options.verbose {
                report::untranslated(outcome.missing.len(), &language.id, file);
            }
            self.provider.set_target(language);
            let shielded: Vec<String> = outcome
                .missing
                .iter()
                .map(|(_, text)| provider::shield(text))
                .collect();
            match self.provider.translate_batch(&shielded) {
                Ok(translations) if translations.len() == shielded.len() => {
                    for ((key, _), translated) in outcome.missing.into_iter().zip(translations) {
                        map.insert(key, provider::unshield(&translated));
                    }
                }
                Ok(translations) => {
                    let error = anyhow::anyhow!(
                        "expected {} translations, got {}",
                        shielded.len(),
                        translations.len()
                    );
                    report::provider_failure(&language.id, file, &error);
                    self.result.provider_failures += 1;
                    return Ok(());
                }
                Err(error) => {
                    report::provider_failure(&language.id, file, &error);
                    self.result.provider_failures += 1;
                    return Ok(());
                }
            }
        }

        // A miss here means the merge step failed its coverage guarantee;
        // that must surface, so no per-target recovery.
        let text = parsed.template.render(&map)?;

        if self.options.dry_run {
            self.result.files_written += 1;
            return Ok(());
        }
        match encoding::write_string(&target, &language.charset, &text) {
            Ok(()) => self.result.files_written += 1,
            Err(error) => {
                report::write_failure(&language.id, file, &error, &text);
                self.result.write_failures += 1;
            }
        }
        Ok(())
    }

    fn load_entries(
        &mut self,
        path: &Path,
        language: &LanguageDescriptor,
    ) -> Result<Option<IndexMap<Key, String>>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = encoding::read_to_string(path, &language.charset)?;
        let parsed = parse_script(&content, &language.id);
        self.report_warnings(path, &parsed);
        Ok(Some(parsed.entries))
    }

    fn delete_target(&mut self, language: &LanguageDescriptor, file: &str) -> Result<()> {
        let target = script_path(&self.options.root, &language.id, file);
        if target.is_file() {
            if !self.options.dry_run {
                fs::remove_file(&target)
                    .with_context(|| format!("failed to delete {}", target.display()))?;
            }
            self.result.files_deleted += 1;
        }
        Ok(())
    }

    fn report_warnings(&mut self, path: &Path, parsed: &ParsedScript) {
        for warning in &parsed.warnings {
            report::parse_warning(path, warning);
        }
        self.result.warning_count += parsed.warnings.len();
    }
}

/// Resolve the final target-language set: the configured translate set
/// (default: every registry language) minus excludes minus the source
/// language. Unknown ids are skipped with a warning. A language without an
/// existing directory is kept only if the create set allows its directory
/// to be created.
fn resolve_languages(
    config: &Config,
    registry: &LanguageRegistry,
    options: &SyncOptions,
) -> Result<Vec<LanguageDescriptor>> {
    let ids: Vec<String> = if config.languages_translate.is_empty() {
        registry.ids().map(str::to_string).collect()
    } else {
        config.languages_translate.clone()
    };

    let mut languages = Vec::new();
    for id in ids {
        if id == config.source_language || config.languages_exclude.contains(&id) {
            continue;
        }
        let Some(descriptor) = registry.get(&id) else {
            report::unknown_language(&id);
            continue;
        };
        let dir = options.root.join(&id);
        if dir.is_dir() {
            languages.push(descriptor.clone());
            continue;
        }
        let create_allowed =
            config.languages_create.is_empty() || config.languages_create.contains(&id);
        if create_allowed {
            if !options.dry_run {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            languages.push(descriptor.clone());
        }
    }
    Ok(languages)
}
