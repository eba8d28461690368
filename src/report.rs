//! Warning and progress output.
//!
//! This module is separate from the core engine so the parser and merge
//! logic stay usable as a library without printing side effects. Warnings
//! and failures go to stderr; progress and summaries go to stdout.

use std::path::Path;

use colored::Colorize;

use crate::core::ParseWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print one recoverable parse warning, cargo-style.
pub fn parse_warning(path: &Path, warning: &ParseWarning) {
    eprintln!(
        "{}: {}  {}",
        "warning".bold().yellow(),
        warning.message,
        "malformed-literal".dimmed().cyan()
    );
    eprintln!("  {} {}:{}", "-->".blue(), path.display(), warning.line_no);
    eprintln!("     {}", "|".blue());
    eprintln!(
        " {:>3} {} {}",
        warning.line_no.to_string().blue(),
        "|".blue(),
        warning.line
    );
    eprintln!("     {}", "|".blue());
}

/// A language id that appears in the configuration but not in the registry.
pub fn unknown_language(id: &str) {
    eprintln!(
        "{}: unknown language '{}' skipped",
        "warning".bold().yellow(),
        id
    );
}

/// Per-target write failure. The run continues, so print enough context to
/// diagnose later, including the text that failed to land on disk.
pub fn write_failure(language_id: &str, file: &str, error: &anyhow::Error, text: &str) {
    eprintln!(
        "{}: failed to write {} {}: {:#}",
        "error".bold().red(),
        language_id,
        file,
        error
    );
    eprintln!("{}", text);
}

/// Provider failure for one (file, language) pair; the pair is skipped.
pub fn provider_failure(language_id: &str, file: &str, error: &anyhow::Error) {
    eprintln!(
        "{}: translation provider failed for {} {}: {:#}",
        "error".bold().red(),
        language_id,
        file,
        error
    );
}

/// Progress line before a (file, language) pair is processed.
pub fn checking(file: &str, language_id: &str, language_text: &str) {
    eprintln!("Checking {} for {} ({})", file, language_id, language_text);
}

/// How many entries still need the provider for this pair.
pub fn untranslated(count: usize, language_id: &str, file: &str) {
    eprintln!(" - {} untranslated entries for {} {}", count, language_id, file);
}
