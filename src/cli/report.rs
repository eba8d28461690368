//! Summary printing for command outcomes.
//!
//! Separate from dispatch so the library surface stays free of printing
//! side effects outside the reporting modules.

use colored::Colorize;

use super::run::CommandOutcome;
use crate::config::CONFIG_FILE_NAME;
use crate::languages::LanguageRegistry;
use crate::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::sync::RunResult;

pub fn print(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Sync(result) => print_sync(result),
        CommandOutcome::Languages(registry) => print_languages(registry),
        CommandOutcome::Init => print_init(),
    }
}

fn print_sync(result: &RunResult) {
    if result.dry_run {
        println!(
            "{} {} file(s) would be written, {} deleted.",
            "Would sync".yellow().bold(),
            result.files_written,
            result.files_deleted
        );
        println!("Run without {} to apply.", "--dry-run".cyan());
    } else if result.failure_count() == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Synchronized: {} file(s) written, {} deleted",
                result.files_written, result.files_deleted
            )
            .green()
        );
    } else {
        println!(
            "{} {} write failure(s), {} provider failure(s) ({} file(s) written, {} deleted)",
            FAILURE_MARK.red(),
            result.write_failures,
            result.provider_failures,
            result.files_written,
            result.files_deleted
        );
    }

    if result.warning_count > 0 {
        println!(
            "{} {} translation warning(s)",
            "warning:".bold().yellow(),
            result.warning_count
        );
    }
}

fn print_languages(registry: &LanguageRegistry) {
    println!(
        "{:<6} {:<20} {:<14} {}",
        "id".bold(),
        "name".bold(),
        "charset".bold(),
        "provider code".bold()
    );
    for language in registry.iter() {
        println!(
            "{:<6} {:<20} {:<14} {}",
            language.id, language.text, language.charset, language.tr_code
        );
    }
}

fn print_init() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}
