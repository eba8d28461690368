//! Command dispatch: resolve configuration, apply CLI overrides, and hand
//! off to the synchronizer.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::{Arguments, Command, LanguagesCommand, SyncCommand};
use crate::{
    config::{self, CONFIG_FILE_NAME, ConfigLoadResult, LANGUAGES_FILE_NAME},
    languages::LanguageRegistry,
    sync::{RunResult, SyncOptions, Synchronizer},
};

/// What a command produced, for reporting and exit-code mapping.
pub enum CommandOutcome {
    Sync(RunResult),
    Languages(LanguageRegistry),
    Init,
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandOutcome> {
    match command {
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandOutcome::Init)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn sync(cmd: SyncCommand) -> Result<CommandOutcome> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    let ConfigLoadResult { mut config, path, .. } = config::load_config(&cwd)?;
    let registry = load_registry(path.as_deref(), &cwd)?;

    // CLI overrides beat the config file; the positional path beats both.
    let args = cmd.args;
    if let Some(source_language) = args.common.source_language {
        config.source_language = source_language;
    }
    if let Some(provider) = args.provider {
        config.provider = provider;
    }
    if !args.languages.is_empty() {
        config.languages_translate = args.languages;
    }
    if !args.files.is_empty() {
        config.files = args.files;
    }
    if let Some(import_root) = args.import_root {
        config.import_root = Some(import_root.to_string_lossy().into_owned());
    }

    let root = cmd
        .path
        .or(args.common.translate_root)
        .unwrap_or_else(|| PathBuf::from(&config.translate_root));

    let options = SyncOptions {
        root,
        import_root: config.import_root.as_ref().map(PathBuf::from),
        files: config.files.clone(),
        dry_run: args.dry_run,
        verbose: args.common.verbose,
    };

    let result = Synchronizer::new(&config, &registry, options)?.run()?;
    Ok(CommandOutcome::Sync(result))
}

fn languages(_cmd: LanguagesCommand) -> Result<CommandOutcome> {
    let cwd = env::current_dir().context("failed to resolve current directory")?;
    let ConfigLoadResult { path, .. } = config::load_config(&cwd)?;
    let registry = load_registry(path.as_deref(), &cwd)?;
    Ok(CommandOutcome::Languages(registry))
}

/// Use `languages.json` next to the config file (or in the working
/// directory) when present; fall back to the built-in table.
fn load_registry(config_path: Option<&Path>, cwd: &Path) -> Result<LanguageRegistry> {
    let dir = config_path.and_then(Path::parent).unwrap_or(cwd);
    let override_path = dir.join(LANGUAGES_FILE_NAME);
    if override_path.is_file() {
        return LanguageRegistry::from_file(&override_path);
    }
    Ok(LanguageRegistry::builtin())
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, config::default_config_json()?)?;
    Ok(())
}
