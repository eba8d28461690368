//! Locsync - keeps translated game script files in sync with their source.
//!
//! Locsync is a CLI tool and library for synchronizing the per-language
//! script files of a game mod's `Translate` directory: it parses the
//! source-language files into reusable templates, reuses every translation
//! the target files already carry, fills the rest through a pluggable
//! translation provider, and writes targets back byte-compatible with the
//! originals.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, templating, and merge engine
//! - `encoding`: Charset-aware file reading and writing
//! - `languages`: Language descriptors and the registry
//! - `provider`: Translation backend seam and markup shielding
//! - `report`: Warning and progress output
//! - `sync`: Orchestration of a synchronization run

pub mod cli;
pub mod config;
pub mod core;
pub mod encoding;
pub mod languages;
pub mod provider;
pub mod report;
pub mod sync;
