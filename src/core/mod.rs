//! Core engine: key normalization, the line-oriented parser, template
//! rendering, and the merge engine. Everything here is pure — no file I/O,
//! no printing — so the round-trip and merge invariants are testable in
//! isolation.

mod key;
mod merge;
mod script;
mod template;

pub use key::Key;
pub use merge::{MergeOutcome, TranslationMap, merge};
pub use script::{COMMENT_MARKER, CONTINUATION_MARKER, ParseWarning, ParsedScript, parse_script};
pub use template::{Fragment, Template};
