//! Line-oriented parser for script files.
//!
//! Decomposes a file into a reusable [`Template`] plus the mapping of
//! normalized keys to their quoted literals. Classification is a per-line
//! state machine carrying a single `active` flag across lines; lines are
//! consumed as terminator-inclusive slices and never mutated, which keeps
//! the byte-for-byte round-trip auditable.

use indexmap::IndexMap;

use super::key::Key;
use super::template::Template;

/// Comment marker: a line containing it anywhere is copied through untouched.
pub const COMMENT_MARKER: &str = "--";

/// Trailing marker signalling that a line continues an ongoing block.
pub const CONTINUATION_MARKER: &str = "..";

/// A recoverable problem found while parsing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number.
    pub line_no: usize,
    /// The offending line, terminator stripped.
    pub line: String,
    pub message: String,
}

/// Parser output for one file: the template, the extracted key/text pairs in
/// file order, and any recoverable warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScript {
    pub template: Template,
    pub entries: IndexMap<Key, String>,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Assignment,
    Skip,
    Continuation,
}

/// Byte offsets of the structural characters of an assignment line. All
/// three are ASCII, so slicing at them is always char-boundary safe.
struct AssignmentSpans {
    eq: usize,
    open: usize,
    close: usize,
}

/// Decompose `content` into a template and the extracted literal mapping.
///
/// `language_id` is the language token embedded in the file's first line; it
/// is replaced by the reserved `language` placeholder so one template serves
/// any target language. Duplicate keys overwrite earlier entries.
pub fn parse_script(content: &str, language_id: &str) -> ParsedScript {
    let mut parsed = ParsedScript::default();
    let mut lines = content.split_inclusive('\n');

    // Line 1 carries the language token and is never an assignment.
    if let Some(header) = lines.next() {
        push_header(&mut parsed.template, header, language_id);
    }

    let mut active = false;
    for (index, line) in lines.enumerate() {
        let line_no = index + 2;
        let trimmed = line.trim();

        let class = match assignment_spans(line) {
            Some(Ok(spans)) => {
                let key = Key::normalize(&line[..spans.eq]);
                let literal = &line[spans.open + 1..spans.close];
                parsed.template.push_verbatim(&line[..=spans.open]);
                parsed.template.push_placeholder(key.clone());
                parsed.template.push_verbatim(&line[spans.close..]);
                parsed.entries.insert(key, literal.to_string());
                LineClass::Assignment
            }
            Some(Err(message)) => {
                parsed.warnings.push(ParseWarning {
                    line_no,
                    line: line.trim_end_matches(['\n', '\r']).to_string(),
                    message,
                });
                parsed.template.push_verbatim(line);
                LineClass::Skip
            }
            None => {
                parsed.template.push_verbatim(line);
                if line.contains(COMMENT_MARKER)
                    || trimmed.is_empty()
                    || (trimmed.ends_with(CONTINUATION_MARKER) && !active)
                {
                    LineClass::Skip
                } else {
                    LineClass::Continuation
                }
            }
        };

        // A non-skip line keeps the block open only while it still ends with
        // the continuation marker; anything else closes it out.
        active = class != LineClass::Skip && trimmed.ends_with(CONTINUATION_MARKER);
    }

    parsed
}

/// Locate the `=` and the quote pair of an assignment-looking line.
///
/// `None` means the line does not look like an assignment at all;
/// `Some(Err(_))` means it does but its quoting is malformed.
fn assignment_spans(line: &str) -> Option<Result<AssignmentSpans, String>> {
    if !(line.contains('=') && line.contains('"')) {
        return None;
    }
    let eq = line.find('=')?;
    let close = line.rfind('"')?;
    let Some(open) = line[eq + 1..].find('"').map(|at| eq + 1 + at) else {
        return Some(Err("no '\"' after '=' in assignment".to_string()));
    };
    if open == close {
        return Some(Err("missing one '\"' in assignment".to_string()));
    }
    Some(Ok(AssignmentSpans { eq, open, close }))
}

/// Copy the first line into the template, replacing every occurrence of the
/// language token with the reserved `language` placeholder.
fn push_header(template: &mut Template, header: &str, language_id: &str) {
    if language_id.is_empty() {
        template.push_verbatim(header);
        return;
    }
    let mut cursor = 0;
    for (at, _) in header.match_indices(language_id) {
        template.push_verbatim(&header[cursor..at]);
        template.push_placeholder(Key::language());
        cursor = at + language_id.len();
    }
    template.push_verbatim(&header[cursor..]);
}
