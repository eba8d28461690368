//! Reversible shielding of markup tokens around provider calls.
//!
//! Script literals carry angle-tags (`<LINE>`, `<RGB:1,0,0>`) and ordinal
//! placeholders (`%1`) that machine translation tends to mangle. Wrapping
//! them in brace markers keeps backends from touching them; the wrapping is
//! undone before the text ever reaches a script file. Shielded output needs
//! human review either way.

/// Wrap markup tokens so a translation backend leaves them alone.
pub fn shield(text: &str) -> String {
    text.replace('<', "<{").replace('>', "}>").replace("%1", "{%1}")
}

/// Undo [`shield`]. `unshield(shield(t)) == t` for any input.
pub fn unshield(text: &str) -> String {
    text.replace("{%1}", "%1").replace("<{", "<").replace("}>", ">")
}
