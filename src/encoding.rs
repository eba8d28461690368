//! Encoding-aware file I/O.
//!
//! Script files are stored in per-language legacy encodings, so reads and
//! writes go through `encoding_rs` with replacement semantics in both
//! directions: undecodable bytes become replacement characters, and
//! characters the target charset cannot represent are substituted rather
//! than failing the whole file.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use encoding_rs::Encoding;

/// Resolve a charset label to an encoding.
///
/// Accepts WHATWG labels directly plus the java-style `CpNNNN` aliases that
/// language metadata commonly carries for the CJK code pages.
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
        return Ok(encoding);
    }
    let lower = label.to_ascii_lowercase();
    if let Some(digits) = lower.strip_prefix("cp") {
        let alias = match digits {
            "949" => "euc-kr".to_string(),
            "932" => "shift_jis".to_string(),
            "936" => "gbk".to_string(),
            _ => format!("windows-{digits}"),
        };
        if let Some(encoding) = Encoding::for_label(alias.as_bytes()) {
            return Ok(encoding);
        }
    }
    Err(anyhow!("unknown charset label '{label}'"))
}

/// Read a whole file, decoding with the given charset.
pub fn read_to_string(path: &Path, charset: &str) -> Result<String> {
    let encoding = resolve(charset)?;
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let (text, _, _) = encoding.decode(&bytes);
    Ok(text.into_owned())
}

/// Write text to a file, encoding with the given charset. The whole output
/// is encoded into one buffer before anything touches the filesystem.
pub fn write_string(path: &Path, charset: &str, text: &str) -> Result<()> {
    let encoding = resolve(charset)?;
    let (bytes, _, _) = encoding.encode(text);
    fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_whatwg_labels() {
        assert_eq!(resolve("UTF-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(resolve("windows-1252").unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(resolve("ISO-8859-15").unwrap(), encoding_rs::ISO_8859_15);
    }

    #[test]
    fn test_resolve_java_style_aliases() {
        assert_eq!(resolve("Cp1250").unwrap(), encoding_rs::WINDOWS_1250);
        assert_eq!(resolve("Cp1252").unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(resolve("Cp949").unwrap(), encoding_rs::EUC_KR);
        assert_eq!(resolve("Cp932").unwrap(), encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn test_resolve_unknown_label_fails() {
        let err = resolve("Cp99999").unwrap_err();
        assert!(err.to_string().contains("Cp99999"));
        assert!(resolve("not-a-charset").is_err());
    }

    #[test]
    fn test_round_trip_windows_1252() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("FR.txt");
        let text = "Déjà vu — œuvre\n";

        write_string(&path, "windows-1252", text).unwrap();
        // One byte per character in this code page.
        let raw = fs::read(&path).unwrap();
        assert_eq!(raw.len(), text.chars().count());

        assert_eq!(read_to_string(&path, "windows-1252").unwrap(), text);
    }

    #[test]
    fn test_round_trip_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("JP.txt");
        let text = "アイテム名\n";

        write_string(&path, "UTF-8", text).unwrap();
        assert_eq!(read_to_string(&path, "UTF-8").unwrap(), text);
    }

    #[test]
    fn test_decode_replaces_invalid_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0x61, 0xff, 0x62]).unwrap();

        let text = read_to_string(&path, "UTF-8").unwrap();
        assert!(text.starts_with('a'));
        assert!(text.ends_with('b'));
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn test_read_missing_file_fails_with_path() {
        let err = read_to_string(Path::new("/nonexistent/file.txt"), "UTF-8").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/file.txt"));
    }
}
