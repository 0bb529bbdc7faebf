//! Input source resolution and decoding.
//!
//! Input is either a file path or `-` for stdin. It is read in full and must
//! decode as UTF-8; binary input is rejected before any processing happens.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Where the markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// Path used in diagnostics.
    pub fn display_path(&self) -> PathBuf {
        match self {
            InputSource::File(path) => path.clone(),
            InputSource::Stdin => PathBuf::from("<stdin>"),
        }
    }

    /// Read the whole input as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = match self {
            InputSource::File(path) => std::fs::read(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?,
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(|source| Error::Read {
                        path: self.display_path(),
                        source,
                    })?;
                bytes
            }
        };

        decode_text(bytes, &self.display_path())
    }
}

/// Read a file and require it to be UTF-8 text.
pub fn read_text_file(path: &Path) -> Result<String> {
    InputSource::File(path.to_path_buf()).read_to_string()
}

/// Decode bytes as UTF-8, reporting `path` if they are not text.
///
/// Line endings are normalized to `\n`.
pub fn decode_text(bytes: Vec<u8>, path: &Path) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|_| Error::NotText {
        path: path.to_path_buf(),
    })?;
    let text = normalize_newlines(text);
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("README.md")),
            InputSource::File(PathBuf::from("README.md"))
        );
    }

    #[test]
    fn test_decode_text_rejects_binary() {
        let err = decode_text(vec![0xff, 0xfe, 0x00], Path::new("blob.bin")).unwrap_err();
        assert!(matches!(err, Error::NotText { .. }));
        assert_eq!(err.to_string(), "Input 'blob.bin' is not a text file");
    }

    #[test]
    fn test_decode_text_normalizes_line_endings() {
        let bytes = b"# B\r\ntext b\r\nold mac\rend\n".to_vec();
        let text = decode_text(bytes, Path::new("crlf.md")).unwrap();
        assert_eq!(text, "# B\ntext b\nold mac\nend\n");
    }

    #[test]
    fn test_normalize_newlines_leaves_lf_alone() {
        assert_eq!(normalize_newlines("a\n\nb".to_string()), "a\n\nb");
        assert_eq!(normalize_newlines("a\r\n\r\nb\r".to_string()), "a\n\nb\n");
    }

    #[test]
    fn test_read_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# Héading").unwrap();
        let text = read_text_file(file.path()).unwrap();
        assert_eq!(text, "# Héading\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(&dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
