//! Output sinks.
//!
//! File output goes through a temporary file in the destination directory
//! that is persisted over the target only once fully written, so a failed
//! run never leaves a truncated file behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Where the sorted markdown goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputSink::File(path.to_path_buf()),
            None => OutputSink::Stdout,
        }
    }

    /// Write `text` exactly as given.
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            OutputSink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|source| Error::Write {
                        path: PathBuf::from("<stdout>"),
                        source,
                    })
            }
            OutputSink::File(path) => write_atomic(path, text),
        }
    }
}

/// Replace `path` with `text` via a temporary file in the same directory.
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let to_write_error = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(to_write_error)?;
    file.write_all(text.as_bytes()).map_err(to_write_error)?;
    file.flush().map_err(to_write_error)?;
    file.persist(path).map_err(|err| to_write_error(err.error))?;

    log::info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
