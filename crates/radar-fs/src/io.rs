//! File reads with a character cutoff, and atomic writes with file locking

use std::fs;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Character limit applied to reads when the caller does not give one.
pub const DEFAULT_MAX_CHARS: usize = 5000;

/// Text returned by [`read_truncated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    /// At most `max_chars` characters of the decoded file
    pub content: String,

    /// True when the file held more characters than were returned
    pub truncated: bool,
}

impl ReadOutcome {
    /// Number of characters in `content`.
    pub fn chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// Decode bytes as UTF-8, dropping malformed sequences instead of failing.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Read up to `max_chars` characters of a regular file.
///
/// Anything that is not a regular file (missing, directory, socket) yields
/// [`Error::FileNotFound`].
pub fn read_truncated(path: &Path, max_chars: usize) -> Result<ReadOutcome> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let decoded = decode_lossy(&bytes);

    let mut chars = decoded.chars();
    let content: String = chars.by_ref().take(max_chars).collect();
    let truncated = chars.next().is_some();

    Ok(ReadOutcome { content, truncated })
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// Missing parent directories are created first. A target that is an
/// existing directory (including the repository root itself) is refused
/// before anything is created, and the temp file is removed on any failure.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if path.is_dir() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let parent = match path.parent() {
        Some(parent) if path.file_name().is_some() => parent,
        _ => {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }
    };

    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    // Same directory as the target so the rename stays on one filesystem.
    // Dropped without persisting, the temp file deletes itself.
    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;

    temp_file.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file.as_file().unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file.persist(path).map_err(|e| Error::io(path, e.error))?;

    Ok(())
}

/// Replace a file's text content in full.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
