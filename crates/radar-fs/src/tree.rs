//! Directory tree rendering with box-drawing connectors.
//!
//! ```text
//! ├── Cargo.toml
//! └── src
//!     ├── lib.rs
//!     └── main.rs
//! ```

use std::fs;
use std::path::Path;

use crate::{Error, Result};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Render every entry below `root`, one line each, depth-first pre-order.
///
/// Entries are sorted by name within each directory. The root itself gets no
/// line. Symbolic links are listed but not followed.
pub fn generate_tree(root: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    walk(root, "", &mut lines)?;
    Ok(lines)
}

/// [`generate_tree`] joined with newlines.
pub fn render_tree(root: &Path) -> Result<String> {
    Ok(generate_tree(root)?.join("\n"))
}

fn walk(dir: &Path, prefix: &str, lines: &mut Vec<String>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!(
            "{prefix}{connector}{}",
            entry.file_name().to_string_lossy()
        ));

        // file_type() does not follow symlinks
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_dir() {
            let extension = if is_last { SPACE_INDENT } else { PIPE_INDENT };
            walk(&entry.path(), &format!("{prefix}{extension}"), lines)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn sorts_entries_by_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b"), "").unwrap();
        fs::write(temp.path().join("a"), "").unwrap();

        assert_eq!(generate_tree(temp.path()).unwrap(), vec!["├── a", "└── b"]);
    }

    #[test]
    fn single_entry_uses_last_connector() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("only.txt"), "").unwrap();

        assert_eq!(generate_tree(temp.path()).unwrap(), vec!["└── only.txt"]);
    }

    #[test]
    fn sorting_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b"), "").unwrap();
        fs::write(temp.path().join("B"), "").unwrap();
        fs::write(temp.path().join("a"), "").unwrap();

        assert_eq!(
            generate_tree(temp.path()).unwrap(),
            vec!["├── B", "├── a", "└── b"]
        );
    }

    #[test]
    fn empty_directory_renders_nothing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(render_tree(temp.path()).unwrap(), "");
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = generate_tree(&temp.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), "io");
    }
}
