//! Tree rendering over realistic directory layouts

use pretty_assertions::assert_eq;
use radar_fs::{generate_tree, render_tree};
use std::fs;
use tempfile::TempDir;

fn touch(root: &std::path::Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

#[test]
fn test_nested_file_under_non_last_siblings() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "a/b/deep.txt");
    touch(temp.path(), "a/c.txt");
    touch(temp.path(), "z.txt");

    let lines = generate_tree(temp.path()).unwrap();

    assert_eq!(
        lines,
        vec![
            "├── a",
            "│   ├── b",
            "│   │   └── deep.txt",
            "│   └── c.txt",
            "└── z.txt",
        ]
    );
}

#[test]
fn test_children_of_last_directory_use_space_indent() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "README.md");
    touch(temp.path(), "src/lib.rs");
    touch(temp.path(), "src/main.rs");

    let rendered = render_tree(temp.path()).unwrap();

    assert_eq!(
        rendered,
        "├── README.md\n└── src\n    ├── lib.rs\n    └── main.rs"
    );
}

#[test]
fn test_directory_line_precedes_children() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "docs/guide.md");
    fs::create_dir(temp.path().join("empty")).unwrap();

    let lines = generate_tree(temp.path()).unwrap();

    let docs = lines.iter().position(|l| l.ends_with("docs")).unwrap();
    let guide = lines.iter().position(|l| l.ends_with("guide.md")).unwrap();
    assert!(docs < guide);
    assert_eq!(lines.last().unwrap(), "└── empty");
}

#[test]
fn test_one_line_per_entry() {
    let temp = TempDir::new().unwrap();
    for name in ["x/1", "x/2", "y/3", "y/z/4", "5"] {
        touch(temp.path(), name);
    }

    // 5 files + x, y, y/z
    assert_eq!(generate_tree(temp.path()).unwrap().len(), 8);
}

#[test]
#[cfg(unix)]
fn test_symlinked_directory_is_listed_but_not_followed() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    touch(temp.path(), "real/file.txt");
    // A link back to the root would loop forever if followed
    symlink(temp.path(), temp.path().join("loop")).unwrap();

    let lines = generate_tree(temp.path()).unwrap();

    assert_eq!(lines, vec!["├── loop", "└── real", "    └── file.txt"]);
}
