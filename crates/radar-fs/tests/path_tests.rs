//! Path containment under a repository root

use proptest::prelude::*;
use radar_fs::{CloneRoot, resolve_within};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, CloneRoot) {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("repo/src")).unwrap();
    let root = CloneRoot::new(temp.path());
    (temp, root)
}

#[rstest]
#[case("../../etc/passwd")]
#[case("../sibling/file.txt")]
#[case("src/../../other")]
#[case("/etc/passwd")]
fn test_traversal_is_rejected(#[case] relative: &str) {
    let (_temp, root) = setup();

    let err = root.resolve("repo", relative).unwrap_err();
    assert_eq!(err.kind(), "path_escape");
}

#[rstest]
#[case("src/lib.rs", "src/lib.rs")]
#[case("./src/./lib.rs", "src/lib.rs")]
#[case("src/../README.md", "README.md")]
#[case("new/dir/file.txt", "new/dir/file.txt")]
fn test_inside_paths_resolve_under_repo(#[case] relative: &str, #[case] expected: &str) {
    let (temp, root) = setup();

    let resolved = root.resolve("repo", relative).unwrap();
    assert_eq!(resolved, temp.path().join("repo").join(expected));
}

#[test]
#[cfg(unix)]
fn test_symlink_pointing_outside_is_rejected() {
    use std::os::unix::fs::symlink;

    let (temp, root) = setup();
    let outside = temp.path().join("outside");
    fs::create_dir(&outside).unwrap();
    symlink(&outside, temp.path().join("repo/escape")).unwrap();

    let err = root.resolve("repo", "escape/secret.txt").unwrap_err();
    assert_eq!(err.kind(), "path_escape");
}

#[test]
#[cfg(unix)]
fn test_symlink_inside_repo_is_allowed() {
    use std::os::unix::fs::symlink;

    let (temp, root) = setup();
    symlink(temp.path().join("repo/src"), temp.path().join("repo/alias")).unwrap();

    assert!(root.resolve("repo", "alias/lib.rs").is_ok());
}

#[test]
fn test_invalid_repo_name_is_rejected_before_path() {
    let (_temp, root) = setup();

    let err = root.resolve("../repo", "file.txt").unwrap_err();
    assert_eq!(err.kind(), "invalid_repo_name");
}

proptest! {
    #[test]
    fn test_resolved_paths_never_leave_root(
        segments in prop::collection::vec(
            prop_oneof![Just("..".to_string()), Just(".".to_string()), "[a-z]{1,6}"],
            0..8,
        )
    ) {
        let temp = TempDir::new().unwrap();
        let relative = segments.join("/");

        match resolve_within(temp.path(), &relative) {
            Ok(resolved) => prop_assert!(resolved.starts_with(temp.path())),
            Err(e) => prop_assert_eq!(e.kind(), "path_escape"),
        }
    }
}
