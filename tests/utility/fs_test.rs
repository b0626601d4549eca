/*!
 * File Listing Tests
 */

use proxy_test_common::utility::fs::list_files;
use proxy_test_common::UtilityError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_deep_tree() {
    let dir = TempDir::new().unwrap();
    let deep = dir.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.yaml"), b"").unwrap();
    fs::write(dir.path().join("root.yaml"), b"").unwrap();

    let flat = list_files(dir.path(), false).unwrap();
    assert_eq!(flat.len(), 1);
    assert!(flat[0].ends_with("root.yaml"));

    let all = list_files(dir.path(), true).unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|f| f.ends_with("a/b/c/leaf.yaml")));
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    assert!(list_files(dir.path(), true).unwrap().is_empty());
}

#[test]
fn test_path_is_a_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();
    assert!(matches!(list_files(&file, false), Err(UtilityError::Io { .. })));
}
