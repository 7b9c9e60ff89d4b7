use rofind::core::search;

use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

fn fd_available() -> bool {
    which::which("fd").is_ok()
}

macro_rules! skip_if_no_fd {
    () => {
        if !fd_available() {
            return Ok(());
        }
    };
}

/// notes.txt, proj/NOTES.md, .dot/secret_notes.txt and other.txt under a
/// fresh temporary root.
fn fixture() -> Result<tempfile::TempDir, Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("notes.txt"))?;
    File::create(dir.path().join("other.txt"))?;
    fs::create_dir(dir.path().join("proj"))?;
    File::create(dir.path().join("proj/NOTES.md"))?;
    fs::create_dir(dir.path().join(".dot"))?;
    File::create(dir.path().join(".dot/secret_notes.txt"))?;
    Ok(dir)
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_base_name_match_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    skip_if_no_fd!();
    let dir = fixture()?;

    let out = search("notes", dir.path(), false, &[])?;
    let found = names(&out);
    assert!(found.contains(&"notes.txt".to_string()), "got {found:?}");
    assert!(found.contains(&"NOTES.md".to_string()), "got {found:?}");
    assert!(!found.contains(&"other.txt".to_string()), "got {found:?}");
    Ok(())
}

#[test]
fn test_hidden_paths_follow_the_flag() -> Result<(), Box<dyn std::error::Error>> {
    skip_if_no_fd!();
    let dir = fixture()?;

    let without = search("notes", dir.path(), false, &[])?;
    assert!(
        !names(&without).contains(&"secret_notes.txt".to_string()),
        "hidden file leaked into {:?}",
        names(&without)
    );

    let with = search("notes", dir.path(), true, &[])?;
    assert!(
        names(&with).contains(&"secret_notes.txt".to_string()),
        "hidden file missing from {:?}",
        names(&with)
    );
    Ok(())
}

#[test]
fn test_exclude_patterns_filter_matches() -> Result<(), Box<dyn std::error::Error>> {
    skip_if_no_fd!();
    let dir = fixture()?;

    let excludes = vec!["proj".to_string()];
    let out = search("notes", dir.path(), false, &excludes)?;
    let found = names(&out);
    assert!(found.contains(&"notes.txt".to_string()), "got {found:?}");
    assert!(!found.contains(&"NOTES.md".to_string()), "got {found:?}");
    Ok(())
}

#[test]
fn test_relative_path_fragment_matches_in_subtree() -> Result<(), Box<dyn std::error::Error>> {
    skip_if_no_fd!();
    let dir = fixture()?;

    let out = search("proj/notes", dir.path(), false, &[])?;
    let found = names(&out);
    assert_eq!(found, ["NOTES.md"], "got {found:?}");
    Ok(())
}

#[test]
fn test_empty_query_returns_nothing() -> Result<(), Box<dyn std::error::Error>> {
    skip_if_no_fd!();
    let dir = fixture()?;

    let out = search("", dir.path(), false, &[])?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn test_only_regular_files_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    skip_if_no_fd!();
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("notes_dir"))?;
    File::create(dir.path().join("notes_dir/notes.txt"))?;

    let out = search("notes", dir.path(), false, &[])?;
    let found = names(&out);
    assert_eq!(found, ["notes.txt"], "got {found:?}");
    Ok(())
}
