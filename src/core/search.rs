//! The search module for rofind.
//!
//! This module implements the [search] function, which drives the `fd`
//! command-line tool to walk the filesystem below the session's search root.
//! Every query runs a fresh walk; nothing is indexed or cached.
//!
//! Query interpretation:
//! - no path separator: case-insensitive substring match on the file name,
//! - a relative fragment (`proj/notes`): matched as a path fragment anywhere
//!   in the tree,
//! - an absolute fragment (`/etc/ho`): matched from the filesystem root.
//!
//! All three are expressed as shell-style glob patterns handed to fd, never
//! regular expressions. Matches come back in fd's natural walk order.

use std::ffi::OsString;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

/// The external search program driven by [search].
pub const SEARCH_PROGRAM: &str = "fd";

/// The size of the buffer reader used to read the output of fd.
const BUFREADER_SIZE: usize = 32768;

/// How a query string is matched against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryKind {
    /// No path separator: match the base name.
    Name,
    /// Relative fragment: match anywhere in the full path.
    RelPath,
    /// Absolute fragment: match full paths from the filesystem root.
    AbsPath,
}

fn classify(query: &str) -> QueryKind {
    if !query.contains('/') {
        QueryKind::Name
    } else if query.starts_with('/') {
        QueryKind::AbsPath
    } else {
        QueryKind::RelPath
    }
}

fn glob_pattern(query: &str) -> String {
    match classify(query) {
        // anchored at the root of the filesystem
        QueryKind::AbsPath => format!("{query}*"),
        QueryKind::Name | QueryKind::RelPath => format!("*{query}*"),
    }
}

/// Assemble the fd argument vector for one search invocation.
fn build_args(
    query: &str,
    root: &Path,
    include_hidden: bool,
    exclude_paths: &[String],
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        OsString::from("--type"),
        OsString::from("f"),
        OsString::from("--ignore-case"),
        OsString::from("--color"),
        OsString::from("never"),
    ];

    if include_hidden {
        args.push(OsString::from("--hidden"));
    }
    for excl in exclude_paths {
        args.push(OsString::from("--exclude"));
        args.push(OsString::from(excl));
    }
    if classify(query) != QueryKind::Name {
        args.push(OsString::from("--full-path"));
    }

    args.push(OsString::from("--glob"));
    args.push(OsString::from(glob_pattern(query)));
    args.push(OsString::from(root));
    args
}

/// Run one filesystem search below `root`.
///
/// An empty query returns an empty list without spawning anything. Failures
/// to spawn or read fd surface as `Err`; the caller decides how to display
/// them.
pub fn search(
    query: &str,
    root: &Path,
    include_hidden: bool,
    exclude_paths: &[String],
) -> io::Result<Vec<PathBuf>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let args = build_args(query, root, include_hidden, exclude_paths);
    debug!("running {} {:?}", SEARCH_PROGRAM, args);

    let mut proc = match Command::new(SEARCH_PROGRAM)
        .args(&args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(proc) => proc,
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                return Err(io::Error::other(
                    "fd was not found in PATH. Please install fd-find",
                ));
            } else {
                return Err(io::Error::other(format!("Failed to spawn fd: {}", e)));
            }
        }
    };

    let mut matches = Vec::new();
    if let Some(stdout) = proc.stdout.take() {
        let reader = io::BufReader::with_capacity(BUFREADER_SIZE, stdout);
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();
            if !line.is_empty() {
                matches.push(PathBuf::from(line));
            }
        }
    }
    let _ = proc.wait();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(query: &str, hidden: bool, excludes: &[String]) -> Vec<String> {
        build_args(query, Path::new("/home/u"), hidden, excludes)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_name_query_matches_base_name_only() {
        let args = args_of("notes", false, &[]);
        assert!(!args.contains(&"--full-path".to_string()));
        assert!(args.contains(&"*notes*".to_string()));
    }

    #[test]
    fn test_relative_path_query_matches_anywhere() {
        let args = args_of("proj/notes", false, &[]);
        assert!(args.contains(&"--full-path".to_string()));
        assert!(args.contains(&"*proj/notes*".to_string()));
    }

    #[test]
    fn test_absolute_path_query_is_anchored() {
        let args = args_of("/etc/ho", false, &[]);
        assert!(args.contains(&"--full-path".to_string()));
        assert!(args.contains(&"/etc/ho*".to_string()));
        assert!(!args.contains(&"*/etc/ho*".to_string()));
    }

    #[test]
    fn test_hidden_flag() {
        assert!(!args_of("x", false, &[]).contains(&"--hidden".to_string()));
        assert!(args_of("x", true, &[]).contains(&"--hidden".to_string()));
    }

    #[test]
    fn test_excludes_become_flag_pairs() {
        let excludes = vec!["*/target/*".to_string(), "node_modules".to_string()];
        let args = args_of("x", false, &excludes);
        let first = args.iter().position(|a| a == "--exclude").expect("flag");
        assert_eq!(args[first + 1], "*/target/*");
        assert_eq!(args.iter().filter(|a| *a == "--exclude").count(), 2);
    }

    #[test]
    fn test_files_only_and_case_insensitive_always_set() {
        let args = args_of("x", false, &[]);
        let at = args.iter().position(|a| a == "--type").expect("flag");
        assert_eq!(args[at + 1], "f");
        assert!(args.contains(&"--ignore-case".to_string()));
    }

    #[test]
    fn test_root_is_last() {
        let args = args_of("notes", false, &[]);
        assert_eq!(args.last().map(String::as_str), Some("/home/u"));
    }

    #[test]
    fn test_empty_query_skips_the_walk() -> Result<(), Box<dyn std::error::Error>> {
        // must not even try to spawn fd
        let out = search("", Path::new("/definitely/not/here"), false, &[])?;
        assert!(out.is_empty());
        Ok(())
    }
}
