//! Command dispatch for rofind.
//!
//! This module implements the [expand_command] template substitution and the
//! single shell-execution boundary, [launch_detached]. Command templates are
//! opaque user-configured shell strings and run through `sh -c` on purpose;
//! the only processing they receive is shell-escaping of the file path that
//! gets spliced in.

use tracing::debug;

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Placeholder token replaced with the shell-escaped file path.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Expand a command template for one file.
///
/// If the template contains [FILE_PLACEHOLDER], every occurrence is replaced
/// with the shell-escaped path; otherwise the escaped path is appended as a
/// trailing argument.
pub fn expand_command(template: &str, file_path: &Path) -> String {
    let path = file_path.to_string_lossy();
    let quoted = shell_words::quote(&path);
    if template.contains(FILE_PLACEHOLDER) {
        template.replace(FILE_PLACEHOLDER, &quoted)
    } else {
        format!("{} {}", template, quoted)
    }
}

/// Launch a fully expanded command line, detached.
///
/// The command is handed to `sh -c` with all stdio detached and is never
/// waited on; whatever it does after the hand-off is its own business.
pub fn launch_detached(command: &str) -> io::Result<()> {
    debug!("dispatching: {command}");
    Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
