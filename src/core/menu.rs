//! The interactive menu module for rofind.
//!
//! This module implements the [Menu] builder, a thin wrapper around a
//! `rofi -dmenu` subprocess. Options are written newline-separated to rofi's
//! stdin and the selection is read back from its stdout.
//!
//! A [Menu::show] call blocks until the user answers or cancels; there is no
//! timeout. Cancellation (Escape) is reported as an empty string, not an
//! error, because it is ordinary control flow for the main loop.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// The external menu program driven by [Menu].
pub const MENU_PROGRAM: &str = "rofi";

/// Builder for one interactive prompt.
///
/// # Examples
/// let query = Menu::new("Find file:").allow_custom(true).show()?;
#[derive(Debug, Default)]
pub struct Menu<'a> {
    prompt: &'a str,
    options: &'a [String],
    message: Option<&'a str>,
    allow_custom: bool,
    extra_args: &'a [String],
}

impl<'a> Menu<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Menu {
            prompt,
            ..Default::default()
        }
    }

    /// The selectable entries. Without any, the menu is a bare text prompt.
    pub fn options(mut self, options: &'a [String]) -> Self {
        self.options = options;
        self
    }

    /// An additional message line shown under the prompt.
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    /// Allow the user to submit text that is not among the options.
    pub fn allow_custom(mut self, allow: bool) -> Self {
        self.allow_custom = allow;
        self
    }

    /// Extra display arguments passed through to rofi verbatim (styling etc.).
    pub fn extra_args(mut self, args: &'a [String]) -> Self {
        self.extra_args = args;
        self
    }

    fn build_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            OsString::from("-dmenu"),
            OsString::from("-p"),
            OsString::from(self.prompt),
        ];
        if let Some(message) = self.message {
            args.push(OsString::from("-mesg"));
            args.push(OsString::from(message));
        }
        if self.allow_custom {
            args.push(OsString::from("-editable"));
        }
        for extra in self.extra_args {
            args.push(OsString::from(extra));
        }
        args
    }

    /// Show the menu and block until the user selects, submits or cancels.
    ///
    /// Returns the trimmed selection, or an empty string on cancel.
    pub fn show(&self) -> io::Result<String> {
        let mut proc = match Command::new(MENU_PROGRAM)
            .args(self.build_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(proc) => proc,
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    return Err(io::Error::other(
                        "rofi was not found in PATH. Please install rofi",
                    ));
                } else {
                    return Err(io::Error::other(format!("Failed to spawn rofi: {}", e)));
                }
            }
        };

        if let Some(mut stdin) = proc.stdin.take() {
            // rofi may exit (cancel) before consuming every option line
            let _ = stdin.write_all(self.options.join("\n").as_bytes());
        }

        let output = proc.wait_with_output()?;
        Ok(read_selection(&output.stdout))
    }
}

/// Probe for the menu program once at startup, so a missing binary fails with
/// an actionable message instead of on the first prompt.
pub fn ensure_available() -> io::Result<()> {
    if which::which(MENU_PROGRAM).is_err() {
        return Err(io::Error::other(
            "rofi was not found in PATH. Please install rofi",
        ));
    }
    Ok(())
}

fn read_selection(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout).trim().to_string()
}
