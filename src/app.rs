//! The main loop for rofind.
//!
//! One cycle: prompt for a query, intercept bang commands, run the search
//! under a loading indicator, present the matches, then hand the selection to
//! the open-with dispatch. The loop owns nothing but control flow; all state
//! lives in the [Session] it is given.
//!
//! The process always exits 0 on the graceful paths: cancelling a prompt,
//! a `!g` web search, or a successful dispatch.

use crate::config::Config;
use crate::core::bang::{self, BangOutcome};
use crate::core::{LoadingIndicator, Menu, expand_command, launch_detached, search};
use crate::session::Session;

use tracing::warn;

use std::io;
use std::path::{Path, PathBuf};

/// Sentinel entry shown when a search produced nothing.
pub const NO_MATCHES: &str = "No matches found";
/// Sentinel entry shown when the search subprocess failed.
pub const SEARCH_FAILED: &str = "Error running find";

const CANCEL_LABEL: &str = "cancel";

/// Run query cycles until the user cancels, fires a `!g`, or opens a file.
pub fn run(config: &Config, session: &mut Session) -> io::Result<()> {
    loop {
        let prompt = format!("Find in {}:", session.prompt_label());
        let query = Menu::new(&prompt).allow_custom(true).show()?;
        if query.is_empty() {
            return Ok(());
        }

        match bang::interpret(&query, session) {
            BangOutcome::Continue => continue,
            BangOutcome::Quit => return Ok(()),
            BangOutcome::NotABang => {}
        }

        // The indicator window stays up exactly as long as the walk runs;
        // dropping it at the end of the block closes it on every path.
        let found = {
            let _loading = LoadingIndicator::start();
            search(
                &query,
                session.search_dir(),
                session.include_hidden(),
                config.exclude_paths(),
            )
        };

        let entries = result_entries(found);
        let selection = Menu::new("Results:").options(&entries).show()?;

        // Sentinels and stale selections fail the existence check and bounce
        // back to the query prompt.
        if selection.is_empty() || !Path::new(&selection).exists() {
            continue;
        }

        return open_selected(config, Path::new(&selection));
    }
}

/// Turn a search result into displayable menu entries, substituting the
/// sentinels for empty and failed searches.
fn result_entries(found: io::Result<Vec<PathBuf>>) -> Vec<String> {
    match found {
        Ok(paths) if paths.is_empty() => vec![NO_MATCHES.to_string()],
        Ok(paths) => paths.iter().map(|p| p.display().to_string()).collect(),
        Err(e) => {
            warn!("search failed: {e}");
            vec![SEARCH_FAILED.to_string()]
        }
    }
}

/// The open-with prompt: configured labels plus a cancel entry, free text
/// allowed. Cancel ends the session without dispatching anything.
fn open_selected(config: &Config, file_path: &Path) -> io::Result<()> {
    let mut labels: Vec<String> = config.open_commands().keys().cloned().collect();
    labels.push(CANCEL_LABEL.to_string());

    let choice = Menu::new("Open with:")
        .options(&labels)
        .allow_custom(true)
        .show()?;
    if choice.is_empty() || choice == CANCEL_LABEL {
        return Ok(());
    }

    let command = expand_command(resolve_template(config, &choice), file_path);
    if let Err(e) = launch_detached(&command) {
        // fire-and-forget: log it, still exit 0
        warn!("could not launch `{command}`: {e}");
    }
    Ok(())
}

/// A known label resolves to its configured template; anything else the user
/// typed is taken as a literal command.
fn resolve_template<'a>(config: &'a Config, choice: &'a str) -> &'a str {
    config
        .open_commands()
        .get(choice)
        .map(String::as_str)
        .unwrap_or(choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_becomes_sentinel() {
        let entries = result_entries(Ok(Vec::new()));
        assert_eq!(entries, [NO_MATCHES]);
    }

    #[test]
    fn test_failed_search_becomes_error_sentinel() {
        let entries = result_entries(Err(io::Error::other("fd blew up")));
        assert_eq!(entries, [SEARCH_FAILED]);
    }

    #[test]
    fn test_matches_render_one_per_path() {
        let entries = result_entries(Ok(vec![
            PathBuf::from("/home/u/notes.txt"),
            PathBuf::from("/home/u/proj/NOTES.md"),
        ]));
        assert_eq!(entries, ["/home/u/notes.txt", "/home/u/proj/NOTES.md"]);
    }

    #[test]
    fn test_known_label_resolves_to_template() {
        let config = Config::default();
        assert_eq!(resolve_template(&config, "kitty micro"), "kitty -e micro");
    }

    #[test]
    fn test_unknown_choice_is_a_literal_command() {
        let config = Config::default();
        assert_eq!(resolve_template(&config, "nvim -R"), "nvim -R");
    }
}
