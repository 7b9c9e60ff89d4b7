//! Bang commands for rofind.
//!
//! A query starting with a reserved prefix is intercepted before any search
//! happens:
//! - `!p <path>` re-roots the session's search directory,
//! - `!hidden` toggles hidden-path searching for the session,
//! - `!g <terms>` opens a web search in the browser and ends the session.
//!
//! Parsing is pure ([parse]); [interpret] applies the side effects.

use crate::core::menu::Menu;
use crate::session::Session;
use crate::utils::expand_home_path;

use tracing::{debug, warn};
use url::Url;

use std::process::{Command, Stdio};

/// The browser launched for `!g`, focused afterwards via wmctrl.
pub const BROWSER: &str = "firefox";
const WINDOW_CONTROL: &str = "wmctrl";
const SEARCH_ENGINE: &str = "https://duckduckgo.com/";

/// A recognized bang prefix with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BangCommand {
    SetRoot(String),
    WebSearch(String),
    ToggleHidden,
}

/// What the main loop should do after a query was inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BangOutcome {
    /// Not a bang; proceed to the search.
    NotABang,
    /// Handled; prompt for the next query.
    Continue,
    /// Handled; the session is over.
    Quit,
}

/// Recognize a bang command in a raw query string.
///
/// A prefix without an argument (`!p `, `!g `) is not a bang and falls
/// through to the search like any other text.
pub fn parse(query: &str) -> Option<BangCommand> {
    let query = query.trim();

    if let Some(rest) = query.strip_prefix("!p ") {
        let rest = rest.trim();
        if !rest.is_empty() {
            return Some(BangCommand::SetRoot(rest.to_string()));
        }
    }
    if let Some(rest) = query.strip_prefix("!g ") {
        let rest = rest.trim();
        if !rest.is_empty() {
            return Some(BangCommand::WebSearch(rest.to_string()));
        }
    }
    if query == "!hidden" {
        return Some(BangCommand::ToggleHidden);
    }
    None
}

/// Inspect a query and apply its bang, if it is one.
pub fn interpret(query: &str, session: &mut Session) -> BangOutcome {
    match parse(query) {
        None => BangOutcome::NotABang,
        Some(BangCommand::SetRoot(path)) => {
            let dir = expand_home_path(&path);
            debug!("search root changed to {}", dir.display());
            session.set_search_dir(dir);
            BangOutcome::Continue
        }
        Some(BangCommand::ToggleHidden) => {
            let state = if session.toggle_hidden() {
                "Now ON"
            } else {
                "Now OFF"
            };
            let confirmation = [state.to_string()];
            if let Err(e) = Menu::new("Hidden search").options(&confirmation).show() {
                warn!("could not show toggle confirmation: {e}");
            }
            BangOutcome::Continue
        }
        Some(BangCommand::WebSearch(terms)) => {
            web_search(&terms);
            BangOutcome::Quit
        }
    }
}

/// Build the search-engine URL for a `!g` query.
fn search_url(terms: &str) -> String {
    match Url::parse_with_params(SEARCH_ENGINE, &[("q", terms)]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!("could not build search url: {e}");
            format!("{SEARCH_ENGINE}?q={terms}")
        }
    }
}

/// Open the browser on the search URL and try to focus its window.
///
/// Both steps are best-effort; the session ends either way.
fn web_search(terms: &str) {
    let url = search_url(terms);
    debug!("opening web search: {url}");

    match Command::new(BROWSER)
        .arg(&url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_) => {
            let _ = Command::new(WINDOW_CONTROL)
                .args(["-x", "-a", BROWSER])
                .status();
        }
        Err(e) => warn!("could not launch {BROWSER}: {e}"),
    }
}
