//! Session state for rofind.
//!
//! [Session] is the mutable context object threaded through the main loop.
//! It carries the current search root and hidden-path flag, initialized from
//! the configuration. Only the bang interpreter mutates it, and only between
//! search cycles, so the search executor never observes a half-applied change.

use crate::config::Config;
use crate::utils::shorten_home_path;

use std::path::{Path, PathBuf};

/// Per-process session state.
///
/// Nothing in here is persisted; a `!p` or `!hidden` change lasts until the
/// process exits.
#[derive(Debug)]
pub struct Session {
    search_dir: PathBuf,
    include_hidden: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            search_dir: config.search_dir().to_path_buf(),
            include_hidden: config.include_hidden(),
        }
    }

    #[inline]
    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    #[inline]
    pub fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    pub fn set_search_dir(&mut self, dir: PathBuf) {
        self.search_dir = dir;
    }

    /// Flip the hidden-path flag and return the new value.
    pub fn toggle_hidden(&mut self) -> bool {
        self.include_hidden = !self.include_hidden;
        self.include_hidden
    }

    /// The label shown on the query prompt, with the home directory as "~".
    pub fn prompt_label(&self) -> String {
        shorten_home_path(&self.search_dir)
    }
}
