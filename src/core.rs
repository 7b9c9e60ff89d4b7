//! Core runtime logic for rofind.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [menu]: the interactive selection prompt, backed by an external `rofi` process.
//! - [search]: the filesystem search, backed by an external `fd` process.
//! - [indicator]: the transient loading window shown while a search is in flight.
//! - [dispatch]: command-template expansion and detached shell launching.
//! - [bang]: the `!p` / `!g` / `!hidden` query prefixes.

pub mod bang;
pub mod dispatch;
pub mod indicator;
pub mod menu;
pub mod search;

pub use bang::{BangCommand, BangOutcome, interpret};
pub use dispatch::{expand_command, launch_detached};
pub use indicator::LoadingIndicator;
pub use menu::Menu;
pub use search::search;
