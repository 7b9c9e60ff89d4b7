//! main.rs
//! Entry point for rofind

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod session;
pub(crate) mod utils;

use crate::config::Config;
use crate::core::menu;
use crate::session::Session;
use crate::utils::cli::{CliAction, handle_args};
use crate::utils::expand_home_path;

use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ROFIND_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = handle_args();

    if let CliAction::Exit = action {
        return Ok(());
    }

    menu::ensure_available()?;

    let config = Config::load();
    let mut session = Session::new(&config);

    if let CliAction::RunAtDir(dir) = action {
        session.set_search_dir(expand_home_path(&dir));
    }

    app::run(&config, &mut session)
}
