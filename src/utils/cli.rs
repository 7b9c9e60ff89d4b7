//! Command-line argument parsing and help for rofind.
//!
//! This module handles all CLI flag parsing used for config initialization and help.
//!
//! When invoked with no args/flags, rofind simply starts the query prompt.

use crate::config::Config;

pub(crate) enum CliAction {
    Run,
    RunAtDir(String),
    Exit,
}

pub(crate) fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();
    let config_path = Config::default_path();

    if args.len() < 2 {
        return CliAction::Run;
    }

    if args.len() > 2 {
        eprintln!("Error: rofind accepts only one argument at a time.");
        eprintln!("Usage: rofind [DIR] or rofind [OPTION]");
        return CliAction::Exit;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&config_path) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAtDir(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("rofind {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"rofind - a rofi-driven file finder

USAGE:
  rofind [DIR]

DIR:
  Directory to search in (defaults to the configured search_dir)

OPTIONS:
      --init              Generate a default configuration file
  -h, --help              Print help information
  -v, --version           Display the current installed version of rofind

QUERY PREFIXES (typed into the prompt):
  !p <path>               Change the search root for this session
  !hidden                 Toggle searching of hidden paths
  !g <terms>              Open a web search in the browser and exit

CONFIGURATION (JSON, ~/.config/rofind/config.json):
  open_commands           Mapping of menu label -> command template.
                          "{{file}}" in a template is replaced with the
                          shell-escaped path; without it the path is appended.
  include_hidden          Search hidden paths by default (bool)
  search_dir              Initial search root ("~" is expanded)
  exclude_paths           Glob patterns excluded from every search

ENVIRONMENT:
  ROFIND_CONFIG           Override the default config path
  ROFIND_LOG              Log filter (tracing env-filter syntax)

Requires `rofi` and `fd` on PATH.
"#
    );
}
