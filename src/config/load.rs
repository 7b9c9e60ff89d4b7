//! The main config loading module for rofind.
//!
//! Handles loading the JSON configuration from `config.json`.
//!
//! Provides and manages the main [Config] struct. Loading never fails: a
//! missing or unparsable file yields the built-in defaults, and a field that
//! is present but has the wrong shape falls back to its own default while the
//! rest of the file is still honored. Each substitution is logged.
//!
//! Also implements default config generation when invoked with `--init`.

use crate::utils::{expand_home_path, get_home};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Main configuration struct for rofind.
///
/// Read once at startup and treated as immutable for the process lifetime;
/// runtime changes (the `!p` and `!hidden` bangs) live in the session and are
/// never written back to disk.
#[derive(Debug, Serialize)]
pub struct Config {
    open_commands: BTreeMap<String, String>,
    include_hidden: bool,
    search_dir: PathBuf,
    exclude_paths: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let mut open_commands = BTreeMap::new();
        open_commands.insert("xdg-open".to_string(), "xdg-open".to_string());
        open_commands.insert("kitty micro".to_string(), "kitty -e micro".to_string());
        open_commands.insert(
            "copy path".to_string(),
            "sh -c \"echo '{file}' | xclip -selection clipboard\"".to_string(),
        );

        Config {
            open_commands,
            include_hidden: false,
            search_dir: get_home().unwrap_or_else(|| PathBuf::from(".")),
            exclude_paths: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Called by the entry point to load config at startup.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file or an unparsable document yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                debug!("no config file at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                warn!("config at {} is not valid JSON ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Build a [Config] from a parsed JSON document, field by field.
    ///
    /// Unrecognized keys are ignored. A recognized key whose value has the
    /// wrong shape keeps that field's default.
    fn from_value(value: Value) -> Self {
        let mut config = Self::default();

        let Value::Object(mut doc) = value else {
            warn!("config root is not a JSON object, using defaults");
            return config;
        };

        if let Some(commands) = take_field::<BTreeMap<String, String>>(&mut doc, "open_commands") {
            config.open_commands = commands;
        }
        if let Some(hidden) = take_field::<bool>(&mut doc, "include_hidden") {
            config.include_hidden = hidden;
        }
        if let Some(dir) = take_field::<String>(&mut doc, "search_dir") {
            config.search_dir = expand_home_path(&dir);
        }
        if let Some(excludes) = take_field::<Vec<String>>(&mut doc, "exclude_paths") {
            config.exclude_paths = excludes;
        }

        config
    }

    // Getters

    #[inline]
    pub fn open_commands(&self) -> &BTreeMap<String, String> {
        &self.open_commands
    }

    #[inline]
    pub fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[inline]
    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    #[inline]
    pub fn exclude_paths(&self) -> &[String] {
        &self.exclude_paths
    }

    /// Determine the default configuration file path.
    /// Checks the ROFIND_CONFIG environment variable first,
    /// checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/rofind/config.json.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("ROFIND_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("rofind/config.json");
        }

        if let Some(home) = get_home() {
            return home.join(".config/rofind/config.json");
        }
        PathBuf::from("config.json")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &PathBuf) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&Config::default())?;
        fs::write(path, content)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Remove `key` from the document and deserialize it, or log why it was skipped.
fn take_field<T: DeserializeOwned>(doc: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = doc.remove(key)?;
    match serde_json::from_value(value) {
        Ok(field) => Some(field),
        Err(e) => {
            warn!("ignoring malformed config field `{key}`: {e}");
            None
        }
    }
}
