//! Path helpers for rofind.
//!
//! These are used by the config loader, the bang interpreter and the prompt
//! label rendering.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// The user's home directory, if one can be determined.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expand a leading "~" or "~/" to the home directory.
///
/// Anything else is passed through untouched. "~user" forms are not supported.
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = get_home() {
            return home;
        }
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Util function to shorten the home directory to "~".
/// Is used for the search-root label on the query prompt.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_bare_tilde() {
        if let Some(home) = get_home() {
            assert_eq!(expand_home_path("~"), home);
        }
    }

    #[test]
    fn test_expand_tilde_prefix() {
        if let Some(home) = get_home() {
            assert_eq!(expand_home_path("~/notes"), home.join("notes"));
        }
    }

    #[test]
    fn test_absolute_path_untouched() {
        assert_eq!(expand_home_path("/tmp/x"), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_tilde_user_untouched() {
        // "~user" expansion is not supported and must pass through
        assert_eq!(expand_home_path("~root/x"), PathBuf::from("~root/x"));
    }

    #[test]
    fn test_shorten_home() {
        if let Some(home) = get_home() {
            assert_eq!(shorten_home_path(&home), "~");
            assert_eq!(
                shorten_home_path(home.join("docs")),
                format!("~{}docs", MAIN_SEPARATOR)
            );
        }
        assert_eq!(shorten_home_path("/etc"), "/etc");
    }
}
