use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// The per-user config location: `<config dir>/today/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("today").join("config.toml"))
}

/// Load the config. An explicit path must exist and parse; with no explicit
/// path, a missing default file just means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => read_config_file(path),
        None => match default_config_path() {
            Some(path) => match fs::read_to_string(&path) {
                Ok(text) => parse_config(&path, &text),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
                Err(e) => Err(ConfigError::ReadError { path, source: e }),
            },
            None => Ok(AppConfig::default()),
        },
    }
}

fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(path, &text)
}

fn parse_config(path: &Path, text: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[ui]
show_key_hints = false

[ui.colors]
accent = "#ff8800"
favorite = "#ffffff"
"##
    }

    #[test]
    fn test_load_explicit_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("accent").unwrap(), "#ff8800");
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui\nshow_key_hints = maybe").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui]\nfuture_knob = 3\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.ui.show_key_hints);
    }
}
