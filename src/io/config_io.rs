use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::AppConfig;

/// Config file looked up in the working directory when no path is given
pub const CONFIG_FILE: &str = "quickdo.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the app config.
///
/// With an explicit `path`, the file must exist and parse. Without one,
/// `quickdo.toml` in the working directory is used if present; a missing
/// default file yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path,
                source: e,
            });
        }
    };

    toml::from_str(&text).map_err(|e| ConfigError::Parse { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quickdo.toml");
        fs::write(&path, "[input]\ndebounce_ms = 100\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.input.debounce_ms, 100);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("quickdo.toml");
        fs::write(&path, "[input\ndebounce_ms = oops\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
