pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".rindex.toml";

/// Get the global config file path (~/.rindex.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (dir/.rindex.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration.
///
/// An explicit file must exist. Otherwise the local config in `dir` is
/// tried first, then the global config, then defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<types::Config> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let local = local_config_path(dir);
    if local.exists() {
        return load_config_file(&local);
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            return load_config_file(&global);
        }
    }

    log::debug!("No configuration file found, using defaults");
    Ok(types::Config::default())
}

/// Parse a single configuration file.
pub fn load_config_file(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<types::Config> {
    let config = toml::from_str::<types::Config>(content)
        .map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use crate::index::formatter::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
[index]
warn_unmapped = true

[output]
format = "json"
"#,
        )
        .unwrap();
        assert!(config.index.warn_unmapped);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[output]\n").unwrap();
        assert_eq!(config, types::Config::default());
        assert!(!config.index.warn_unmapped);
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = parse_config("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(
            err,
            IndexError::Config(ConfigError::ParsingFailed(_))
        ));
    }

    #[test]
    fn test_local_config_preferred() {
        let dir = TempDir::new().unwrap();
        fs::write(local_config_path(dir.path()), "[index]\nwarn_unmapped = true\n").unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert!(config.index.warn_unmapped);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing), dir.path()),
            Err(IndexError::Io(_))
        ));
    }
}
