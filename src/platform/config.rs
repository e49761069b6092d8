// BilPris - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for BilPris data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/bilpris/ or %APPDATA%\BilPris\)
    pub config_dir: PathBuf,

    /// Data directory for logs, caches, etc.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Full path of the config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[server]` section.
    pub server: ServerSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[server]` section of config.toml.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Base URL of the estimate backend.
    pub url: Option<String>,
}

/// `[logging]` section of config.toml.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level ("error", "warn", "info", "debug", "trace").
    pub level: Option<String>,
}

/// Load and validate config.toml.
///
/// A missing file is not an error; defaults apply.
pub fn load_config(path: &Path) -> Result<RawConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(RawConfig::default());
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let raw: RawConfig = toml::from_str(&text).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(url) = &raw.server.url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidServerUrl { url: url.clone() });
        }
    }

    tracing::debug!(path = %path.display(), "Config loaded");
    Ok(raw)
}

/// Normalise a server base URL so endpoint paths can be appended directly.
pub fn normalise_server_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert!(config.server.url.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let (_dir, path) = write_config(
            r#"
            [server]
            url = "https://bilpris.example.no"

            [logging]
            level = "debug"
            "#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(
            config.server.url.as_deref(),
            Some("https://bilpris.example.no")
        );
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let (_dir, path) = write_config(
            r#"
            [server]
            url = "http://localhost:5000"
            future_knob = 42

            [brand_new_section]
            x = "y"
            "#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.url.as_deref(), Some("http://localhost:5000"));
    }

    #[test]
    fn test_invalid_server_url_rejected() {
        let (_dir, path) = write_config(
            r#"
            [server]
            url = "ftp://bilpris.example.no"
            "#,
        );
        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::InvalidServerUrl { .. })));
    }

    #[test]
    fn test_broken_toml_is_an_error() {
        let (_dir, path) = write_config("[server\nurl = ");
        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }

    #[test]
    fn test_normalise_server_url_strips_trailing_slash() {
        assert_eq!(
            normalise_server_url("http://localhost:5000/"),
            "http://localhost:5000"
        );
        assert_eq!(
            normalise_server_url("http://localhost:5000"),
            "http://localhost:5000"
        );
    }
}
