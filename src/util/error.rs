// BilPris - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging. The UI collapses fetch failures into a
// single rendered error state; the log line keeps the detail.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors from an outbound request to the estimate backend.
///
/// Every variant renders as the same user-visible failure state; the
/// distinction exists for the diagnostic log and for tests.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP client itself could not be constructed (TLS backend init).
    Client { source: reqwest::Error },

    /// The request could not be sent or no response arrived
    /// (connection refused, DNS failure, broken connection).
    Request { url: String, source: reqwest::Error },

    /// The response arrived but its body could not be read.
    Body { url: String, source: reqwest::Error },

    /// The response body was not valid JSON of the expected shape.
    InvalidJson {
        url: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client { source } => {
                write!(f, "Failed to construct HTTP client: {source}")
            }
            Self::Request { url, source } => {
                write!(f, "Request to '{url}' failed: {source}")
            }
            Self::Body { url, source } => {
                write!(f, "Failed to read response body from '{url}': {source}")
            }
            Self::InvalidJson { url, source } => {
                write!(f, "Response from '{url}' is not valid JSON: {source}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client { source } => Some(source),
            Self::Request { source, .. } => Some(source),
            Self::Body { source, .. } => Some(source),
            Self::InvalidJson { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating config.toml.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The config file could not be parsed as TOML.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The configured server URL is not an http(s) URL.
    InvalidServerUrl { url: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read config '{}': {source}", path.display())
            }
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::InvalidServerUrl { url } => {
                write!(
                    f,
                    "Invalid server URL '{url}': must start with http:// or https://"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::TomlParse { source, .. } => Some(source),
            Self::InvalidServerUrl { .. } => None,
        }
    }
}
