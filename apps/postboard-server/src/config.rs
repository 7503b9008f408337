//! Application configuration loaded from environment variables.

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Request body extractor limit. Posts are not length-checked, so this only
/// guards against runaway uploads.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024 * 1024;

/// Configuration errors - fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name} value {value:?}: {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("WORKERS must be at least 1")]
    NoWorkers,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_body_bytes: usize,
    /// Snapshot file. `None` keeps posts in memory only.
    pub posts_file: Option<PathBuf>,
    pub index_file: PathBuf,
    /// Write snapshots to a temporary file and rename into place.
    pub atomic_snapshots: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_number(&lookup, "PORT", 8080)?;
        let workers = parse_number(&lookup, "WORKERS", 10)?;
        if workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        let max_body_bytes = parse_number(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        // An explicitly empty POSTS_FILE disables the snapshot file.
        let posts_file = match lookup("POSTS_FILE") {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from("posts.json")),
        };

        Ok(Self {
            host: lookup("HOST")
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            workers,
            max_body_bytes,
            posts_file,
            index_file: lookup("INDEX_FILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("index.html")),
            atomic_snapshots: lookup("ATOMIC_SNAPSHOTS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

/// Parse a numeric variable. Unset or empty falls back to `default`.
fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr<Err = ParseIntError>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => {
            value
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name,
                    value,
                    source,
                })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, 10);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.posts_file, Some(PathBuf::from("posts.json")));
        assert_eq!(config.index_file, PathBuf::from("index.html"));
        assert!(!config.atomic_snapshots);
    }

    #[test]
    fn test_empty_port_uses_default() {
        assert_eq!(load(&[("PORT", "")]).unwrap().port, 8080);
    }

    #[test]
    fn test_port_from_env() {
        assert_eq!(load(&[("PORT", "3000")]).unwrap().port, 3000);
    }

    #[test]
    fn test_malformed_port_is_fatal() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { name: "PORT", .. }));
        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("PORT", " 8080")]).is_err());
    }

    #[test]
    fn test_max_body_bytes() {
        assert_eq!(load(&[("MAX_BODY_BYTES", "4096")]).unwrap().max_body_bytes, 4096);
        assert!(load(&[("MAX_BODY_BYTES", "lots")]).is_err());
    }

    #[test]
    fn test_zero_workers_is_fatal() {
        assert!(matches!(load(&[("WORKERS", "0")]), Err(ConfigError::NoWorkers)));
    }

    #[test]
    fn test_empty_posts_file_disables_persistence() {
        assert_eq!(load(&[("POSTS_FILE", "")]).unwrap().posts_file, None);
    }

    #[test]
    fn test_atomic_snapshots_flag() {
        assert!(load(&[("ATOMIC_SNAPSHOTS", "true")]).unwrap().atomic_snapshots);
        assert!(load(&[("ATOMIC_SNAPSHOTS", "1")]).unwrap().atomic_snapshots);
        assert!(!load(&[("ATOMIC_SNAPSHOTS", "no")]).unwrap().atomic_snapshots);
    }
}
