//! Driver configuration.
//!
//! Read from a JSON file passed with `--config`. Every field has a default,
//! so an empty object (or no file at all) gives the standard 9x12 game with
//! orthogonal adjacency.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::board::adjacency::{GridAdjacency, Topology};
use crate::board::tile::{FIRST_ROW, LAST_ROW};

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for a driver session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Last row letter accepted in driver commands.
    pub last_row: char,
    /// Neighbourhood rule for the adjacency check.
    pub topology: Topology,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            last_row: LAST_ROW,
            topology: Topology::Orthogonal,
            log_filter: "warn".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parses a configuration from JSON text. Does not validate.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the last row is an uppercase letter at or after `A`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.last_row.is_ascii_uppercase() || self.last_row < FIRST_ROW {
            return Err(ConfigError::Invalid(format!(
                "last_row must be an uppercase letter, got '{}'",
                self.last_row
            )));
        }
        Ok(())
    }

    /// The adjacency predicate this configuration selects.
    pub fn connectivity(&self) -> GridAdjacency {
        GridAdjacency::new(self.topology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.last_row, 'I');
        assert_eq!(config.topology, Topology::Orthogonal);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn fields_override_defaults() {
        let text = r#"{"last_row": "L", "topology": "king", "log_filter": "debug"}"#;
        let config = BoardConfig::from_json(text).unwrap();
        assert_eq!(config.last_row, 'L');
        assert_eq!(config.topology, Topology::King);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.connectivity(), GridAdjacency::new(Topology::King));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(BoardConfig::from_json(r#"{"columns": 20}"#).is_err());
        assert!(BoardConfig::from_json(r#"{"topology": "hex"}"#).is_err());
    }

    #[test]
    fn validate_rejects_non_letters() {
        let config = BoardConfig {
            last_row: '9',
            ..BoardConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = BoardConfig::load("/nonexistent/hotelboard.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
