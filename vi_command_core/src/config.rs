//! Editor configuration
//!
//! Typed settings with read-only defaults. Hosts build an `EditorConfig`
//! (or deserialize one with the `serde_support` feature), override what
//! they need and call `validate` before handing it to the editor.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest literal repeat count, matching a signed 32-bit integer
pub const DEFAULT_MAX_COUNT: usize = i32::MAX as usize;

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_support", serde(default))]
pub struct ParserConfig {
    /// Digit runs above this value become `Count::Unbounded`
    pub max_count: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_support", serde(default))]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept; `None` keeps all of them
    pub limit: Option<usize>,
}

/// Complete editor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_support", serde(default))]
pub struct EditorConfig {
    pub parser: ParserConfig,
    pub history: HistoryConfig,
}

impl EditorConfig {
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.parser.max_count = max_count;
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history.limit = limit;
        self
    }

    /// Reject settings no editor can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.max_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "parser.max_count".to_string(),
                value: "0".to_string(),
            });
        }
        if self.history.limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "history.limit".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(feature = "serde_support")]
impl EditorConfig {
    /// Decode a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.parser.max_count, 2_147_483_647);
        assert_eq!(config.history.limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = EditorConfig::default()
            .with_max_count(99)
            .with_history_limit(Some(3));
        assert_eq!(config.parser.max_count, 99);
        assert_eq!(config.history.limit, Some(3));
    }

    #[test]
    fn test_validate_rejects_zero_max_count() {
        let config = EditorConfig::default().with_max_count(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                key: "parser.max_count".to_string(),
                value: "0".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_history_limit() {
        let config = EditorConfig::default().with_history_limit(Some(0));
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn test_from_json_partial() {
        let config = EditorConfig::from_json(r#"{"history":{"limit":5}}"#).unwrap();
        assert_eq!(config.history.limit, Some(5));
        assert_eq!(config.parser.max_count, DEFAULT_MAX_COUNT);
    }

    #[cfg(feature = "serde_support")]
    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            EditorConfig::from_json("{not json"),
            Err(ConfigError::Malformed(_))
        ));
    }
}
