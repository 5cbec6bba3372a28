//! Sizing for a puzzle instance and its validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::NODE_COUNT;

/// Size of a puzzle instance. Defaults match the stock module: six nodes
/// start identified and three targets must be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Label used in log lines so several sessions can share one log.
    pub instance: u32,
    /// Nodes whose symbol is visible from the start.
    pub identified: usize,
    /// Targets to confirm, in order.
    pub targets: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            instance: 1,
            identified: 6,
            targets: 3,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one target is required")]
    NoTargets,
    #[error("{identified} identified nodes and {targets} targets do not fit in {NODE_COUNT} nodes")]
    TooManyNodes { identified: usize, targets: usize },
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets == 0 {
            return Err(ConfigError::NoTargets);
        }
        // Targets come from the unidentified nodes, which also hold the start.
        let needed = self.identified.checked_add(self.targets);
        if needed.map_or(true, |n| n > NODE_COUNT) {
            return Err(ConfigError::TooManyNodes {
                identified: self.identified,
                targets: self.targets,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_targets() {
        let config = SessionConfig {
            targets: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoTargets));
    }

    #[test]
    fn rejects_counts_larger_than_the_cube() {
        let config = SessionConfig {
            identified: 20,
            targets: 8,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyNodes {
                identified: 20,
                targets: 8
            })
        );
        let full = SessionConfig {
            identified: 24,
            targets: 3,
            ..SessionConfig::default()
        };
        assert_eq!(full.validate(), Ok(()));
    }

    #[test]
    fn huge_counts_are_rejected_without_overflow() {
        let config = SessionConfig {
            identified: usize::MAX,
            targets: 3,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyNodes {
                identified: usize::MAX,
                targets: 3
            })
        );
        let both = SessionConfig {
            identified: usize::MAX,
            targets: usize::MAX,
            ..SessionConfig::default()
        };
        assert!(both.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{ "targets": 5 }"#).unwrap();
        assert_eq!(config.targets, 5);
        assert_eq!(config.identified, 6);
        assert_eq!(config.instance, 1);
    }
}
