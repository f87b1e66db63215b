//! Configuration for the query layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Articles an author must strictly exceed in one magazine to count as a
/// contributing author.
pub const DEFAULT_CONTRIBUTOR_THRESHOLD: usize = 2;

/// Tunables for insight queries and digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsightsConfig {
    /// An author qualifies as contributing when their article count in a
    /// magazine is strictly greater than this.
    pub contributor_threshold: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            contributor_threshold: DEFAULT_CONTRIBUTOR_THRESHOLD,
        }
    }
}

impl InsightsConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid insights configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
