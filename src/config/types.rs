use serde::{Deserialize, Serialize};

use crate::census::{DEFAULT_COUNT, DEFAULT_MAX_VALUE};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub census: CensusConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Interval generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensusConfig {
    /// Upper bound for drawn numbers and interval ends (default: 10^9).
    #[serde(default = "default_max_value")]
    pub max_value: u64,
    /// Interval count used when none is given on the command line (default: 10^6).
    #[serde(default = "default_count")]
    pub default_count: usize,
}

/// Keyboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Key that stops the loop (default: `q`).
    #[serde(default = "default_quit_key")]
    pub quit_key: char,
}

fn default_max_value() -> u64 {
    DEFAULT_MAX_VALUE
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_quit_key() -> char {
    'q'
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
            default_count: default_count(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            quit_key: default_quit_key(),
        }
    }
}
