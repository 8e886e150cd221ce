//! Configuration type definitions

use crate::graph::types::Strategy;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Number of leading and trailing vertices shown when a long path is rendered
pub const DEFAULT_PATH_CUT: usize = 10;

/// Decimal places used when rendering a path weight
pub const DEFAULT_WEIGHT_PRECISION: usize = 2;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Search used when a caller does not pick one explicitly
    #[serde(default)]
    pub default_strategy: Strategy,

    /// Path rendering configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Configuration for rendering paths as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Leading/trailing vertex count kept when a path is abbreviated; 0 never abbreviates
    #[serde(default = "default_path_cut")]
    pub path_cut: usize,

    /// Decimal places for the weight
    #[serde(default = "default_weight_precision")]
    pub weight_precision: usize,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_path_cut() -> usize {
    DEFAULT_PATH_CUT
}

fn default_weight_precision() -> usize {
    DEFAULT_WEIGHT_PRECISION
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            default_strategy: Strategy::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            path_cut: DEFAULT_PATH_CUT,
            weight_precision: DEFAULT_WEIGHT_PRECISION,
        }
    }
}
