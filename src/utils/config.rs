//! Runtime configuration
//!
//! Defaults live in `planekit.toml`, compiled into the binary. A user file
//! with the same layout overrides individual keys:
//!
//! ```toml
//! [tiling]
//! soft_cap_bytes = 1048576
//! tile_budget_bytes = 2097152
//!
//! [extraction]
//! max_region_bytes = 2147483647
//! ```

use std::fs;

use lazy_static::lazy_static;
use log::{debug, warn};

use crate::extractor::MAX_REGION_BYTES;
use crate::plane::{PlaneError, PlaneResult};
use crate::tiling::{TileSizeOptimizer, SOFT_CAP_BYTES, TILE_BUDGET_BYTES};

lazy_static! {
    static ref DEFAULT_CONFIG: PlaneKitConfig = {
        let content = include_str!("../../planekit.toml");
        PlaneKitConfig::builtin().merge_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            PlaneKitConfig::builtin()
        })
    };
}

/// Budgets used by the tile optimizer and the region extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneKitConfig {
    pub soft_cap_bytes: u64,
    pub tile_budget_bytes: u64,
    pub max_region_bytes: u64,
}

impl Default for PlaneKitConfig {
    fn default() -> Self {
        *DEFAULT_CONFIG
    }
}

impl PlaneKitConfig {
    fn builtin() -> Self {
        PlaneKitConfig {
            soft_cap_bytes: SOFT_CAP_BYTES,
            tile_budget_bytes: TILE_BUDGET_BYTES,
            max_region_bytes: MAX_REGION_BYTES,
        }
    }

    /// Defaults overridden by the keys present in `content`
    pub fn from_str(content: &str) -> PlaneResult<Self> {
        Self::default().merge_str(content)
    }

    /// Defaults overridden by the keys present in the file at `path`
    pub fn from_file(path: &str) -> PlaneResult<Self> {
        let content = fs::read_to_string(path)?;
        debug!("Loaded configuration from {}", path);
        Self::from_str(&content)
    }

    /// Copy of `self` with the keys in `content` applied
    pub fn merge_str(mut self, content: &str) -> PlaneResult<Self> {
        let value: toml::Value = content
            .parse()
            .map_err(|e| PlaneError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;

        if let Some(table) = value.get("tiling").and_then(|v| v.as_table()) {
            for (key, v) in table {
                match key.as_str() {
                    "soft_cap_bytes" => self.soft_cap_bytes = positive("tiling", key, v)?,
                    "tile_budget_bytes" => self.tile_budget_bytes = positive("tiling", key, v)?,
                    _ => warn!("Ignoring unknown configuration key tiling.{}", key),
                }
            }
        }

        if let Some(table) = value.get("extraction").and_then(|v| v.as_table()) {
            for (key, v) in table {
                match key.as_str() {
                    "max_region_bytes" => self.max_region_bytes = positive("extraction", key, v)?,
                    _ => warn!("Ignoring unknown configuration key extraction.{}", key),
                }
            }
        }

        Ok(self)
    }

    /// Tile optimizer using the configured budgets
    pub fn optimizer(&self) -> TileSizeOptimizer {
        TileSizeOptimizer::new(self.soft_cap_bytes, self.tile_budget_bytes)
    }
}

fn positive(section: &str, key: &str, value: &toml::Value) -> PlaneResult<u64> {
    match value.as_integer() {
        Some(n) if n > 0 => Ok(n as u64),
        Some(n) => Err(PlaneError::InvalidConfig(format!(
            "{}.{} must be positive, got {}",
            section, key, n
        ))),
        None => Err(PlaneError::InvalidConfig(format!(
            "{}.{} must be an integer, got {}",
            section, key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_file_matches_constants() {
        let config = PlaneKitConfig::default();
        assert_eq!(config.soft_cap_bytes, 1_048_576);
        assert_eq!(config.tile_budget_bytes, 2_097_152);
        assert_eq!(config.max_region_bytes, i32::MAX as u64);
    }

    #[test]
    fn test_partial_override() {
        let config = PlaneKitConfig::from_str("[tiling]\ntile_budget_bytes = 4096\n").unwrap();
        assert_eq!(config.tile_budget_bytes, 4096);
        assert_eq!(config.soft_cap_bytes, SOFT_CAP_BYTES);
        assert_eq!(config.max_region_bytes, MAX_REGION_BYTES);
        assert_eq!(config.optimizer().tile_budget_bytes(), 4096);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for content in [
            "[tiling]\nsoft_cap_bytes = 0\n",
            "[extraction]\nmax_region_bytes = -5\n",
            "[tiling]\ntile_budget_bytes = \"big\"\n",
            "[tiling\n",
        ] {
            match PlaneKitConfig::from_str(content) {
                Err(PlaneError::InvalidConfig(_)) => {}
                other => panic!("expected InvalidConfig for {:?}, got {:?}", content, other),
            }
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match PlaneKitConfig::from_file("/nonexistent/planekit.toml") {
            Err(PlaneError::IoError(_)) => {}
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
