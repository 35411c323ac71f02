//! Editor configuration.
//!
//! Recognized options are `height` (grid rows) and `width` (grid
//! columns). Both are optional in JSON; missing fields fall back to the
//! 64 × 48 default.

use crate::model::GridSize;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEIGHT: u32 = 64;
pub const DEFAULT_WIDTH: u32 = 48;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid must have at least one cell on each axis (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid rows.
    pub height: u32,
    /// Grid columns.
    pub width: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl EditorConfig {
    /// Parse a JSON config object. Blank input yields the default.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            log::debug!("no editor config given; using {DEFAULT_WIDTH}x{DEFAULT_HEIGHT} grid");
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }
}
