//! Editor configuration.
//!
//! Every field has a default, so a host can pass a partial JSON object
//! (or nothing at all) and get a working editor.

use crate::size::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE, SizePolicy};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_DEPTH: usize = 80;
pub const DEFAULT_EXPORT_FILENAME: &str = "letterboard.png";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid editor config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Logical surface width in pixels.
    pub canvas_width: f32,
    /// Logical surface height in pixels.
    pub canvas_height: f32,
    /// Maximum entries on each of the undo and redo stacks.
    pub history_depth: usize,
    pub default_font_size: f32,
    pub min_font_size: f32,
    pub max_font_size: f32,
    /// Alpha applied to the placement preview.
    pub preview_opacity: f32,
    pub export_filename: String,
    /// Fill painted on clear; `None` leaves the surface transparent.
    pub background: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 3840.0,
            canvas_height: 2160.0,
            history_depth: DEFAULT_HISTORY_DEPTH,
            default_font_size: DEFAULT_FONT_SIZE,
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
            preview_opacity: 0.5,
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
            background: Some("#ffffff".to_string()),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a (possibly partial) JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas must have positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.history_depth == 0 {
            return Err(ConfigError::Invalid("history_depth must be at least 1".into()));
        }
        if !(self.min_font_size > 0.0 && self.min_font_size <= self.max_font_size) {
            return Err(ConfigError::Invalid(format!(
                "font size range {}..={} is empty",
                self.min_font_size, self.max_font_size
            )));
        }
        if !(0.0..=1.0).contains(&self.preview_opacity) {
            return Err(ConfigError::Invalid(format!(
                "preview_opacity {} outside 0..=1",
                self.preview_opacity
            )));
        }
        Ok(())
    }

    pub fn size_policy(&self) -> SizePolicy {
        SizePolicy {
            default: self.default_font_size,
            min: self.min_font_size,
            max: self.max_font_size,
        }
    }

    /// Exact center of the logical surface.
    pub fn center(&self) -> (f32, f32) {
        (self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}
