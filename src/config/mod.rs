//! Configuration file support for waydraw.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/waydraw/config.toml`. Settings
//! include pen defaults, window geometry, performance tuning, and
//! keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod keybindings;
pub mod types;

pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{DrawingConfig, PerformanceConfig, WindowConfig};

use crate::draw::PaletteColor;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have defaults and fall back to them when absent.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "blue"
/// default_thickness = 3.0
///
/// [window]
/// width = 1280
/// height = 800
///
/// [keybindings]
/// undo = ["U", "Ctrl+Z"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen defaults (color, thickness)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Initial window geometry
    #[serde(default)]
    pub window: WindowConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced with the nearest valid value and a
    /// warning is logged, so a bad config never aborts startup.
    fn validate_and_clamp(&mut self) {
        if self.drawing.default_thickness < 1.0 {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to minimum 1.0",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = 1.0;
        }

        if self.drawing.default_color.parse::<PaletteColor>().is_err() {
            log::warn!(
                "Unknown default_color '{}', falling back to 'red'",
                self.drawing.default_color
            );
            self.drawing.default_color = "red".to_string();
        }

        if self.window.width == 0 || self.window.height == 0 {
            log::warn!(
                "Invalid window size {}x{}, falling back to defaults",
                self.window.width,
                self.window.height
            );
            let defaults = WindowConfig::default();
            self.window.width = defaults.width;
            self.window.height = defaults.height;
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Returns the parsed default pen color. Only valid after
    /// `validate_and_clamp`, which `load` always runs.
    pub fn default_color(&self) -> PaletteColor {
        self.drawing
            .default_color
            .parse()
            .unwrap_or(PaletteColor::Red)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/waydraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("waydraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
