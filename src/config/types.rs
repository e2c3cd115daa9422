//! Configuration struct definitions.

use serde::{Deserialize, Serialize};

/// Drawing pen defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Starting pen color: "red", "green", "blue", or "black"
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Starting pen thickness in pixels
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
        }
    }
}

fn default_color() -> String {
    "red".to_string()
}

fn default_thickness() -> f64 {
    2.0
}

/// Initial window geometry and title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial window width in logical pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
        }
    }
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    700
}

fn default_title() -> String {
    "waydraw".to_string()
}

/// Performance tuning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of shm buffers to rotate through (2-4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: usize,

    /// Whether to throttle redraws to compositor frame callbacks
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

fn default_buffer_count() -> usize {
    3
}

fn default_enable_vsync() -> bool {
    true
}
