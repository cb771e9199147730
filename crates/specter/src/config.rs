//! Runtime configuration.
//!
//! Everything here is plain data. Addresses and field offsets live in the
//! offset table; this is the per-run tuning surface: what to draw, how
//! often, and onto how large a surface.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::math::Viewport;
use crate::overlay::Color;

/// Default values shared between the config structs and the CLI.
pub mod defaults {
    use crate::overlay::Color;

    /// Entity slots scanned per tick.
    pub const MAX_ENTITIES: usize = 64;

    /// Milliseconds slept between ticks.
    pub const UPDATE_INTERVAL_MS: u64 = 1;

    /// Milliseconds the startup label stays visible.
    pub const STARTUP_MESSAGE_MS: u64 = 5_000;

    /// Startup label anchor on the overlay surface.
    pub const STARTUP_MESSAGE_X: f32 = 100.0;
    pub const STARTUP_MESSAGE_Y: f32 = 20.0;

    pub const STARTUP_MESSAGE: &str = "specter attached";

    pub const BOX_COLOR: Color = Color::new(158, 66, 244);
    pub const BOX_THICKNESS: u32 = 2;
    pub const TEXT_COLOR: Color = Color::WHITE;
    pub const HEALTH_COLOR: Color = Color::WHITE;
    pub const MESSAGE_COLOR: Color = Color::RED;

    /// Title of the window the overlay paints onto.
    pub const WINDOW_TITLE: &str = "Call of Duty®: BlackOps";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub performance: PerformanceConfig,
    pub screen: Viewport,
    pub window: WindowConfig,
}

impl Config {
    /// Load configuration from a JSON file. Missing fields fall back to
    /// their defaults, so a partial file is fine.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved config to {}", path.as_ref().display());
        Ok(())
    }
}

/// What gets drawn, and in which colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_boxes: bool,
    pub show_health: bool,
    pub show_startup_message: bool,
    pub startup_message: String,
    pub startup_message_ms: u64,
    pub box_color: Color,
    pub box_thickness: u32,
    pub text_color: Color,
    pub health_color: Color,
    pub message_color: Color,
}

impl DisplayConfig {
    pub fn startup_message_duration(&self) -> Duration {
        Duration::from_millis(self.startup_message_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_boxes: true,
            show_health: true,
            show_startup_message: true,
            startup_message: defaults::STARTUP_MESSAGE.to_string(),
            startup_message_ms: defaults::STARTUP_MESSAGE_MS,
            box_color: defaults::BOX_COLOR,
            box_thickness: defaults::BOX_THICKNESS,
            text_color: defaults::TEXT_COLOR,
            health_color: defaults::HEALTH_COLOR,
            message_color: defaults::MESSAGE_COLOR,
        }
    }
}

/// Scan bounds and tick pacing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub max_entities: usize,
    pub update_interval_ms: u64,
}

impl PerformanceConfig {
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_entities: defaults::MAX_ENTITIES,
            update_interval_ms: defaults::UPDATE_INTERVAL_MS,
        }
    }
}

/// The window the overlay attaches to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: defaults::WINDOW_TITLE.to_string(),
        }
    }
}
