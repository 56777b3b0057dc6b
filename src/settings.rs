//! Toy settings
//!
//! Loaded from a JSON file when one is given; every field falls back to the
//! badge defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::scheduler::Schedule;
use crate::sim::StaticRedraw;

/// Which ball toy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fixed-period ticks, random static discs, statics repainted every tick
    #[default]
    Tilt,
    /// Chained ticks, crosshair-placed obstacles, statics repainted when dirty
    Sandbox,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Tilt => "tilt",
            Variant::Sandbox => "sandbox",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tilt" | "jess" => Some(Variant::Tilt),
            "sandbox" | "balls" => Some(Variant::Sandbox),
            _ => None,
        }
    }

    pub fn static_redraw(&self) -> StaticRedraw {
        match self {
            Variant::Tilt => StaticRedraw::Always,
            Variant::Sandbox => StaticRedraw::WhenDirty,
        }
    }

    /// Whether the crosshair and obstacle buttons are live
    pub fn interactive(&self) -> bool {
        matches!(self, Variant::Sandbox)
    }
}

/// Errors loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Toy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,

    // === Discs ===
    /// Moving discs seeded on activation
    pub ball_count: usize,
    /// Random static discs seeded on activation (tilt variant only)
    pub static_count: usize,
    /// Pixels per tick at full tilt
    pub speed: f32,
    /// RNG seed for disc layout and colours
    pub seed: u64,

    // === Timing ===
    pub fixed_period_ms: u64,
    pub chained_delay_ms: u64,

    // === Diagnostics ===
    /// Log tilt, low point, height and frame rate every tick
    pub show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Tilt,

            ball_count: BALL_COUNT,
            static_count: STATIC_COUNT,
            speed: SPEED,
            seed: 0x7117_ba11,

            fixed_period_ms: FIXED_PERIOD_MS,
            chained_delay_ms: CHAINED_DELAY_MS,

            show_debug: false,
        }
    }
}

impl Settings {
    /// Defaults for a variant
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Tick schedule for the configured variant
    pub fn schedule(&self) -> Schedule {
        match self.variant {
            Variant::Tilt => Schedule::FixedPeriod {
                period_ms: self.fixed_period_ms,
            },
            Variant::Sandbox => Schedule::Chained {
                delay_ms: self.chained_delay_ms,
            },
        }
    }

    /// Static discs to seed; the sandbox starts without any
    pub fn seeded_statics(&self) -> usize {
        match self.variant {
            Variant::Tilt => self.static_count,
            Variant::Sandbox => 0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
