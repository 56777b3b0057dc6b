//! Tilt Balls - accelerometer-driven disc toys for a handheld badge
//!
//! Core modules:
//! - `color`: RGB565 palette
//! - `sim`: Deterministic simulation (registry, depth order, motion, collisions)
//! - `renderer`: Display surface abstraction, rasterisation and an in-memory framebuffer
//! - `platform`: Accelerometer sources
//! - `scheduler`: Tick driver over a cancellable timer queue
//! - `app`: The ball toy apps, crosshair input and the host event loop
//! - `settings`: JSON configuration

pub mod app;
pub mod color;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use app::{BallApp, Button, Host, Variant};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Radius shared by every disc (pixels)
    pub const BALL_RADIUS: f32 = 5.0;
    /// Pixels moved per tick at full tilt
    pub const SPEED: f32 = 20.0;

    /// Moving discs seeded on activation
    pub const BALL_COUNT: usize = 10;
    /// Static discs seeded by the tilt variant
    pub const STATIC_COUNT: usize = 5;

    /// Scale from tilt to the synthetic low point. Y is negated on use.
    pub const LOW_POINT_SCALE: f32 = 10_000.0;

    /// Squared centre distance at or below which two discs collide
    pub const COLLISION_DISTANCE_SQUARED: f32 = (2.0 * BALL_RADIUS) * (2.0 * BALL_RADIUS);

    /// Tick period for the fixed-period variant (ms)
    pub const FIXED_PERIOD_MS: u64 = 100;
    /// Delay between the end of one tick and the next for the chained variant (ms)
    pub const CHAINED_DELAY_MS: u64 = 10;

    /// Half-length of the crosshair arms (pixels)
    pub const CROSSHAIR_LENGTH: i32 = 10;
}

/// Squared distance between two points
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}
