//! Deterministic simulation module
//!
//! All disc logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable depth ordering (ties keep registry order)
//! - No display or platform dependencies

pub mod collision;
pub mod depth;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::has_collision;
pub use depth::{depth_order, height, low_point};
pub use motion::{candidate_position, integrate};
pub use state::{Disc, Discs, Playfield, SimState, StaticRedraw};
pub use tick::{PaintOp, TickInput, TickReport, tick};
