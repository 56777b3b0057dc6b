//! Depth ordering of discs
//!
//! Tilt projects a synthetic "low point" far off the display. Discs closer to
//! it count as lower: they are placed first in collision precedence and
//! painted first so higher discs occlude them.

use glam::Vec2;

use super::state::Disc;
use crate::consts::LOW_POINT_SCALE;
use crate::distance_squared;

/// Low point for the given tilt. Sensor y points the other way from screen y.
#[inline]
pub fn low_point(tilt: Vec2) -> Vec2 {
    Vec2::new(LOW_POINT_SCALE * tilt.x, -LOW_POINT_SCALE * tilt.y)
}

/// Squared distance from the low point; smaller is lower
#[inline]
pub fn height(disc: &Disc, low: Vec2) -> f32 {
    distance_squared(disc.pos, low)
}

/// Registry indices sorted lowest first.
///
/// Recomputed from scratch every tick. The sort is stable so equal heights
/// keep registry order.
pub fn depth_order(discs: &[Disc], low: Vec2) -> Vec<usize> {
    let heights: Vec<f32> = discs.iter().map(|d| height(d, low)).collect();
    let mut order: Vec<usize> = (0..discs.len()).collect();
    order.sort_by(|&a, &b| heights[a].total_cmp(&heights[b]));
    order
}
