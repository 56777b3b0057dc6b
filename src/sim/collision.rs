//! Collision testing between a candidate position and already placed discs
//!
//! Only discs earlier than the mover in this tick's depth order are checked.
//! Anything after it has not been placed yet, so avoidance is one-directional:
//! a disc can still end a tick overlapping one processed later.

use glam::Vec2;

use super::state::Disc;
use crate::consts::COLLISION_DISTANCE_SQUARED;
use crate::distance_squared;

/// Returns true if `candidate` touches or overlaps a disc placed before `id`.
///
/// `order` holds registry indices lowest first. The scan stops at the mover's
/// own entry. Exact tangency counts as a hit.
pub fn has_collision(id: u32, candidate: Vec2, order: &[usize], discs: &[Disc]) -> bool {
    order
        .iter()
        .map(|&index| &discs[index])
        .take_while(|other| other.id != id)
        .any(|other| distance_squared(candidate, other.pos) <= COLLISION_DISTANCE_SQUARED)
}
