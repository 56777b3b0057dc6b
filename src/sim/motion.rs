//! Tilt-driven motion for moving discs
//!
//! There is no velocity: each tick a disc steps straight toward the tilt by
//! `speed * tilt`, clamped to the playfield. A step that would touch an
//! already placed disc is rejected outright and the disc stays put.

use glam::Vec2;

use super::collision::has_collision;
use super::state::{Disc, Playfield};

/// Where a disc at `pos` would go under `tilt` this tick
#[inline]
pub fn candidate_position(pos: Vec2, tilt: Vec2, speed: f32, playfield: &Playfield) -> Vec2 {
    playfield.clamp(Vec2::new(pos.x + tilt.x * speed, pos.y - tilt.y * speed))
}

/// Try to move the disc at registry `index`.
///
/// Returns true if the disc moved to its candidate position. Static discs are
/// never touched.
pub fn integrate(
    index: usize,
    tilt: Vec2,
    speed: f32,
    playfield: &Playfield,
    order: &[usize],
    discs: &mut [Disc],
) -> bool {
    let disc = discs[index];
    if disc.is_static {
        return false;
    }

    let candidate = candidate_position(disc.pos, tilt, speed, playfield);
    let blocked = has_collision(disc.id, candidate, order, discs);

    let disc = &mut discs[index];
    disc.has_collision = blocked;
    if !blocked {
        disc.pos = candidate;
    }
    !blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GREEN, RED};
    use crate::consts::{BALL_RADIUS, SPEED};

    #[test]
    fn test_candidate_follows_tilt_with_y_flipped() {
        let playfield = Playfield::new(200.0, 200.0);
        let c = candidate_position(Vec2::new(100.0, 100.0), Vec2::new(0.5, 0.5), SPEED, &playfield);
        assert_eq!(c, Vec2::new(110.0, 90.0));
    }

    #[test]
    fn test_candidate_clamps_to_playfield() {
        let playfield = Playfield::new(135.0, 240.0);
        let c = candidate_position(Vec2::new(130.0, 6.0), Vec2::new(1.0, 1.0), SPEED, &playfield);
        assert_eq!(c, Vec2::new(135.0 - BALL_RADIUS, BALL_RADIUS));

        // Readings past full scale are still bounded by the clamp
        let c = candidate_position(Vec2::new(50.0, 50.0), Vec2::new(-40.0, -40.0), SPEED, &playfield);
        assert_eq!(c, Vec2::new(BALL_RADIUS, 240.0 - BALL_RADIUS));
    }

    #[test]
    fn test_zero_tilt_single_disc_stays_put() {
        let playfield = Playfield::new(200.0, 200.0);
        let mut discs = [Disc::moving(0, Vec2::new(50.0, 50.0), RED)];
        let moved = integrate(0, Vec2::ZERO, SPEED, &playfield, &[0], &mut discs);
        assert!(moved);
        assert_eq!(discs[0].pos, Vec2::new(50.0, 50.0));
        assert!(!discs[0].has_collision);
    }

    #[test]
    fn test_rejected_move_leaves_position_unchanged() {
        let playfield = Playfield::new(200.0, 200.0);
        let mut discs = [
            Disc::moving(0, Vec2::new(40.0, 40.0), RED),
            Disc::moving(1, Vec2::new(45.0, 40.0), GREEN),
        ];
        let order = [0, 1];
        // Push left, toward disc 0
        let tilt = Vec2::new(-0.1, 0.0);
        assert!(!integrate(1, tilt, SPEED, &playfield, &order, &mut discs));
        assert_eq!(discs[1].pos, Vec2::new(45.0, 40.0));
        assert!(discs[1].has_collision);
    }

    #[test]
    fn test_successful_move_clears_collision_flag() {
        let playfield = Playfield::new(200.0, 200.0);
        let mut discs = [Disc::moving(0, Vec2::new(40.0, 40.0), RED)];
        discs[0].has_collision = true;
        assert!(integrate(0, Vec2::new(0.5, 0.0), SPEED, &playfield, &[0], &mut discs));
        assert_eq!(discs[0].pos, Vec2::new(50.0, 40.0));
        assert!(!discs[0].has_collision);
    }

    #[test]
    fn test_static_disc_is_never_integrated() {
        let playfield = Playfield::new(200.0, 200.0);
        let mut discs = [Disc::obstacle(0, Vec2::new(60.0, 60.0))];
        assert!(!integrate(0, Vec2::new(1.0, -1.0), SPEED, &playfield, &[0], &mut discs));
        assert_eq!(discs[0].pos, Vec2::new(60.0, 60.0));
        assert!(!discs[0].has_collision);
    }
}
