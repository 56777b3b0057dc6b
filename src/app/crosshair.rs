//! Crosshair cursor for placing obstacles

use glam::Vec2;

use crate::color::Color;
use crate::consts::{BALL_RADIUS, CROSSHAIR_LENGTH};
use crate::renderer::{Surface, disc_radius_px};
use crate::sim::Playfield;

/// One joystick step: one disc diameter
pub const CROSSHAIR_STEP: f32 = 2.0 * BALL_RADIUS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    pub pos: Vec2,
}

impl Crosshair {
    /// Bottom-left corner of the playfield
    pub fn home(playfield: &Playfield) -> Self {
        Self {
            pos: playfield.clamp(Vec2::new(BALL_RADIUS, playfield.height - BALL_RADIUS)),
        }
    }

    /// Move by `offset`, staying inside the playfield. Returns true if it moved.
    pub fn step(&mut self, offset: Vec2, playfield: &Playfield) -> bool {
        let next = playfield.clamp(self.pos + offset);
        let moved = next != self.pos;
        self.pos = next;
        moved
    }

    /// Integer pixel centre
    pub fn pixel(&self) -> (i32, i32) {
        (self.pos.x as i32, self.pos.y as i32)
    }

    /// Cross arms plus a disc-sized ring
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Color) {
        let (x, y) = self.pixel();
        surface.line(x - CROSSHAIR_LENGTH, y, x + CROSSHAIR_LENGTH, y, color);
        surface.line(x, y - CROSSHAIR_LENGTH, x, y + CROSSHAIR_LENGTH, color);
        surface.circle(x, y, disc_radius_px(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, YELLOW};
    use crate::renderer::FrameBuffer;

    #[test]
    fn test_home_is_bottom_left() {
        let crosshair = Crosshair::home(&Playfield::new(135.0, 240.0));
        assert_eq!(crosshair.pos, Vec2::new(5.0, 235.0));
    }

    #[test]
    fn test_step_is_clamped() {
        let playfield = Playfield::new(135.0, 240.0);
        let mut crosshair = Crosshair::home(&playfield);

        assert!(!crosshair.step(Vec2::new(-CROSSHAIR_STEP, 0.0), &playfield));
        assert!(!crosshair.step(Vec2::new(0.0, CROSSHAIR_STEP), &playfield));
        assert!(crosshair.step(Vec2::new(0.0, -CROSSHAIR_STEP), &playfield));
        assert_eq!(crosshair.pos, Vec2::new(5.0, 225.0));

        for _ in 0..50 {
            crosshair.step(Vec2::new(CROSSHAIR_STEP, 0.0), &playfield);
        }
        assert_eq!(crosshair.pos.x, 130.0);
    }

    #[test]
    fn test_draw_and_erase() {
        let mut fb = FrameBuffer::new(60, 60);
        let crosshair = Crosshair { pos: Vec2::new(30.0, 30.0) };

        crosshair.draw(&mut fb, YELLOW);
        assert_eq!(fb.pixel(30, 30), Some(YELLOW));
        assert_eq!(fb.pixel(20, 30), Some(YELLOW));
        assert_eq!(fb.pixel(30, 40), Some(YELLOW));
        assert_eq!(fb.pixel(35, 30), Some(YELLOW));

        crosshair.draw(&mut fb, BLACK);
        assert_eq!(fb.count(YELLOW), 0);
    }
}
