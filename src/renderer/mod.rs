//! Display surface abstraction
//!
//! The badge display is an external collaborator. The simulation only needs a
//! surface with a size and a filled-circle primitive; the crosshair also uses
//! lines and circle outlines.

pub mod framebuffer;
pub mod shapes;

pub use framebuffer::FrameBuffer;

use crate::color::Color;
use crate::consts::BALL_RADIUS;
use crate::sim::PaintOp;

/// A display addressed in integer pixels
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    /// Paint the whole surface
    fn fill(&mut self, color: Color);
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);
    /// Circle outline
    fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
}

/// Disc radius in whole pixels
#[inline]
pub fn disc_radius_px() -> i32 {
    BALL_RADIUS as i32
}

/// Apply a tick's paint operations in order
pub fn paint<S: Surface + ?Sized>(surface: &mut S, ops: &[PaintOp], background: Color) {
    let r = disc_radius_px();
    for op in ops {
        match *op {
            PaintOp::Erase { x, y } => surface.fill_circle(x, y, r, background),
            PaintOp::Draw { x, y, color } => surface.fill_circle(x, y, r, color),
        }
    }
}
