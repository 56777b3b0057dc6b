//! In-memory RGB565 framebuffer
//!
//! Stands in for the badge display in the demo binary and in tests. Drawing
//! outside the buffer is clipped.

use super::Surface;
use super::shapes::{circle_outline, filled_circle_spans, line_points};
use crate::color::{BLACK, Color};

/// Draw call counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub fills: u64,
    pub filled_circles: u64,
    pub circles: u64,
    pub lines: u64,
}

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    stats: DrawStats,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![BLACK; (width * height) as usize],
            stats: DrawStats::default(),
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Number of pixels currently holding `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = DrawStats::default();
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn fill(&mut self, color: Color) {
        self.stats.fills += 1;
        self.pixels.fill(color);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.stats.filled_circles += 1;
        for (y, x0, x1) in filled_circle_spans(cx, cy, radius) {
            if y < 0 || y >= self.height {
                continue;
            }
            for x in x0.max(0)..=x1.min(self.width - 1) {
                self.set_pixel(x, y, color);
            }
        }
    }

    fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.stats.circles += 1;
        for (x, y) in circle_outline(cx, cy, radius) {
            self.set_pixel(x, y, color);
        }
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.stats.lines += 1;
        for (x, y) in line_points(x0, y0, x1, y1) {
            self.set_pixel(x, y, color);
        }
    }
}
