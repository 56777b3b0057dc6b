//! RGB565 colours for the badge display

use serde::{Deserialize, Serialize};

/// A 16-bit RGB565 paint value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u16);

/// Pack 8-bit channels into RGB565
#[inline]
pub const fn color565(r: u8, g: u8, b: u8) -> Color {
    Color((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
}

pub const BLACK: Color = Color(0x0000);
pub const WHITE: Color = Color(0xFFFF);
pub const RED: Color = Color(0xF800);
pub const GREEN: Color = Color(0x07E0);
pub const BLUE: Color = Color(0x001F);
pub const YELLOW: Color = Color(0xFFE0);
pub const MAGENTA: Color = Color(0xF81F);
pub const CYAN: Color = Color(0x07FF);

/// Palette moving discs are drawn from
pub const BALL_COLORS: [Color; 6] = [RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN];

pub const BACKGROUND_COLOR: Color = BLACK;
pub const OBSTACLE_COLOR: Color = WHITE;
pub const CROSSHAIR_COLOR: Color = YELLOW;
