//! Theme: dark canvas, Site Kit blue accent.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas (activity area).
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Input bar, status, palette.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Prompt, selection bar, matched characters.
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// Category headings.
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    /// Selected palette row.
    pub const ACCENT_GLOW: Color = Color::Rgb(0x1e, 0x2d, 0x3d);
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    pub const SUCCESS: Color = Color::Rgb(0x7c, 0xd9, 0x92);
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);
}

pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
/// Top border plus one line of input.
pub const INPUT_HEIGHT: u16 = 2;
pub const MIN_ACTIVITY_LINES: u16 = 3;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const PALETTE_MAX_HEIGHT: u16 = 18;
pub const PALETTE_MARGIN_BOTTOM: u16 = 1;
