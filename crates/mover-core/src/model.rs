//! Geometry, colors, and border styles for movable elements.
//!
//! All coordinates are page coordinates in CSS pixels, `f32` throughout.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Emit as `#RRGGBB` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Draw an opaque color from a uniform source in `[0, 1)`, one sample per channel.
    pub fn random(mut sample: impl FnMut() -> f64) -> Self {
        let mut channel = || (sample() * 256.0).floor().clamp(0.0, 255.0) as u8;
        let r = channel();
        let g = channel();
        let b = channel();
        Self::rgb(r, g, b)
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Width and height of an element, captured once at registration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// An axis-aligned layout rectangle (`left`, `top`, `width`, `height`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left && px <= self.right() && py >= self.top && py <= self.bottom()
    }
}

/// Edges of an element's containing region, frozen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl From<Rect> for ContainerBounds {
    fn from(r: Rect) -> Self {
        Self {
            left: r.left,
            right: r.right(),
            top: r.top,
            bottom: r.bottom(),
        }
    }
}

// ─── Borders ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineStyle::Solid => f.write_str("solid"),
            LineStyle::Dashed => f.write_str("dashed"),
        }
    }
}

/// Border drawn around an element; selection swaps between two of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    pub width: f32,
    pub line: LineStyle,
    pub color: Color,
}

impl BorderStyle {
    /// Thin solid indicator for unselected elements.
    pub const fn thin_solid() -> Self {
        Self {
            width: 1.0,
            line: LineStyle::Solid,
            color: Color::BLACK,
        }
    }

    /// Thick dashed indicator for selected elements.
    pub const fn thick_dashed() -> Self {
        Self {
            width: 2.0,
            line: LineStyle::Dashed,
            color: Color::BLACK,
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {} {}", self.width, self.line, self.color.to_hex())
    }
}

// ─── Directions ──────────────────────────────────────────────────────────

/// One of the four arrow-key directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Stable index into per-key state tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit offset of one step in this direction (y grows downward).
    pub fn delta(self) -> (f32, f32) {
        match self {
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_rrggbb() {
        assert_eq!(Color::rgb(10, 171, 255).to_hex(), "#0AABFF");
        assert_eq!(Color { a: 0, ..Color::WHITE }.to_hex(), "#FFFFFF");
    }

    #[test]
    fn random_color_uses_one_sample_per_channel() {
        let mut samples = [0.0, 0.5, 0.999_999].into_iter();
        let c = Color::random(|| samples.next().unwrap_or(0.0));
        assert_eq!(c, Color::rgb(0, 128, 255));
    }

    #[test]
    fn container_bounds_from_rect() {
        let b = ContainerBounds::from(Rect::new(10.0, 20.0, 300.0, 200.0));
        assert_eq!(b.left, 10.0);
        assert_eq!(b.right, 310.0);
        assert_eq!(b.top, 20.0);
        assert_eq!(b.bottom, 220.0);
    }

    #[test]
    fn border_css() {
        assert_eq!(BorderStyle::thin_solid().to_string(), "1px solid #000000");
        assert_eq!(BorderStyle::thick_dashed().to_string(), "2px dashed #000000");
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("a"), None);
        assert_eq!(Direction::Left.delta(), (-1.0, 0.0));
    }
}
