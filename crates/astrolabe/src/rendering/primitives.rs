use serde::{Deserialize, Serialize};

/// Point relative to the chart center; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the chart center.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Square of the given half-extent centered on the origin.
    pub fn centered(half_extent: f64) -> Self {
        Self {
            x: -half_extent,
            y: -half_extent,
            width: half_extent * 2.0,
            height: half_extent * 2.0,
        }
    }
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(160, 160, 164);
    pub const DARK_GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const DARK_RED: Color = Color::rgb(128, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
}

/// Line pattern, matching the usual toolkit pen styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    NoPen,
}

impl PenStyle {
    /// Dash pattern in multiples of the stroke width; `None` draws a continuous line.
    pub fn dash_pattern(self) -> Option<Vec<f64>> {
        match self {
            PenStyle::Solid | PenStyle::NoPen => None,
            PenStyle::Dash => Some(vec![4.0, 2.0]),
            PenStyle::Dot => Some(vec![1.0, 2.0]),
            PenStyle::DashDot => Some(vec![4.0, 2.0, 1.0, 2.0]),
            PenStyle::DashDotDot => Some(vec![4.0, 2.0, 1.0, 2.0, 1.0, 2.0]),
        }
    }
}

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub style: PenStyle,
    pub dash_array: Option<Vec<f64>>,
}

impl Stroke {
    pub fn new(color: Color, width: f64, style: PenStyle) -> Self {
        Self {
            color,
            width,
            style,
            dash_array: style.dash_pattern(),
        }
    }

    pub fn solid(color: Color, width: f64) -> Self {
        Self::new(color, width, PenStyle::Solid)
    }
}
