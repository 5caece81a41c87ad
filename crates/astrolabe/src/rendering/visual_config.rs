use crate::rendering::primitives::{Color, PenStyle, Stroke};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHART_DIAMETER: f64 = 700.0;
pub const DEFAULT_RING_THICKNESS: f64 = 30.0;
pub const DEFAULT_MARKER_DIAMETER: f64 = 35.0;
pub const DEFAULT_MARKER_INSET: f64 = 35.0;
pub const DEFAULT_HOUSE_RING_GAP: f64 = 10.0;
pub const DEFAULT_HOUSE_RING_WIDTH: f64 = 30.0;

pub const MIN_PEN_WIDTH: f64 = 0.5;
pub const MAX_PEN_WIDTH: f64 = 5.0;

/// Width and pattern used for one class of aspect lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectPen {
    pub width: f64,
    pub style: PenStyle,
}

impl AspectPen {
    pub const MAJOR_DEFAULT: AspectPen = AspectPen {
        width: 1.5,
        style: PenStyle::Solid,
    };
    pub const MINOR_DEFAULT: AspectPen = AspectPen {
        width: 1.0,
        style: PenStyle::Solid,
    };

    pub fn new(width: f64, style: PenStyle) -> Self {
        Self { width, style }
    }

    pub fn stroke(&self, color: Color) -> Stroke {
        Stroke::new(color, self.width, self.style)
    }
}

/// Display settings read at the start of every render.
///
/// Each chart view owns its own value; nothing here is process-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    chart_diameter: f64,
    ring_thickness: f64,
    marker_diameter: f64,
    marker_inset: f64,
    house_ring_gap: f64,
    house_ring_width: f64,
    show_aspects: bool,
    show_house_cusps: bool,
    show_planet_symbols: bool,
    major_pen: AspectPen,
    minor_pen: AspectPen,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart_diameter: DEFAULT_CHART_DIAMETER,
            ring_thickness: DEFAULT_RING_THICKNESS,
            marker_diameter: DEFAULT_MARKER_DIAMETER,
            marker_inset: DEFAULT_MARKER_INSET,
            house_ring_gap: DEFAULT_HOUSE_RING_GAP,
            house_ring_width: DEFAULT_HOUSE_RING_WIDTH,
            show_aspects: true,
            show_house_cusps: true,
            show_planet_symbols: true,
            major_pen: AspectPen::MAJOR_DEFAULT,
            minor_pen: AspectPen::MINOR_DEFAULT,
        }
    }
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart_diameter(&self) -> f64 {
        self.chart_diameter
    }

    pub fn ring_thickness(&self) -> f64 {
        self.ring_thickness
    }

    pub fn marker_diameter(&self) -> f64 {
        self.marker_diameter
    }

    pub fn marker_inset(&self) -> f64 {
        self.marker_inset
    }

    pub fn house_ring_gap(&self) -> f64 {
        self.house_ring_gap
    }

    pub fn house_ring_width(&self) -> f64 {
        self.house_ring_width
    }

    pub fn show_aspects(&self) -> bool {
        self.show_aspects
    }

    pub fn show_house_cusps(&self) -> bool {
        self.show_house_cusps
    }

    pub fn show_planet_symbols(&self) -> bool {
        self.show_planet_symbols
    }

    pub fn major_pen(&self) -> AspectPen {
        self.major_pen
    }

    pub fn minor_pen(&self) -> AspectPen {
        self.minor_pen
    }

    /// Outer radius of the zodiac ring.
    pub fn outer_radius(&self) -> f64 {
        self.chart_diameter / 2.0
    }

    /// Inner radius of the zodiac ring.
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() - self.ring_thickness
    }

    /// Circle on which bodies sit before collision resolution.
    pub fn base_radius(&self) -> f64 {
        self.inner_radius() - self.marker_inset
    }

    pub fn house_ring_inner_radius(&self) -> f64 {
        self.outer_radius() + self.house_ring_gap
    }

    pub fn house_ring_outer_radius(&self) -> f64 {
        self.house_ring_inner_radius() + self.house_ring_width
    }

    pub fn set_chart_diameter(&mut self, diameter: f64) {
        self.chart_diameter = diameter;
    }

    pub fn set_ring_thickness(&mut self, thickness: f64) {
        self.ring_thickness = thickness;
    }

    pub fn set_marker_diameter(&mut self, diameter: f64) {
        self.marker_diameter = diameter;
    }

    pub fn set_marker_inset(&mut self, inset: f64) {
        self.marker_inset = inset;
    }

    pub fn set_house_ring_gap(&mut self, gap: f64) {
        self.house_ring_gap = gap;
    }

    pub fn set_house_ring_width(&mut self, width: f64) {
        self.house_ring_width = width;
    }

    pub fn set_show_aspects(&mut self, show: bool) {
        self.show_aspects = show;
    }

    pub fn set_show_house_cusps(&mut self, show: bool) {
        self.show_house_cusps = show;
    }

    pub fn set_show_planet_symbols(&mut self, show: bool) {
        self.show_planet_symbols = show;
    }

    /// Widths are clamped to the range a pen dialog would offer.
    pub fn set_major_pen(&mut self, pen: AspectPen) {
        self.major_pen = clamp_pen(pen);
    }

    pub fn set_minor_pen(&mut self, pen: AspectPen) {
        self.minor_pen = clamp_pen(pen);
    }

    pub fn reset_aspect_pens(&mut self) {
        self.major_pen = AspectPen::MAJOR_DEFAULT;
        self.minor_pen = AspectPen::MINOR_DEFAULT;
    }
}

fn clamp_pen(pen: AspectPen) -> AspectPen {
    AspectPen {
        width: pen.width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH),
        style: pen.style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_radii() {
        let config = DisplayConfig::default();
        assert_eq!(config.outer_radius(), 350.0);
        assert_eq!(config.inner_radius(), 320.0);
        assert_eq!(config.base_radius(), 285.0);
        assert_eq!(config.house_ring_inner_radius(), 360.0);
        assert_eq!(config.house_ring_outer_radius(), 390.0);
    }

    #[test]
    fn test_pen_setters_clamp_and_reset() {
        let mut config = DisplayConfig::default();
        config.set_major_pen(AspectPen::new(9.0, PenStyle::Dash));
        config.set_minor_pen(AspectPen::new(0.1, PenStyle::Dot));
        assert_eq!(config.major_pen(), AspectPen::new(5.0, PenStyle::Dash));
        assert_eq!(config.minor_pen(), AspectPen::new(0.5, PenStyle::Dot));

        config.reset_aspect_pens();
        assert_eq!(config.major_pen(), AspectPen::MAJOR_DEFAULT);
        assert_eq!(config.minor_pen(), AspectPen::MINOR_DEFAULT);
    }
}
