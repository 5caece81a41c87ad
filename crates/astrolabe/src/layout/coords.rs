//! Longitude to screen conversion.
//!
//! The reference ascendant always sits at screen angle 180° (the left
//! horizon) and longitudes increase counterclockwise from there. Screen
//! y grows downward, so the sine term is negated.

use crate::chart::normalize_longitude;
use crate::rendering::primitives::Point;

/// Point on the circle of `radius` for an ecliptic longitude.
pub fn map(longitude: f64, radius: f64, reference_ascendant: f64) -> Point {
    CoordinateMapper::new(reference_ascendant).map(longitude, radius)
}

/// Point on the circle of `radius` at a screen angle in degrees.
pub fn polar(screen_angle: f64, radius: f64) -> Point {
    let rad = screen_angle.to_radians();
    Point::new(radius * rad.cos(), -radius * rad.sin())
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateMapper {
    reference_ascendant: f64,
}

impl CoordinateMapper {
    pub fn new(reference_ascendant: f64) -> Self {
        Self {
            reference_ascendant,
        }
    }

    pub fn reference_ascendant(&self) -> f64 {
        self.reference_ascendant
    }

    /// Screen angle of a longitude, in [0, 360).
    pub fn screen_angle(&self, longitude: f64) -> f64 {
        normalize_longitude(180.0 + (longitude - self.reference_ascendant))
    }

    pub fn map(&self, longitude: f64, radius: f64) -> Point {
        polar(self.screen_angle(longitude), radius)
    }
}
