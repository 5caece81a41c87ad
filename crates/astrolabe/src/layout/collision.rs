//! Marker overlap resolution.
//!
//! Bodies keep their angular position and only move toward the center.
//! Pairs are visited in longitude order; the later body of an overlapping
//! pair is pulled in by half the minimum separation, the earlier one never
//! moves in that comparison.

use crate::chart::{normalize_longitude, CelestialBody};
use crate::layout::coords::CoordinateMapper;
use crate::rendering::primitives::Point;

pub const MAX_PASSES: usize = 50;

/// Minimum center distance as a multiple of the marker diameter.
pub const SEPARATION_FACTOR: f64 = 1.2;

/// A body at its display radius.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBody<'a> {
    pub body: &'a CelestialBody,
    pub radius: f64,
    pub position: Point,
    /// Position on the base circle, kept only when the body was pulled inward.
    pub anchor: Option<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub placements: Vec<PlacedBody<'a>>,
    /// Passes actually run, including the final unchanged one
    pub passes: usize,
    /// No pair is closer than the minimum separation
    pub settled: bool,
}

impl<'a> Resolution<'a> {
    pub fn get(&self, body_id: &str) -> Option<&PlacedBody<'a>> {
        self.placements.iter().find(|p| p.body.id == body_id)
    }
}

/// Bodies ordered by normalized longitude; ties keep their input order.
pub fn sort_by_longitude(bodies: &[CelestialBody]) -> Vec<&CelestialBody> {
    let mut sorted: Vec<&CelestialBody> = bodies.iter().collect();
    sorted.sort_by(|a, b| {
        normalize_longitude(a.longitude).total_cmp(&normalize_longitude(b.longitude))
    });
    sorted
}

/// Smallest center distance between any two placements.
pub fn min_pairwise_distance(placements: &[PlacedBody<'_>]) -> Option<f64> {
    let mut min: Option<f64> = None;
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            let d = a.position.distance_to(b.position);
            min = Some(min.map_or(d, |m| m.min(d)));
        }
    }
    min
}

#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    mapper: CoordinateMapper,
    base_radius: f64,
    marker_diameter: f64,
    max_passes: usize,
}

impl CollisionResolver {
    pub fn new(base_radius: f64, marker_diameter: f64, reference_ascendant: f64) -> Self {
        Self {
            mapper: CoordinateMapper::new(reference_ascendant),
            base_radius,
            marker_diameter,
            max_passes: MAX_PASSES,
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn min_separation(&self) -> f64 {
        self.marker_diameter * SEPARATION_FACTOR
    }

    /// Every body on the base circle, nothing resolved yet.
    pub fn initial_placements<'a>(&self, bodies: &[&'a CelestialBody]) -> Vec<PlacedBody<'a>> {
        bodies
            .iter()
            .map(|&body| PlacedBody {
                body,
                radius: self.base_radius,
                position: self.mapper.map(body.longitude, self.base_radius),
                anchor: None,
            })
            .collect()
    }

    /// One sweep over all pairs. Returns whether any radius changed.
    pub fn run_pass(&self, placements: &mut [PlacedBody<'_>]) -> bool {
        let min_separation = self.min_separation();
        let step = min_separation / 2.0;
        let mut changed = false;

        for i in 0..placements.len() {
            for j in (i + 1)..placements.len() {
                let distance = placements[i].position.distance_to(placements[j].position);
                if distance >= min_separation {
                    continue;
                }

                let current = placements[j].radius;
                let shrunk = (current - step).max(0.0);
                if shrunk < current {
                    let moved = &mut placements[j];
                    moved.radius = shrunk;
                    moved.position = self.mapper.map(moved.body.longitude, shrunk);
                    changed = true;
                }
            }
        }

        changed
    }

    pub fn has_overlap(&self, placements: &[PlacedBody<'_>]) -> bool {
        min_pairwise_distance(placements).is_some_and(|d| d < self.min_separation())
    }

    /// Resolve overlaps for bodies already sorted by longitude.
    ///
    /// Always returns within the pass cap; leftover overlap is reported via
    /// `settled` and is not an error.
    pub fn resolve<'a>(&self, bodies: &[&'a CelestialBody]) -> Resolution<'a> {
        let mut placements = self.initial_placements(bodies);
        let mut passes = 0;

        while passes < self.max_passes {
            passes += 1;
            if !self.run_pass(&mut placements) {
                break;
            }
        }

        for placed in &mut placements {
            if placed.radius < self.base_radius {
                placed.anchor = Some(self.mapper.map(placed.body.longitude, self.base_radius));
            }
        }

        let settled = !self.has_overlap(&placements);
        if settled {
            log::debug!("collision resolution settled after {passes} pass(es)");
        } else {
            log::warn!(
                "collision resolution stopped after {passes} pass(es) with overlapping markers"
            );
        }

        Resolution {
            placements,
            passes,
            settled,
        }
    }
}
