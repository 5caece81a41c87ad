use crate::chart::AspectRelation;
use crate::layout::collision::PlacedBody;
use crate::layout::types::{Layer, LayoutItem, LineItem};
use crate::rendering::primitives::{Color, Point};
use crate::rendering::visual_config::{AspectPen, DisplayConfig};

const MAJOR_ASPECTS: [&str; 5] = ["CON", "OPP", "SQR", "TRI", "SEX"];

/// Conjunction, opposition, square, trine and sextile are major; any other code is minor.
pub fn is_major_aspect(code: &str) -> bool {
    MAJOR_ASPECTS.iter().any(|major| *major == code)
}

/// Line color for an aspect code; unknown codes get a neutral dim gray.
pub fn aspect_color(code: &str) -> Color {
    match code {
        "CON" => Color::rgb(128, 128, 128),
        "OPP" => Color::rgb(220, 20, 60),
        "SQR" => Color::rgb(255, 69, 0),
        "TRI" => Color::rgb(30, 144, 255),
        "SEX" => Color::rgb(0, 206, 209),
        "QUI" => Color::rgb(138, 43, 226),
        "SSQ" => Color::rgb(255, 165, 0),
        "SSX" => Color::rgb(0, 128, 0),
        "SQQ" => Color::rgb(255, 105, 180),
        _ => Color::rgb(105, 105, 105),
    }
}

/// One aspect seen from one of its bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectEntry<'a> {
    pub code: &'a str,
    pub other: &'a str,
    pub orb: f64,
}

impl AspectEntry<'_> {
    pub fn is_major(&self) -> bool {
        is_major_aspect(self.code)
    }
}

/// Aspects involving `body_id`, major first, then tightest orb first.
pub fn aspect_summary<'a>(aspects: &'a [AspectRelation], body_id: &str) -> Vec<AspectEntry<'a>> {
    let mut entries: Vec<AspectEntry<'a>> = aspects
        .iter()
        .filter_map(|aspect| {
            aspect.other(body_id).map(|other| AspectEntry {
                code: aspect.code.as_str(),
                other,
                orb: aspect.orb,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.is_major()
            .cmp(&a.is_major())
            .then_with(|| a.orb.total_cmp(&b.orb))
    });
    entries
}

/// Tooltip block listing a body's aspects, empty when it has none.
pub fn summary_text(entries: &[AspectEntry<'_>]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut text = String::from("\n\nAspects:");
    for entry in entries {
        text.push_str(&format!(
            "\n• {} {} (Orb: {:.1}°)",
            entry.code, entry.other, entry.orb
        ));
    }
    text
}

/// Computes aspect lines between already placed markers.
#[derive(Debug, Clone, Copy)]
pub struct AspectLineBuilder {
    marker_radius: f64,
    major_pen: AspectPen,
    minor_pen: AspectPen,
}

impl AspectLineBuilder {
    pub fn new(marker_radius: f64, major_pen: AspectPen, minor_pen: AspectPen) -> Self {
        Self {
            marker_radius,
            major_pen,
            minor_pen,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(
            config.marker_diameter() / 2.0,
            config.major_pen(),
            config.minor_pen(),
        )
    }

    pub fn pen_for(&self, code: &str) -> AspectPen {
        if is_major_aspect(code) {
            self.major_pen
        } else {
            self.minor_pen
        }
    }

    /// Endpoints on the two marker peripheries, each pulled toward the other body.
    pub fn endpoints(&self, a: Point, b: Point) -> (Point, Point) {
        let angle = (b.y - a.y).atan2(b.x - a.x);
        let (dx, dy) = (self.marker_radius * angle.cos(), self.marker_radius * angle.sin());
        (Point::new(a.x + dx, a.y + dy), Point::new(b.x - dx, b.y - dy))
    }

    pub fn line(&self, aspect: &AspectRelation, a: Point, b: Point) -> LineItem {
        let (from, to) = self.endpoints(a, b);
        let stroke = self.pen_for(&aspect.code).stroke(aspect_color(&aspect.code));
        LineItem {
            layer: Layer::Aspects,
            from,
            to,
            stroke,
            label: Some(aspect.code.clone()),
            tooltip: None,
        }
    }

    /// Lines for every aspect whose two bodies were placed. Others are skipped.
    pub fn build(
        &self,
        aspects: &[AspectRelation],
        placements: &[PlacedBody<'_>],
    ) -> Vec<LayoutItem> {
        let position_of = |id: &str| {
            placements
                .iter()
                .find(|p| p.body.id == id)
                .map(|p| p.position)
        };

        aspects
            .iter()
            .filter_map(|aspect| {
                match (position_of(&aspect.body_a), position_of(&aspect.body_b)) {
                    (Some(a), Some(b)) => Some(LayoutItem::Line(self.line(aspect, a, b))),
                    _ => {
                        log::debug!(
                            "skipping {} {} {}: body not on chart",
                            aspect.body_a,
                            aspect.code,
                            aspect.body_b
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_orders_major_then_orb() {
        let aspects = vec![
            AspectRelation::new("Sun", "QUI", "Mars", 0.2),
            AspectRelation::new("Moon", "SQR", "Sun", 3.0),
            AspectRelation::new("Sun", "TRI", "Venus", 1.1),
        ];
        let summary = aspect_summary(&aspects, "Sun");
        let order: Vec<(&str, &str)> = summary.iter().map(|e| (e.code, e.other)).collect();
        assert_eq!(order, vec![("TRI", "Venus"), ("SQR", "Moon"), ("QUI", "Mars")]);
        assert_eq!(
            summary_text(&summary),
            "\n\nAspects:\n• TRI Venus (Orb: 1.1°)\n• SQR Moon (Orb: 3.0°)\n• QUI Mars (Orb: 0.2°)"
        );
    }

    #[test]
    fn test_coincident_centers_still_offset_by_radius() {
        let builder =
            AspectLineBuilder::new(10.0, AspectPen::MAJOR_DEFAULT, AspectPen::MINOR_DEFAULT);
        let p = Point::new(5.0, 5.0);
        let (from, to) = builder.endpoints(p, p);
        assert!((from.distance_to(p) - 10.0).abs() < 1e-9);
        assert!((to.distance_to(p) - 10.0).abs() < 1e-9);
    }
}
