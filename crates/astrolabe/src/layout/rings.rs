use crate::chart::{normalize_longitude, Element, HouseCusp, Sign};
use crate::layout::coords::CoordinateMapper;
use crate::layout::types::{
    CircleItem, LabelItem, Layer, LayoutItem, LineItem, PathCommand, RingSegment,
};
use crate::rendering::glyphs::SymbolProvider;
use crate::rendering::primitives::{Color, Stroke};
use crate::rendering::visual_config::DisplayConfig;

const HOUSE_MEANINGS: [&str; 12] = [
    "Self, identity, appearance",
    "Possessions, values, resources",
    "Communication, siblings, local travel",
    "Home, family, roots",
    "Creativity, pleasure, children",
    "Work, health, service",
    "Partnerships, marriage, open enemies",
    "Shared resources, transformation, death",
    "Higher education, philosophy, travel",
    "Career, public image, authority",
    "Friends, groups, hopes and wishes",
    "Unconscious, spirituality, hidden matters",
];

const SIGN_LABEL_SIZE: f64 = 16.0;
const HOUSE_LABEL_SIZE: f64 = 12.0;

/// Angular width from one boundary to the next, going forward through 0° if needed.
///
/// Both boundaries are taken modulo 360, so the result is always in [0, 360).
pub fn segment_width(current: f64, next: f64) -> f64 {
    normalize_longitude(next - current)
}

/// Longitude halfway through a segment, in [0, 360).
pub fn segment_midpoint(current: f64, next: f64) -> f64 {
    normalize_longitude(current + segment_width(current, next) / 2.0)
}

/// Descriptive text for a house (1-12).
pub fn house_tooltip(number: u8, cusp_sign: &str) -> String {
    let index = usize::from(number.clamp(1, 12) - 1);
    let natural_sign = Sign::from_index(index);
    format!(
        "House {} ({}/{}): {}\nCusp: @ {}",
        number,
        Element::for_house(number).name(),
        natural_sign.name(),
        HOUSE_MEANINGS[index],
        cusp_sign
    )
}

/// Builds the zodiac and house annuli for one chart orientation.
#[derive(Debug, Clone, Copy)]
pub struct RingGeometryBuilder {
    mapper: CoordinateMapper,
}

impl RingGeometryBuilder {
    pub fn new(mapper: CoordinateMapper) -> Self {
        Self { mapper }
    }

    /// Outline of the annulus between two longitudes.
    ///
    /// Both radial edges are straight; the outer arc runs forward and the
    /// inner arc returns in the opposite sense.
    pub fn wedge_path(
        &self,
        inner_radius: f64,
        outer_radius: f64,
        start_longitude: f64,
        end_longitude: f64,
    ) -> Vec<PathCommand> {
        let sweep = segment_width(start_longitude, end_longitude);
        let start_angle = self.mapper.screen_angle(start_longitude);
        let end_longitude = start_longitude + sweep;

        vec![
            PathCommand::MoveTo {
                to: self.mapper.map(start_longitude, inner_radius),
            },
            PathCommand::LineTo {
                to: self.mapper.map(start_longitude, outer_radius),
            },
            PathCommand::ArcTo {
                radius: outer_radius,
                start_angle,
                sweep,
                end: self.mapper.map(end_longitude, outer_radius),
            },
            PathCommand::LineTo {
                to: self.mapper.map(end_longitude, inner_radius),
            },
            PathCommand::ArcTo {
                radius: inner_radius,
                start_angle: start_angle + sweep,
                sweep: -sweep,
                end: self.mapper.map(start_longitude, inner_radius),
            },
            PathCommand::Close,
        ]
    }

    /// Inner and outer circles of the zodiac ring.
    pub fn boundary_circles(&self, config: &DisplayConfig) -> Vec<LayoutItem> {
        [config.outer_radius(), config.inner_radius()]
            .into_iter()
            .map(|radius| {
                LayoutItem::Circle(CircleItem {
                    layer: Layer::Boundary,
                    radius,
                    stroke: Stroke::solid(Color::BLACK, 1.0),
                    fill: None,
                })
            })
            .collect()
    }

    /// Twelve fixed 30° sign wedges with dividers and glyph labels.
    pub fn zodiac_ring<S: SymbolProvider + ?Sized>(
        &self,
        config: &DisplayConfig,
        symbols: &S,
    ) -> Vec<LayoutItem> {
        let outer = config.outer_radius();
        let inner = config.inner_radius();
        let label_radius = (outer + inner) / 2.0;

        let mut segments = Vec::with_capacity(12);
        let mut dividers = Vec::with_capacity(12);
        let mut labels = Vec::with_capacity(12);

        for sign in Sign::ALL {
            let start = sign.start_longitude();
            let end = start + 30.0;

            segments.push(LayoutItem::Ring(RingSegment {
                layer: Layer::Zodiac,
                id: format!("sign:{}", sign.name()),
                path: self.wedge_path(inner, outer, start, end),
                start_longitude: start,
                width: 30.0,
                inner_radius: inner,
                outer_radius: outer,
                fill: sign.element().color(),
                stroke: Stroke::solid(Color::BLACK, 0.25),
                tooltip: Some(sign.name().to_string()),
            }));

            dividers.push(LayoutItem::Line(LineItem::new(
                Layer::Zodiac,
                self.mapper.map(start, inner),
                self.mapper.map(start, outer),
                Stroke::solid(Color::BLACK, 1.0),
            )));

            let mut label = LabelItem::centered(
                Layer::Zodiac,
                self.mapper.map(start + 15.0, label_radius),
                symbols.sign_symbol(sign.name()),
            );
            label.font_size = SIGN_LABEL_SIZE;
            labels.push(LayoutItem::Label(label));
        }

        segments.extend(dividers);
        segments.extend(labels);
        segments
    }

    /// House annulus outside the zodiac ring. `houses` must be the twelve cusps in order.
    pub fn house_ring(&self, houses: &[&HouseCusp], config: &DisplayConfig) -> Vec<LayoutItem> {
        if houses.len() != 12 {
            log::debug!("house ring needs 12 cusps, got {}", houses.len());
            return Vec::new();
        }

        let inner = config.house_ring_inner_radius();
        let outer = config.house_ring_outer_radius();
        let label_radius = (inner + outer) / 2.0;
        let edge = Stroke::solid(Color::BLACK, 1.0);

        let mut items: Vec<LayoutItem> = [outer, inner]
            .into_iter()
            .map(|radius| {
                LayoutItem::Circle(CircleItem {
                    layer: Layer::HouseRing,
                    radius,
                    stroke: edge.clone(),
                    fill: None,
                })
            })
            .collect();

        let mut labels = Vec::with_capacity(12);
        let mut dividers = Vec::with_capacity(12);

        for (i, current) in houses.iter().enumerate() {
            let next = houses[(i + 1) % 12];
            let start = normalize_longitude(current.longitude);
            let width = segment_width(start, next.longitude);

            items.push(LayoutItem::Ring(RingSegment {
                layer: Layer::HouseRing,
                id: format!("house:{}", current.number),
                path: self.wedge_path(inner, outer, start, next.longitude),
                start_longitude: start,
                width,
                inner_radius: inner,
                outer_radius: outer,
                fill: Element::for_house(current.number).color(),
                stroke: edge.clone(),
                tooltip: Some(house_tooltip(current.number, &current.sign)),
            }));

            let mut label = LabelItem::centered(
                Layer::HouseRing,
                self.mapper
                    .map(segment_midpoint(start, next.longitude), label_radius),
                current.number.to_string(),
            );
            label.font_size = HOUSE_LABEL_SIZE;
            label.bold = true;
            labels.push(LayoutItem::Label(label));

            dividers.push(LayoutItem::Line(LineItem::new(
                Layer::HouseRing,
                self.mapper.map(start, inner),
                self.mapper.map(start, outer),
                edge.clone(),
            )));
        }

        items.extend(labels);
        items.extend(dividers);
        items
    }
}
