use crate::chart::{degree_in_sign, AngleKind, CelestialBody, ChartSnapshot, HouseCusp};
use crate::layout::aspects::{aspect_summary, summary_text, AspectLineBuilder};
use crate::layout::collision::{sort_by_longitude, CollisionResolver, PlacedBody, Resolution};
use crate::layout::coords::CoordinateMapper;
use crate::layout::rings::RingGeometryBuilder;
use crate::layout::types::{LabelItem, Layer, LayoutItem, LayoutResult, LineItem, MarkerItem};
use crate::rendering::glyphs::{StandardSymbols, SymbolProvider};
use crate::rendering::primitives::{Color, PenStyle, Rect, Stroke};
use crate::rendering::visual_config::DisplayConfig;

/// Gap between the house ring and the angle labels.
pub const ANGLE_LABEL_OFFSET: f64 = 15.0;

/// Share of the chart radius added around the drawing.
pub const BOUNDS_PADDING: f64 = 0.15;

const RETROGRADE_FILL: Color = Color::rgb(255, 100, 100);

pub fn angle_color(kind: AngleKind) -> Color {
    match kind {
        AngleKind::Asc => Color::RED,
        AngleKind::MC => Color::BLUE,
        AngleKind::Desc => Color::DARK_RED,
        AngleKind::IC => Color::DARK_BLUE,
    }
}

/// Tooltip head for a body, before any aspect listing.
pub fn marker_tooltip(body: &CelestialBody) -> String {
    format!(
        "{} in {} {:.1}°{} in House {}",
        body.id,
        body.sign,
        degree_in_sign(body.longitude),
        if body.shows_retrograde() { " ℞" } else { "" },
        body.house
    )
}

/// Turns a chart snapshot into an ordered, stacked layout.
///
/// Stateless: every call recomputes everything from the snapshot and the
/// configuration it is given.
#[derive(Debug, Clone, Default)]
pub struct ChartLayoutEngine<S: SymbolProvider = StandardSymbols> {
    symbols: S,
}

impl ChartLayoutEngine<StandardSymbols> {
    pub fn new() -> Self {
        Self {
            symbols: StandardSymbols::new(),
        }
    }
}

impl<S: SymbolProvider> ChartLayoutEngine<S> {
    pub fn with_symbols(symbols: S) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &S {
        &self.symbols
    }

    pub fn render(&self, snapshot: &ChartSnapshot, config: &DisplayConfig) -> LayoutResult {
        if snapshot.is_empty() {
            log::debug!("snapshot has no bodies, nothing to lay out");
            return LayoutResult::empty();
        }

        log::debug!(
            "laying out {} bodies, {} houses, {} aspects",
            snapshot.bodies.len(),
            snapshot.houses.len(),
            snapshot.aspects.len()
        );

        let mapper = CoordinateMapper::new(snapshot.reference_ascendant());
        let rings = RingGeometryBuilder::new(mapper);
        let houses = snapshot.ordered_houses();

        let mut items = Vec::new();

        items.extend(rings.boundary_circles(config));
        items.extend(rings.zodiac_ring(config, &self.symbols));
        items.extend(self.angle_axes(snapshot, &mapper, config));

        match &houses {
            Some(houses) if config.show_house_cusps() => {
                items.extend(self.cusp_lines(houses, &mapper, config));
                items.extend(rings.house_ring(houses, config));
            }
            Some(_) => log::debug!("house cusps hidden"),
            None => log::debug!(
                "skipping house ring: {} cusps instead of a full set",
                snapshot.houses.len()
            ),
        }

        let sorted = sort_by_longitude(&snapshot.bodies);
        let resolution = CollisionResolver::new(
            config.base_radius(),
            config.marker_diameter(),
            mapper.reference_ascendant(),
        )
        .resolve(&sorted);

        if config.show_aspects() {
            let builder = AspectLineBuilder::from_config(config);
            items.extend(builder.build(&snapshot.aspects, &resolution.placements));
        }
        items.extend(Self::guide_lines(&resolution));
        items.extend(
            resolution
                .placements
                .iter()
                .map(|placed| LayoutItem::Marker(self.marker(placed, snapshot, config))),
        );

        let bounds = layout_bounds(&items, config);
        LayoutResult { bounds, items }
    }

    fn angle_axes(
        &self,
        snapshot: &ChartSnapshot,
        mapper: &CoordinateMapper,
        config: &DisplayConfig,
    ) -> Vec<LayoutItem> {
        let label_radius = config.house_ring_outer_radius() + ANGLE_LABEL_OFFSET;
        let mut axes = Vec::new();
        let mut labels = Vec::new();

        for angle in snapshot.resolved_angles() {
            let color = angle_color(angle.kind);
            let label = self.symbols.angle_label(angle.kind);
            let tooltip = format!(
                "{} ({}): {} {:.1}°",
                angle.kind,
                label,
                angle.sign,
                degree_in_sign(angle.longitude)
            );

            axes.push(LayoutItem::Line(
                LineItem::new(
                    Layer::Angles,
                    mapper.map(angle.longitude, 0.0),
                    mapper.map(angle.longitude, config.outer_radius()),
                    Stroke::solid(color, 1.0),
                )
                .with_tooltip(tooltip),
            ));

            let mut text = LabelItem::centered(
                Layer::Angles,
                mapper.map(angle.longitude, label_radius),
                label,
            );
            text.color = color;
            text.bold = true;
            labels.push(LayoutItem::Label(text));
        }

        axes.extend(labels);
        axes
    }

    fn cusp_lines(
        &self,
        houses: &[&HouseCusp],
        mapper: &CoordinateMapper,
        config: &DisplayConfig,
    ) -> Vec<LayoutItem> {
        houses
            .iter()
            .map(|house| {
                LayoutItem::Line(
                    LineItem::new(
                        Layer::HouseCusps,
                        mapper.map(house.longitude, 0.0),
                        mapper.map(house.longitude, config.outer_radius()),
                        Stroke::new(Color::DARK_GRAY, 1.0, PenStyle::Dash),
                    )
                    .with_tooltip(format!(
                        "House {} cusp: {:.2}° {}",
                        house.number, house.longitude, house.sign
                    )),
                )
            })
            .collect()
    }

    fn guide_lines(resolution: &Resolution<'_>) -> Vec<LayoutItem> {
        resolution
            .placements
            .iter()
            .filter_map(|placed| {
                placed.anchor.map(|anchor| {
                    LayoutItem::Line(LineItem::new(
                        Layer::Guides,
                        anchor,
                        placed.position,
                        Stroke::new(Color::GRAY, 0.5, PenStyle::Dot),
                    ))
                })
            })
            .collect()
    }

    fn marker(
        &self,
        placed: &PlacedBody<'_>,
        snapshot: &ChartSnapshot,
        config: &DisplayConfig,
    ) -> MarkerItem {
        let body = placed.body;
        let mut tooltip = marker_tooltip(body);
        if config.show_aspects() {
            tooltip.push_str(&summary_text(&aspect_summary(&snapshot.aspects, &body.id)));
        }

        let text = if config.show_planet_symbols() {
            self.symbols.body_symbol(&body.id)
        } else {
            body.id.clone()
        };

        MarkerItem {
            layer: Layer::Markers,
            body_id: body.id.clone(),
            center: placed.position,
            radius: config.marker_diameter() / 2.0,
            orbit_radius: placed.radius,
            text,
            fill: if body.shows_retrograde() {
                RETROGRADE_FILL
            } else {
                Color::WHITE
            },
            stroke: Stroke::solid(Color::BLACK, 1.0),
            retrograde: body.shows_retrograde(),
            anchor: placed.anchor,
            tooltip,
        }
    }
}

/// Square around everything drawn, padded by a share of the chart radius.
fn layout_bounds(items: &[LayoutItem], config: &DisplayConfig) -> Rect {
    let extent = items
        .iter()
        .map(|item| match item {
            LayoutItem::Circle(c) => c.radius,
            LayoutItem::Ring(r) => r.outer_radius,
            LayoutItem::Line(l) => l.from.magnitude().max(l.to.magnitude()),
            LayoutItem::Marker(m) => m.center.magnitude() + m.radius,
            LayoutItem::Label(l) => l.position.magnitude() + l.font_size,
        })
        .fold(config.outer_radius(), f64::max);

    Rect::centered(extent + config.outer_radius() * BOUNDS_PADDING)
}
