use crate::rendering::primitives::{Color, Point, Rect, Stroke};
use serde::{Deserialize, Serialize};

/// Stacking layer, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Boundary,
    Zodiac,
    Angles,
    HouseCusps,
    HouseRing,
    Aspects,
    Guides,
    Markers,
}

/// One step of an outline path. Angles are screen degrees, counterclockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    /// Arc around the chart center from the current point.
    ArcTo {
        radius: f64,
        start_angle: f64,
        sweep: f64,
        end: Point,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleItem {
    pub layer: Layer,
    pub radius: f64,
    pub stroke: Stroke,
    pub fill: Option<Color>,
}

/// Filled annulus segment (a sign or a house).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub layer: Layer,
    /// "sign:Aries", "house:7"
    pub id: String,
    pub path: Vec<PathCommand>,
    pub start_longitude: f64,
    /// Wraparound-corrected angular width in degrees
    pub width: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub fill: Color,
    pub stroke: Stroke,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub layer: Layer,
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
    pub label: Option<String>,
    pub tooltip: Option<String>,
}

impl LineItem {
    pub fn new(layer: Layer, from: Point, to: Point, stroke: Stroke) -> Self {
        Self {
            layer,
            from,
            to,
            stroke,
            label: None,
            tooltip: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Body marker drawn as a circle with its symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerItem {
    pub layer: Layer,
    pub body_id: String,
    pub center: Point,
    pub radius: f64,
    /// Display radius after collision resolution
    pub orbit_radius: f64,
    pub text: String,
    pub fill: Color,
    pub stroke: Stroke,
    pub retrograde: bool,
    /// True ecliptic position on the base circle, present when the marker was pulled inward
    pub anchor: Option<Point>,
    pub tooltip: String,
}

/// Text centered on `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelItem {
    pub layer: Layer,
    pub position: Point,
    pub text: String,
    /// Degrees
    pub rotation: f64,
    pub color: Color,
    pub font_size: f64,
    pub bold: bool,
}

impl LabelItem {
    pub fn centered(layer: Layer, position: Point, text: impl Into<String>) -> Self {
        Self {
            layer,
            position,
            text: text.into(),
            rotation: 0.0,
            color: Color::BLACK,
            font_size: 12.0,
            bold: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutItem {
    Circle(CircleItem),
    Ring(RingSegment),
    Line(LineItem),
    Marker(MarkerItem),
    Label(LabelItem),
}

impl LayoutItem {
    pub fn layer(&self) -> Layer {
        match self {
            LayoutItem::Circle(c) => c.layer,
            LayoutItem::Ring(r) => r.layer,
            LayoutItem::Line(l) => l.layer,
            LayoutItem::Marker(m) => m.layer,
            LayoutItem::Label(l) => l.layer,
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            LayoutItem::Ring(r) => r.tooltip.as_deref(),
            LayoutItem::Line(l) => l.tooltip.as_deref(),
            LayoutItem::Marker(m) => Some(&m.tooltip),
            LayoutItem::Circle(_) | LayoutItem::Label(_) => None,
        }
    }
}

/// Everything a display surface needs to draw one chart, in stacking order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub bounds: Rect,
    pub items: Vec<LayoutItem>,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_in(&self, layer: Layer) -> impl Iterator<Item = &LayoutItem> {
        self.items.iter().filter(move |item| item.layer() == layer)
    }

    pub fn rings(&self) -> impl Iterator<Item = &RingSegment> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Ring(r) => Some(r),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn lines_in(&self, layer: Layer) -> impl Iterator<Item = &LineItem> {
        self.lines().filter(move |l| l.layer == layer)
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerItem> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Marker(m) => Some(m),
            _ => None,
        })
    }

    pub fn marker(&self, body_id: &str) -> Option<&MarkerItem> {
        self.markers().find(|m| m.body_id == body_id)
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelItem> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Label(l) => Some(l),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CircleItem> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Circle(c) => Some(c),
            _ => None,
        })
    }

    /// Layers are never interleaved.
    pub fn is_layer_ordered(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| pair[0].layer() <= pair[1].layer())
    }
}
