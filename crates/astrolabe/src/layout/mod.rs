pub mod aspects;
pub mod collision;
pub mod coords;
pub mod engine;
pub mod rings;
pub mod types;

pub use aspects::{aspect_color, aspect_summary, is_major_aspect, AspectLineBuilder};
pub use collision::{sort_by_longitude, CollisionResolver, PlacedBody, Resolution};
pub use coords::CoordinateMapper;
pub use engine::ChartLayoutEngine;
pub use rings::{segment_width, RingGeometryBuilder};
pub use types::{
    CircleItem, LabelItem, Layer, LayoutItem, LayoutResult, LineItem, MarkerItem, PathCommand,
    RingSegment,
};
