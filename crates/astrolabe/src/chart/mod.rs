pub mod protocol;
pub mod snapshot;
pub mod zodiac;

pub use protocol::{parse_chart, ProtocolError, Section};
pub use snapshot::{
    AngleKind, AspectRelation, CelestialBody, ChartAngle, ChartSnapshot, HouseCusp,
};
pub use zodiac::{degree_in_sign, normalize_longitude, Element, Sign};
