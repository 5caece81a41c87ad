//! Birth chart geometry and layout.
//!
//! Turns an already-computed chart snapshot (body longitudes, house cusps,
//! angles, aspects) into an ascendant-anchored radial layout: ring wedges,
//! collision-free body markers, aspect lines and labels. Drawing is left to
//! whatever display surface consumes the [`layout::LayoutResult`].

pub mod chart;
pub mod layout;
pub mod rendering;

pub use chart::{
    AngleKind, AspectRelation, CelestialBody, ChartAngle, ChartSnapshot, HouseCusp,
    ProtocolError,
};
pub use layout::{ChartLayoutEngine, LayoutResult};
pub use rendering::{DisplayConfig, StandardSymbols, SymbolProvider};
