pub mod glyphs;
pub mod primitives;
pub mod visual_config;

pub use glyphs::{StandardSymbols, SymbolProvider};
pub use primitives::{Color, PenStyle, Point, Rect, Stroke};
pub use visual_config::{AspectPen, DisplayConfig};
