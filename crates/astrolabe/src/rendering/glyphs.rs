use crate::chart::{AngleKind, Sign};
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref BODY_SYMBOLS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Sun", "☉");
        m.insert("Moon", "☽");
        m.insert("Mercury", "☿");
        m.insert("Venus", "♀");
        m.insert("Mars", "♂");
        m.insert("Jupiter", "♃");
        m.insert("Saturn", "♄");
        m.insert("Uranus", "♅");
        m.insert("Neptune", "♆");
        m.insert("Pluto", "♇");
        m.insert("Chiron", "⚷");
        m.insert("North Node", "☊");
        m.insert("South Node", "☋");
        m.insert("Pars Fortuna", "⊕");
        m.insert("pa", "⊕");
        m.insert("Syzygy", "☍");
        m.insert("sy", "☍");
        m.insert("Lilith", "⚸");
        m.insert("Ceres", "⚳");
        m.insert("Pallas", "⚴");
        m.insert("Juno", "⚵");
        m.insert("Vesta", "⚶");
        m.insert("Vertex", "⊗");
        m.insert("East Point", "⊙");
        m.insert("Part of Spirit", "⊖");
        m
    };
}

/// Maps chart identities to the text drawn for them.
///
/// Geometry never looks at glyphs directly; the engine asks its provider.
pub trait SymbolProvider {
    /// Symbol for a body id; unknown ids are drawn as-is.
    fn body_symbol(&self, id: &str) -> String;

    /// Symbol for a sign name; unknown names shorten to three characters.
    fn sign_symbol(&self, sign: &str) -> String;

    /// Short label for an angle axis.
    fn angle_label(&self, kind: AngleKind) -> &'static str {
        match kind {
            AngleKind::Asc => "AC",
            AngleKind::Desc => "DC",
            AngleKind::MC => "MC",
            AngleKind::IC => "IC",
        }
    }
}

/// The astronomical glyph set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSymbols;

impl StandardSymbols {
    pub fn new() -> Self {
        Self
    }

    pub fn sign_glyph(sign: Sign) -> &'static str {
        match sign {
            Sign::Aries => "♈",
            Sign::Taurus => "♉",
            Sign::Gemini => "♊",
            Sign::Cancer => "♋",
            Sign::Leo => "♌",
            Sign::Virgo => "♍",
            Sign::Libra => "♎",
            Sign::Scorpio => "♏",
            Sign::Sagittarius => "♐",
            Sign::Capricorn => "♑",
            Sign::Aquarius => "♒",
            Sign::Pisces => "♓",
        }
    }
}

impl SymbolProvider for StandardSymbols {
    fn body_symbol(&self, id: &str) -> String {
        BODY_SYMBOLS
            .get(id)
            .map(|s| s.to_string())
            .unwrap_or_else(|| id.to_string())
    }

    fn sign_symbol(&self, sign: &str) -> String {
        match sign.parse::<Sign>() {
            Ok(sign) => Self::sign_glyph(sign).to_string(),
            Err(()) => sign.chars().take(3).collect(),
        }
    }
}
