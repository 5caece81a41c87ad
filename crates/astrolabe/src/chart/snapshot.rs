use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A body placed on the chart (planet, node, lot, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Display identity, e.g. "Sun" or "North Node"
    pub id: String,
    /// Sign name as reported upstream
    pub sign: String,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// House id without the "House" prefix, e.g. "8"
    pub house: String,
    pub retrograde: bool,
}

impl CelestialBody {
    pub fn new(id: impl Into<String>, sign: impl Into<String>, longitude: f64) -> Self {
        Self {
            id: id.into(),
            sign: sign.into(),
            longitude,
            house: String::new(),
            retrograde: false,
        }
    }

    pub fn with_house(mut self, house: impl Into<String>) -> Self {
        self.house = house.into();
        self
    }

    pub fn with_retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = retrograde;
        self
    }

    /// Lunar nodes are always reported as retrograde, so the flag carries no meaning for them.
    pub fn is_node(&self) -> bool {
        self.id == "North Node" || self.id == "South Node"
    }

    /// Retrograde flag as it should be displayed.
    pub fn shows_retrograde(&self) -> bool {
        self.retrograde && !self.is_node()
    }
}

/// House cusp (1-12).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub number: u8,
    pub longitude: f64,
    pub sign: String,
}

impl HouseCusp {
    pub fn new(number: u8, longitude: f64, sign: impl Into<String>) -> Self {
        Self {
            number,
            longitude,
            sign: sign.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleKind {
    Asc,
    Desc,
    MC,
    IC,
}

impl AngleKind {
    /// Drawing order of the axes.
    pub const ALL: [AngleKind; 4] = [AngleKind::Asc, AngleKind::MC, AngleKind::Desc, AngleKind::IC];

    pub fn id(self) -> &'static str {
        match self {
            AngleKind::Asc => "Asc",
            AngleKind::Desc => "Desc",
            AngleKind::MC => "MC",
            AngleKind::IC => "IC",
        }
    }

    /// Cusp that coincides with this angle in quadrant house systems.
    pub fn house_number(self) -> u8 {
        match self {
            AngleKind::Asc => 1,
            AngleKind::IC => 4,
            AngleKind::Desc => 7,
            AngleKind::MC => 10,
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AngleKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "as" | "ac" => Ok(AngleKind::Asc),
            "desc" | "dsc" | "ds" | "dc" => Ok(AngleKind::Desc),
            "mc" => Ok(AngleKind::MC),
            "ic" => Ok(AngleKind::IC),
            _ => Err(()),
        }
    }
}

/// Chart angle (Asc/Desc/MC/IC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAngle {
    pub kind: AngleKind,
    pub longitude: f64,
    pub sign: String,
}

impl ChartAngle {
    pub fn new(kind: AngleKind, longitude: f64, sign: impl Into<String>) -> Self {
        Self {
            kind,
            longitude,
            sign: sign.into(),
        }
    }
}

/// Undirected aspect between two bodies, stored once per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRelation {
    pub body_a: String,
    pub body_b: String,
    /// Three-letter code, e.g. "TRI"
    pub code: String,
    /// Deviation from exact, in degrees
    pub orb: f64,
}

impl AspectRelation {
    pub fn new(
        body_a: impl Into<String>,
        code: impl Into<String>,
        body_b: impl Into<String>,
        orb: f64,
    ) -> Self {
        Self {
            body_a: body_a.into(),
            body_b: body_b.into(),
            code: code.into(),
            orb,
        }
    }

    /// The other end of the relation, if `body_id` takes part in it.
    pub fn other(&self, body_id: &str) -> Option<&str> {
        if self.body_a == body_id {
            Some(&self.body_b)
        } else if self.body_b == body_id {
            Some(&self.body_a)
        } else {
            None
        }
    }
}

/// Read-only input to one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub bodies: Vec<CelestialBody>,
    pub houses: Vec<HouseCusp>,
    pub angles: Vec<ChartAngle>,
    pub aspects: Vec<AspectRelation>,
}

impl ChartSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn house(&self, number: u8) -> Option<&HouseCusp> {
        self.houses.iter().find(|h| h.number == number)
    }

    pub fn angle(&self, kind: AngleKind) -> Option<&ChartAngle> {
        self.angles.iter().find(|a| a.kind == kind)
    }

    /// Exactly twelve cusps numbered 1 through 12.
    pub fn has_full_house_set(&self) -> bool {
        self.houses.len() == 12 && (1..=12).all(|n| self.house(n).is_some())
    }

    /// Cusps in house order, only when the set is complete.
    pub fn ordered_houses(&self) -> Option<Vec<&HouseCusp>> {
        if !self.has_full_house_set() {
            return None;
        }
        (1..=12).map(|n| self.house(n)).collect()
    }

    /// Longitude pinned to the left horizon: house 1 cusp, else the Asc record, else 0.
    pub fn reference_ascendant(&self) -> f64 {
        if let Some(first) = self.house(1) {
            return first.longitude;
        }
        self.angle(AngleKind::Asc)
            .map(|a| a.longitude)
            .unwrap_or(0.0)
    }

    /// The four chart angles as they should be drawn.
    ///
    /// With a full house set each angle takes its cusp longitude (1/7/10/4),
    /// even when no angle record was supplied; otherwise the records are used
    /// as given.
    pub fn resolved_angles(&self) -> Vec<ChartAngle> {
        let full_houses = self.has_full_house_set();
        let mut resolved = Vec::new();

        for kind in AngleKind::ALL {
            let record = self.angle(kind);
            let cusp = if full_houses {
                self.house(kind.house_number())
            } else {
                None
            };

            match (record, cusp) {
                (Some(angle), Some(cusp)) => {
                    resolved.push(ChartAngle::new(kind, cusp.longitude, angle.sign.clone()));
                }
                (None, Some(cusp)) => {
                    resolved.push(ChartAngle::new(kind, cusp.longitude, cusp.sign.clone()));
                }
                (Some(angle), None) => resolved.push(angle.clone()),
                (None, None) => {}
            }
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve_houses(first: f64) -> Vec<HouseCusp> {
        (1..=12)
            .map(|n| HouseCusp::new(n, (first + (n as f64 - 1.0) * 30.0) % 360.0, "Sign"))
            .collect()
    }

    #[test]
    fn test_reference_ascendant_prefers_house_one() {
        let snapshot = ChartSnapshot {
            houses: twelve_houses(95.0),
            angles: vec![ChartAngle::new(AngleKind::Asc, 90.0, "Cancer")],
            ..Default::default()
        };
        assert_eq!(snapshot.reference_ascendant(), 95.0);
    }

    #[test]
    fn test_reference_ascendant_falls_back_to_angle_then_zero() {
        let snapshot = ChartSnapshot {
            angles: vec![ChartAngle::new(AngleKind::Asc, 42.0, "Taurus")],
            ..Default::default()
        };
        assert_eq!(snapshot.reference_ascendant(), 42.0);
        assert_eq!(ChartSnapshot::new().reference_ascendant(), 0.0);
    }

    #[test]
    fn test_resolved_angles_use_cusps_with_full_house_set() {
        let snapshot = ChartSnapshot {
            houses: twelve_houses(10.0),
            angles: vec![ChartAngle::new(AngleKind::MC, 1.0, "Aries")],
            ..Default::default()
        };
        let angles = snapshot.resolved_angles();
        assert_eq!(angles.len(), 4);
        let mc = angles.iter().find(|a| a.kind == AngleKind::MC).unwrap();
        assert_eq!(mc.longitude, 280.0);
        assert_eq!(mc.sign, "Aries");
    }

    #[test]
    fn test_resolved_angles_without_houses_are_taken_as_given() {
        let snapshot = ChartSnapshot {
            angles: vec![ChartAngle::new(AngleKind::IC, 200.0, "Libra")],
            ..Default::default()
        };
        let angles = snapshot.resolved_angles();
        assert_eq!(angles, vec![ChartAngle::new(AngleKind::IC, 200.0, "Libra")]);
    }

    #[test]
    fn test_incomplete_house_set() {
        let mut houses = twelve_houses(0.0);
        houses.pop();
        let snapshot = ChartSnapshot {
            houses,
            ..Default::default()
        };
        assert!(!snapshot.has_full_house_set());
        assert!(snapshot.ordered_houses().is_none());
    }

    #[test]
    fn test_nodes_never_show_retrograde() {
        let node = CelestialBody::new("North Node", "Leo", 130.0).with_retrograde(true);
        let mars = CelestialBody::new("Mars", "Leo", 131.0).with_retrograde(true);
        assert!(!node.shows_retrograde());
        assert!(mars.shows_retrograde());
    }
}
