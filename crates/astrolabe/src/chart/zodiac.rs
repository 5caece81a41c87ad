//! Zodiac signs and their element groups.

use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Pastel fill shared by the zodiac and house rings.
    pub fn color(self) -> Color {
        match self {
            Element::Fire => Color::rgb(255, 200, 200),
            Element::Earth => Color::rgb(255, 255, 200),
            Element::Air => Color::rgb(200, 255, 200),
            Element::Water => Color::rgb(200, 200, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    /// Element class of a house: 1,5,9 fire / 2,6,10 earth / 3,7,11 air / 4,8,12 water.
    pub fn for_house(house_number: u8) -> Element {
        match house_number % 4 {
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Air,
            _ => Element::Water,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign index (0-11) in zodiac order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    /// Sign containing an ecliptic longitude; any real longitude is accepted.
    pub fn from_longitude(longitude: f64) -> Sign {
        let normalized = normalize_longitude(longitude);
        Sign::from_index((normalized / 30.0).floor() as usize)
    }

    /// Longitude at which this sign begins (0, 30, ..., 330).
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Wrap a longitude into [0, 360).
pub fn normalize_longitude(longitude: f64) -> f64 {
    let normalized = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Position within the containing sign (0-30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_longitude(longitude) % 30.0
}
