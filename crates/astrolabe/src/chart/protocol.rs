//! Reader for the calculator's line-oriented output.
//!
//! ```text
//! PLANETS:
//! Sun: Aries 10.50° (House 1)
//! Mars: Leo 131.20°R (House House5)
//!
//! HOUSES:
//! House1: Cancer 95.00°
//!
//! ANGLES:
//! Asc: Cancer 95.00°
//!
//! ASPECTS:
//! Sun TRI Mars (Orb: 0.70°)
//! ```

use crate::chart::snapshot::{
    AngleKind, AspectRelation, CelestialBody, ChartAngle, ChartSnapshot, HouseCusp,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    static ref PLANET_RE: Regex = Regex::new(
        r"^(?P<name>[\w\s]+?):\s+(?P<sign>\w+)\s+(?P<degree>\d+(?:\.\d+)?)°(?P<retro>R?)\s*\(House\s+(?P<house>\w+)\)\s*$"
    )
    .expect("planet record pattern");
    static ref POINT_RE: Regex =
        Regex::new(r"^(?P<id>\w+):\s+(?P<sign>\w+)\s+(?P<degree>\d+(?:\.\d+)?)°\s*$")
            .expect("house/angle record pattern");
    static ref ASPECT_RE: Regex = Regex::new(
        r"^(?P<a>[\w\s]+?)\s+(?P<code>[A-Z]{3})\s+(?P<b>[\w\s]+?)\s+\(Orb:\s*(?P<orb>\d+(?:\.\d+)?)°\)\s*$"
    )
    .expect("aspect record pattern");
    static ref TRAILING_NUMBER_RE: Regex = Regex::new(r"(\d+)$").expect("house number pattern");
}

/// Section of the calculator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Planets,
    Houses,
    Angles,
    Aspects,
}

impl Section {
    fn from_marker(line: &str) -> Option<Section> {
        let line = line.trim();
        if line.starts_with("PLANETS:") {
            Some(Section::Planets)
        } else if line.starts_with("HOUSES:") {
            Some(Section::Houses)
        } else if line.starts_with("ANGLES:") {
            Some(Section::Angles)
        } else if line.starts_with("ASPECTS:") {
            Some(Section::Aspects)
        } else {
            None
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self {
            Section::Planets => "PLANETS",
            Section::Houses => "HOUSES",
            Section::Angles => "ANGLES",
            Section::Aspects => "ASPECTS",
        };
        f.write_str(marker)
    }
}

/// Errors produced while reading calculator output.
#[derive(Error, Debug, PartialEq)]
pub enum ProtocolError {
    #[error("line {line}: malformed {section} record: {text:?}")]
    MalformedRecord {
        line: usize,
        section: Section,
        text: String,
    },
    #[error("line {line}: invalid degree value {value:?}")]
    InvalidDegree { line: usize, value: String },
    #[error("line {line}: house id {id:?} does not name a house between 1 and 12")]
    InvalidHouse { line: usize, id: String },
    #[error("line {line}: house {number} listed more than once")]
    DuplicateHouse { line: usize, number: u8 },
    #[error("line {line}: unknown angle {id:?}")]
    UnknownAngle { line: usize, id: String },
    #[error("calculator output has no PLANETS section")]
    MissingPlanets,
}

/// Parse calculator output into a snapshot. Fails as a whole on the first bad record.
pub fn parse_chart(output: &str) -> Result<ChartSnapshot, ProtocolError> {
    let mut snapshot = ChartSnapshot::new();
    let mut section: Option<Section> = None;
    let mut saw_planets = false;

    for (index, raw) in output.lines().enumerate() {
        let line_no = index + 1;

        if let Some(next) = Section::from_marker(raw) {
            log::trace!("line {line_no}: entering {next} section");
            saw_planets |= next == Section::Planets;
            section = Some(next);
            continue;
        }

        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(current) = section else {
            log::debug!("line {line_no}: ignoring text before first section: {line:?}");
            continue;
        };

        match current {
            Section::Planets => snapshot.bodies.push(parse_planet(line_no, line)?),
            Section::Houses => {
                let house = parse_house(line_no, line)?;
                if snapshot.house(house.number).is_some() {
                    return Err(ProtocolError::DuplicateHouse {
                        line: line_no,
                        number: house.number,
                    });
                }
                snapshot.houses.push(house);
            }
            Section::Angles => snapshot.angles.push(parse_angle(line_no, line)?),
            Section::Aspects => snapshot.aspects.push(parse_aspect(line_no, line)?),
        }
    }

    if !saw_planets {
        return Err(ProtocolError::MissingPlanets);
    }

    log::debug!(
        "parsed chart: {} bodies, {} houses, {} angles, {} aspects",
        snapshot.bodies.len(),
        snapshot.houses.len(),
        snapshot.angles.len(),
        snapshot.aspects.len()
    );

    Ok(snapshot)
}

impl FromStr for ChartSnapshot {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chart(s)
    }
}

fn malformed(line: usize, section: Section, text: &str) -> ProtocolError {
    ProtocolError::MalformedRecord {
        line,
        section,
        text: text.to_string(),
    }
}

fn parse_degree(line: usize, value: &str) -> Result<f64, ProtocolError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProtocolError::InvalidDegree {
            line,
            value: value.to_string(),
        })
}

/// "House8", "house 8" and "8" all name house 8.
fn house_number(id: &str) -> Option<u8> {
    let digits = TRAILING_NUMBER_RE.captures(id)?.get(1)?.as_str();
    let number = digits.parse::<u8>().ok()?;
    (1..=12).contains(&number).then_some(number)
}

fn parse_planet(line_no: usize, line: &str) -> Result<CelestialBody, ProtocolError> {
    let caps = PLANET_RE
        .captures(line)
        .ok_or_else(|| malformed(line_no, Section::Planets, line))?;

    let longitude = parse_degree(line_no, &caps["degree"])?;
    let house_id = &caps["house"];
    let house = match house_number(house_id) {
        Some(n) => n.to_string(),
        None => house_id.to_string(),
    };

    Ok(CelestialBody {
        id: caps["name"].trim().to_string(),
        sign: caps["sign"].to_string(),
        longitude,
        house,
        retrograde: &caps["retro"] == "R",
    })
}

fn parse_house(line_no: usize, line: &str) -> Result<HouseCusp, ProtocolError> {
    let caps = POINT_RE
        .captures(line)
        .ok_or_else(|| malformed(line_no, Section::Houses, line))?;

    let id = &caps["id"];
    let number = house_number(id).ok_or_else(|| ProtocolError::InvalidHouse {
        line: line_no,
        id: id.to_string(),
    })?;

    Ok(HouseCusp::new(
        number,
        parse_degree(line_no, &caps["degree"])?,
        &caps["sign"],
    ))
}

fn parse_angle(line_no: usize, line: &str) -> Result<ChartAngle, ProtocolError> {
    let caps = POINT_RE
        .captures(line)
        .ok_or_else(|| malformed(line_no, Section::Angles, line))?;

    let id = &caps["id"];
    let kind = id
        .parse::<AngleKind>()
        .map_err(|_| ProtocolError::UnknownAngle {
            line: line_no,
            id: id.to_string(),
        })?;

    Ok(ChartAngle::new(
        kind,
        parse_degree(line_no, &caps["degree"])?,
        &caps["sign"],
    ))
}

fn parse_aspect(line_no: usize, line: &str) -> Result<AspectRelation, ProtocolError> {
    let caps = ASPECT_RE
        .captures(line)
        .ok_or_else(|| malformed(line_no, Section::Aspects, line))?;

    Ok(AspectRelation::new(
        caps["a"].trim(),
        &caps["code"],
        caps["b"].trim(),
        parse_degree(line_no, &caps["orb"])?,
    ))
}
