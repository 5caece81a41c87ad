use astrolabe::chart::{parse_chart, AngleKind, ChartSnapshot, ProtocolError, Section};

const SAMPLE: &str = "\
Calculation finished
PLANETS:
Sun: Aries 10.50° (House 10)
Moon: Cancer 101.00°R (House House1)
North Node: Leo 131.20°R (House House2)
Pars Fortuna: Virgo 170.25° (House House3)

HOUSES:
House1: Cancer 95.00°
House2: Leo 120.00°
House3: Virgo 150.00°
House4: Libra 185.00°
House5: Scorpio 215.00°
House6: Sagittarius 245.00°
House7: Capricorn 275.00°
House8: Aquarius 300.00°
House9: Pisces 330.00°
House10: Aries 5.00°
House11: Taurus 35.00°
House12: Gemini 65.00°

ANGLES:
Asc: Cancer 95.00°
MC: Aries 5.00°

ASPECTS:
Sun SQR Moon (Orb: 0.50°)
North Node QUI Pars Fortuna (Orb: 1.25°)
";

#[test]
fn test_parse_full_sample() {
    let snapshot = parse_chart(SAMPLE).unwrap();

    assert_eq!(snapshot.bodies.len(), 4);
    assert_eq!(snapshot.houses.len(), 12);
    assert_eq!(snapshot.angles.len(), 2);
    assert_eq!(snapshot.aspects.len(), 2);
    assert!(snapshot.has_full_house_set());

    let moon = snapshot.body("Moon").unwrap();
    assert_eq!(moon.sign, "Cancer");
    assert!(moon.retrograde);
    assert_eq!(moon.house, "1");

    let fortuna = snapshot.body("Pars Fortuna").unwrap();
    assert!((fortuna.longitude - 170.25).abs() < 1e-9);
    assert!(!fortuna.retrograde);

    assert_eq!(snapshot.angle(AngleKind::MC).unwrap().longitude, 5.0);
    assert_eq!(snapshot.aspects[1].body_a, "North Node");
    assert_eq!(snapshot.aspects[1].body_b, "Pars Fortuna");
    assert_eq!(snapshot.reference_ascendant(), 95.0);
}

#[test]
fn test_from_str_matches_parse_chart() {
    let parsed: ChartSnapshot = SAMPLE.parse().unwrap();
    assert_eq!(parsed, parse_chart(SAMPLE).unwrap());
}

#[test]
fn test_planets_only() {
    let snapshot = parse_chart("PLANETS:\nSun: Aries 10.00° (House 1)\n").unwrap();
    assert_eq!(snapshot.bodies.len(), 1);
    assert!(snapshot.houses.is_empty());
    assert!(snapshot.aspects.is_empty());
}

#[test]
fn test_unknown_aspect_code_passes_through() {
    let text = "PLANETS:\nSun: Aries 10.00° (House 1)\nASPECTS:\nSun XYZ Moon (Orb: 2.00°)\n";
    let snapshot = parse_chart(text).unwrap();
    assert_eq!(snapshot.aspects[0].code, "XYZ");
}

#[test]
fn test_malformed_planet_reports_line() {
    let err = parse_chart("PLANETS:\nSun Aries 10.5°\n").unwrap_err();
    assert_eq!(
        err,
        ProtocolError::MalformedRecord {
            line: 2,
            section: Section::Planets,
            text: "Sun Aries 10.5°".to_string(),
        }
    );
}

#[test]
fn test_house_out_of_range() {
    let text = "PLANETS:\nSun: Aries 10.00° (House 1)\nHOUSES:\nHouse13: Aries 10.00°\n";
    assert!(matches!(
        parse_chart(text),
        Err(ProtocolError::InvalidHouse { line: 4, .. })
    ));
}

#[test]
fn test_duplicate_house() {
    let text = "PLANETS:\nHOUSES:\nHouse1: Aries 10.00°\nHouse1: Aries 12.00°\n";
    assert_eq!(
        parse_chart(text),
        Err(ProtocolError::DuplicateHouse { line: 4, number: 1 })
    );
}

#[test]
fn test_unknown_angle() {
    let text = "PLANETS:\nANGLES:\nVertex: Aries 10.00°\n";
    assert!(matches!(
        parse_chart(text),
        Err(ProtocolError::UnknownAngle { line: 3, .. })
    ));
}

#[test]
fn test_missing_planets_section() {
    let text = "HOUSES:\nHouse1: Aries 10.00°\n";
    assert_eq!(parse_chart(text), Err(ProtocolError::MissingPlanets));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = parse_chart("PLANETS:\nnonsense\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 2: malformed PLANETS record: \"nonsense\""
    );
}
