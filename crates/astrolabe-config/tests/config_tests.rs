use astrolabe::rendering::primitives::PenStyle;
use astrolabe::rendering::visual_config::AspectPen;
use astrolabe::DisplayConfig;
use astrolabe_config::{load_display_config_from, parse_display_config, validate_display_config};
use std::io::Write;

#[test]
fn test_empty_file_keeps_defaults() {
    let config = parse_display_config("").unwrap();
    assert_eq!(config, DisplayConfig::default());
}

#[test]
fn test_partial_overrides() {
    let text = r#"
[chart]
diameter = 500.0

[display]
show_aspects = false

[aspects.minor]
style = "dash_dot"
"#;
    let config = parse_display_config(text).unwrap();
    assert_eq!(config.chart_diameter(), 500.0);
    assert_eq!(config.ring_thickness(), 30.0);
    assert!(!config.show_aspects());
    assert!(config.show_house_cusps());
    assert_eq!(config.minor_pen(), AspectPen::new(1.0, PenStyle::DashDot));
    assert_eq!(config.major_pen(), AspectPen::MAJOR_DEFAULT);
}

#[test]
fn test_shipped_config_matches_defaults() {
    let text = include_str!("../../../configs/chart.toml");
    assert_eq!(parse_display_config(text).unwrap(), DisplayConfig::default());
}

#[test]
fn test_rejects_bad_values() {
    assert!(parse_display_config("[chart]\ndiameter = 0.0\n").is_err());
    assert!(parse_display_config("[chart]\nring_thickness = 400.0\n").is_err());
    assert!(parse_display_config("[chart]\nmarker_diameter = -1.0\n").is_err());
    assert!(parse_display_config("[aspects.major]\nwidth = 7.5\n").is_err());
    assert!(parse_display_config("[aspects.major]\nstyle = \"wavy\"\n").is_err());
    assert!(parse_display_config("[chart]\nradius = 3.0\n").is_err());
}

#[test]
fn test_rejects_marker_circle_through_center() {
    // 60 - 30 - 35 leaves a base radius of -5
    let err = parse_display_config("[chart]\ndiameter = 120.0\n").unwrap_err();
    assert!(err.to_string().contains("marker circle"));

    assert!(parse_display_config("[chart]\ndiameter = 200.0\nmarker_inset = 60.0\n").is_err());
    // 100 - 30 - 35 = 35 still clears half a marker
    assert!(parse_display_config("[chart]\ndiameter = 200.0\n").is_ok());
}

#[test]
fn test_validation_catches_overrides_applied_in_code() {
    let mut config = DisplayConfig::default();
    assert!(validate_display_config(&config).is_ok());
    config.set_chart_diameter(120.0);
    assert!(config.base_radius() < 0.0);
    assert!(validate_display_config(&config).is_err());
}

#[test]
fn test_error_names_the_key() {
    let err = parse_display_config("[aspects.minor]\nwidth = 0.1\n").unwrap_err();
    assert!(err.to_string().contains("aspects.minor.width"));
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nshow_planet_symbols = false").unwrap();
    let config = load_display_config_from(file.path()).unwrap();
    assert!(!config.show_planet_symbols());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_display_config_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
