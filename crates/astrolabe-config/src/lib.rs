use astrolabe::rendering::primitives::PenStyle;
use astrolabe::rendering::visual_config::{AspectPen, MAX_PEN_WIDTH, MIN_PEN_WIDTH};
use astrolabe::DisplayConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    chart: GeometryToml,
    #[serde(default)]
    display: TogglesToml,
    #[serde(default)]
    aspects: AspectsToml,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeometryToml {
    diameter: Option<f64>,
    ring_thickness: Option<f64>,
    marker_diameter: Option<f64>,
    marker_inset: Option<f64>,
    house_ring_gap: Option<f64>,
    house_ring_width: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TogglesToml {
    show_aspects: Option<bool>,
    show_house_cusps: Option<bool>,
    show_planet_symbols: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AspectsToml {
    major: Option<PenToml>,
    minor: Option<PenToml>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PenToml {
    width: Option<f64>,
    style: Option<PenStyle>,
}

impl PenToml {
    fn apply(&self, defaults: AspectPen) -> AspectPen {
        AspectPen::new(
            self.width.unwrap_or(defaults.width),
            self.style.unwrap_or(defaults.style),
        )
    }
}

/// Try the usual relative locations of `configs/chart.toml`.
pub fn read_chart_toml_text() -> anyhow::Result<String> {
    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("loaded chart config from {p}");
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load chart.toml from {:?}", DEFAULT_CONFIG_PATHS);
}

/// Build a display configuration from TOML text. Missing keys keep their defaults.
pub fn parse_display_config(text: &str) -> anyhow::Result<DisplayConfig> {
    let root: ChartToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;

    let mut config = DisplayConfig::default();
    let chart = &root.chart;
    if let Some(v) = chart.diameter {
        config.set_chart_diameter(v);
    }
    if let Some(v) = chart.ring_thickness {
        config.set_ring_thickness(v);
    }
    if let Some(v) = chart.marker_diameter {
        config.set_marker_diameter(v);
    }
    if let Some(v) = chart.marker_inset {
        config.set_marker_inset(v);
    }
    if let Some(v) = chart.house_ring_gap {
        config.set_house_ring_gap(v);
    }
    if let Some(v) = chart.house_ring_width {
        config.set_house_ring_width(v);
    }

    let display = &root.display;
    if let Some(v) = display.show_aspects {
        config.set_show_aspects(v);
    }
    if let Some(v) = display.show_house_cusps {
        config.set_show_house_cusps(v);
    }
    if let Some(v) = display.show_planet_symbols {
        config.set_show_planet_symbols(v);
    }

    let major = root
        .aspects
        .major
        .as_ref()
        .map_or(AspectPen::MAJOR_DEFAULT, |p| p.apply(AspectPen::MAJOR_DEFAULT));
    let minor = root
        .aspects
        .minor
        .as_ref()
        .map_or(AspectPen::MINOR_DEFAULT, |p| p.apply(AspectPen::MINOR_DEFAULT));
    validate_pen("aspects.major", major)?;
    validate_pen("aspects.minor", minor)?;
    config.set_major_pen(major);
    config.set_minor_pen(minor);

    validate_display_config(&config)?;
    Ok(config)
}

fn validate_pen(key: &str, pen: AspectPen) -> anyhow::Result<()> {
    if !(MIN_PEN_WIDTH..=MAX_PEN_WIDTH).contains(&pen.width) {
        anyhow::bail!(
            "{key}.width must be between {MIN_PEN_WIDTH} and {MAX_PEN_WIDTH}, got {}",
            pen.width
        );
    }
    Ok(())
}

pub fn validate_display_config(config: &DisplayConfig) -> anyhow::Result<()> {
    if !(config.chart_diameter() > 0.0) {
        anyhow::bail!("chart.diameter must be positive, got {}", config.chart_diameter());
    }
    let radius = config.outer_radius();
    if !(config.ring_thickness() > 0.0 && config.ring_thickness() < radius) {
        anyhow::bail!(
            "chart.ring_thickness must be between 0 and the chart radius ({radius}), got {}",
            config.ring_thickness()
        );
    }
    if !(config.marker_diameter() > 0.0) {
        anyhow::bail!(
            "chart.marker_diameter must be positive, got {}",
            config.marker_diameter()
        );
    }
    for (key, value) in [
        ("marker_inset", config.marker_inset()),
        ("house_ring_gap", config.house_ring_gap()),
        ("house_ring_width", config.house_ring_width()),
    ] {
        if value < 0.0 {
            anyhow::bail!("chart.{key} must not be negative, got {value}");
        }
    }
    // Markers sit on the base circle; below one marker radius they cross the center
    let base = config.base_radius();
    let marker_radius = config.marker_diameter() / 2.0;
    if base < marker_radius {
        anyhow::bail!(
            "chart.marker_inset leaves a marker circle of radius {base}, \
             which must be at least half the marker diameter ({marker_radius})"
        );
    }
    Ok(())
}

pub fn load_display_config_from(path: &Path) -> anyhow::Result<DisplayConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_display_config(&text)
}

pub fn load_display_config() -> anyhow::Result<DisplayConfig> {
    let text = read_chart_toml_text()?;
    parse_display_config(&text)
}
