use anyhow::Context;
use astrolabe::{ChartLayoutEngine, ChartSnapshot, DisplayConfig};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Lay out a chart wheel from calculator output and print it as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(help = "Calculator output file, or - for stdin")]
    input: PathBuf,

    #[arg(long, help = "Display settings (defaults to configs/chart.toml when present)")]
    config: Option<PathBuf>,

    #[arg(long)]
    diameter: Option<f64>,

    #[arg(long)]
    no_aspects: bool,

    #[arg(long)]
    no_houses: bool,

    #[arg(long)]
    no_symbols: bool,

    #[arg(long)]
    pretty: bool,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading calculator output from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn display_config(args: &Args) -> anyhow::Result<DisplayConfig> {
    let mut config = match &args.config {
        Some(path) => astrolabe_config::load_display_config_from(path)?,
        None => match astrolabe_config::read_chart_toml_text() {
            Ok(text) => astrolabe_config::parse_display_config(&text)?,
            Err(e) => {
                log::info!("{e}; using built-in display settings");
                DisplayConfig::default()
            }
        },
    };

    if let Some(diameter) = args.diameter {
        config.set_chart_diameter(diameter);
    }
    if args.no_aspects {
        config.set_show_aspects(false);
    }
    if args.no_houses {
        config.set_show_house_cusps(false);
    }
    if args.no_symbols {
        config.set_show_planet_symbols(false);
    }
    astrolabe_config::validate_display_config(&config)?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = display_config(&args)?;
    let text = read_input(&args.input)?;
    let snapshot: ChartSnapshot = text
        .parse()
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let layout = ChartLayoutEngine::new().render(&snapshot, &config);
    log::info!(
        "rendered {} items for {} bodies",
        layout.items.len(),
        snapshot.bodies.len()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{json}");
    Ok(())
}
