//! ggmarginal-demo: marginal layer demo plots as JSON specs.
//!
//! Run: `ggmarginal-demo --demo facets -v`

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ggmarginal::config::Config;
use ggmarginal::demo;
use ggmarginal::frontend::JsonFrontend;
use ggmarginal::grammar::{GGPlot, SizeSpec};

/// Which demo to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoKind {
    /// Scatter with histogram + density margins on every side combination.
    Layers,
    /// Scatter with boxplot margins on every side combination.
    Boxplot,
    /// Faceted car data with histogram + density margins.
    Facets,
    /// One scatter plot with the given sides and sizes.
    Custom,
}

/// ggmarginal-demo: marginal layer demo plots
#[derive(Parser, Debug)]
#[command(name = "ggmarginal-demo")]
#[command(version)]
#[command(about = "Build marginal layer demo plots and print their specs", long_about = None)]
struct Cli {
    /// Demo to run (default: custom if --sides is given, else layers)
    #[arg(short, long, value_enum)]
    demo: Option<DemoKind>,

    /// Margin sides for the custom demo, e.g. "tr"
    #[arg(short, long)]
    sides: Option<String>,

    /// Margin sizes for the custom demo, comma separated
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<f64>>,

    /// Use boxplot margins in the custom demo
    #[arg(long)]
    boxplot: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write specs to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// One spec per line
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_plots(cli: &Cli, config: &Config) -> Result<Vec<GGPlot>> {
    let kind = cli.demo.unwrap_or(if cli.sides.is_some() {
        DemoKind::Custom
    } else {
        DemoKind::Layers
    });
    log::info!("running {kind:?} demo");

    let plots = match kind {
        DemoKind::Layers => demo::marginal_layers(false)?,
        DemoKind::Boxplot => demo::marginal_layers(true)?,
        DemoKind::Facets => demo::marginal_layers_facets()?,
        DemoKind::Custom => {
            if cli.sides.is_none() || cli.sizes.is_none() {
                config.validate().context("Invalid configuration")?;
            }
            let sides = cli.sides.as_deref().unwrap_or(&config.marginal.sides);
            let size = cli
                .sizes
                .clone()
                .map_or_else(|| config.marginal.size.clone(), SizeSpec::PerSide);
            let boxplot = cli.boxplot || config.marginal.boxplot;
            vec![demo::marginal_plot(sides, size, boxplot)
                .with_context(|| format!("Invalid marginal layers for sides {sides:?}"))?]
        }
    };
    Ok(plots)
}

fn show_all<W: Write>(plots: &[GGPlot], mut frontend: JsonFrontend<W>) -> Result<usize> {
    for plot in plots {
        plot.show(&mut frontend)?;
    }
    let shown = frontend.shown();
    frontend.into_inner()?;
    Ok(shown)
}

fn emit(plots: &[GGPlot], output: Option<&Path>, pretty: bool) -> Result<usize> {
    match output {
        Some(path) => {
            let frontend = JsonFrontend::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            show_all(plots, frontend.pretty(pretty))
        }
        None => show_all(plots, JsonFrontend::stdout().pretty(pretty)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    let plots = build_plots(&cli, &config)?;

    let output = cli.output.as_deref().or(config.output.path.as_deref());
    let shown = emit(&plots, output, config.output.pretty && !cli.compact)?;
    log::info!("{shown} plot specs written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_sizes() {
        let cli = Cli::try_parse_from(["ggmarginal-demo", "--sides", "lr", "--sizes", "0.1,0.2"])
            .unwrap();
        assert_eq!(cli.sides.as_deref(), Some("lr"));
        assert_eq!(cli.sizes, Some(vec![0.1, 0.2]));

        let plots = build_plots(&cli, &Config::default()).unwrap();
        assert_eq!(plots.len(), 1);
        assert_eq!(plots[0].layers().len(), 5);
    }

    #[test]
    fn test_cli_default_demo() {
        let cli = Cli::try_parse_from(["ggmarginal-demo", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let plots = build_plots(&cli, &Config::default()).unwrap();
        assert_eq!(plots.len(), demo::MARGIN_CASES.len());
    }

    #[test]
    fn test_cli_custom_uses_config() {
        let cli = Cli::try_parse_from(["ggmarginal-demo", "--demo", "custom"]).unwrap();
        let config = Config::parse("marginal:\n  sides: b\n  boxplot: true\n").unwrap();
        let plots = build_plots(&cli, &config).unwrap();
        assert_eq!(plots[0].layers().len(), 2);
    }

    #[test]
    fn test_bad_config_only_affects_custom() {
        let config = Config::parse("marginal:\n  sides: xyz\n").unwrap();

        let cli = Cli::try_parse_from(["ggmarginal-demo", "--demo", "facets"]).unwrap();
        assert_eq!(build_plots(&cli, &config).unwrap().len(), 6);

        let cli = Cli::try_parse_from(["ggmarginal-demo", "--demo", "custom"]).unwrap();
        assert!(build_plots(&cli, &config).is_err());
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("specs.jsonl");
        let plots = demo::marginal_layers(true).unwrap();

        let shown = emit(&plots, Some(&path), false).unwrap();
        assert_eq!(shown, plots.len());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), plots.len());
        let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(first["ggtitle"]["text"], "Margins: l");
    }

    #[test]
    fn test_cli_custom_bad_sides() {
        let cli = Cli::try_parse_from(["ggmarginal-demo", "--sides", "lrtbl"]).unwrap();
        assert!(build_plots(&cli, &Config::default()).is_err());
    }
}
