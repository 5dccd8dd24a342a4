use anyhow::{Context, Result, anyhow};
use clap::Parser;
use piplot::config::{self, PlotConfig};
use piplot::function::{BUILTIN_NAMES, builtin};
use piplot::Figure;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "piplot",
    version,
    about = "Plot functions with zero axes, grid, legend and π/4, π/6 marks"
)]
struct Cli {
    /// Built-in functions separated by comma or semicolon
    /// (sin, cos, tan, exp, ln, sqrt, abs, quadratic).
    #[arg(short, long, default_value = "sin,cos,quadratic")]
    curves: String,
    /// Plot the inverse relation of every curve (swap x and y).
    #[arg(long, default_value_t = false)]
    inverse: bool,
    /// First sampled x value.
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,
    /// Sampling stops before this x value.
    #[arg(long, allow_negative_numbers = true)]
    stop: Option<f64>,
    /// Distance between sampled x values.
    #[arg(long, allow_negative_numbers = true)]
    step: Option<f64>,
    /// Do not draw gridlines.
    #[arg(long, default_value_t = false)]
    no_grid: bool,
    /// Do not draw the legend.
    #[arg(long, default_value_t = false)]
    no_legend: bool,
    /// Do not draw the π/4 and π/6 marks.
    #[arg(long, default_value_t = false)]
    no_pi_marks: bool,
    /// JSON settings file (defaults to <config dir>/piplot/config.json when it exists).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override one option, e.g. --set step=0.05 or --set need_grid=false (value is JSON).
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Window or chart title.
    #[arg(long, default_value = "")]
    title: String,
    /// Write the chart to this file (.svg or .png) instead of opening a window.
    #[arg(long)]
    save: Option<PathBuf>,
    /// Width of the saved chart (default 1200).
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Height of the saved chart (default 800).
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// `key=value`; the value is read as JSON, falling back to a plain string.
fn parse_assignment(s: &str) -> Result<(String, Value)> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid --set {s:?}, expected KEY=VALUE"))?;
    let value = serde_json::from_str(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.trim().to_string(), value))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let figure = Figure::with_title(cli.title.as_str());
    let mut plot = PlotConfig::with_surface(figure, true, true, true);

    let settings_path = cli
        .config
        .clone()
        .or_else(|| config::default_settings_path().filter(|p| p.exists()));
    if let Some(path) = settings_path {
        let settings = config::load_settings(&path)?;
        plot.apply_settings(&settings)
            .with_context(|| format!("applying settings from {}", path.display()))?;
    }

    if cli.start.is_some() || cli.stop.is_some() || cli.step.is_some() {
        plot.set_plot_ranges(
            cli.start.unwrap_or(plot.start_value()),
            cli.stop.unwrap_or(plot.stop_value()),
            cli.step.unwrap_or(plot.step()),
        )?;
    }
    if cli.no_grid {
        plot.set_need_grid(false);
    }
    if cli.no_legend {
        plot.set_need_legend(false);
    }
    if cli.no_pi_marks {
        plot.set_need_pi_marks(false);
    }
    for assignment in &cli.set {
        let (key, value) = parse_assignment(assignment)?;
        plot.set_option(&key, &value)?;
    }

    for name in parse_list(&cli.curves) {
        let func = builtin(&name).ok_or_else(|| {
            anyhow!(
                "unknown function {name:?}, expected one of: {}",
                BUILTIN_NAMES.join(", ")
            )
        })?;
        plot.add_plot_by_func(&func, "", cli.inverse);
    }

    match cli.save {
        Some(path) => {
            plot.save_plot(&path, cli.width, cli.height)?;
            eprintln!("Wrote plot to {}", path.display());
            Ok(())
        }
        None => plot.show_plot(),
    }
}
