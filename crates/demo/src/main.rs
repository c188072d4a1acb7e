// File: crates/demo/src/main.rs
// Summary: Demo loads a quote series (JSON or CSV), composes the chart and renders it to PNG.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use swingchart_core::{
    aggregate, normalize_quotes, read_series, ChartComposer, ChartConfig, DisplayOptions, Interval, TimeSeriesPoint,
};
use swingchart_render_skia::{theme, RenderOptions, SkiaRenderer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a quote series to a PNG price chart", long_about = None)]
struct Cli {
    /// Quote series: a JSON array as served by the quote endpoint, or a CSV with the same column names
    input: PathBuf,

    /// Output PNG (defaults to target/out/chart_<stem>.png)
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long)]
    ma5: bool,
    #[arg(long)]
    ma25: bool,
    #[arg(long)]
    ma75: bool,
    /// Show the volume sub-panel
    #[arg(long)]
    volume: bool,
    /// Enable every layer
    #[arg(long)]
    all: bool,

    /// Re-bucket daily quotes before charting (daily, weekly, monthly)
    #[arg(long, default_value = "daily")]
    interval: Interval,

    /// Simulate the pointer at this horizontal panel offset (pixels)
    #[arg(long)]
    hover: Option<f64>,

    /// ChartConfig JSON overriding panel size and layout constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset name (dark, light)
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Device pixel ratio of the output image
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Skip text (tooltip rows, messages)
    #[arg(long)]
    no_labels: bool,

    /// Also write the composed scene as JSON
    #[arg(long)]
    scene_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swingchart=info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let raw = load_series(&cli.input).with_context(|| format!("failed to load '{}'", cli.input.display()))?;
    let quotes = normalize_quotes(raw);
    let series = aggregate(&quotes, cli.interval)?;
    info!(rows = series.len(), interval = %cli.interval, "loaded {}", cli.input.display());

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ChartConfig::from_json(&text)?
        }
        None => ChartConfig::default(),
    };

    let options = if cli.all {
        DisplayOptions::all()
    } else {
        DisplayOptions { ma5: cli.ma5, ma25: cli.ma25, ma75: cli.ma75, show_volume: cli.volume }
    };

    let mut composer = ChartComposer::with_config(series, options, config)?;
    if let Some(offset) = cli.hover {
        let state = composer.on_pointer_move(offset, config.width);
        if !state.is_active() {
            warn!(offset, width = config.width, "hover offset did not resolve to a data index");
        }
    }

    let outcome = composer.compose();
    match outcome.scene() {
        None => warn!("no closing prices in the series; rendering placeholder"),
        Some(scene) => {
            let g = &scene.geometry;
            info!(
                min = g.price.vmin,
                max = g.price.vmax,
                points = composer.chartable_len(),
                indicators = scene.indicators.len(),
                "price domain"
            );
            if let Some(tip) = &scene.tooltip {
                for line in tip.lines() {
                    info!("  {line}");
                }
            }
        }
    }

    let opts = RenderOptions {
        theme: theme::find(&cli.theme),
        draw_labels: !cli.no_labels,
        scale: cli.scale,
        ..RenderOptions::default()
    };
    let out = cli.out.clone().unwrap_or_else(|| out_name_for(&cli.input));
    SkiaRenderer::new().render_to_png(&outcome, composer.config(), &opts, &out)?;
    println!("Wrote {}", out.display());

    if let Some(path) = &cli.scene_json {
        let json = serde_json::to_string_pretty(&outcome)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Pick the decoder from the file extension; anything but `.csv` is JSON.
fn load_series(path: &Path) -> Result<Vec<TimeSeriesPoint>> {
    let is_csv = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        return load_quotes_csv(path);
    }
    let file = std::fs::File::open(path)?;
    Ok(read_series(std::io::BufReader::new(file))?)
}

/// CSV with a header row; column names are matched case-insensitively and
/// empty cells are absent values.
fn load_quotes_csv(path: &Path) -> Result<Vec<TimeSeriesPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_date = idx(&["date"]).context("CSV has no Date column")?;
    let i_code = idx(&["code"]);
    let i_open = idx(&["open"]);
    let i_high = idx(&["high"]);
    let i_low = idx(&["low"]);
    let i_close = idx(&["close"]);
    let i_volume = idx(&["volume"]);
    let i_turnover = idx(&["turnovervalue", "turnover_value"]);
    let i_interval = idx(&["interval"]);
    let i_ma5 = idx(&["ma5"]);
    let i_ma25 = idx(&["ma25"]);
    let i_ma75 = idx(&["ma75"]);
    let i_vma25 = idx(&["volume_ma25", "volumema25"]);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let text = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(str::trim).filter(|s| !s.is_empty());
        let num = |i: Option<usize>| text(i).and_then(|s| s.parse::<f64>().ok());
        let interval = match text(i_interval) {
            Some(s) => s.parse::<Interval>().map_err(anyhow::Error::msg)?,
            None => Interval::Daily,
        };
        out.push(TimeSeriesPoint {
            date: rec.get(i_date).unwrap_or_default().trim().to_string(),
            code: text(i_code).map(str::to_string),
            open: num(i_open),
            high: num(i_high),
            low: num(i_low),
            close: num(i_close),
            volume: num(i_volume),
            turnover_value: num(i_turnover),
            interval,
            ma5: num(i_ma5),
            ma25: num(i_ma25),
            ma75: num(i_ma75),
            volume_ma25: num(i_vma25),
        });
    }
    Ok(out)
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}
