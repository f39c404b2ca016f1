// File: crates/demo/src/main.rs
// Summary: Demo builds a draggable series (fixture or CSV), replays a pointer script through the
// gesture protocol and prints the resulting points with the drag highlight.

mod scale;
mod script;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, ValueEnum};
use dragchart_core::fixtures::{self, primary_to_datetime};
use dragchart_core::{
    Axis, AxisKind, DraggableSeries, GestureController, GestureOutcome, HitPolicy, ThresholdHitTest,
    WeightedHitTest,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use scale::{Insets, PlotMapping};
use script::ScriptStep;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Plain x/y points (0,0)..(800,800)
    Simple,
    /// Hourly timestamps paired with temperatures 0..800
    Timed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    Threshold,
    Weighted,
}

#[derive(Parser, Debug)]
#[command(name = "dragchart-demo")]
#[command(about = "Replay a drag gesture against a line-chart point series", long_about = None)]
struct Args {
    /// Seed dataset used when --data is not given
    #[arg(long, value_enum, default_value_t = Variant::Simple)]
    variant: Variant,

    /// CSV of primary,secondary rows replacing the seed dataset
    #[arg(long)]
    data: Option<PathBuf>,

    /// Hit-test policy
    #[arg(long, value_enum, default_value_t = Policy::Threshold)]
    policy: Policy,

    /// Threshold on the primary axis (defaults depend on the variant)
    #[arg(long)]
    max_primary_delta: Option<f64>,

    /// Threshold on the secondary axis (defaults depend on the variant)
    #[arg(long)]
    max_secondary_delta: Option<f64>,

    #[arg(long, default_value_t = 0.5)]
    primary_weight: f64,

    #[arg(long, default_value_t = 0.5)]
    secondary_weight: f64,

    /// Pointer script CSV (kind,x,y in pixels); defaults to dragging the middle point upward
    #[arg(long)]
    script: Option<PathBuf>,

    /// Plot surface width in pixels
    #[arg(long, default_value_t = 830)]
    width: u32,

    /// Plot surface height in pixels
    #[arg(long, default_value_t = 830)]
    height: u32,

    /// Step between secondary-axis labels
    #[arg(long, default_value_t = 100.0)]
    axis_step: f64,

    /// Log every gesture step (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let coords = match &args.data {
        Some(path) => script::load_points_csv(path)
            .with_context(|| format!("failed to load dataset '{}'", path.display()))?,
        None => match args.variant {
            Variant::Simple => fixtures::simple_points(),
            Variant::Timed => {
                let start = Utc
                    .with_ymd_and_hms(2024, 9, 29, 0, 0, 0)
                    .single()
                    .context("fixture start time")?;
                fixtures::timed_points(start)
            }
        },
    };
    if coords.is_empty() {
        anyhow::bail!("dataset is empty; nothing to drag");
    }

    let policy = build_policy(&args)?;
    let mut series = DraggableSeries::from_coordinates(coords, policy);
    tracing::info!(points = series.len(), policy = ?series.hit_test(), "series ready");

    // Axes are fitted once, before the gesture, so the pixel mapping stays fixed
    let x_axis = Axis::fit("X", &series, AxisKind::Primary).context("no finite primary values")?;
    let y_axis = Axis::fit("Y", &series, AxisKind::Secondary).context("no finite secondary values")?;
    let labels = y_axis.label_count(args.axis_step)?;
    println!("Y axis [{:.1}, {:.1}] with {} labels", y_axis.min, y_axis.max, labels);

    let mapping = PlotMapping::new(args.width, args.height, Insets::default(), &x_axis, &y_axis);
    let steps = match &args.script {
        Some(path) => script::load_script(path)
            .with_context(|| format!("failed to load script '{}'", path.display()))?,
        None => default_script(&series, &mapping),
    };

    let mut gesture = GestureController::new();
    for step in &steps {
        let evt = step.to_event(&mapping);
        let outcome = gesture.handle(evt, &mut series);
        tracing::debug!(?step, ?evt, ?outcome, "pointer step");
        if let GestureOutcome::Grabbed(id) = outcome {
            println!("Grabbed point {id}");
            print_points(&series, args.variant == Variant::Timed && args.data.is_none());
        }
    }
    println!("After {} steps (revision {}):", steps.len(), series.revision());
    print_points(&series, args.variant == Variant::Timed && args.data.is_none());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn build_policy(args: &Args) -> Result<HitPolicy> {
    let policy = match args.policy {
        Policy::Threshold => {
            let base = match args.variant {
                Variant::Timed if args.data.is_none() => fixtures::timed_hit_test(),
                _ => ThresholdHitTest::default(),
            };
            HitPolicy::from(ThresholdHitTest::try_new(
                args.max_primary_delta.unwrap_or(base.max_primary_delta),
                args.max_secondary_delta.unwrap_or(base.max_secondary_delta),
            )?)
        }
        Policy::Weighted => HitPolicy::from(WeightedHitTest::try_new(args.primary_weight, args.secondary_weight)?),
    };
    Ok(policy)
}

/// Drag the middle point upward by a fifth of the plot height.
fn default_script(series: &DraggableSeries, mapping: &PlotMapping) -> Vec<ScriptStep> {
    let mid = &series.points()[series.len() / 2];
    let at = mapping.data_to_screen(mid.coordinate());
    let dy = -(mapping.y.hi_px - mapping.y.lo_px) / 5.0;
    script::drag_script(at, 0.0, dy, 4)
}

fn print_points(series: &DraggableSeries, timed: bool) {
    for p in series.render_points() {
        let marker = if p.highlighted { "*" } else { " " };
        let primary = if timed {
            primary_to_datetime(p.coordinate.primary)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| format!("{:.1}", p.coordinate.primary))
        } else {
            format!("{:.1}", p.coordinate.primary)
        };
        println!("  {marker} {:>6} {:>16} {:>10.1}", p.id.to_string(), primary, p.coordinate.secondary);
    }
}
