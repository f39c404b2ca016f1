// File: crates/demo/src/script.rs
// Summary: Pointer scripts (screen-space down/move/up steps) and dataset CSV loading.

use anyhow::{bail, Context, Result};
use dragchart_core::{Coordinate, PointerEvent};
use std::io::Read;
use std::path::Path;

use crate::scale::PlotMapping;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Down,
    Move,
    Up,
}

/// One scripted pointer step, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub kind: StepKind,
    pub px: f64,
    pub py: f64,
}

impl ScriptStep {
    pub fn to_event(&self, mapping: &PlotMapping) -> PointerEvent {
        match self.kind {
            StepKind::Down => PointerEvent::down(mapping.screen_to_data(self.px, self.py)),
            StepKind::Move => PointerEvent::moved(mapping.screen_to_data(self.px, self.py)),
            StepKind::Up => PointerEvent::Up,
        }
    }
}

/// Parse `kind,x,y` rows (header required). `up` rows may leave x/y empty.
pub fn parse_script<R: Read>(input: R) -> Result<Vec<ScriptStep>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(input);
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("script row {}", row + 1))?;
        let kind = match rec.get(0).map(str::to_ascii_lowercase).as_deref() {
            Some("down") => StepKind::Down,
            Some("move") => StepKind::Move,
            Some("up") => StepKind::Up,
            other => bail!("script row {}: unknown step kind {:?}", row + 1, other),
        };
        let num = |i: usize| -> Result<f64> {
            let s = rec.get(i).unwrap_or("");
            if s.is_empty() && kind == StepKind::Up {
                return Ok(0.0);
            }
            s.parse::<f64>().with_context(|| format!("script row {}: bad number {:?}", row + 1, s))
        };
        out.push(ScriptStep { kind, px: num(1)?, py: num(2)? });
    }
    Ok(out)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_script(file)
}

/// Press on `at`, drag it by `(dx, dy)` pixels over `steps` moves, release.
pub fn drag_script(at: (f64, f64), dx: f64, dy: f64, steps: usize) -> Vec<ScriptStep> {
    let steps = steps.max(1);
    let mut out = vec![ScriptStep { kind: StepKind::Down, px: at.0, py: at.1 }];
    for i in 1..=steps {
        let f = i as f64 / steps as f64;
        out.push(ScriptStep { kind: StepKind::Move, px: at.0 + dx * f, py: at.1 + dy * f });
    }
    out.push(ScriptStep { kind: StepKind::Up, px: at.0 + dx, py: at.1 + dy });
    out
}

/// Load `primary,secondary` rows. Header names are matched loosely
/// (`x`/`time`/`primary`, `y`/`temperature`/`secondary`); otherwise the first
/// two columns are used.
pub fn load_points_csv(path: &Path) -> Result<Vec<Coordinate>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_points(file)
}

pub fn parse_points<R: Read>(input: R) -> Result<Vec<Coordinate>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(input);
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "dataset headers");

    let idx = |names: &[&str], fallback: usize| -> usize {
        headers.iter().position(|h| names.contains(&h.as_str())).unwrap_or(fallback)
    };
    let i_p = idx(&["x", "primary", "time", "timestamp"], 0);
    let i_s = idx(&["y", "secondary", "temperature", "temp", "value"], 1);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(i_p), parse(i_s)) {
            (Some(p), Some(s)) => out.push(Coordinate::new(p, s)),
            _ => tracing::warn!(row = row + 1, "skipping row without two numeric columns"),
        }
    }
    Ok(out)
}
