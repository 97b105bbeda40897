use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Upper bound on ticks per axis; larger plans indicate a misconfigured step.
pub const MAX_TICKS_PER_AXIS: usize = 10_000;

// Fraction of a step by which `start + k * step` may overshoot `end` and
// still count as landing on it.
const TICK_END_TOLERANCE: f64 = 1e-9;

pub type TickPositions = SmallVec<[f64; 32]>;

pub type LabelFormatter = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Default tick label: the world position truncated toward zero.
#[must_use]
pub fn truncate_label(position: f64) -> String {
    (position.trunc() as i64).to_string()
}

#[must_use]
pub fn default_label_formatter() -> LabelFormatter {
    Arc::new(truncate_label)
}

/// Plans tick positions `start, start + step, ...` up to and including `end`.
///
/// Position `i` is always exactly `start + i * step`. A final tick whose
/// overshoot past `end` is only float noise (under `1e-9` of a step) is
/// kept, so ranges that are a whole number of steps include their end.
pub fn tick_positions(axis: Axis, start: f64, end: f64, step: f64) -> ChartResult<TickPositions> {
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidTickStep { axis, step });
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{axis} tick range must be finite"
        )));
    }
    if start > end {
        return Err(ChartError::InvalidData(format!(
            "{axis} tick range start {start} exceeds end {end}"
        )));
    }

    let mut intervals = ((end - start) / step).floor();
    if start + (intervals + 1.0) * step - end <= TICK_END_TOLERANCE * step {
        intervals += 1.0;
    }
    if intervals >= MAX_TICKS_PER_AXIS as f64 {
        return Err(ChartError::InvalidTickStep { axis, step });
    }

    let count = intervals as usize + 1;
    Ok((0..count)
        .map(|index| start + index as f64 * step)
        .collect())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Static tick plan for one axis.
///
/// Positions are computed and validated on construction so a bad step fails
/// while the chart is being configured rather than during a repaint.
#[derive(Clone)]
pub struct TickSpec {
    axis: Axis,
    start: f64,
    end: f64,
    step: f64,
    positions: TickPositions,
    formatter: LabelFormatter,
}

impl fmt::Debug for TickSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickSpec")
            .field("axis", &self.axis)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .field("positions", &self.positions.len())
            .finish_non_exhaustive()
    }
}

impl TickSpec {
    pub fn new(axis: Axis, start: f64, end: f64, step: f64) -> ChartResult<Self> {
        Self::with_formatter(axis, start, end, step, default_label_formatter())
    }

    pub fn with_formatter(
        axis: Axis,
        start: f64,
        end: f64,
        step: f64,
        formatter: LabelFormatter,
    ) -> ChartResult<Self> {
        let positions = tick_positions(axis, start, end, step)?;
        Ok(Self {
            axis,
            start,
            end,
            step,
            positions,
            formatter,
        })
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[must_use]
    pub fn label(&self, position: f64) -> String {
        (self.formatter)(position)
    }

    /// Returns a copy of this plan that labels ticks with `formatter`.
    #[must_use]
    pub fn relabeled(&self, formatter: LabelFormatter) -> Self {
        Self {
            formatter,
            ..self.clone()
        }
    }

    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        self.positions.iter().map(|&position| Tick {
            position,
            label: self.label(position),
        })
    }
}
