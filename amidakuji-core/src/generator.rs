//! Ladder generator.
//!
//! Row count is drawn uniformly from `[min_bars, max_bars]`. Each row is
//! filled by a left-to-right scan over the `line_count - 1` gaps: an eligible
//! gap gets an independent Bernoulli trial, and placing a rung at `i` makes
//! gap `i + 1` ineligible for the rest of that row.

use rand::Rng;
use tracing::debug;

use crate::error::LadderError;
use crate::ladder::{Ladder, Row};

/// Default per-gap probability of placing a rung.
pub const DEFAULT_RUNG_PROBABILITY: f64 = 0.5;

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    /// Number of vertical lines (≥ 2).
    pub line_count: usize,
    /// Lower bound on the row count, inclusive.
    pub min_bars: usize,
    /// Upper bound on the row count, inclusive.
    pub max_bars: usize,
    /// Chance that an eligible gap receives a rung, in `[0, 1]`.
    pub rung_probability: f64,
}

impl GeneratorParams {
    pub fn new(line_count: usize, min_bars: usize, max_bars: usize) -> Self {
        Self {
            line_count,
            min_bars,
            max_bars,
            rung_probability: DEFAULT_RUNG_PROBABILITY,
        }
    }

    pub fn with_rung_probability(mut self, rung_probability: f64) -> Self {
        self.rung_probability = rung_probability;
        self
    }

    /// Build parameters from raw signed values, as typed on a command line.
    /// Negative values are reported as [`LadderError::InvalidParameter`]
    /// rather than wrapping.
    pub fn from_signed(line_count: i64, min_bars: i64, max_bars: i64) -> Result<Self, LadderError> {
        let line_count = usize::try_from(line_count).map_err(|_| {
            LadderError::invalid(format!(
                "line count must be 2 or greater (got {line_count})"
            ))
        })?;
        let min_bars = usize::try_from(min_bars).map_err(|_| {
            LadderError::invalid(format!("minimum bars must be 0 or greater (got {min_bars})"))
        })?;
        let max_bars = usize::try_from(max_bars).map_err(|_| {
            LadderError::invalid(format!("maximum bars must be 0 or greater (got {max_bars})"))
        })?;
        let params = Self::new(line_count, min_bars, max_bars);
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), LadderError> {
        if self.line_count < 2 {
            return Err(LadderError::invalid(format!(
                "line count must be 2 or greater (got {})",
                self.line_count
            )));
        }
        if self.min_bars > self.max_bars {
            return Err(LadderError::invalid(format!(
                "minimum bars ({}) must be less than or equal to maximum bars ({})",
                self.min_bars, self.max_bars
            )));
        }
        if !(0.0..=1.0).contains(&self.rung_probability) {
            return Err(LadderError::invalid(format!(
                "rung probability must be within [0, 1] (got {})",
                self.rung_probability
            )));
        }
        Ok(())
    }
}

/// Generate a ladder.
///
/// The caller owns the randomness; pass a seeded `StdRng` for reproducible
/// output.
pub fn generate<R: Rng + ?Sized>(
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<Ladder, LadderError> {
    params.validate()?;

    let row_count = rng.gen_range(params.min_bars..=params.max_bars);
    let gaps = params.line_count - 1;

    let mut eligible = vec![true; gaps];
    let mut rows = Vec::with_capacity(row_count);
    for _ in 0..row_count {
        rows.push(fill_row(&mut eligible, params.rung_probability, rng));
    }

    let ladder = Ladder::from_parts(params.line_count, rows);
    debug!(
        lines = ladder.line_count(),
        rows = ladder.row_count(),
        rungs = ladder.rung_count(),
        "generated ladder"
    );
    Ok(ladder)
}

fn fill_row<R: Rng + ?Sized>(eligible: &mut [bool], p: f64, rng: &mut R) -> Row {
    eligible.fill(true);
    let mut rungs = Vec::new();
    for gap in 0..eligible.len() {
        if !eligible[gap] || !rng.gen_bool(p) {
            continue;
        }
        rungs.push(gap);
        if let Some(next) = eligible.get_mut(gap + 1) {
            *next = false;
        }
    }
    Row::new(rungs)
}
