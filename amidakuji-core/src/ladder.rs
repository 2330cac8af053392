//! Ladder data model.
//!
//! A ladder is `line_count` vertical lines and an ordered list of rows. Each
//! row holds the left-line indices of its rungs; a rung at `i` joins line `i`
//! to line `i + 1`. Two rungs in one row may never share a line, so positions
//! within a row are pairwise at least two apart.

use serde::{Deserialize, Serialize};

use crate::error::LadderError;

/// One horizontal level of the ladder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    rungs: Vec<usize>,
}

impl Row {
    /// Build a row from rung positions. Positions are stored in ascending
    /// order; no validation happens here, see [`Ladder::from_rows`].
    pub fn new(mut rungs: Vec<usize>) -> Self {
        rungs.sort_unstable();
        Self { rungs }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rungs(&self) -> &[usize] {
        &self.rungs
    }

    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// True if a rung joins `left` and `left + 1` in this row.
    pub fn has_rung(&self, left: usize) -> bool {
        self.rungs.contains(&left)
    }

    /// The line a token standing on `line` moves to when crossing this row,
    /// or `None` if no rung touches `line`.
    pub fn partner(&self, line: usize) -> Option<usize> {
        if self.has_rung(line) {
            Some(line + 1)
        } else if line > 0 && self.has_rung(line - 1) {
            Some(line - 1)
        } else {
            None
        }
    }

    /// Check the row against a ladder of `line_count` lines.
    ///
    /// Uses an occupancy arena of length `line_count - 1` so the check does
    /// not depend on the stored order.
    pub(crate) fn check(&self, index: usize, line_count: usize) -> Result<(), LadderError> {
        let gaps = line_count.saturating_sub(1);
        let mut taken = vec![false; gaps];
        for &pos in &self.rungs {
            if pos >= gaps {
                return Err(LadderError::malformed(
                    index,
                    format!("rung at {pos} is outside gaps 0..{gaps}"),
                ));
            }
            if taken[pos] {
                return Err(LadderError::malformed(
                    index,
                    format!("duplicate rung at {pos}"),
                ));
            }
            let left_clash = pos > 0 && taken[pos - 1];
            let right_clash = pos + 1 < gaps && taken[pos + 1];
            if left_clash || right_clash {
                return Err(LadderError::malformed(
                    index,
                    format!("rung at {pos} shares a line with a neighbouring rung"),
                ));
            }
            taken[pos] = true;
        }
        Ok(())
    }
}

impl From<Vec<usize>> for Row {
    fn from(rungs: Vec<usize>) -> Self {
        Self::new(rungs)
    }
}

/// A single rung located on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rung {
    /// Row index, counted from the top.
    pub row: usize,
    /// Left line of the rung.
    pub left: usize,
}

impl Rung {
    pub fn right(&self) -> usize {
        self.left + 1
    }
}

/// An immutable ladder.
///
/// Built by [`crate::generate`] or [`Ladder::from_rows`]. Deserialized ladders
/// skip validation; [`crate::trace`] re-checks every row it walks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ladder {
    line_count: usize,
    rows: Vec<Row>,
}

impl Ladder {
    /// Build a ladder from explicit rows, validating every invariant.
    pub fn from_rows(line_count: usize, rows: Vec<Row>) -> Result<Self, LadderError> {
        let ladder = Self { line_count, rows };
        ladder.validate()?;
        Ok(ladder)
    }

    /// Construct without validation. Only the generator uses this, and it
    /// upholds the row invariant by construction.
    pub(crate) fn from_parts(line_count: usize, rows: Vec<Row>) -> Self {
        debug_assert!(line_count >= 2);
        Self { line_count, rows }
    }

    /// Re-check the line count and every row.
    pub fn validate(&self) -> Result<(), LadderError> {
        if self.line_count < 2 {
            return Err(LadderError::invalid(format!(
                "line count must be 2 or greater (got {})",
                self.line_count
            )));
        }
        self.rows
            .iter()
            .enumerate()
            .try_for_each(|(i, row)| row.check(i, self.line_count))
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total rungs across all rows.
    pub fn rung_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// All rungs, top to bottom and left to right within a row.
    pub fn rungs(&self) -> impl Iterator<Item = Rung> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, r)| {
            r.rungs().iter().map(move |&left| Rung { row, left })
        })
    }

    /// Vertical lines that no rung touches. A token dropped down one of
    /// these lines lands where it started.
    pub fn uncovered_lines(&self) -> Vec<usize> {
        let mut touched = vec![false; self.line_count];
        for rung in self.rungs() {
            if let Some(t) = touched.get_mut(rung.left) {
                *t = true;
            }
            if let Some(t) = touched.get_mut(rung.right()) {
                *t = true;
            }
        }
        touched
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| (!t).then_some(i))
            .collect()
    }
}
