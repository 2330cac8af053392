//! Path tracer: the permutation a ladder induces.

use serde::{Deserialize, Serialize};

use crate::error::LadderError;
use crate::ladder::Ladder;

/// Bijection from top-line index to bottom-line index.
///
/// `destination(i)` is the bottom line reached by a token dropped down top
/// line `i`.
/// Deserialization goes through [`Permutation::from_vec`], so a decoded
/// value is always a bijection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation(Vec<usize>);

impl TryFrom<Vec<usize>> for Permutation {
    type Error = LadderError;

    fn try_from(map: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_vec(map)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(perm: Permutation) -> Self {
        perm.0
    }
}

impl Permutation {
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Wrap an explicit mapping, rejecting anything that is not a bijection
    /// over `0..len`.
    pub fn from_vec(map: Vec<usize>) -> Result<Self, LadderError> {
        let perm = Self(map);
        if !perm.is_bijection() {
            return Err(LadderError::invalid(format!(
                "{:?} is not a permutation of 0..{}",
                perm.0,
                perm.0.len()
            )));
        }
        Ok(perm)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn destination(&self, start: usize) -> Option<usize> {
        self.0.get(start).copied()
    }

    /// Bottom-to-top mapping.
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.0.len()];
        for (start, &end) in self.0.iter().enumerate() {
            inv[end] = start;
        }
        Self(inv)
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &d)| i == d)
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.0.len()];
        self.0.iter().all(|&d| match seen.get_mut(d) {
            Some(s) if !*s => {
                *s = true;
                true
            }
            _ => false,
        })
    }
}

/// Trace every top line to the bottom.
///
/// All tokens move together: `at[col]` holds the start line currently on
/// column `col`, and each rung swaps two neighbouring columns. Rungs in one
/// row never share a line, so the swaps within a row commute.
pub fn trace(ladder: &Ladder) -> Result<Permutation, LadderError> {
    ladder.validate()?;
    let n = ladder.line_count();
    let mut at: Vec<usize> = (0..n).collect();

    for row in ladder.rows() {
        for &left in row.rungs() {
            at.swap(left, left + 1);
        }
    }

    let mut dest = vec![0; n];
    for (col, &start) in at.iter().enumerate() {
        dest[start] = col;
    }
    Ok(Permutation(dest))
}

/// Walk a single token down from top line `start`.
///
/// At each row the token moves to the line joined to its current one by a
/// rung on either side, or stays put.
pub fn trace_line(ladder: &Ladder, start: usize) -> Result<usize, LadderError> {
    ladder.validate()?;
    if start >= ladder.line_count() {
        return Err(LadderError::invalid(format!(
            "start line {start} is outside 0..{}",
            ladder.line_count()
        )));
    }
    let mut col = start;
    for row in ladder.rows() {
        if let Some(next) = row.partner(col) {
            col = next;
        }
    }
    Ok(col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::Row;

    fn ladder(lines: usize, rows: &[&[usize]]) -> Ladder {
        Ladder::from_rows(lines, rows.iter().map(|r| Row::new(r.to_vec())).collect()).unwrap()
    }

    #[test]
    fn no_rows_is_identity() {
        let perm = trace(&ladder(5, &[])).unwrap();
        assert!(perm.is_identity());
        assert_eq!(perm.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn two_lines_single_rung_swaps() {
        let perm = trace(&ladder(2, &[&[0]])).unwrap();
        assert_eq!(perm.as_slice(), &[1, 0]);
    }

    #[test]
    fn three_lines_staircase() {
        // Line 0 goes right twice, line 1 goes left, line 2 goes left once.
        let l = ladder(3, &[&[0], &[1]]);
        let perm = trace(&l).unwrap();
        assert_eq!(perm.as_slice(), &[2, 0, 1]);
        for start in 0..3 {
            assert_eq!(perm.destination(start), Some(trace_line(&l, start).unwrap()));
        }
    }

    #[test]
    fn disjoint_rungs_in_one_row() {
        let perm = trace(&ladder(5, &[&[0, 2]])).unwrap();
        assert_eq!(perm.as_slice(), &[1, 0, 3, 2, 4]);
    }

    #[test]
    fn trace_is_deterministic() {
        let l = ladder(6, &[&[0, 3], &[1, 4], &[2], &[0, 2, 4]]);
        assert_eq!(trace(&l).unwrap(), trace(&l).unwrap());
    }

    #[test]
    fn inverse_round_trips() {
        let perm = trace(&ladder(4, &[&[0, 2], &[1]])).unwrap();
        let inv = perm.inverse();
        for start in 0..4 {
            let end = perm.destination(start).unwrap();
            assert_eq!(inv.destination(end), Some(start));
        }
    }

    #[test]
    fn malformed_row_is_reported() {
        let bad: Ladder =
            serde_json::from_str(r#"{"line_count":4,"rows":[[0],[1,2]]}"#).unwrap();
        let err = trace(&bad).unwrap_err();
        assert!(matches!(err, LadderError::MalformedLadder { row: 1, .. }));
        assert!(trace_line(&bad, 0).is_err());
    }

    #[test]
    fn degenerate_line_counts_are_rejected() {
        for json in [r#"{"line_count":1,"rows":[]}"#, r#"{"line_count":0,"rows":[]}"#] {
            let bad: Ladder = serde_json::from_str(json).unwrap();
            assert!(matches!(trace(&bad), Err(LadderError::InvalidParameter(_))));
            assert!(trace_line(&bad, 0).is_err());
        }
    }

    #[test]
    fn deserialization_rejects_non_bijections() {
        for json in ["[0, 0, 7]", "[0, 0, 1]", "[5, 1, 2]"] {
            assert!(serde_json::from_str::<Permutation>(json).is_err(), "{json} accepted");
        }
        let perm: Permutation = serde_json::from_str("[2, 0, 1]").unwrap();
        assert_eq!(perm.as_slice(), &[2, 0, 1]);
        assert_eq!(serde_json::to_string(&perm).unwrap(), "[2,0,1]");
    }

    #[test]
    fn trace_line_rejects_out_of_range_start() {
        assert!(trace_line(&ladder(3, &[]), 3).is_err());
    }

    #[test]
    fn from_vec_checks_bijection() {
        assert!(Permutation::from_vec(vec![2, 0, 1]).is_ok());
        assert!(Permutation::from_vec(vec![0, 0, 1]).is_err());
        assert!(Permutation::from_vec(vec![0, 3]).is_err());
    }
}
