//! Ladder fingerprint.
//!
//! A BLAKE3 hash over the ladder structure: line count, then each row's
//! length and sorted rung positions, all as little-endian `u64`. Identical
//! ladders hash identically no matter how they were produced.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ladder::Ladder;

/// Length of the abbreviated id printed on sheets.
pub const SHORT_ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LadderId(pub String);

impl LadderId {
    pub fn of(ladder: &Ladder) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(ladder.line_count() as u64).to_le_bytes());
        for row in ladder.rows() {
            let mut rungs = row.rungs().to_vec();
            rungs.sort_unstable();
            hasher.update(&(rungs.len() as u64).to_le_bytes());
            for pos in rungs {
                hasher.update(&(pos as u64).to_le_bytes());
            }
        }
        Self(hasher.finalize().to_hex().to_string())
    }

    pub fn short(&self) -> &str {
        &self.0[..SHORT_ID_LEN.min(self.0.len())]
    }
}

impl fmt::Display for LadderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::Row;

    fn ladder(lines: usize, rows: &[&[usize]]) -> Ladder {
        Ladder::from_rows(lines, rows.iter().map(|r| Row::new(r.to_vec())).collect()).unwrap()
    }

    #[test]
    fn identical_ladders_share_id() {
        let a = ladder(4, &[&[0, 2], &[1]]);
        let b = ladder(4, &[&[2, 0], &[1]]);
        assert_eq!(LadderId::of(&a), LadderId::of(&b));
    }

    #[test]
    fn row_order_matters() {
        let a = ladder(4, &[&[0, 2], &[1]]);
        let b = ladder(4, &[&[1], &[0, 2]]);
        assert_ne!(LadderId::of(&a), LadderId::of(&b));
    }

    #[test]
    fn empty_row_is_not_ignored() {
        let a = ladder(3, &[&[0]]);
        let b = ladder(3, &[&[0], &[]]);
        assert_ne!(LadderId::of(&a), LadderId::of(&b));
    }

    #[test]
    fn short_form_is_prefix() {
        let id = LadderId::of(&ladder(3, &[&[1]]));
        assert_eq!(id.short().len(), SHORT_ID_LEN);
        assert!(id.0.starts_with(id.short()));
    }
}
