//! Sheet labels: numbers across the top, letters along the bottom.
//!
//! The letter printed under bottom column `c` belongs to the start line that
//! arrives there, so top line `k + 1` always lands on letter `k`.

use crate::tracer::Permutation;

/// `1..=line_count` as strings.
pub fn top_labels(line_count: usize) -> Vec<String> {
    (1..=line_count).map(|i| i.to_string()).collect()
}

/// Spreadsheet-style column letters: `A..Z`, then `AA`, `AB`, ...
pub fn letter(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

/// Bottom labels in column order.
pub fn bottom_labels(perm: &Permutation) -> Vec<String> {
    perm.inverse().as_slice().iter().map(|&start| letter(start)).collect()
}
