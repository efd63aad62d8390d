//! Ranked analysis results: key-length candidates and per-column
//! shift hypotheses.

use serde::{Deserialize, Serialize};

use crate::letter::Letter;

/// One candidate key length with its coincidence score.
///
/// The score is the mean normalized index of coincidence across the
/// `length` columns the ciphertext splits into. A value near 1.0 means
/// the columns look like uniform random text; correctly aligned columns
/// of natural-language ciphertext score noticeably higher, so larger is
/// more likely the true period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthCandidate {
    /// The assumed key length (≥ 1).
    pub length: usize,
    /// Mean normalized column IC for this length.
    pub score: f64,
}

/// One assumed key letter for a single column, with its goodness of fit.
///
/// `deviation` is the frequency-weighted absolute deviation between the
/// column's shifted letter distribution and the reference model; lower
/// means a better fit. Each column carries exactly 26 of these, one per
/// possible shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnHypothesis {
    /// The assumed key letter (shift 0 is `A`, shift k is `'A' + k`).
    pub shift: Letter,
    /// Weighted absolute deviation from the reference model (≥ 0).
    pub deviation: f64,
}

/// Orders candidates best-first: descending score, ties broken by the
/// shorter length.
pub fn rank_candidates(candidates: &mut [LengthCandidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.length.cmp(&b.length))
    });
}

/// Orders hypotheses best-first: ascending deviation, ties broken by the
/// smaller shift.
pub fn rank_hypotheses(hypotheses: &mut [ColumnHypothesis]) {
    hypotheses.sort_by(|a, b| {
        a.deviation
            .partial_cmp(&b.deviation)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.shift.cmp(&b.shift))
    });
}
