//! Key-length estimation via the index of coincidence.

use tracing::debug;

use vigenere_model::candidate::rank_candidates;
use vigenere_model::letter::ALPHABET_LEN;
use vigenere_model::{Ciphertext, CrackError, LengthCandidate, Result};

/// Scores every candidate key length from 1 to
/// `min(max_len, ciphertext length)` and returns them best-first.
///
/// For each length the ciphertext is split into columns by position
/// modulo the length. A column's normalized IC is
/// `26 · Σ n_c(n_c−1) / (N(N−1))` over its letter counts `n_c`; the
/// candidate's score is the mean over its columns. Columns of one
/// letter or fewer contribute 0 (their IC is undefined), so `max_len`
/// should not grossly exceed the ciphertext length or scores dilute.
///
/// Ordering is descending by score with ties broken by the shorter
/// length, so the result is deterministic.
pub fn estimate_lengths(ciphertext: &Ciphertext, max_len: usize) -> Result<Vec<LengthCandidate>> {
    if ciphertext.is_empty() {
        return Err(CrackError::CiphertextNotLoaded);
    }
    if max_len == 0 {
        return Err(CrackError::ZeroMaxLength);
    }

    let limit = max_len.min(ciphertext.len());
    let mut candidates = Vec::with_capacity(limit);
    for len in 1..=limit {
        let mut total = 0.0;
        for col in 0..len {
            total += column_ic(ciphertext, col, len);
        }
        candidates.push(LengthCandidate {
            length: len,
            score: total / len as f64,
        });
    }

    rank_candidates(&mut candidates);
    debug!(
        lengths_tried = limit,
        best_length = candidates[0].length,
        best_score = candidates[0].score,
        "estimated key lengths"
    );
    Ok(candidates)
}

/// Normalized IC of one column, or 0 for columns too short to score.
fn column_ic(ciphertext: &Ciphertext, col: usize, len: usize) -> f64 {
    let mut counts = [0u32; ALPHABET_LEN];
    let mut column_len = 0u32;
    for letter in ciphertext.column(col, len) {
        counts[usize::from(letter.rank())] += 1;
        column_len += 1;
    }
    if column_len <= 1 {
        return 0.0;
    }

    let coincidences: u64 = counts
        .iter()
        .map(|&n| u64::from(n) * u64::from(n.saturating_sub(1)))
        .sum();
    let pairs = u64::from(column_len) * u64::from(column_len - 1);
    ALPHABET_LEN as f64 * coincidences as f64 / pairs as f64
}
