//! Per-column shift ranking against the English monogram model.

use tracing::debug;

use vigenere_model::candidate::rank_hypotheses;
use vigenere_model::letter::ALPHABET_LEN;
use vigenere_model::{
    Ciphertext, ColumnHypothesis, CrackError, ENGLISH_FREQUENCIES, Letter, Result,
};

/// Ranks all 26 shift hypotheses for each of the `key_len` columns.
///
/// For a column with observed letter frequencies `f`, the hypothesis
/// that the key letter is shift `s` scores
/// `Σ_i |f[(i+s) mod 26] − ref[i]| · ref[i]`: shifting the observed
/// distribution back by `s` and comparing it to the reference, with
/// mismatches on common letters weighted up. Lower deviation is a
/// better fit. This weighted absolute deviation is kept as-is rather
/// than replaced with chi-squared; the two rank edge cases differently.
///
/// Each inner list holds exactly 26 hypotheses, ascending by deviation
/// with ties broken by the smaller shift.
pub fn analyze_columns(
    ciphertext: &Ciphertext,
    key_len: usize,
) -> Result<Vec<Vec<ColumnHypothesis>>> {
    if ciphertext.is_empty() {
        return Err(CrackError::CiphertextNotLoaded);
    }
    if key_len == 0 {
        return Err(CrackError::ZeroKeyLength);
    }
    if key_len > ciphertext.len() {
        return Err(CrackError::KeyLengthExceedsCiphertext {
            key_len,
            text_len: ciphertext.len(),
        });
    }

    let mut columns = Vec::with_capacity(key_len);
    for col in 0..key_len {
        columns.push(rank_column(ciphertext, col, key_len));
    }

    debug!(
        key_len,
        best = %columns
            .iter()
            .map(|ranked| ranked[0].shift.as_char())
            .collect::<String>(),
        "analyzed columns"
    );
    Ok(columns)
}

fn rank_column(ciphertext: &Ciphertext, col: usize, key_len: usize) -> Vec<ColumnHypothesis> {
    let mut counts = [0u64; ALPHABET_LEN];
    let mut column_len = 0u64;
    for letter in ciphertext.column(col, key_len) {
        counts[usize::from(letter.rank())] += 1;
        column_len += 1;
    }
    // key_len <= ciphertext len guarantees a non-empty column
    let mut observed = [0.0f64; ALPHABET_LEN];
    for (freq, &count) in observed.iter_mut().zip(&counts) {
        *freq = count as f64 / column_len as f64;
    }

    let mut hypotheses: Vec<ColumnHypothesis> = Letter::alphabet()
        .map(|shift| ColumnHypothesis {
            shift,
            deviation: deviation_for_shift(&observed, usize::from(shift.rank())),
        })
        .collect();
    rank_hypotheses(&mut hypotheses);
    hypotheses
}

fn deviation_for_shift(observed: &[f64; ALPHABET_LEN], shift: usize) -> f64 {
    (0..ALPHABET_LEN)
        .map(|i| {
            let rotated = observed[(i + shift) % ALPHABET_LEN];
            (rotated - ENGLISH_FREQUENCIES[i]).abs() * ENGLISH_FREQUENCIES[i]
        })
        .sum()
}
