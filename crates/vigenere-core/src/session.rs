//! The mutable state of one cracking attempt.

use tracing::debug;

use vigenere_model::{
    Ciphertext, ColumnHypothesis, CrackError, Key, LengthCandidate, Letter, Result,
};

use crate::analyzer::analyze_columns;
use crate::cipher::decrypt;
use crate::estimator::estimate_lengths;

/// A cracking session: loaded ciphertext plus everything derived from it.
///
/// Derived state is strictly ordered: candidates depend on the
/// ciphertext, the key and hypotheses depend on the fixed key length,
/// which depends on the ciphertext. Mutating any stage clears every
/// later stage, so cached results never refer to a ciphertext or key
/// length other than the current one.
///
/// The session is single-threaded by design; embed it behind external
/// synchronization if a concurrent host needs one.
#[derive(Debug, Default)]
pub struct CrackSession {
    ciphertext: Option<Ciphertext>,
    candidates: Option<Vec<LengthCandidate>>,
    key: Option<Key>,
    hypotheses: Option<Vec<Vec<ColumnHypothesis>>>,
}

impl CrackSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads ciphertext and discards all derived state.
    pub fn load(&mut self, ciphertext: Ciphertext) {
        debug!(text_len = ciphertext.len(), "loaded ciphertext");
        self.ciphertext = Some(ciphertext);
        self.candidates = None;
        self.key = None;
        self.hypotheses = None;
    }

    /// The currently loaded ciphertext.
    pub fn ciphertext(&self) -> Result<&Ciphertext> {
        self.ciphertext
            .as_ref()
            .filter(|text| !text.is_empty())
            .ok_or(CrackError::CiphertextNotLoaded)
    }

    /// Scores candidate key lengths up to `max_len` and caches the
    /// ranking.
    pub fn estimate_lengths(&mut self, max_len: usize) -> Result<&[LengthCandidate]> {
        let candidates = estimate_lengths(self.ciphertext()?, max_len)?;
        Ok(self.candidates.insert(candidates).as_slice())
    }

    /// The cached length ranking from the last
    /// [`estimate_lengths`](Self::estimate_lengths) call.
    pub fn candidates(&self) -> Result<&[LengthCandidate]> {
        self.candidates
            .as_deref()
            .ok_or(CrackError::CandidatesNotComputed)
    }

    /// Fixes the key length: resets the key to `n` unset slots and
    /// clears any previous column analysis.
    pub fn set_key_length(&mut self, n: usize) -> Result<()> {
        let text_len = self.ciphertext()?.len();
        if n > text_len {
            return Err(CrackError::KeyLengthExceedsCiphertext {
                key_len: n,
                text_len,
            });
        }
        self.key = Some(Key::with_length(n)?);
        self.hypotheses = None;
        debug!(key_len = n, "fixed key length");
        Ok(())
    }

    /// The fixed key length, once set.
    pub fn key_length(&self) -> Result<usize> {
        Ok(self.key()?.len())
    }

    /// The key under reconstruction.
    pub fn key(&self) -> Result<&Key> {
        self.key.as_ref().ok_or(CrackError::KeyLengthNotSet)
    }

    /// Ranks shift hypotheses for every column of the fixed key length
    /// and caches them.
    pub fn analyze_columns(&mut self) -> Result<&[Vec<ColumnHypothesis>]> {
        let key_len = self.key.as_ref().ok_or(CrackError::KeyLengthNotSet)?.len();
        let hypotheses = analyze_columns(self.ciphertext()?, key_len)?;
        Ok(self.hypotheses.insert(hypotheses).as_slice())
    }

    /// The cached column rankings from the last
    /// [`analyze_columns`](Self::analyze_columns) call.
    pub fn hypotheses(&self) -> Result<&[Vec<ColumnHypothesis>]> {
        self.hypotheses
            .as_deref()
            .ok_or(CrackError::HypothesesNotComputed)
    }

    /// Manually overrides one key slot. The position and letter are
    /// validated before anything mutates.
    pub fn set_key_letter(&mut self, position: usize, letter: char) -> Result<()> {
        let letter = Letter::try_from(letter)?;
        let key = self.key.as_mut().ok_or(CrackError::KeyLengthNotSet)?;
        key.set(position, letter)
    }

    /// Sets every key slot to its column's top-ranked hypothesis.
    pub fn auto_fill_key(&mut self) -> Result<()> {
        let hypotheses = self
            .hypotheses
            .as_ref()
            .ok_or(CrackError::HypothesesNotComputed)?;
        let key = self.key.as_mut().ok_or(CrackError::KeyLengthNotSet)?;
        // analyze_columns always ranks all 26 shifts per column
        for (position, ranked) in hypotheses.iter().enumerate() {
            key.set(position, ranked[0].shift)?;
        }
        debug!(key = %key, "auto-filled key");
        Ok(())
    }

    /// Decrypts the loaded ciphertext with the assembled key. The key
    /// must be fully set.
    pub fn decrypt(&self) -> Result<String> {
        let plain = decrypt(self.ciphertext()?, self.key()?)?;
        Ok(plain.to_string())
    }
}
