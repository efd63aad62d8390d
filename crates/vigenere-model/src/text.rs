//! Ciphertext and plaintext letter sequences.

use std::fmt;

use crate::error::Result;
use crate::letter::Letter;

/// An immutable ordered sequence of uppercase letters.
///
/// This is the engine's only wire format: analysis routines read it
/// column by column and never mutate it. Hosts normally construct one
/// with [`Ciphertext::sanitize`], which applies the same cleanup rule
/// to plaintext, key material, and ciphertext alike.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ciphertext {
    letters: Vec<Letter>,
}

impl Ciphertext {
    /// Builds a sequence from raw text by dropping every non-ASCII-alphabetic
    /// character and uppercasing the rest. Never fails; the result may be
    /// empty.
    pub fn sanitize(raw: &str) -> Self {
        let letters = raw
            .chars()
            .filter_map(|ch| Letter::try_from(ch.to_ascii_uppercase()).ok())
            .collect();
        Self { letters }
    }

    /// Builds a sequence from text already restricted to `A`–`Z`.
    /// Fails on the first character outside that range.
    pub fn from_clean(text: &str) -> Result<Self> {
        let letters = text
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { letters })
    }

    pub fn from_letters(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters at positions congruent to `col` modulo `key_len`.
    ///
    /// Under a repeating-key cipher every letter of such a column was
    /// encrypted with the same single shift. `key_len` must be at
    /// least 1.
    pub fn column(&self, col: usize, key_len: usize) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().skip(col).step_by(key_len).copied()
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
