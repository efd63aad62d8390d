//! The repeating key under reconstruction.

use std::fmt;

use crate::error::{CrackError, Result};
use crate::letter::Letter;

/// A fixed-length key whose slots are filled in incrementally.
///
/// A slot holds either a recovered letter or nothing. Decryption
/// requires every slot to be set; [`Key::complete`] performs that check
/// and yields the final letter sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    slots: Vec<Option<Letter>>,
}

impl Key {
    /// A key of `len` unset slots. Fails for `len == 0`.
    pub fn with_length(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(CrackError::ZeroKeyLength);
        }
        Ok(Self {
            slots: vec![None; len],
        })
    }

    /// A fully-set key from existing letters. Fails on an empty sequence.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self> {
        if letters.is_empty() {
            return Err(CrackError::EmptyKey);
        }
        Ok(Self {
            slots: letters.into_iter().map(Some).collect(),
        })
    }

    /// A fully-set key from text restricted to `A`–`Z`.
    pub fn from_clean(text: &str) -> Result<Self> {
        let letters = text
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::from_letters(letters)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The letter at `position`, if set. Fails when the position is out
    /// of range.
    pub fn get(&self, position: usize) -> Result<Option<Letter>> {
        self.slots
            .get(position)
            .copied()
            .ok_or(CrackError::PositionOutOfRange {
                position,
                key_len: self.slots.len(),
            })
    }

    /// Sets one slot. Validates the position first, so a failed call
    /// leaves the key unchanged.
    pub fn set(&mut self, position: usize, letter: Letter) -> Result<()> {
        let key_len = self.slots.len();
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(CrackError::PositionOutOfRange { position, key_len })?;
        *slot = Some(letter);
        Ok(())
    }

    /// True once every slot holds a letter.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The finished key letters, failing with the first unset slot.
    pub fn complete(&self) -> Result<Vec<Letter>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(position, slot)| slot.ok_or(CrackError::KeySlotUnset { position }))
            .collect()
    }
}

impl fmt::Display for Key {
    /// Renders set slots as their letters and unset slots as `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "?")?,
            }
        }
        Ok(())
    }
}
