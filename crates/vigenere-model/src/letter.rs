//! Alphabet letters as ranks 0–25.
//!
//! All analysis works over letter ranks rather than raw bytes, so the
//! frequency tables stay 26 entries wide and no arithmetic depends on
//! ASCII layout beyond the two conversion points below.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CrackError, Result};

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase Latin letter, stored as its rank (`A` = 0, `Z` = 25).
///
/// A `Letter` doubles as a shift amount: shift `k` corresponds to key
/// letter `'A' + k`, so key letters and column shifts share this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Builds a letter from its rank. Fails for ranks 26 and above.
    pub fn new(rank: u8) -> Result<Self> {
        if usize::from(rank) < ALPHABET_LEN {
            Ok(Self(rank))
        } else {
            Err(CrackError::NotALetter {
                value: char::from(rank.saturating_add(b'A')),
            })
        }
    }

    /// Rank in 0..26.
    pub fn rank(self) -> u8 {
        self.0
    }

    /// The uppercase character this letter renders as.
    pub fn as_char(self) -> char {
        char::from(b'A' + self.0)
    }

    /// Iterates `A` through `Z` in rank order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }

    /// Adds a shift modulo 26 (the encrypt direction).
    pub fn shifted_by(self, shift: Letter) -> Letter {
        Self((self.0 + shift.0) % ALPHABET_LEN as u8)
    }

    /// Removes a shift modulo 26 (the decrypt direction).
    pub fn unshifted_by(self, shift: Letter) -> Letter {
        Self((self.0 + ALPHABET_LEN as u8 - shift.0) % ALPHABET_LEN as u8)
    }
}

impl TryFrom<char> for Letter {
    type Error = CrackError;

    fn try_from(value: char) -> Result<Self> {
        if value.is_ascii_uppercase() {
            Ok(Self(value as u8 - b'A'))
        } else {
            Err(CrackError::NotALetter { value })
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let ch = char::deserialize(deserializer)?;
        Letter::try_from(ch).map_err(serde::de::Error::custom)
    }
}
