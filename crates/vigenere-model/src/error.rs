//! Unified error types for the cryptanalysis engine.
//!
//! Every failure is detected synchronously at the offending call and
//! reported to the caller; no operation leaves partial mutations behind
//! on failure, and every error is recoverable by correcting the input
//! and retrying.

use thiserror::Error;

/// Coarse classification of a [`CrackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required earlier step (load, set length, analyze) has not run.
    PreconditionNotMet,
    /// A parameter is outside its documented domain.
    InvalidArgument,
    /// The key is not fully specified or is empty.
    InvalidKey,
}

/// Error type for all analysis and session operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CrackError {
    /// No ciphertext is loaded in the session, or an empty ciphertext
    /// was passed to an analysis routine.
    #[error("no ciphertext loaded")]
    CiphertextNotLoaded,

    /// A key length must be fixed before this operation.
    #[error("key length not set")]
    KeyLengthNotSet,

    /// Length candidates must be computed before they can be read back.
    #[error("length candidates not computed")]
    CandidatesNotComputed,

    /// Column hypotheses must be computed before this operation.
    #[error("column hypotheses not computed")]
    HypothesesNotComputed,

    /// A key length of zero was requested.
    #[error("key length must be at least 1")]
    ZeroKeyLength,

    /// The requested key length would leave at least one column empty.
    #[error("key length {key_len} exceeds ciphertext length {text_len}")]
    KeyLengthExceedsCiphertext {
        /// The requested key length.
        key_len: usize,
        /// The loaded ciphertext length.
        text_len: usize,
    },

    /// A maximum candidate length of zero was requested.
    #[error("maximum candidate length must be at least 1")]
    ZeroMaxLength,

    /// A key position outside the current key was addressed.
    #[error("key position {position} out of range for key length {key_len}")]
    PositionOutOfRange {
        /// The offending position.
        position: usize,
        /// The current key length.
        key_len: usize,
    },

    /// A character outside `A`–`Z` was supplied where a letter is required.
    #[error("not an uppercase letter: {value:?}")]
    NotALetter {
        /// The offending character.
        value: char,
    },

    /// Decryption was attempted with a key slot still unset.
    #[error("key slot {position} is unset")]
    KeySlotUnset {
        /// The first unset slot.
        position: usize,
    },

    /// A zero-length key was supplied to encrypt or decrypt.
    #[error("key is empty")]
    EmptyKey,
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, CrackError>;

impl CrackError {
    /// Classifies this error into the engine's failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CiphertextNotLoaded
            | Self::KeyLengthNotSet
            | Self::CandidatesNotComputed
            | Self::HypothesesNotComputed => ErrorKind::PreconditionNotMet,
            Self::ZeroKeyLength
            | Self::KeyLengthExceedsCiphertext { .. }
            | Self::ZeroMaxLength
            | Self::PositionOutOfRange { .. }
            | Self::NotALetter { .. } => ErrorKind::InvalidArgument,
            Self::KeySlotUnset { .. } | Self::EmptyKey => ErrorKind::InvalidKey,
        }
    }
}
