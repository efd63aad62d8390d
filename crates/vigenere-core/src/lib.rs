//! Cryptanalysis engine for repeating-key (Vigenère-family)
//! substitution ciphers.
//!
//! The engine works on sanitized uppercase letter sequences and runs in
//! three stages: estimate the key length with the index-of-coincidence
//! test ([`estimator`]), rank per-column shift hypotheses against an
//! English monogram model ([`analyzer`]), then assemble the key and
//! decrypt ([`cipher`]). [`session::CrackSession`] ties the stages
//! together and enforces their ordering.

pub mod analyzer;
pub mod cipher;
pub mod estimator;
pub mod session;

pub use analyzer::analyze_columns;
pub use cipher::{decrypt, encrypt};
pub use estimator::estimate_lengths;
pub use session::CrackSession;
