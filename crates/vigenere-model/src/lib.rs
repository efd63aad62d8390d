pub mod candidate;
pub mod error;
pub mod frequencies;
pub mod key;
pub mod letter;
pub mod text;

pub use candidate::{ColumnHypothesis, LengthCandidate};
pub use error::{CrackError, ErrorKind, Result};
pub use frequencies::ENGLISH_FREQUENCIES;
pub use key::Key;
pub use letter::Letter;
pub use text::Ciphertext;
