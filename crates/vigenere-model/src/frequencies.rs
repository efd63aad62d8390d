//! Reference monogram model for English.

use crate::letter::{ALPHABET_LEN, Letter};

/// Expected relative frequency of each letter in representative English
/// text, indexed by letter rank (`A` = 0).
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, //  A..H
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, //  I..P
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150, //  Q..X
    0.01974, 0.00074, //  Y..Z
];

/// Expected frequency of one letter.
pub fn expected(letter: Letter) -> f64 {
    ENGLISH_FREQUENCIES[usize::from(letter.rank())]
}
