//! Modular encrypt/decrypt primitives.

use vigenere_model::{Ciphertext, CrackError, Key, Letter, Result};

/// Encrypts plaintext with a fully-set repeating key:
/// `cipher[i] = (plain[i] + key[i mod len]) mod 26`.
pub fn encrypt(plaintext: &Ciphertext, key: &Key) -> Result<Ciphertext> {
    let key_letters = key_letters(key)?;
    let letters = plaintext
        .letters()
        .iter()
        .zip(key_letters.iter().cycle())
        .map(|(&plain, &shift)| plain.shifted_by(shift))
        .collect();
    Ok(Ciphertext::from_letters(letters))
}

/// Decrypts ciphertext with a fully-set repeating key:
/// `plain[i] = (cipher[i] − key[i mod len] + 26) mod 26`.
pub fn decrypt(ciphertext: &Ciphertext, key: &Key) -> Result<Ciphertext> {
    let key_letters = key_letters(key)?;
    let letters = ciphertext
        .letters()
        .iter()
        .zip(key_letters.iter().cycle())
        .map(|(&cipher, &shift)| cipher.unshifted_by(shift))
        .collect();
    Ok(Ciphertext::from_letters(letters))
}

fn key_letters(key: &Key) -> Result<Vec<Letter>> {
    if key.is_empty() {
        return Err(CrackError::EmptyKey);
    }
    key.complete()
}
