//! Property tests for the cipher primitives.

use proptest::prelude::*;

use vigenere_core::{decrypt, encrypt};
use vigenere_model::{Ciphertext, Key};

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(
        plain in "[A-Z]{0,300}",
        key in "[A-Z]{1,16}",
    ) {
        let plaintext = Ciphertext::from_clean(&plain).unwrap();
        let key = Key::from_clean(&key).unwrap();
        let cipher = encrypt(&plaintext, &key).unwrap();
        prop_assert_eq!(decrypt(&cipher, &key).unwrap(), plaintext);
    }

    #[test]
    fn encrypt_preserves_length(
        plain in "[A-Z]{0,300}",
        key in "[A-Z]{1,16}",
    ) {
        let plaintext = Ciphertext::from_clean(&plain).unwrap();
        let key = Key::from_clean(&key).unwrap();
        let cipher = encrypt(&plaintext, &key).unwrap();
        prop_assert_eq!(cipher.len(), plaintext.len());
    }

    #[test]
    fn single_letter_key_is_a_caesar_shift(
        plain in "[A-Z]{1,100}",
        shift in 0u8..26,
    ) {
        let plaintext = Ciphertext::from_clean(&plain).unwrap();
        let key = Key::from_letters(vec![vigenere_model::Letter::new(shift).unwrap()]).unwrap();
        let cipher = encrypt(&plaintext, &key).unwrap();
        for (p, c) in plaintext.letters().iter().zip(cipher.letters()) {
            prop_assert_eq!((p.rank() + shift) % 26, c.rank());
        }
    }
}
