//! End-to-end cracking scenarios.
//!
//! Exercises the full pipeline on synthetic English ciphertext: length
//! estimation, column analysis, key assembly, decryption.

use vigenere_core::{CrackSession, analyze_columns, encrypt, estimate_lengths};
use vigenere_model::{Ciphertext, CrackError, Key};

/// Builds an English-like plaintext of at least `min_letters` letters
/// by cycling a fixed passage.
fn english_plaintext(min_letters: usize) -> Ciphertext {
    const PASSAGE: &str = "It was a bright cold day in April and the clocks were \
        striking thirteen Winston Smith his chin nuzzled into his breast in an \
        effort to escape the vile wind slipped quickly through the glass doors \
        of Victory Mansions though not quickly enough to prevent a swirl of \
        gritty dust from entering along with him The hallway smelt of boiled \
        cabbage and old rag mats At one end of it a coloured poster too large \
        for indoor display had been tacked to the wall";
    let mut text = String::new();
    while Ciphertext::sanitize(&text).len() < min_letters {
        text.push_str(PASSAGE);
    }
    Ciphertext::sanitize(&text)
}

// =========================================================================
// Length estimation on real cipher output
// =========================================================================

#[test]
fn estimator_ranks_the_true_period_on_long_text() {
    let plain = english_plaintext(2000);
    let key = Key::from_clean("LEMON").unwrap();
    let cipher = encrypt(&plain, &key).unwrap();

    let candidates = estimate_lengths(&cipher, 10).unwrap();
    assert_eq!(candidates.len(), 10);

    // The true period and its multiple dominate the ranking.
    assert_eq!(candidates[0].length % 5, 0, "ranking: {candidates:?}");
    let top3: Vec<usize> = candidates.iter().take(3).map(|c| c.length).collect();
    assert!(top3.contains(&5), "top candidates: {top3:?}");
    assert!(top3.contains(&10), "top candidates: {top3:?}");

    // Aligned columns score well above the misaligned baseline.
    let five = candidates.iter().find(|c| c.length == 5).unwrap();
    let three = candidates.iter().find(|c| c.length == 3).unwrap();
    assert!(five.score > three.score);
}

#[test]
fn analyzer_recovers_every_key_letter_on_long_text() {
    let plain = english_plaintext(2000);
    let key = Key::from_clean("LEMON").unwrap();
    let cipher = encrypt(&plain, &key).unwrap();

    let columns = analyze_columns(&cipher, 5).unwrap();
    let recovered: String = columns
        .iter()
        .map(|ranked| ranked[0].shift.as_char())
        .collect();
    assert_eq!(recovered, "LEMON");
}

// =========================================================================
// Full session flow
// =========================================================================

#[test]
fn session_cracks_lemon_end_to_end() {
    let plain = english_plaintext(2000);
    let key = Key::from_clean("LEMON").unwrap();
    let cipher = encrypt(&plain, &key).unwrap();

    let mut session = CrackSession::new();
    session.load(cipher);

    let best = session.estimate_lengths(10).unwrap()[0].length;
    assert_eq!(best % 5, 0);

    session.set_key_length(5).unwrap();
    session.analyze_columns().unwrap();
    session.auto_fill_key().unwrap();
    assert_eq!(session.key().unwrap().to_string(), "LEMON");

    assert_eq!(session.decrypt().unwrap(), plain.to_string());
}

#[test]
fn manual_override_corrects_an_auto_filled_slot() {
    let plain = english_plaintext(2000);
    let key = Key::from_clean("LEMON").unwrap();
    let cipher = encrypt(&plain, &key).unwrap();

    let mut session = CrackSession::new();
    session.load(cipher);
    session.set_key_length(5).unwrap();
    session.analyze_columns().unwrap();
    session.auto_fill_key().unwrap();

    // Deliberately break one slot, then repair it by hand.
    session.set_key_letter(2, 'Z').unwrap();
    assert_eq!(session.key().unwrap().to_string(), "LEZON");
    session.set_key_letter(2, 'M').unwrap();
    assert_eq!(session.decrypt().unwrap(), plain.to_string());
}

#[test]
fn short_scenario_still_round_trips_with_the_known_key() {
    // "ATTACKATDAWN" is far too short for the statistics, but with the
    // key supplied directly the session must still decrypt it.
    let cipher = Ciphertext::sanitize("LXFOPVEFRNHR");
    let mut session = CrackSession::new();
    session.load(cipher);
    session.set_key_length(5).unwrap();
    for (pos, ch) in "LEMON".chars().enumerate() {
        session.set_key_letter(pos, ch).unwrap();
    }
    assert_eq!(session.decrypt().unwrap(), "ATTACKATDAWN");
}

// =========================================================================
// Failure ordering
// =========================================================================

#[test]
fn each_stage_reports_its_missing_precondition() {
    let mut session = CrackSession::new();
    assert!(matches!(
        session.analyze_columns(),
        Err(CrackError::KeyLengthNotSet)
    ));
    assert!(matches!(
        session.auto_fill_key(),
        Err(CrackError::HypothesesNotComputed)
    ));
    assert!(matches!(
        session.decrypt(),
        Err(CrackError::CiphertextNotLoaded)
    ));

    session.load(Ciphertext::sanitize("LXFOPVEFRNHR"));
    assert!(matches!(
        session.candidates(),
        Err(CrackError::CandidatesNotComputed)
    ));
    assert!(matches!(
        session.hypotheses(),
        Err(CrackError::HypothesesNotComputed)
    ));
}
