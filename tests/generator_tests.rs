//! Integration tests for the password generator.

use credvault::generator::{self, DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};

/// The full declared character universe.
fn universe() -> Vec<char> {
    [UPPERCASE, LOWERCASE, DIGITS, PUNCTUATION]
        .concat()
        .into_iter()
        .map(char::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Length invariant
// ---------------------------------------------------------------------------

#[test]
fn generate_zero_yields_empty_string() {
    assert_eq!(generator::generate(0), "");
}

#[test]
fn generate_returns_exact_length_within_the_universe() {
    let universe = universe();

    for length in 1..=256 {
        let password = generator::generate(length);
        assert_eq!(password.chars().count(), length);
        assert!(
            password.chars().all(|c| universe.contains(&c)),
            "password {password:?} strayed outside the character universe"
        );
    }
}

// ---------------------------------------------------------------------------
// Distribution sanity
// ---------------------------------------------------------------------------

#[test]
fn all_four_character_classes_appear() {
    // 2000 samples from a 94-character universe: the odds of an entire
    // class (>= 10 characters) never appearing are negligible.  A miss
    // here means the generator is degenerate, not unlucky.
    let sample = generator::generate(2000);

    assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
    assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
    assert!(sample.chars().any(|c| c.is_ascii_digit()));
    assert!(sample.chars().any(|c| c.is_ascii_punctuation()));
}

#[test]
fn consecutive_passwords_differ() {
    let p1 = generator::generate(32);
    let p2 = generator::generate(32);
    assert_ne!(p1, p2, "two 32-char passwords colliding means a dead RNG");
}
