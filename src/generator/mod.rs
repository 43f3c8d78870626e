//! Random password generation.
//!
//! Samples characters independently, with replacement, from a fixed
//! universe of uppercase letters, lowercase letters, digits, and
//! punctuation.  The sampling source is the OS CSPRNG — generated
//! passwords are meant to be used as real credentials.

use rand::rngs::OsRng;
use rand::Rng;

/// Uppercase letters in the character universe.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letters in the character universe.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Digits in the character universe.
pub const DIGITS: &[u8] = b"0123456789";

/// The fixed punctuation set (the 32 printable ASCII punctuation characters).
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The full character universe sampled by `generate`.
const CHARSET: [u8; 94] = concat_charset();

const fn concat_charset() -> [u8; 94] {
    let mut out = [0u8; 94];
    let mut i = 0;
    let mut j = 0;
    while j < UPPERCASE.len() {
        out[i] = UPPERCASE[j];
        i += 1;
        j += 1;
    }
    j = 0;
    while j < LOWERCASE.len() {
        out[i] = LOWERCASE[j];
        i += 1;
        j += 1;
    }
    j = 0;
    while j < DIGITS.len() {
        out[i] = DIGITS[j];
        i += 1;
        j += 1;
    }
    j = 0;
    while j < PUNCTUATION.len() {
        out[i] = PUNCTUATION[j];
        i += 1;
        j += 1;
    }
    out
}

/// Generate a random password of exactly `length` characters.
///
/// Each character is drawn uniformly from the 94-character universe.
/// A `length` of zero yields an empty string.
pub fn generate(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
