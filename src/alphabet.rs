//! Mapping between the letters A–Z and the codes 0–25.

use crate::error::{FeistelError, Result};

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Folds `raw` to upper case and maps every letter A–Z to its code.
///
/// Anything that is not an ASCII letter (spaces, digits, punctuation,
/// non-ASCII characters) is dropped rather than rejected.
pub fn encode(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase() - b'A')
        .collect()
}

/// Maps codes back to upper-case letters.
///
/// # Errors
/// Returns [`FeistelError::InvalidCode`] for the first code above 25.
pub fn decode(codes: &[u8]) -> Result<String> {
    validate(codes)?;
    Ok(codes.iter().map(|&c| char::from(b'A' + c)).collect())
}

/// Letters-only, upper-case form of `raw`.
pub fn normalize(raw: &str) -> String {
    encode(raw).into_iter().map(|c| char::from(b'A' + c)).collect()
}

/// Checks that every code lies in `[0, 25]`.
pub fn validate(codes: &[u8]) -> Result<()> {
    match codes.iter().position(|&c| c >= ALPHABET_LEN) {
        Some(position) => Err(FeistelError::InvalidCode {
            code: codes[position],
            position,
        }),
        None => Ok(()),
    }
}

/// Addition mod 26; stands in for the bitwise XOR of a binary cipher.
#[inline(always)]
pub const fn char_add(a: u8, b: u8) -> u8 {
    (a + b) % ALPHABET_LEN
}

/// Subtraction mod 26, the inverse of [`char_add`].
#[inline(always)]
pub const fn char_sub(a: u8, b: u8) -> u8 {
    (a + ALPHABET_LEN - b) % ALPHABET_LEN
}
