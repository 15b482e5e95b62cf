//! Cipher keys and the per-round subkey schedule.

use std::str::FromStr;

use crate::alphabet::{self, ALPHABET_LEN, char_add};
use crate::error::{FeistelError, Result};

/// Largest accepted round count.
pub const MAX_ROUNDS: usize = 1024;

/// Largest accepted half-block size.
pub const MAX_HALF_SIZE: usize = 1024;

/// Two-digit groups of pi, one row per round modulo 4, reduced mod 26.
const PI_ROWS: [[u8; 8]; 4] = reduce_rows([
    [31, 41, 59, 26, 53, 58, 97, 93],
    [23, 84, 62, 64, 33, 83, 27, 95],
    [2, 88, 41, 97, 16, 93, 99, 37],
    [51, 5, 82, 9, 74, 94, 45, 92],
]);

const fn reduce_rows(mut rows: [[u8; 8]; 4]) -> [[u8; 8]; 4] {
    let mut r = 0;
    while r < 4 {
        let mut c = 0;
        while c < 8 {
            rows[r][c] %= ALPHABET_LEN;
            c += 1;
        }
        r += 1;
    }
    rows
}

/// A non-empty sequence of letter codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    codes: Vec<u8>,
}

impl Key {
    /// Builds a key from text; non-letters are dropped like in plaintext.
    ///
    /// # Errors
    /// Returns [`FeistelError::EmptyKey`] if no letters remain.
    pub fn new(text: &str) -> Result<Self> {
        Self::from_codes(alphabet::encode(text))
    }

    /// # Errors
    /// [`FeistelError::EmptyKey`] or [`FeistelError::InvalidCode`].
    pub fn from_codes(codes: Vec<u8>) -> Result<Self> {
        if codes.is_empty() {
            return Err(FeistelError::EmptyKey);
        }
        alphabet::validate(&codes)?;
        Ok(Key { codes })
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromStr for Key {
    type Err = FeistelError;

    fn from_str(s: &str) -> Result<Self> {
        Key::new(s)
    }
}

/// How subkeys are derived from the key for each round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Schedule {
    /// Consecutive key windows, reused cyclically, offset by the round index.
    #[default]
    Cyclic,
    /// `Cyclic`, then whitened with pi-digit constants.
    PiWhitened,
}

impl Schedule {
    /// Subkey for round `round` (1-based) over a half of `half_size` codes.
    ///
    /// # Panics
    /// Panics if `round` is 0.
    pub fn subkey(self, key: &Key, round: usize, half_size: usize) -> Vec<u8> {
        let k = key.codes();
        let offset = (round % ALPHABET_LEN as usize) as u8;
        (0..half_size)
            .map(|j| {
                let cyclic = char_add(k[((round - 1) * half_size + j) % k.len()], offset);
                match self {
                    Schedule::Cyclic => cyclic,
                    Schedule::PiWhitened => char_add(cyclic, PI_ROWS[(round - 1) % 4][j % 8]),
                }
            })
            .collect()
    }
}

/// All subkeys of one engine, computed once.
#[derive(Clone, Debug)]
pub struct KeySchedule {
    subkeys: Vec<Vec<u8>>,
}

impl KeySchedule {
    /// # Errors
    /// [`FeistelError::InvalidRoundCount`] unless `1 <= rounds <= MAX_ROUNDS`,
    /// [`FeistelError::InvalidHalfSize`] unless `1 <= half_size <= MAX_HALF_SIZE`.
    pub fn new(key: &Key, rounds: usize, half_size: usize, schedule: Schedule) -> Result<Self> {
        if !(1..=MAX_ROUNDS).contains(&rounds) {
            return Err(FeistelError::InvalidRoundCount(rounds));
        }
        if !(1..=MAX_HALF_SIZE).contains(&half_size) {
            return Err(FeistelError::InvalidHalfSize);
        }
        let subkeys = (1..=rounds)
            .map(|round| schedule.subkey(key, round, half_size))
            .collect();
        Ok(KeySchedule { subkeys })
    }

    pub fn rounds(&self) -> usize {
        self.subkeys.len()
    }

    /// Subkeys in round order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[u8]> {
        self.subkeys.iter().map(Vec::as_slice)
    }
}
