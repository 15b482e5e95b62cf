//! Round functions: the keyed transform applied to one half-block per round.

use crate::alphabet::{ALPHABET_LEN, char_add};
use crate::key::{Key, Schedule};

/// Mixer row; entry `(r, c)` of the circulant matrix is `MIX[((c - r) mod h) mod 4]`.
const MIX: [u32; 4] = [1, 3, 5, 7];

/// Multipliers and offsets of the four S-boxes. Every multiplier is a unit mod 26.
const SBOX_MUL: [u8; 4] = [7, 11, 17, 25];
const SBOX_ADD: [u8; 4] = [3, 8, 14, 21];

/// `x^5 mod 26`; a permutation of the alphabet since 5 is coprime to 12.
const fn exp5(x: u8) -> u8 {
    let x = x as u32;
    let sq = x * x % 26;
    (sq * sq % 26 * x % 26) as u8
}

const fn build_sboxes() -> [[u8; 26]; 4] {
    let mut out = [[0u8; 26]; 4];
    let mut p = 0;
    while p < 4 {
        let mut x = 0;
        while x < ALPHABET_LEN {
            let y = exp5((x + SBOX_ADD[p]) % ALPHABET_LEN) as u32;
            out[p][x as usize] = (SBOX_MUL[p] as u32 * y % 26) as u8;
            x += 1;
        }
        p += 1;
    }
    out
}

const SBOXES: [[u8; 26]; 4] = build_sboxes();

/// A keyed, deterministic transform of one half-block.
///
/// A Feistel network never inverts its round function, so implementations
/// only need to be total over codes in `[0, 25]`.
pub trait RoundFunction: Sync {
    /// Writes `F(half, subkey)` into `out`. All three slices share one length.
    fn apply(&self, half: &[u8], subkey: &[u8], out: &mut [u8]);
}

/// Position-wise addition of the subkey, Vigenère style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Additive;

impl RoundFunction for Additive {
    #[inline]
    fn apply(&self, half: &[u8], subkey: &[u8], out: &mut [u8]) {
        for ((o, &h), &k) in out.iter_mut().zip(half).zip(subkey) {
            *o = char_add(h, k);
        }
    }
}

/// Key mixing, mixer matrix, S-box substitution, then a one-place rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionPermutation;

impl RoundFunction for SubstitutionPermutation {
    fn apply(&self, half: &[u8], subkey: &[u8], out: &mut [u8]) {
        let h = half.len();
        let mixed: Vec<u8> = half.iter().zip(subkey).map(|(&a, &k)| char_add(a, k)).collect();

        let substituted: Vec<u8> = (0..h)
            .map(|r| {
                let m = (0..h).fold(0u32, |acc, c| {
                    acc + MIX[((c + h - r) % h) % MIX.len()] * mixed[c] as u32
                });
                SBOXES[r % SBOXES.len()][(m % 26) as usize]
            })
            .collect();

        for (i, o) in out.iter_mut().enumerate() {
            *o = substituted[(i + 1) % h];
        }
    }
}

/// Runtime choice between the round functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundKind {
    #[default]
    Additive,
    SubstitutionPermutation,
}

impl RoundFunction for RoundKind {
    #[inline]
    fn apply(&self, half: &[u8], subkey: &[u8], out: &mut [u8]) {
        match self {
            RoundKind::Additive => Additive.apply(half, subkey, out),
            RoundKind::SubstitutionPermutation => SubstitutionPermutation.apply(half, subkey, out),
        }
    }
}

/// `F(half, key, round)` with the cyclic schedule and the additive function.
///
/// # Panics
/// Panics if `round` is 0; rounds are numbered from 1.
pub fn round_function(half: &[u8], key: &Key, round: usize) -> Vec<u8> {
    let subkey = Schedule::Cyclic.subkey(key, round, half.len());
    let mut out = vec![0u8; half.len()];
    Additive.apply(half, &subkey, &mut out);
    out
}
