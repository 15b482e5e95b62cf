use rayon::prelude::*;

use crate::alphabet::{self, char_add, char_sub};
use crate::block::{Block, check_aligned};
use crate::config::CipherConfig;
use crate::error::{FeistelError, Result};
use crate::key::{Key, KeySchedule, Schedule};
use crate::round::{Additive, RoundFunction, RoundKind};

/// Buffers of at least this many codes take the parallel path in the `_auto` methods.
const AUTO_PAR_THRESHOLD: usize = 32_768;

/// Blocks handed to one rayon task.
const BLOCKS_PER_TASK: usize = 1_024;

/// Feistel network over letter codes.
///
/// Round `i` maps `(L, R)` to `(R, L + F(R, k_i))`; there is no final swap,
/// so the ciphertext block is the state after the last round. Decryption
/// walks the rounds backwards with `(L, R) -> (R - F(L, k_i), L)`.
#[derive(Clone, Debug)]
pub struct Feistel<F: RoundFunction = Additive> {
    half_size: usize,
    keysched: KeySchedule,
    round_fn: F,
}

impl Feistel<Additive> {
    /// Creates an engine with the additive round function and the cyclic schedule.
    ///
    /// # Errors
    /// [`FeistelError::InvalidRoundCount`] if `rounds` is 0 or above 1024,
    /// [`FeistelError::InvalidHalfSize`] if `half_size` is 0 or above 1024.
    pub fn new(key: &Key, rounds: usize, half_size: usize) -> Result<Self> {
        Self::with_round_function(key, rounds, half_size, Schedule::Cyclic, Additive)
    }
}

impl Feistel<RoundKind> {
    /// Creates the engine described by `config`.
    pub fn from_config(key: &Key, config: &CipherConfig) -> Result<Self> {
        Self::with_round_function(
            key,
            config.rounds,
            config.half_size,
            config.schedule,
            config.round_kind,
        )
    }
}

impl<F: RoundFunction> Feistel<F> {
    pub fn with_round_function(
        key: &Key,
        rounds: usize,
        half_size: usize,
        schedule: Schedule,
        round_fn: F,
    ) -> Result<Self> {
        Ok(Feistel {
            half_size,
            keysched: KeySchedule::new(key, rounds, half_size, schedule)?,
            round_fn,
        })
    }

    pub fn rounds(&self) -> usize {
        self.keysched.rounds()
    }

    pub fn half_size(&self) -> usize {
        self.half_size
    }

    pub fn block_size(&self) -> usize {
        self.half_size * 2
    }

    /// Encrypts a single block.
    ///
    /// # Errors
    /// [`FeistelError::InvalidBlockLength`] if either half is not `half_size` long.
    pub fn encrypt_block(&self, block: &Block) -> Result<Block> {
        self.transform_block::<false>(block)
    }

    /// Decrypts a single block.
    ///
    /// # Errors
    /// [`FeistelError::InvalidBlockLength`] if either half is not `half_size` long.
    pub fn decrypt_block(&self, block: &Block) -> Result<Block> {
        self.transform_block::<true>(block)
    }

    fn transform_block<const DECRYPT: bool>(&self, block: &Block) -> Result<Block> {
        if block.left.len() != self.half_size || block.right.len() != self.half_size {
            return Err(FeistelError::InvalidBlockLength {
                left: block.left.len(),
                right: block.right.len(),
            });
        }
        let mut codes = block.to_codes();
        alphabet::validate(&codes)?;
        self.process_chunk::<DECRYPT>(&mut codes);
        let right = codes.split_off(self.half_size);
        Ok(Block { left: codes, right })
    }

    /// Runs every round over each block of `chunk` in place.
    fn process_chunk<const DECRYPT: bool>(&self, chunk: &mut [u8]) {
        let h = self.half_size;
        debug_assert!(chunk.len().is_multiple_of(2 * h));

        let mut f = vec![0u8; h];
        for block in chunk.chunks_exact_mut(2 * h) {
            let (l, r) = block.split_at_mut(h);

            if DECRYPT {
                for subkey in self.keysched.iter().rev() {
                    self.round_fn.apply(l, subkey, &mut f);
                    for (x, &y) in r.iter_mut().zip(&f) {
                        *x = char_sub(*x, y);
                    }
                    l.swap_with_slice(r);
                }
            } else {
                for subkey in self.keysched.iter() {
                    self.round_fn.apply(r, subkey, &mut f);
                    for (x, &y) in l.iter_mut().zip(&f) {
                        *x = char_add(*x, y);
                    }
                    l.swap_with_slice(r);
                }
            }
        }
    }

    /// Encrypts a buffer of codes in place.
    ///
    /// # Errors
    /// [`FeistelError::IncompleteBlock`] if `data.len()` is not a multiple of the block size,
    /// [`FeistelError::InvalidCode`] if a code is above 25. `data` is untouched on error.
    pub fn encrypt(&self, data: &mut [u8]) -> Result<()> {
        self.dispatch_serial::<false>(data)
    }

    /// Decrypts a buffer of codes in place.
    ///
    /// # Errors
    /// [`FeistelError::IncompleteBlock`] if `data.len()` is not a multiple of the block size.
    pub fn decrypt(&self, data: &mut [u8]) -> Result<()> {
        self.dispatch_serial::<true>(data)
    }

    fn dispatch_serial<const DECRYPT: bool>(&self, data: &mut [u8]) -> Result<()> {
        check_aligned(data.len(), self.half_size)?;
        alphabet::validate(data)?;
        self.process_chunk::<DECRYPT>(data);
        Ok(())
    }

    /// Encrypts a buffer of codes in place in parallel.
    ///
    /// # Errors
    /// [`FeistelError::IncompleteBlock`] if `data.len()` is not a multiple of the block size.
    pub fn encrypt_par(&self, data: &mut [u8]) -> Result<()> {
        self.dispatch_par::<false>(data)
    }

    /// Decrypts a buffer of codes in place in parallel.
    ///
    /// # Errors
    /// [`FeistelError::IncompleteBlock`] if `data.len()` is not a multiple of the block size.
    pub fn decrypt_par(&self, data: &mut [u8]) -> Result<()> {
        self.dispatch_par::<true>(data)
    }

    fn dispatch_par<const DECRYPT: bool>(&self, data: &mut [u8]) -> Result<()> {
        check_aligned(data.len(), self.half_size)?;
        alphabet::validate(data)?;
        data.par_chunks_mut(BLOCKS_PER_TASK * self.block_size())
            .for_each(|c| self.process_chunk::<DECRYPT>(c));
        Ok(())
    }

    /// Encrypts a buffer of codes in place.
    ///
    /// Switches between serial and parallel processing based on input length (32 K codes).
    pub fn encrypt_auto(&self, data: &mut [u8]) -> Result<()> {
        if data.len() >= AUTO_PAR_THRESHOLD && rayon::current_num_threads() > 1 {
            self.dispatch_par::<false>(data)
        } else {
            self.dispatch_serial::<false>(data)
        }
    }

    /// Decrypts a buffer of codes in place.
    ///
    /// Switches between serial and parallel processing based on input length (32 K codes).
    pub fn decrypt_auto(&self, data: &mut [u8]) -> Result<()> {
        if data.len() >= AUTO_PAR_THRESHOLD && rayon::current_num_threads() > 1 {
            self.dispatch_par::<true>(data)
        } else {
            self.dispatch_serial::<true>(data)
        }
    }
}
