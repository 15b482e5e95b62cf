//! Splitting code sequences into Feistel blocks and back.

use crate::error::{FeistelError, Result};

/// Code of the letter `X`, the default padding sentinel.
pub const DEFAULT_SENTINEL: u8 = 23;

/// One block: two halves of equal length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    pub left: Vec<u8>,
    pub right: Vec<u8>,
}

impl Block {
    /// Builds a block from its halves.
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidBlockLength`] if the halves differ in length.
    pub fn new(left: Vec<u8>, right: Vec<u8>) -> Result<Self> {
        if left.len() != right.len() {
            return Err(FeistelError::InvalidBlockLength {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Block { left, right })
    }

    pub fn half_size(&self) -> usize {
        self.left.len()
    }

    /// The block as one contiguous `left ++ right` sequence.
    pub fn to_codes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.left.len() * 2);
        out.extend_from_slice(&self.left);
        out.extend_from_slice(&self.right);
        out
    }

    fn from_chunk(chunk: &[u8]) -> Self {
        let (left, right) = chunk.split_at(chunk.len() / 2);
        Block {
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}

/// What to do with a final chunk shorter than a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// Fail with [`FeistelError::IncompleteBlock`].
    #[default]
    Reject,
    /// Fill with the given code; the original length travels with the ciphertext.
    Sentinel(u8),
}

/// Verifies that `len` codes make whole blocks of `2 * half_size`.
pub fn check_aligned(len: usize, half_size: usize) -> Result<()> {
    if half_size == 0 {
        return Err(FeistelError::InvalidHalfSize);
    }
    let block_size = half_size * 2;
    if !len.is_multiple_of(block_size) {
        return Err(FeistelError::IncompleteBlock { len, block_size });
    }
    Ok(())
}

/// Partitions `codes` into blocks of `2 * half_size`, preserving order.
///
/// # Errors
/// [`FeistelError::InvalidHalfSize`] for a zero half size and
/// [`FeistelError::IncompleteBlock`] if the last chunk is short.
pub fn split(codes: &[u8], half_size: usize) -> Result<Vec<Block>> {
    check_aligned(codes.len(), half_size)?;
    Ok(codes
        .chunks_exact(half_size * 2)
        .map(Block::from_chunk)
        .collect())
}

/// Concatenates `left ++ right` of every block, in order.
pub fn join(blocks: &[Block]) -> Vec<u8> {
    let len = blocks.iter().map(|b| b.left.len() + b.right.len()).sum();
    let mut out = Vec::with_capacity(len);
    for block in blocks {
        out.extend_from_slice(&block.left);
        out.extend_from_slice(&block.right);
    }
    out
}

/// Appends `sentinel` until `codes` fills whole blocks; returns the original length.
pub fn pad(codes: &mut Vec<u8>, block_size: usize, sentinel: u8) -> usize {
    let len = codes.len();
    let short = (block_size - len % block_size) % block_size;
    codes.resize(len + short, sentinel);
    len
}
