//! Error types for the charfeistel library.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeistelError>;

/// Errors produced by the charfeistel library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeistelError {
    /// A code outside `[0, 25]` was handed to the codec.
    #[error("invalid letter code {code} at position {position}")]
    InvalidCode { code: u8, position: usize },

    /// The input does not split into whole blocks.
    #[error("{len} letters do not fill whole blocks of {block_size}")]
    IncompleteBlock { len: usize, block_size: usize },

    #[error("round count must be between 1 and 1024, got {0}")]
    InvalidRoundCount(usize),

    #[error("half-block size must be between 1 and 1024")]
    InvalidHalfSize,

    #[error("key contains no letters")]
    EmptyKey,

    /// A block whose halves differ from each other or from the engine's half size.
    #[error("block halves have lengths {left} and {right}")]
    InvalidBlockLength { left: usize, right: usize },

    #[error("initialization vector must be {expected} letters, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("sealed length {plaintext_len} does not fit ciphertext of {ciphertext_len} letters")]
    InvalidSealedLength {
        plaintext_len: usize,
        ciphertext_len: usize,
    },

    #[error("sealed text {0:?} is not of the form LEN:CIPHERTEXT")]
    InvalidSealedFormat(String),

    #[error("invalid value {value:?} for {var}")]
    InvalidConfig { var: &'static str, value: String },
}
