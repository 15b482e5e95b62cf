//! Text in, text out: codec, splitter, engine and mode glued together.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, decode, encode};
use crate::block::{self, Padding};
use crate::config::CipherConfig;
use crate::error::{FeistelError, Result};
use crate::feistel::Feistel;
use crate::key::Key;
use crate::modes::{self, Mode};
use crate::round::RoundKind;

/// Encrypts `raw` with the default parameters and `rounds` rounds.
///
/// Non-letters are stripped and case is folded first. The letter count
/// must be a whole number of two-letter blocks.
///
/// # Errors
/// [`FeistelError::InvalidRoundCount`] (checked first), [`FeistelError::EmptyKey`],
/// or [`FeistelError::IncompleteBlock`].
pub fn encrypt_text(raw: &str, key: &str, rounds: usize) -> Result<String> {
    Cipher::from_text_key(key, CipherConfig::default().with_rounds(rounds))?.encrypt_text(raw)
}

/// Inverse of [`encrypt_text`] for the same key and round count.
pub fn decrypt_text(ciphertext: &str, key: &str, rounds: usize) -> Result<String> {
    Cipher::from_text_key(key, CipherConfig::default().with_rounds(rounds))?
        .decrypt_text(ciphertext)
}

/// Ciphertext together with the letter count of the plaintext it came from.
///
/// Produced by [`Cipher::seal`]; the text form is `LEN:CIPHERTEXT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: String,
    pub plaintext_len: usize,
}

impl fmt::Display for Sealed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.plaintext_len, self.ciphertext)
    }
}

impl FromStr for Sealed {
    type Err = FeistelError;

    fn from_str(s: &str) -> Result<Self> {
        let (len, text) = s
            .split_once(':')
            .ok_or_else(|| FeistelError::InvalidSealedFormat(s.to_string()))?;
        let plaintext_len = len
            .trim()
            .parse()
            .map_err(|_| FeistelError::InvalidSealedFormat(s.to_string()))?;
        Ok(Sealed {
            ciphertext: alphabet::normalize(text),
            plaintext_len,
        })
    }
}

/// A configured cipher: key, engine and mode.
#[derive(Clone, Debug)]
pub struct Cipher {
    engine: Feistel<RoundKind>,
    config: CipherConfig,
}

impl Cipher {
    /// # Errors
    /// Any error from [`CipherConfig::validate`].
    pub fn new(key: &Key, config: CipherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Cipher {
            engine: Feistel::from_config(key, &config)?,
            config,
        })
    }

    /// Validates `config` before looking at the key, so a bad round count wins.
    pub fn from_text_key(key: &str, config: CipherConfig) -> Result<Self> {
        config.validate()?;
        Self::new(&Key::new(key)?, config)
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Encrypts the normalized form of `raw`; partial blocks are an error.
    pub fn encrypt_text(&self, raw: &str) -> Result<String> {
        let mut codes = encode(raw);
        self.encrypt_codes(&mut codes)?;
        decode(&codes)
    }

    /// Decrypts the normalized form of `ciphertext`; partial blocks are an error.
    pub fn decrypt_text(&self, ciphertext: &str) -> Result<String> {
        let mut codes = encode(ciphertext);
        self.decrypt_codes(&mut codes)?;
        decode(&codes)
    }

    /// Encrypts codes in place under the configured mode.
    pub fn encrypt_codes(&self, codes: &mut [u8]) -> Result<()> {
        alphabet::validate(codes)?;
        match &self.config.mode {
            Mode::Ecb => modes::encrypt_ecb(&self.engine, codes),
            Mode::Cbc { iv } => modes::encrypt_cbc(&self.engine, codes, iv),
        }
    }

    /// Decrypts codes in place under the configured mode.
    pub fn decrypt_codes(&self, codes: &mut [u8]) -> Result<()> {
        alphabet::validate(codes)?;
        match &self.config.mode {
            Mode::Ecb => modes::decrypt_ecb(&self.engine, codes),
            Mode::Cbc { iv } => modes::decrypt_cbc(&self.engine, codes, iv),
        }
    }

    /// Encrypts `raw`, padding the last block if the padding policy allows it.
    ///
    /// With [`Padding::Reject`] this behaves like [`encrypt_text`](Self::encrypt_text).
    pub fn seal(&self, raw: &str) -> Result<Sealed> {
        let mut codes = encode(raw);
        let plaintext_len = match self.config.padding {
            Padding::Reject => codes.len(),
            Padding::Sentinel(code) => block::pad(&mut codes, self.config.block_size(), code),
        };
        self.encrypt_codes(&mut codes)?;
        Ok(Sealed {
            ciphertext: decode(&codes)?,
            plaintext_len,
        })
    }

    /// Decrypts a [`Sealed`] and drops the padding.
    ///
    /// # Errors
    /// [`FeistelError::InvalidSealedLength`] if the recorded length is longer than
    /// the ciphertext or leaves more than one block of padding.
    pub fn open(&self, sealed: &Sealed) -> Result<String> {
        let mut codes = encode(&sealed.ciphertext);
        let ciphertext_len = codes.len();
        if sealed.plaintext_len > ciphertext_len
            || ciphertext_len - sealed.plaintext_len >= self.config.block_size()
        {
            return Err(FeistelError::InvalidSealedLength {
                plaintext_len: sealed.plaintext_len,
                ciphertext_len,
            });
        }
        self.decrypt_codes(&mut codes)?;
        codes.truncate(sealed.plaintext_len);
        decode(&codes)
    }
}
