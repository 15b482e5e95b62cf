//! Block cipher modes of operation over code buffers.
//!
//! ECB runs every block independently through the engine, so it can use the
//! parallel path. CBC chains each block to the previous ciphertext block and
//! is always serial.

use crate::alphabet::{char_add, char_sub};
use crate::block::check_aligned;
use crate::error::{FeistelError, Result};
use crate::feistel::Feistel;
use crate::round::RoundFunction;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic code book.
    #[default]
    Ecb,
    /// Cipher block chaining with a one-block initialization vector of codes.
    Cbc { iv: Vec<u8> },
}

pub fn encrypt_ecb<F: RoundFunction>(engine: &Feistel<F>, data: &mut [u8]) -> Result<()> {
    engine.encrypt_auto(data)
}

pub fn decrypt_ecb<F: RoundFunction>(engine: &Feistel<F>, data: &mut [u8]) -> Result<()> {
    engine.decrypt_auto(data)
}

/// `c_i = E(p_i + c_{i-1})` with `c_0 = iv`.
pub fn encrypt_cbc<F: RoundFunction>(engine: &Feistel<F>, data: &mut [u8], iv: &[u8]) -> Result<()> {
    check_cbc(engine, data, iv)?;
    let block_size = engine.block_size();

    let mut prev = iv.to_vec();
    for block in data.chunks_exact_mut(block_size) {
        for (x, &p) in block.iter_mut().zip(&prev) {
            *x = char_add(*x, p);
        }
        engine.encrypt(block)?;
        prev.copy_from_slice(block);
    }
    Ok(())
}

/// `p_i = D(c_i) - c_{i-1}` with `c_0 = iv`.
pub fn decrypt_cbc<F: RoundFunction>(engine: &Feistel<F>, data: &mut [u8], iv: &[u8]) -> Result<()> {
    check_cbc(engine, data, iv)?;
    let block_size = engine.block_size();

    let mut prev = iv.to_vec();
    let mut current = vec![0u8; block_size];
    for block in data.chunks_exact_mut(block_size) {
        current.copy_from_slice(block);
        engine.decrypt(block)?;
        for (x, &p) in block.iter_mut().zip(&prev) {
            *x = char_sub(*x, p);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    Ok(())
}

fn check_cbc<F: RoundFunction>(engine: &Feistel<F>, data: &[u8], iv: &[u8]) -> Result<()> {
    if iv.len() != engine.block_size() {
        return Err(FeistelError::InvalidIvLength {
            expected: engine.block_size(),
            actual: iv.len(),
        });
    }
    crate::alphabet::validate(iv)?;
    check_aligned(data.len(), engine.half_size())?;
    crate::alphabet::validate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{decode, encode};
    use crate::key::Key;

    fn engine() -> Feistel {
        Feistel::new(&Key::new("KEY").unwrap(), 4, 1).unwrap()
    }

    #[test]
    fn test_cbc_fixture() {
        let engine = engine();
        let iv = encode("QZ");
        let mut data = encode("HELLOWORLD");
        encrypt_cbc(&engine, &mut data, &iv).unwrap();
        assert_eq!(decode(&data).unwrap(), "GOICPMSGKK");
        decrypt_cbc(&engine, &mut data, &iv).unwrap();
        assert_eq!(decode(&data).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_cbc_hides_repeated_blocks() {
        let engine = engine();
        let mut ecb = encode("ABABABAB");
        let mut cbc = ecb.clone();
        encrypt_ecb(&engine, &mut ecb).unwrap();
        encrypt_cbc(&engine, &mut cbc, &encode("QZ")).unwrap();
        assert!(ecb.chunks(2).all(|b| b == &ecb[..2]));
        assert!(!cbc.chunks(2).all(|b| b == &cbc[..2]));
    }

    #[test]
    fn test_cbc_rejects_bad_iv() {
        let engine = engine();
        let mut data = encode("HELLOWORLD");
        assert_eq!(
            encrypt_cbc(&engine, &mut data, &[1, 2, 3]),
            Err(FeistelError::InvalidIvLength {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            decrypt_cbc(&engine, &mut data, &[1, 40]),
            Err(FeistelError::InvalidCode {
                code: 40,
                position: 1
            })
        );
    }

    #[test]
    fn test_out_of_range_codes_rejected() {
        let engine = engine();
        let err = Err(FeistelError::InvalidCode {
            code: 30,
            position: 0,
        });

        let mut data = vec![30, 2];
        assert_eq!(encrypt_ecb(&engine, &mut data), err);
        assert_eq!(decrypt_ecb(&engine, &mut data), err);
        assert_eq!(data, vec![30, 2]);

        let mut chained = vec![1, 2, 30, 2];
        assert_eq!(
            encrypt_cbc(&engine, &mut chained, &encode("QZ")),
            Err(FeistelError::InvalidCode {
                code: 30,
                position: 2
            })
        );
        assert_eq!(chained, vec![1, 2, 30, 2]);
    }

    #[test]
    fn test_ecb_matches_engine() {
        let engine = engine();
        let mut via_mode = encode("HELLOWORLD");
        let mut direct = via_mode.clone();
        encrypt_ecb(&engine, &mut via_mode).unwrap();
        engine.encrypt(&mut direct).unwrap();
        assert_eq!(via_mode, direct);
        decrypt_ecb(&engine, &mut via_mode).unwrap();
        assert_eq!(via_mode, encode("HELLOWORLD"));
    }
}
