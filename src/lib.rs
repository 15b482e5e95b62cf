//! # charfeistel
//!
//! An educational Feistel block cipher whose "bits" are the 26 letters A–Z.
//!
//! Addition modulo 26 plays the part that XOR plays in a binary cipher, so
//! every intermediate value stays a letter. Text is normalized (case folded,
//! everything that is not a letter removed), cut into blocks of two equal
//! halves, run through `R` Feistel rounds, and turned back into letters.
//!
//! The cipher is trivially breakable; it exists to show the structure.
//!
//! ## Pieces
//! * [`alphabet`]: letters to codes and back, mod-26 add/subtract.
//! * [`block`]: splitting codes into `(left, right)` blocks; padding policy.
//! * [`key`]: keys and the per-round subkey schedule.
//! * [`round`]: round functions (additive, or substitution–permutation).
//! * [`feistel`]: the engine, with serial and Rayon-parallel paths.
//! * [`modes`]: ECB and CBC.
//! * [`pipeline`]: `encrypt_text` / `decrypt_text` and the configurable [`Cipher`].
//!
//! ## Conventions
//! * Rounds are numbered from 1. Round `i` maps `(L, R)` to `(R, L + F(R, k_i))`.
//! * No swap after the last round.
//! * Round `i` uses the key window starting at `(i - 1) * half_size`, reused
//!   cyclically, with `i` added to every letter.
//! * Text whose letter count is not a multiple of the block size is rejected,
//!   unless sentinel padding is configured and [`Cipher::seal`] is used.
//!
//! ## Examples
//!
//! ```rust
//! use charfeistel::{decrypt_text, encrypt_text};
//!
//! let ciphertext = encrypt_text("Hello, World!", "KEY", 2).unwrap();
//! assert_eq!(ciphertext, "WGHYVXQNZI");
//! assert_eq!(decrypt_text(&ciphertext, "KEY", 2).unwrap(), "HELLOWORLD");
//! ```
//!
//! ```rust
//! use charfeistel::{Cipher, CipherConfig, Key, Padding, RoundKind};
//!
//! let config = CipherConfig::default()
//!     .with_half_size(2)
//!     .with_round_kind(RoundKind::SubstitutionPermutation)
//!     .with_padding(Padding::Sentinel(23));
//! let cipher = Cipher::new(&Key::new("FEISTEL").unwrap(), config).unwrap();
//!
//! let sealed = cipher.seal("attack at dawn!").unwrap();
//! assert_eq!(cipher.open(&sealed).unwrap(), "ATTACKATDAWN");
//! ```

pub mod alphabet;
pub mod block;
pub mod config;
pub mod error;
pub mod feistel;
pub mod key;
pub mod modes;
pub mod pipeline;
pub mod round;

pub use block::{Block, Padding};
pub use config::CipherConfig;
pub use error::{FeistelError, Result};
pub use feistel::Feistel;
pub use key::{Key, Schedule};
pub use modes::Mode;
pub use pipeline::{Cipher, Sealed, decrypt_text, encrypt_text};
pub use round::{Additive, RoundFunction, RoundKind, SubstitutionPermutation};
