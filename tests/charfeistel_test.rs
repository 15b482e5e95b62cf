// Regression fixtures and pipeline behavior for the character Feistel cipher
use charfeistel::{
    Block, Cipher, CipherConfig, Feistel, FeistelError, Key, Mode, RoundKind, Schedule, alphabet,
    decrypt_text, encrypt_text,
};

static KEY: &str = "KEY";
static EXPECT_TEXT_10: &str = "HELLOWORLD";
static CIPHER_TEXT_10_ROUNDS2: &str = "WGHYVXQNZI";
static CIPHER_TEXT_10_ROUNDS4: &str = "DXGSTEEFIE";
static CIPHER_TEXT_10_ROUNDS4_SPN: &str = "XEUVRTSAQV";
static CIPHER_TEXT_10_ROUNDS4_PI: &str = "MHPCCONPRO";
static CIPHER_TEXT_10_ROUNDS4_CBC: &str = "GOICPMSGKK";
static EXPECT_TEXT_12: &str = "ATTACKATDAWN";
static CIPHER_TEXT_12_HALF2_SPN: &str = "RKSLPTBKYVTG";

fn cipher(config: CipherConfig) -> Cipher {
    Cipher::new(&Key::new(KEY).unwrap(), config).unwrap()
}

#[test]
fn encrypt_key3_rounds2() {
    assert_eq!(
        encrypt_text(EXPECT_TEXT_10, KEY, 2).unwrap(),
        CIPHER_TEXT_10_ROUNDS2
    );
}

#[test]
fn decrypt_key3_rounds2() {
    assert_eq!(
        decrypt_text(CIPHER_TEXT_10_ROUNDS2, KEY, 2).unwrap(),
        EXPECT_TEXT_10
    );
}

#[test]
fn encrypt_key3_rounds4() {
    assert_eq!(
        encrypt_text(EXPECT_TEXT_10, KEY, 4).unwrap(),
        CIPHER_TEXT_10_ROUNDS4
    );
}

#[test]
fn decrypt_key3_rounds4() {
    assert_eq!(
        decrypt_text(CIPHER_TEXT_10_ROUNDS4, KEY, 4).unwrap(),
        EXPECT_TEXT_10
    );
}

#[test]
fn encrypt_key3_rounds4_spn() {
    let cipher = cipher(CipherConfig::default().with_round_kind(RoundKind::SubstitutionPermutation));
    assert_eq!(
        cipher.encrypt_text(EXPECT_TEXT_10).unwrap(),
        CIPHER_TEXT_10_ROUNDS4_SPN
    );
    assert_eq!(
        cipher.decrypt_text(CIPHER_TEXT_10_ROUNDS4_SPN).unwrap(),
        EXPECT_TEXT_10
    );
}

#[test]
fn encrypt_key3_rounds4_pi_schedule() {
    let cipher = cipher(CipherConfig::default().with_schedule(Schedule::PiWhitened));
    assert_eq!(
        cipher.encrypt_text(EXPECT_TEXT_10).unwrap(),
        CIPHER_TEXT_10_ROUNDS4_PI
    );
    assert_eq!(
        cipher.decrypt_text(CIPHER_TEXT_10_ROUNDS4_PI).unwrap(),
        EXPECT_TEXT_10
    );
}

#[test]
fn encrypt_key3_rounds4_cbc() {
    let cipher = cipher(CipherConfig::default().with_mode(Mode::Cbc {
        iv: alphabet::encode("QZ"),
    }));
    assert_eq!(
        cipher.encrypt_text(EXPECT_TEXT_10).unwrap(),
        CIPHER_TEXT_10_ROUNDS4_CBC
    );
    assert_eq!(
        cipher.decrypt_text(CIPHER_TEXT_10_ROUNDS4_CBC).unwrap(),
        EXPECT_TEXT_10
    );
}

#[test]
fn encrypt_key3_half2_spn() {
    let cipher = cipher(
        CipherConfig::default()
            .with_half_size(2)
            .with_round_kind(RoundKind::SubstitutionPermutation),
    );
    assert_eq!(
        cipher.encrypt_text(EXPECT_TEXT_12).unwrap(),
        CIPHER_TEXT_12_HALF2_SPN
    );
    assert_eq!(
        cipher.decrypt_text(CIPHER_TEXT_12_HALF2_SPN).unwrap(),
        EXPECT_TEXT_12
    );
}

#[test]
fn round_count_changes_ciphertext() {
    assert_ne!(CIPHER_TEXT_10_ROUNDS2, CIPHER_TEXT_10_ROUNDS4);
    assert_ne!(
        encrypt_text(EXPECT_TEXT_10, KEY, 3).unwrap(),
        encrypt_text(EXPECT_TEXT_10, KEY, 4).unwrap()
    );
}

#[test]
fn non_letters_are_stripped() {
    assert_eq!(
        encrypt_text("Hello, World! 123", KEY, 2).unwrap(),
        CIPHER_TEXT_10_ROUNDS2
    );
    assert_eq!(alphabet::normalize("Hello, World! 123"), EXPECT_TEXT_10);
}

#[test]
fn blocks_encrypt_independently() {
    let whole = encrypt_text("HELX", KEY, 2).unwrap();
    let first = encrypt_text("HE", KEY, 2).unwrap();
    let second = encrypt_text("LX", KEY, 2).unwrap();
    assert_eq!(whole, format!("{}{}", first, second));
    assert_eq!(whole, "WGTW");
}

#[test]
fn block_level_roundtrip() {
    let key = Key::new(KEY).unwrap();
    let engine = Feistel::new(&key, 4, 1).unwrap();
    for block in charfeistel::block::split(&alphabet::encode(EXPECT_TEXT_10), 1).unwrap() {
        let encrypted = engine.encrypt_block(&block).unwrap();
        assert_eq!(engine.decrypt_block(&encrypted).unwrap(), block);
    }
    let hello = Block::new(vec![7], vec![4]).unwrap();
    assert_eq!(
        alphabet::decode(&engine.encrypt_block(&hello).unwrap().to_codes()).unwrap(),
        "DX"
    );
}

#[test]
fn errors_surface_before_output() {
    assert_eq!(
        encrypt_text(EXPECT_TEXT_10, KEY, 0),
        Err(FeistelError::InvalidRoundCount(0))
    );
    assert_eq!(
        encrypt_text("HELLOWORLDS", KEY, 2),
        Err(FeistelError::IncompleteBlock {
            len: 11,
            block_size: 2
        })
    );
    assert_eq!(
        decrypt_text("ABC", KEY, 2),
        Err(FeistelError::IncompleteBlock {
            len: 3,
            block_size: 2
        })
    );
    assert_eq!(
        encrypt_text(EXPECT_TEXT_10, "1234", 2),
        Err(FeistelError::EmptyKey)
    );
}

#[test]
fn empty_text_encrypts_to_empty() {
    assert_eq!(encrypt_text("", KEY, 2).unwrap(), "");
    assert_eq!(encrypt_text("!?", KEY, 4).unwrap(), "");
}
