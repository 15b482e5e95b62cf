//! Profile the character Feistel engine
//! Usage: cargo run --release --example profile serial 1000000
//! Usage: cargo run --release --example profile par 1000000
use mimalloc::MiMalloc;
use std::env;

use charfeistel::{Feistel, Key, alphabet};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let args: Vec<String> = env::args().collect();
    let test = &args[1];
    let text_len = &args[2];

    let key = Key::new("FEISTEL").unwrap();
    let base_text = "ATTACKATDAWNHOLD".to_string();
    let text = alphabet::encode(&base_text.repeat(text_len.parse::<usize>().unwrap()));

    let engine = Feistel::new(&key, 4, 4).unwrap();

    match &test[..] {
        "serial" => {
            let mut data = text.clone();
            engine.encrypt(&mut data).unwrap();
            engine.decrypt(&mut data).unwrap();
            assert_eq!(data, text);
        }
        "par" => {
            let mut data = text.clone();
            engine.encrypt_par(&mut data).unwrap();
            engine.decrypt_par(&mut data).unwrap();
            assert_eq!(data, text);
        }
        _ => {
            panic!("Unknown test: {}", test);
        }
    }
}
