use anyhow::{Context, Result, bail};
use charfeistel::{Cipher, CipherConfig, Key, Sealed};
use mimalloc::MiMalloc;
use std::env;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: charfeistel <encrypt|decrypt|seal|open> <key> <text...>";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        bail!(USAGE);
    }
    let command = &args[0];
    let text = args[2..].join(" ");

    let config = CipherConfig::from_env().context("[charfeistel] reading configuration")?;
    eprintln!("[charfeistel] {:?}", config);

    let key = Key::new(&args[1]).context("[charfeistel] parsing key")?;
    let cipher = Cipher::new(&key, config).context("[charfeistel] building cipher")?;

    let output = match &command[..] {
        "encrypt" => cipher
            .encrypt_text(&text)
            .context("[charfeistel] encrypt")?,
        "decrypt" => cipher
            .decrypt_text(&text)
            .context("[charfeistel] decrypt")?,
        "seal" => cipher
            .seal(&text)
            .context("[charfeistel] seal")?
            .to_string(),
        "open" => {
            let sealed: Sealed = text.parse().context("[charfeistel] parsing sealed text")?;
            cipher.open(&sealed).context("[charfeistel] open")?
        }
        _ => {
            eprintln!("[charfeistel] unknown command: {}", command);
            bail!(USAGE);
        }
    };

    println!("{}", output);
    Ok(())
}
