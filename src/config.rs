//! Cipher parameters and their environment-variable form.

use crate::alphabet;
use crate::block::{DEFAULT_SENTINEL, Padding};
use crate::error::{FeistelError, Result};
use crate::key::{MAX_HALF_SIZE, MAX_ROUNDS, Schedule};
use crate::modes::Mode;
use crate::round::RoundKind;

pub const ENV_ROUNDS: &str = "CHARFEISTEL_ROUNDS";
pub const ENV_HALF_SIZE: &str = "CHARFEISTEL_HALF_SIZE";
pub const ENV_ROUND_FN: &str = "CHARFEISTEL_ROUND_FN";
pub const ENV_SCHEDULE: &str = "CHARFEISTEL_SCHEDULE";
pub const ENV_PADDING: &str = "CHARFEISTEL_PADDING";
pub const ENV_IV: &str = "CHARFEISTEL_IV";

pub const DEFAULT_ROUNDS: usize = 4;
pub const DEFAULT_HALF_SIZE: usize = 1;

/// Everything that shapes the cipher apart from the key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    pub rounds: usize,
    pub half_size: usize,
    pub round_kind: RoundKind,
    pub schedule: Schedule,
    pub padding: Padding,
    pub mode: Mode,
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig {
            rounds: DEFAULT_ROUNDS,
            half_size: DEFAULT_HALF_SIZE,
            round_kind: RoundKind::Additive,
            schedule: Schedule::Cyclic,
            padding: Padding::Reject,
            mode: Mode::Ecb,
        }
    }
}

impl CipherConfig {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_half_size(mut self, half_size: usize) -> Self {
        self.half_size = half_size;
        self
    }

    pub fn with_round_kind(mut self, round_kind: RoundKind) -> Self {
        self.round_kind = round_kind;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn block_size(&self) -> usize {
        self.half_size * 2
    }

    /// Checks the parameters before any text is touched.
    ///
    /// Round count is checked first, then half size, then the CBC IV length.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ROUNDS).contains(&self.rounds) {
            return Err(FeistelError::InvalidRoundCount(self.rounds));
        }
        if !(1..=MAX_HALF_SIZE).contains(&self.half_size) {
            return Err(FeistelError::InvalidHalfSize);
        }
        if let Padding::Sentinel(code) = self.padding {
            alphabet::validate(&[code])?;
        }
        if let Mode::Cbc { iv } = &self.mode {
            if iv.len() != self.block_size() {
                return Err(FeistelError::InvalidIvLength {
                    expected: self.block_size(),
                    actual: iv.len(),
                });
            }
            alphabet::validate(iv)?;
        }
        Ok(())
    }

    /// Reads the configuration from the process environment.
    ///
    /// Unset variables keep their defaults; malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&'static str) -> Option<String>,
    {
        let mut config = CipherConfig::default();

        if let Some(value) = lookup(ENV_ROUNDS) {
            config.rounds = parse_count(ENV_ROUNDS, value, MAX_ROUNDS)?;
        }
        if let Some(value) = lookup(ENV_HALF_SIZE) {
            config.half_size = parse_count(ENV_HALF_SIZE, value, MAX_HALF_SIZE)?;
        }
        if let Some(value) = lookup(ENV_ROUND_FN) {
            config.round_kind = match value.trim().to_ascii_lowercase().as_str() {
                "additive" => RoundKind::Additive,
                "spn" => RoundKind::SubstitutionPermutation,
                _ => return Err(invalid(ENV_ROUND_FN, value)),
            };
        }
        if let Some(value) = lookup(ENV_SCHEDULE) {
            config.schedule = match value.trim().to_ascii_lowercase().as_str() {
                "cyclic" => Schedule::Cyclic,
                "pi" => Schedule::PiWhitened,
                _ => return Err(invalid(ENV_SCHEDULE, value)),
            };
        }
        if let Some(value) = lookup(ENV_PADDING) {
            config.padding = match value.trim().to_ascii_lowercase().as_str() {
                "reject" => Padding::Reject,
                "sentinel" => Padding::Sentinel(DEFAULT_SENTINEL),
                _ => return Err(invalid(ENV_PADDING, value)),
            };
        }
        if let Some(value) = lookup(ENV_IV) {
            let iv = alphabet::encode(&value);
            if iv.is_empty() {
                return Err(invalid(ENV_IV, value));
            }
            config.mode = Mode::Cbc { iv };
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_count(var: &'static str, value: String, max: usize) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(count) if count <= max => Ok(count),
        _ => Err(invalid(var, value)),
    }
}

fn invalid(var: &'static str, value: String) -> FeistelError {
    FeistelError::InvalidConfig { var, value }
}
