//! Common types used throughout tfgen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of 64-bit words in a seed (256 bits).
pub const SEED_WORDS: usize = 4;

/// The four 64-bit words a generator is seeded from.
///
/// The words become the generator's initial 256-bit key verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Seed(pub [u64; SEED_WORDS]);

impl Seed {
    /// Create a seed from its four words.
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self([a, b, c, d])
    }

    /// Create a seed from 32 bytes, read as four little-endian words.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0u64; SEED_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        Self(words)
    }

    /// Parse a seed from a comma-separated list of four words.
    ///
    /// Words are decimal, or hexadecimal with a `0x` prefix. Underscores
    /// may be used as digit separators and surrounding whitespace is ignored.
    ///
    /// # Errors
    /// - Returns error if there are not exactly four words
    /// - Returns error if any word is not a valid 64-bit number
    pub fn parse(text: &str) -> crate::Result<Self> {
        let parts: Vec<&str> = text.split(',').collect();
        if parts.len() != SEED_WORDS {
            return Err(crate::Error::InvalidInput(format!(
                "Seed must have {} comma-separated words, got {}",
                SEED_WORDS,
                parts.len()
            )));
        }

        let mut words = [0u64; SEED_WORDS];
        for (word, part) in words.iter_mut().zip(parts) {
            *word = parse_word(part)?;
        }
        Ok(Self(words))
    }

    /// Get the seed words.
    pub fn words(&self) -> &[u64; SEED_WORDS] {
        &self.0
    }
}

fn parse_word(part: &str) -> crate::Result<u64> {
    let trimmed = part.trim();
    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();

    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse::<u64>(),
    };

    parsed.map_err(|e| crate::Error::InvalidInput(format!("Invalid seed word '{}': {}", trimmed, e)))
}

impl FromStr for Seed {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse(s)
    }
}

impl From<[u64; SEED_WORDS]> for Seed {
    fn from(words: [u64; SEED_WORDS]) -> Self {
        Self(words)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{:#018x},{:#018x},{:#018x},{:#018x}", a, b, c, d)
    }
}
