//! Generator key type.
//!
//! A key is replaced wholesale at every re-key. Every copy is wiped with
//! `zeroize` when dropped, and debug output never shows key words.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use tfgen_common::Seed;

use crate::threefish::Block64;

/// Number of 64-bit words in a key (256 bits).
pub const KEY_WORDS: usize = 4;

/// 256-bit key driving one epoch of a generator.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    words: Block64,
}

impl Key {
    /// Create a key from raw words.
    pub fn from_words(words: Block64) -> Self {
        Self { words }
    }

    /// Get the key words.
    ///
    /// Used to feed the cipher; the words should not be stored elsewhere.
    pub fn as_words(&self) -> &Block64 {
        &self.words
    }
}

impl From<Seed> for Key {
    fn from(seed: Seed) -> Self {
        Self::from_words(seed.0)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key([REDACTED])")
    }
}
