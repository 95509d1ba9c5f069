//! Mixing functions adapting the cipher to the generator.
//!
//! Both functions encrypt the plaintext `(bits, counter, 0, 0)`. The
//! keystream variant hands out the result as eight 32-bit words; the key
//! variant keeps the four 64-bit words as the next epoch's key.

use crate::keys::Key;
use crate::threefish::{encrypt_block32, encrypt_block64, Block32, Block64};

/// Counter value used when re-keying after counter exhaustion.
///
/// Counter advancement stops at `u64::MAX - 1`, so a re-key never
/// encrypts the same plaintext as a keystream block under the same key.
pub const REKEY_COUNTER: u64 = u64::MAX;

/// Derive the keystream block for `(key, counter, bits)`.
pub fn derive_keystream(key: &Key, counter: u64, bits: u64) -> Block32 {
    encrypt_block32(key.as_words(), &plaintext(counter, bits))
}

/// Derive a fresh key from `(key, counter, bits)`.
pub fn derive_key(key: &Key, counter: u64, bits: u64) -> Key {
    Key::from_words(encrypt_block64(key.as_words(), &plaintext(counter, bits)))
}

fn plaintext(counter: u64, bits: u64) -> Block64 {
    [bits, counter, 0, 0]
}
