//! Cryptographic primitives for tfgen.
//!
//! This module provides:
//! - The Threefish-256 block cipher, used as a keyed mixing function
//! - The 256-bit generator key type
//! - Mixing functions deriving keystream blocks and fresh keys from
//!   a (key, counter, path bits) triple
//!
//! # Scope
//! The cipher is a source of statistical mixing only. Nothing here is
//! intended as a security boundary.

pub mod keys;
pub mod mix;
pub mod threefish;

pub use keys::{Key, KEY_WORDS};
pub use mix::{derive_key, derive_keystream, REKEY_COUNTER};
pub use threefish::{encrypt_block32, encrypt_block64, Block32, Block64};
