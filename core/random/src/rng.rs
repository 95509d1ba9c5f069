//! `rand_core` integration.
//!
//! A live generator can be borrowed as a [`RngCore`], which makes the
//! `rand` extension traits and distributions available on it. Staleness
//! is checked once when the borrow is taken, so the trait methods are
//! infallible.

use rand_core::{impls, RngCore, SeedableRng};

use crate::generator::TfGen;
use crate::state::GenState;

/// Mutable borrow of a live generator implementing [`RngCore`].
///
/// Obtained from [`TfGen::rng`].
#[derive(Debug)]
pub struct LiveRng<'a> {
    state: &'a mut GenState,
}

impl<'a> LiveRng<'a> {
    pub(crate) fn new(state: &'a mut GenState) -> Self {
        Self { state }
    }
}

impl RngCore for LiveRng<'_> {
    fn next_u32(&mut self) -> u32 {
        self.state.next_word()
    }

    /// High word first.
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.state.next_word());
        let low = u64::from(self.state.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Seeds are 32 bytes, read as four little-endian 64-bit seed words.
impl SeedableRng for TfGen {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        TfGen::from(tfgen_common::Seed::from_le_bytes(seed))
    }
}
