//! Splittable generator handle.
//!
//! `TfGen` pairs a generator state with a two-phase tag. A live
//! generator supports every operation. After its first batch split it is
//! exhausted: the state is frozen in place and only further batch splits,
//! which read the frozen snapshot, are accepted.

use tracing::debug;

use tfgen_common::{Error, Result, Seed};
use tfgen_crypto::Key;

use crate::path::TreePath;
use crate::rng::LiveRng;
use crate::state::GenState;

/// Largest `width` accepted by [`TfGen::split_n`].
pub const MAX_SPLIT_WIDTH: u32 = 32;

/// Deterministic splittable pseudorandom generator driven by Threefish-256.
///
/// # Example
/// ```
/// use tfgen::TfGen;
///
/// let mut parent = TfGen::new(1, 2, 3, 4);
/// let mut child = parent.split().unwrap();
/// assert_ne!(parent.next_u32().unwrap(), child.next_u32().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TfGen {
    state: GenState,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Live,
    Exhausted,
}

impl TfGen {
    /// Create a generator seeded with the words `(a, b, c, d)`.
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self::from(Seed::new(a, b, c, d))
    }

    fn live(state: GenState) -> Self {
        Self {
            state,
            phase: Phase::Live,
        }
    }

    /// Generate the next 32-bit word.
    ///
    /// # Errors
    /// - `StaleGenerator` if this generator has performed a batch split
    pub fn next_u32(&mut self) -> Result<u32> {
        Ok(self.live_state("next_u32")?.next_word())
    }

    /// Split off an independent generator.
    ///
    /// `self` and the returned generator produce disjoint streams from
    /// here on.
    ///
    /// # Errors
    /// - `StaleGenerator` if this generator has performed a batch split
    pub fn split(&mut self) -> Result<TfGen> {
        let sibling = self.live_state("split")?.split();
        Ok(Self::live(sibling))
    }

    /// Re-key now if the remaining path budget could not absorb a
    /// maximum-width batch split.
    ///
    /// Call before a round of [`TfGen::split_n`] to keep the re-key out of
    /// the individual batch splits.
    ///
    /// # Errors
    /// - `StaleGenerator` if this generator has performed a batch split
    pub fn level(&mut self) -> Result<()> {
        self.live_state("level")?.level();
        Ok(())
    }

    /// Create child `index` of `2^width` disjoint children of the current state.
    ///
    /// Marks this generator stale. The state is frozen at the first batch
    /// split, so repeated calls with the same arguments return equal
    /// children. Only the low `width` bits of `index` are used.
    ///
    /// # Errors
    /// - `InvalidArgument` if `width` exceeds [`MAX_SPLIT_WIDTH`]; the
    ///   generator is left unchanged
    pub fn split_n(&mut self, width: u32, index: u32) -> Result<TfGen> {
        if width > MAX_SPLIT_WIDTH {
            return Err(Error::InvalidArgument(format!(
                "Batch split width must be at most {}, got {}",
                MAX_SPLIT_WIDTH, width
            )));
        }

        let child = self.state.split_n(width, index);
        self.freeze();
        Ok(Self::live(child))
    }

    /// Whether this generator has performed a batch split.
    pub fn is_stale(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// Current position in the split tree of the current key.
    pub fn path(&self) -> TreePath {
        self.state.path()
    }

    /// Borrow this generator as a [`rand_core::RngCore`].
    ///
    /// # Errors
    /// - `StaleGenerator` if this generator has performed a batch split
    pub fn rng(&mut self) -> Result<LiveRng<'_>> {
        Ok(LiveRng::new(self.live_state("rng")?))
    }

    fn live_state(&mut self, operation: &str) -> Result<&mut GenState> {
        match self.phase {
            Phase::Live => Ok(&mut self.state),
            Phase::Exhausted => Err(Error::StaleGenerator(operation.to_string())),
        }
    }

    fn freeze(&mut self) {
        if self.phase == Phase::Live {
            debug!("Generator batch-split at depth {}, now stale", self.state.path().depth());
            self.phase = Phase::Exhausted;
        }
    }
}

impl From<Seed> for TfGen {
    fn from(seed: Seed) -> Self {
        Self::live(GenState::make(Key::from(seed), 0, TreePath::ROOT))
    }
}
