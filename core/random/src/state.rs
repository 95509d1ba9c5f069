//! Generator state record and its transitions.
//!
//! A `GenState` is a plain value: key, counter, tree path and the cached
//! keystream block. Forking copies it; nothing is ever shared. Every
//! keystream block a state encrypts is addressed by a distinct
//! (key, path bits, counter) triple, which is what keeps the streams of
//! different generators independent.

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use tfgen_crypto::{derive_key, derive_keystream, Block32, Key, REKEY_COUNTER};

use crate::path::{low_mask, TreePath, MAX_DEPTH};

/// Words in one keystream block.
pub const BLOCK_WORDS: usize = 8;

/// Minimum path budget `level` leaves available for batch splits.
pub const LEVEL_HEADROOM: u32 = 40;

/// Counter values at or above this bound end the current counter epoch.
const COUNTER_LIMIT: u64 = REKEY_COUNTER - 1;

/// The cached keystream block is wiped along with the key on drop.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct GenState {
    key: Key,
    counter: u64,
    #[zeroize(skip)]
    path: TreePath,
    block: Block32,
    block_index: usize,
}

impl GenState {
    /// Build a state and compute its first keystream block.
    pub(crate) fn make(key: Key, counter: u64, path: TreePath) -> Self {
        let block = derive_keystream(&key, counter, path.bits());
        Self {
            key,
            counter,
            path,
            block,
            block_index: 0,
        }
    }

    pub(crate) fn path(&self) -> TreePath {
        self.path
    }

    /// Return the next keystream word and advance.
    pub(crate) fn next_word(&mut self) -> u32 {
        let word = self.block[self.block_index];

        if self.counter < COUNTER_LIMIT {
            self.counter += 1;
            if self.block_index == BLOCK_WORDS - 1 {
                self.refresh();
            } else {
                self.block_index += 1;
            }
        } else if let Some(path) = self.path.descend(true) {
            trace!("Counter exhausted, extending path to depth {}", path.depth());
            self.remake(0, path);
        } else {
            trace!("Counter and path exhausted, re-keying");
            let fresh = derive_key(&self.key, REKEY_COUNTER, self.path.bits());
            self.rekey(fresh, TreePath::ROOT);
        }

        word
    }

    /// Fork off a sibling; `self` takes the other branch.
    pub(crate) fn split(&mut self) -> Self {
        match (self.path.descend(false), self.path.descend(true)) {
            (Some(own), Some(sibling)) => {
                let sibling = Self::make(self.key.clone(), self.counter, sibling);
                self.remake(self.counter, own);
                sibling
            }
            _ => {
                trace!("Path exhausted on split, re-keying");
                let fresh = derive_key(&self.key, self.counter, self.path.bits());
                let sibling = Self::make(fresh.clone(), 0, TreePath::new(1, 1));
                self.rekey(fresh, TreePath::new(0, 1));
                sibling
            }
        }
    }

    /// Re-key early if fewer than `LEVEL_HEADROOM` path bits remain.
    pub(crate) fn level(&mut self) {
        if self.path.depth() + LEVEL_HEADROOM > MAX_DEPTH {
            trace!("Leveling at depth {}, re-keying", self.path.depth());
            let fresh = derive_key(&self.key, self.counter, self.path.bits());
            self.rekey(fresh, TreePath::ROOT);
        }
    }

    /// Compute child `index` of `2^width` without touching `self`.
    ///
    /// `width` must be at most 32; higher bits of `index` are ignored.
    pub(crate) fn split_n(&self, width: u32, index: u32) -> Self {
        let selected = u64::from(index) & low_mask(width);

        match self.path.append(selected, width) {
            Some(path) => Self::make(self.key.clone(), self.counter, path),
            None => {
                let room = self.path.remaining();
                let (bits, high) = self.path.saturate(selected);
                trace!("Batch split overflows path by {} bits, re-keying", width - room);
                let fresh = derive_key(&self.key, self.counter, bits);
                Self::make(fresh, 0, TreePath::new(high, width - room))
            }
        }
    }

    fn refresh(&mut self) {
        self.block = derive_keystream(&self.key, self.counter, self.path.bits());
        self.block_index = 0;
    }

    fn remake(&mut self, counter: u64, path: TreePath) {
        self.counter = counter;
        self.path = path;
        self.refresh();
    }

    fn rekey(&mut self, key: Key, path: TreePath) {
        // The retired key wipes itself on drop
        self.key = key;
        self.remake(0, path);
    }
}
