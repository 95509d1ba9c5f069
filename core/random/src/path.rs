//! Addresses in the split tree of one key epoch.
//!
//! A path is a bit string of at most 64 bits. Bit `i` records the branch
//! taken at split depth `i`; bits at or above the depth are always zero.

/// Maximum path depth before the epoch has to be re-keyed.
pub const MAX_DEPTH: u32 = 64;

/// Position of a generator in the split tree rooted at its current key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TreePath {
    bits: u64,
    depth: u32,
}

impl TreePath {
    /// The root of a fresh epoch.
    pub const ROOT: Self = Self { bits: 0, depth: 0 };

    pub(crate) fn new(bits: u64, depth: u32) -> Self {
        debug_assert!(depth <= MAX_DEPTH);
        debug_assert!(bits & !low_mask(depth) == 0);
        Self { bits, depth }
    }

    /// Branch bits recorded so far.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Number of branch bits recorded so far.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of branch bits still available.
    pub fn remaining(&self) -> u32 {
        MAX_DEPTH - self.depth
    }

    /// Whether no further branch bit can be recorded.
    pub fn is_full(&self) -> bool {
        self.depth == MAX_DEPTH
    }

    /// Append the low `width` bits of `selected`.
    ///
    /// Returns `None` if fewer than `width` bits remain.
    pub fn append(&self, selected: u64, width: u32) -> Option<Self> {
        if width > self.remaining() {
            return None;
        }
        let selected = selected & low_mask(width);
        Some(Self {
            bits: self.bits | selected.checked_shl(self.depth).unwrap_or(0),
            depth: self.depth + width,
        })
    }

    /// Record one more branch: `false` for the caller's side, `true` for the sibling's.
    pub fn descend(&self, branch: bool) -> Option<Self> {
        self.append(u64::from(branch), 1)
    }

    /// Fill every remaining bit with the low bits of `selected`.
    ///
    /// Returns the bits of the resulting full path together with the
    /// high bits of `selected` that did not fit.
    pub fn saturate(&self, selected: u64) -> (u64, u64) {
        let room = self.remaining();
        let low = selected & low_mask(room);
        let high = selected.checked_shr(room).unwrap_or(0);
        (self.bits | low.checked_shl(self.depth).unwrap_or(0), high)
    }
}

/// Mask selecting the low `width` bits.
pub(crate) fn low_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
