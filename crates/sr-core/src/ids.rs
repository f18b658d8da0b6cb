//! Strongly typed, zero-cost identifier wrappers.
//!
//! IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to
//! allow direct indexing into storage `Vec`s via `id.0 as usize`, but
//! callers should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Index of a hazard in a hazard catalog — position in catalog order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardId(pub u32);

impl HazardId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for HazardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HazardId({})", self.0)
    }
}

impl From<HazardId> for usize {
    #[inline(always)]
    fn from(id: HazardId) -> usize {
        id.0 as usize
    }
}

/// Index of an advisory text in a tip registry.  `u16` — no registry will
/// ever hold more than a few dozen tips.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TipId(pub u16);

impl TipId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TipId({})", self.0)
    }
}

impl From<TipId> for usize {
    #[inline(always)]
    fn from(id: TipId) -> usize {
        id.0 as usize
    }
}
