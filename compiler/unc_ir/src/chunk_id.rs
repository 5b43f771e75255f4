//! Chunk IDs.

use std::fmt;

/// Index of a chunk in its `ChunkList` arena.
///
/// IDs stay valid for the lifetime of the list: chunks are never moved,
/// and inserting a chunk never renumbers existing ones.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ChunkId(u32);

impl ChunkId {
    /// Invalid chunk ID (sentinel value).
    pub const INVALID: ChunkId = ChunkId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ChunkId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ChunkId({})", self.0)
        } else {
            write!(f, "ChunkId::INVALID")
        }
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        ChunkId::INVALID
    }
}
