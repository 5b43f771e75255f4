//! The chunk list.
//!
//! # Design
//!
//! An arena of chunks plus explicit prev/next links. Chunks are appended to
//! the arena and never moved, so a `ChunkId` stays valid while other chunks
//! are inserted around it. List order is the link order, not arena order.
//!
//! # Invariant
//!
//! Walking `next` from `head` visits every linked chunk exactly once and
//! ends at `tail`; walking `prev` from `tail` visits them in reverse.

use std::ops::{Index, IndexMut};

use crate::{Chunk, ChunkId, TokenKind};

#[derive(Copy, Clone, Debug, Default)]
struct Links {
    prev: ChunkId,
    next: ChunkId,
}

/// Direction of a list search.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Dir {
    Forward,
    Backward,
}

/// Ordered, doubly linked sequence of chunks.
#[derive(Clone, Debug, Default)]
pub struct ChunkList {
    chunks: Vec<Chunk>,
    links: Vec<Links>,
    head: ChunkId,
    tail: ChunkId,
    len: usize,
}

impl ChunkList {
    pub fn new() -> Self {
        ChunkList::default()
    }

    /// Number of linked chunks.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn head(&self) -> Option<ChunkId> {
        valid(self.head)
    }

    #[inline]
    pub fn tail(&self) -> Option<ChunkId> {
        valid(self.tail)
    }

    #[inline]
    pub fn get(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ChunkId) -> Option<&mut Chunk> {
        self.chunks.get_mut(id.index())
    }

    // ─── Insertion ───

    fn alloc(&mut self, chunk: Chunk) -> ChunkId {
        let raw = u32::try_from(self.chunks.len()).unwrap_or(u32::MAX - 1);
        let id = ChunkId::new(raw);
        self.chunks.push(chunk);
        self.links.push(Links::default());
        self.len += 1;
        id
    }

    /// Append a chunk at the end of the list.
    pub fn push_back(&mut self, chunk: Chunk) -> ChunkId {
        let id = self.alloc(chunk);
        self.links[id.index()].prev = self.tail;
        match self.tail() {
            Some(tail) => self.links[tail.index()].next = id,
            None => self.head = id,
        }
        self.tail = id;
        id
    }

    /// Insert a chunk right after `anchor`.
    pub fn add_after(&mut self, anchor: ChunkId, chunk: Chunk) -> ChunkId {
        let id = self.alloc(chunk);
        let next = self.links[anchor.index()].next;
        self.links[id.index()] = Links { prev: anchor, next };
        self.links[anchor.index()].next = id;
        match valid(next) {
            Some(next) => self.links[next.index()].prev = id,
            None => self.tail = id,
        }
        id
    }

    /// Insert a chunk right before `anchor`.
    pub fn add_before(&mut self, anchor: ChunkId, chunk: Chunk) -> ChunkId {
        let id = self.alloc(chunk);
        let prev = self.links[anchor.index()].prev;
        self.links[id.index()] = Links { prev, next: anchor };
        self.links[anchor.index()].prev = id;
        match valid(prev) {
            Some(prev) => self.links[prev.index()].next = id,
            None => self.head = id,
        }
        id
    }

    /// Unlink a chunk. Its slot stays in the arena but is no longer reachable.
    pub fn remove(&mut self, id: ChunkId) {
        let Links { prev, next } = self.links[id.index()];
        match valid(prev) {
            Some(prev) => self.links[prev.index()].next = next,
            None => self.head = next,
        }
        match valid(next) {
            Some(next) => self.links[next.index()].prev = prev,
            None => self.tail = prev,
        }
        self.links[id.index()] = Links {
            prev: ChunkId::INVALID,
            next: ChunkId::INVALID,
        };
        self.len -= 1;
    }

    // ─── Navigation ───

    #[inline]
    pub fn next(&self, id: ChunkId) -> Option<ChunkId> {
        valid(self.links[id.index()].next)
    }

    #[inline]
    pub fn prev(&self, id: ChunkId) -> Option<ChunkId> {
        valid(self.links[id.index()].prev)
    }

    fn search(&self, from: ChunkId, dir: Dir, skip: impl Fn(&Chunk) -> bool) -> Option<ChunkId> {
        let step = |id| match dir {
            Dir::Forward => self.next(id),
            Dir::Backward => self.prev(id),
        };
        let mut cur = step(from);
        while let Some(id) = cur {
            if !skip(&self.chunks[id.index()]) {
                return Some(id);
            }
            cur = step(id);
        }
        None
    }

    /// Next chunk that is not a comment.
    pub fn next_nc(&self, id: ChunkId) -> Option<ChunkId> {
        self.search(id, Dir::Forward, |c| c.kind.is_comment())
    }

    pub fn prev_nc(&self, id: ChunkId) -> Option<ChunkId> {
        self.search(id, Dir::Backward, |c| c.kind.is_comment())
    }

    /// Next chunk that is not a newline.
    pub fn next_nnl(&self, id: ChunkId) -> Option<ChunkId> {
        self.search(id, Dir::Forward, |c| c.kind.is_newline())
    }

    pub fn prev_nnl(&self, id: ChunkId) -> Option<ChunkId> {
        self.search(id, Dir::Backward, |c| c.kind.is_newline())
    }

    /// Next chunk that is neither a comment nor a newline.
    pub fn next_ncnl(&self, id: ChunkId) -> Option<ChunkId> {
        self.search(id, Dir::Forward, |c| c.kind.is_comment_or_newline())
    }

    pub fn prev_ncnl(&self, id: ChunkId) -> Option<ChunkId> {
        self.search(id, Dir::Backward, |c| c.kind.is_comment_or_newline())
    }

    /// Closest earlier chunk outside any preprocessor line.
    pub fn prev_non_pp(&self, id: ChunkId) -> Option<ChunkId> {
        self.search(id, Dir::Backward, Chunk::in_preproc)
    }

    pub fn next_of_kind(&self, id: ChunkId, kind: TokenKind) -> Option<ChunkId> {
        self.search(id, Dir::Forward, |c| c.kind != kind)
    }

    pub fn prev_of_kind(&self, id: ChunkId, kind: TokenKind) -> Option<ChunkId> {
        self.search(id, Dir::Backward, |c| c.kind != kind)
    }

    /// The chunk closing the opener `open`: the first later chunk of the
    /// inverse kind at the opener's level.
    pub fn matching_close(&self, open: ChunkId) -> Option<ChunkId> {
        let opener = &self.chunks[open.index()];
        if !opener.kind.is_opener() {
            return None;
        }
        let want = opener.kind.inverse();
        let level = opener.level;
        self.search(open, Dir::Forward, |c| c.kind != want || c.level != level)
    }

    /// Kind of a chunk, or `TokenKind::None` for no chunk.
    #[inline]
    pub fn kind_of(&self, id: Option<ChunkId>) -> TokenKind {
        id.map_or(TokenKind::None, |id| self.chunks[id.index()].kind)
    }

    /// Linked chunks in list order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.head(),
        }
    }

    /// IDs of the linked chunks in list order.
    pub fn ids(&self) -> Vec<ChunkId> {
        self.iter().map(|(id, _)| id).collect()
    }
}

#[inline]
fn valid(id: ChunkId) -> Option<ChunkId> {
    id.is_valid().then_some(id)
}

/// Iterator over `(ChunkId, &Chunk)` in list order.
pub struct Iter<'a> {
    list: &'a ChunkList,
    cur: Option<ChunkId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (ChunkId, &'a Chunk);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        self.cur = self.list.next(id);
        Some((id, &self.list.chunks[id.index()]))
    }
}

impl Index<ChunkId> for ChunkList {
    type Output = Chunk;

    #[inline]
    fn index(&self, id: ChunkId) -> &Chunk {
        &self.chunks[id.index()]
    }
}

impl IndexMut<ChunkId> for ChunkList {
    #[inline]
    fn index_mut(&mut self, id: ChunkId) -> &mut Chunk {
        &mut self.chunks[id.index()]
    }
}

impl FromIterator<Chunk> for ChunkList {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        let mut list = ChunkList::new();
        for chunk in iter {
            list.push_back(chunk);
        }
        list
    }
}
