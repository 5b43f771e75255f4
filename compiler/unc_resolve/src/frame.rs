//! The parse frame: open constructs plus the running nesting counters.

use smallvec::SmallVec;
use unc_ir::{BraceStage, TokenKind};

/// Most entries a frame's paren stack holds.
pub const MAX_PAREN_DEPTH: usize = 128;

/// One open construct: a bracket, a virtual brace, or a statement keyword
/// still going through its pattern.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParenStackEntry {
    /// Kind of the chunk that opened the entry.
    pub kind: TokenKind,
    /// Parent kind given to the opener, copied to its closer.
    pub parent: TokenKind,
    pub stage: BraceStage,
    /// Frame level right after the push.
    pub level: u32,
    pub brace_level: u32,
    pub open_line: u32,
    pub pp_level: u32,
    pub in_preproc: bool,
    pub ns_count: u32,
    pub non_vardef: bool,
}

/// Base entry under every stack.
const SENTINEL: ParenStackEntry = ParenStackEntry {
    kind: TokenKind::None,
    parent: TokenKind::None,
    stage: BraceStage::None,
    level: 0,
    brace_level: 0,
    open_line: 0,
    pp_level: 0,
    in_preproc: false,
    ns_count: 0,
    non_vardef: false,
};

/// The resolver's mutable state at one point of the scan.
///
/// `entries[0]` is a sentinel with kind `NONE` that is never popped, so the
/// top of the stack always exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFrame {
    entries: SmallVec<[ParenStackEntry; 16]>,
    pub level: u32,
    pub brace_level: u32,
    /// Openers counted in `level` whose push was refused because the stack
    /// was full. Closers consume these first.
    pub overflow: u32,
    /// Open `if`/`for`/`while` parens.
    pub sparen_count: u32,
    /// Chunks since the current statement started.
    pub stmt_count: u32,
    /// Chunks since the current expression started.
    pub expr_count: u32,
    /// Branch of the innermost preprocessor conditional: `PP_IF`,
    /// `PP_ELSE`, or `NONE`.
    pub in_ifdef: TokenKind,
    /// Serial number given when the frame was last saved.
    pub ref_no: u32,
}

impl Default for ParseFrame {
    fn default() -> Self {
        let mut entries = SmallVec::new();
        entries.push(SENTINEL);
        ParseFrame {
            entries,
            level: 0,
            brace_level: 0,
            overflow: 0,
            sparen_count: 0,
            stmt_count: 0,
            expr_count: 0,
            in_ifdef: TokenKind::None,
            ref_no: 0,
        }
    }
}

impl ParseFrame {
    pub fn new() -> Self {
        ParseFrame::default()
    }

    /// Blank frame for a `#define` body: one level in, with a `PP_DEFINE`
    /// placeholder that stray closers in the body are not reported against.
    pub fn for_define() -> Self {
        let mut frame = ParseFrame {
            level: 1,
            brace_level: 1,
            ..ParseFrame::default()
        };
        frame.entries.push(ParenStackEntry {
            kind: TokenKind::PpDefine,
            level: 1,
            brace_level: 1,
            in_preproc: true,
            ..ParenStackEntry::default()
        });
        frame
    }

    /// Push an entry. Returns `false` and leaves the stack unchanged when it
    /// is full.
    #[must_use]
    pub fn push(&mut self, entry: ParenStackEntry) -> bool {
        if self.depth() >= MAX_PAREN_DEPTH {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Pop the top entry. The sentinel is never popped.
    pub fn pop(&mut self) -> Option<ParenStackEntry> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    #[inline]
    pub fn top(&self) -> &ParenStackEntry {
        &self.entries[self.entries.len() - 1]
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut ParenStackEntry {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// The entry just below the top, if any.
    pub fn prev(&self) -> Option<&ParenStackEntry> {
        self.entries.len().checked_sub(2).map(|idx| &self.entries[idx])
    }

    /// Number of entries above the sentinel.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depth() == 0
    }

    /// Entries below the top, innermost first. Excludes the sentinel.
    pub fn below_top(&self) -> impl Iterator<Item = &ParenStackEntry> {
        let end = self.entries.len().saturating_sub(1);
        self.entries[1..end.max(1)].iter().rev()
    }

    /// Open entries, outermost first. Excludes the sentinel.
    pub fn entries(&self) -> &[ParenStackEntry] {
        &self.entries[1..]
    }

    /// Compact form for trace output: `[IF-Brace2] [BRACE_OPEN]`.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for entry in self.entries() {
            if !out.is_empty() {
                out.push(' ');
            }
            if entry.stage == BraceStage::None {
                out.push_str(&format!("[{}]", entry.kind));
            } else {
                out.push_str(&format!("[{}-{:?}]", entry.kind, entry.stage));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests;
