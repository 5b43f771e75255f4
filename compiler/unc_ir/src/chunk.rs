//! The chunk: one lexical token plus its resolved structure.

use crate::{ChunkFlags, ChunkText, TokenKind};

/// One token of the source and everything the analysis learned about it.
///
/// The tokenizer fills the kind, text and position fields. The resolver
/// fills `parent_kind`, the three levels, and most flags.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Chunk {
    pub kind: TokenKind,
    /// Kind of the construct this chunk belongs to.
    pub parent_kind: TokenKind,
    pub text: ChunkText,
    /// 1-based source line of the first code point.
    pub orig_line: u32,
    /// 1-based source column of the first code point.
    pub orig_col: u32,
    /// Source column just past the last code point.
    pub orig_col_end: u32,
    /// Width of the whitespace preceding the chunk on its line.
    pub orig_prev_sp: u32,
    /// Output column, owned by later passes. Starts at `orig_col`.
    pub column: u32,
    /// Number of line breaks in a newline chunk.
    pub nl_count: u32,
    /// The whitespace before this chunk ended with a tab.
    pub after_tab: bool,
    /// Nesting depth counting every bracket kind.
    pub level: u32,
    /// Nesting depth counting braces only.
    pub brace_level: u32,
    /// Depth of enclosing preprocessor conditionals.
    pub pp_level: u32,
    pub flags: ChunkFlags,
}

impl Chunk {
    pub fn new(kind: TokenKind, text: impl Into<ChunkText>) -> Self {
        Chunk {
            kind,
            text: text.into(),
            ..Chunk::default()
        }
    }

    /// A synthesized chunk with no source text.
    pub fn virtual_of(kind: TokenKind) -> Self {
        Chunk {
            kind,
            ..Chunk::default()
        }
    }

    /// Take over position, levels and inheritable flags from `other`.
    pub fn inherit_from(&mut self, other: &Chunk) {
        self.orig_line = other.orig_line;
        self.orig_col = other.orig_col;
        self.orig_col_end = other.orig_col_end;
        self.column = other.column;
        self.level = other.level;
        self.brace_level = other.brace_level;
        self.pp_level = other.pp_level;
        self.flags |= other.flags.inherited();
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.kind.is_virtual()
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Text equals `s` exactly.
    #[inline]
    pub fn is_str(&self, s: &str) -> bool {
        self.text.eq_str(s)
    }

    #[inline]
    pub fn in_preproc(&self) -> bool {
        self.flags.contains(ChunkFlags::IN_PREPROC)
    }
}
