//! Chunk and language flag sets.
//!
//! `ChunkFlags` carries the per-chunk semantic markers shared between the
//! tokenizer, the resolver and every later pass. `LangFlags` selects the
//! source language and tags keyword and punctuator table entries.
//!
//! # Design
//!
//! Flags are organized into two halves:
//! - **Context flags** (bits 0-15): where a chunk sits. A chunk created
//!   next to another one inherits these (`COPY_ON_INSERT`).
//! - **Role flags** (bits 16+): what a chunk is. Never inherited.

use std::path::Path;

use bitflags::bitflags;

bitflags! {
    /// Semantic markers attached to a chunk.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ChunkFlags: u64 {
        // === Context Flags (bits 0-15) ===

        /// Inside a preprocessor line.
        const IN_PREPROC = 1 << 0;
        /// Inside a struct body.
        const IN_STRUCT = 1 << 1;
        /// Inside an enum body.
        const IN_ENUM = 1 << 2;
        /// Inside function definition parentheses.
        const IN_FCN_DEF = 1 << 3;
        /// Inside function call parentheses.
        const IN_FCN_CALL = 1 << 4;
        /// Inside `for`/`if`/`while`/`switch` parentheses.
        const IN_SPAREN = 1 << 5;
        const IN_TEMPLATE = 1 << 6;
        const IN_TYPEDEF = 1 << 7;
        const IN_CONST_ARGS = 1 << 8;
        const IN_ARRAY_ASSIGN = 1 << 9;
        const IN_CLASS = 1 << 10;
        const IN_CLASS_BASE = 1 << 11;
        const IN_NAMESPACE = 1 << 12;
        /// Inside the parentheses of a `for` statement.
        const IN_FOR = 1 << 13;
        /// Inside an Objective-C message send.
        const IN_OC_MSG = 1 << 14;

        // === Role Flags (bits 16+) ===

        /// Must have a space after this chunk.
        const FORCE_SPACE = 1 << 16;
        /// First chunk of a statement.
        const STMT_START = 1 << 17;
        /// First chunk of an expression.
        const EXPR_START = 1 << 18;
        const DONT_INDENT = 1 << 19;
        const ALIGN_START = 1 << 20;
        const WAS_ALIGNED = 1 << 21;
        /// Part of a variable definition type.
        const VAR_TYPE = 1 << 22;
        /// Variable name in a variable definition.
        const VAR_DEF = 1 << 23;
        /// First variable definition in a statement.
        const VAR_1ST = 1 << 24;
        /// The type was an inline struct/enum/union.
        const VAR_INLINE = 1 << 25;
        const RIGHT_COMMENT = 1 << 26;
        const OLD_FCN_PARAMS = 1 << 27;
        /// Left of an assignment.
        const LVALUE = 1 << 28;
        const ONE_LINER = 1 << 29;
        const EMPTY_BODY = 1 << 30;
        const ANCHOR = 1 << 31;
        /// Produced by the punctuator table.
        const PUNCTUATOR = 1 << 32;
        /// Synthesized, not read from the source.
        const INSERTED = 1 << 33;
        const LONG_BLOCK = 1 << 34;
        const OC_BOXED = 1 << 35;
        const KEEP_BRACE = 1 << 36;
        const OC_RTYPE = 1 << 37;
        const OC_ATYPE = 1 << 38;
        /// `#endif` closing a whole-file guard.
        const WF_ENDIF = 1 << 39;
        /// Inside a Qt macro such as `SIGNAL(...)`.
        const IN_QT_MACRO = 1 << 40;
    }
}

impl ChunkFlags {
    /// Flags a newly created chunk takes over from its neighbour.
    pub const COPY_ON_INSERT: ChunkFlags = ChunkFlags::from_bits_retain(0xffff);

    /// The inheritable subset of `self`.
    #[inline]
    pub const fn inherited(self) -> ChunkFlags {
        self.intersection(Self::COPY_ON_INSERT)
    }
}

bitflags! {
    /// Source language selection and table-entry language tags.
    ///
    /// A table entry matches when its language bits intersect the active
    /// language. `DIGRAPH` and `PP_ONLY` are table markers, never part of
    /// an active language.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct LangFlags: u32 {
        const C = 0x0001;
        const CPP = 0x0002;
        const D = 0x0004;
        const CS = 0x0008;
        const JAVA = 0x0010;
        const OC = 0x0020;
        const VALA = 0x0040;
        const PAWN = 0x0080;
        const ECMA = 0x0100;

        /// Entry is a digraph or trigraph punctuator.
        const DIGRAPH = 0x4000;
        /// Keyword only valid on a (non-`#define`) preprocessor line.
        const PP_ONLY = 0x8000;
    }
}

impl LangFlags {
    /// Every language.
    pub const ALL: LangFlags = LangFlags::from_bits_retain(0x0fff);

    /// Parse a language name as accepted on the command line.
    pub fn from_lang_name(name: &str) -> Option<LangFlags> {
        let lang = match name.to_ascii_lowercase().as_str() {
            "c" => LangFlags::C,
            "cpp" | "c++" => LangFlags::CPP,
            "d" => LangFlags::D,
            "cs" | "c#" => LangFlags::CS,
            "java" => LangFlags::JAVA,
            "oc" | "objc" => LangFlags::OC,
            "oc+" | "objc++" => LangFlags::OC | LangFlags::CPP,
            "vala" => LangFlags::VALA,
            "pawn" => LangFlags::PAWN,
            "ecma" | "js" => LangFlags::ECMA,
            _ => return None,
        };
        Some(lang)
    }

    /// Language of a file extension (without the dot), if known.
    pub fn from_extension(ext: &str) -> Option<LangFlags> {
        let lang = match ext {
            "c" | "sqc" => LangFlags::C,
            "cpp" | "cc" | "cxx" | "c++" | "h" | "hh" | "hpp" | "hxx" | "cu" | "cuh" => {
                LangFlags::CPP
            }
            "d" | "di" => LangFlags::D,
            "cs" => LangFlags::CS,
            "vala" | "vapi" => LangFlags::VALA,
            "java" => LangFlags::JAVA,
            "pawn" | "p" | "sma" | "inc" | "inl" => LangFlags::PAWN,
            "m" => LangFlags::OC,
            "mm" => LangFlags::OC | LangFlags::CPP,
            "es" | "js" => LangFlags::ECMA,
            _ => return None,
        };
        Some(lang)
    }

    /// Language of a path by its extension, defaulting to C.
    pub fn from_filename(path: &Path) -> LangFlags {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(LangFlags::from_extension)
            .unwrap_or(LangFlags::C)
    }

    /// Whether a table entry tagged `self` applies to the active `lang`.
    #[inline]
    pub const fn applies_to(self, lang: LangFlags) -> bool {
        self.bits() & lang.bits() & Self::ALL.bits() != 0
    }

    /// Whether the entry is tagged preprocessor-only.
    #[inline]
    pub const fn is_pp_only(self) -> bool {
        self.contains(LangFlags::PP_ONLY)
    }
}

#[cfg(test)]
mod tests;
