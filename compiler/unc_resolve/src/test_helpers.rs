//! Shared fixtures for the resolver tests.

use unc_diagnostic::ErrorCode;
use unc_ir::{Chunk, ChunkList, LangFlags, Settings, TokenKind};
use unc_lexer::{tokenize, tokenize_cleanup, KeywordTable, LexerContext};

use crate::{brace_cleanup, ResolveError, ResolverContext};

/// Result of tokenizing and resolving one source.
pub(crate) struct Resolved {
    pub list: ChunkList,
    pub result: Result<(), ResolveError>,
    pub errors: usize,
    pub codes: Vec<ErrorCode>,
}

impl Resolved {
    pub fn chunks(&self) -> Vec<&Chunk> {
        self.list.iter().map(|(_, chunk)| chunk).collect()
    }

    /// Kinds of every chunk that is not a newline or comment.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.list
            .iter()
            .filter(|(_, chunk)| !chunk.kind.is_comment_or_newline())
            .map(|(_, chunk)| chunk.kind)
            .collect()
    }

    /// The first chunk with this text.
    pub fn find(&self, text: &str) -> &Chunk {
        self.find_nth(text, 0)
    }

    pub fn find_nth(&self, text: &str, nth: usize) -> &Chunk {
        self.list
            .iter()
            .map(|(_, chunk)| chunk)
            .filter(|chunk| chunk.is_str(text))
            .nth(nth)
            .unwrap_or_else(|| panic!("no chunk {text:?} #{nth}"))
    }

    /// Every chunk of this kind, in list order.
    pub fn of_kind(&self, kind: TokenKind) -> Vec<&Chunk> {
        self.list
            .iter()
            .map(|(_, chunk)| chunk)
            .filter(|chunk| chunk.is(kind))
            .collect()
    }
}

pub(crate) fn resolve(source: &str, lang: LangFlags) -> Resolved {
    resolve_with(source, lang, &Settings::new())
}

pub(crate) fn resolve_with(source: &str, lang: LangFlags, settings: &Settings) -> Resolved {
    let keywords = KeywordTable::new();
    let chars: Vec<char> = source.chars().collect();
    let mut lexer = LexerContext::new(lang, settings, &keywords);
    let mut list = tokenize(&chars, &mut lexer);
    tokenize_cleanup(&mut list, lang);

    let mut ctx = ResolverContext::new(lang, settings).with_suppression_used(lexer.suppression_used());
    let result = brace_cleanup(&mut list, &mut ctx);
    Resolved {
        list,
        result,
        errors: ctx.diagnostics.error_count(),
        codes: ctx.diagnostics.iter().map(|diagnostic| diagnostic.code).collect(),
    }
}
