//! Shared fixtures for the tokenizer tests.

use unc_ir::{Chunk, ChunkList, LangFlags, Settings, TokenKind};

use crate::{lex_raw, tokenize, KeywordTable, LexerContext, LineEndings};

/// Result of one tokenizer run, detached from its context.
pub(crate) struct Lexed {
    pub list: ChunkList,
    pub errors: usize,
    pub warnings: usize,
    pub suppression_used: bool,
    pub suppressed: bool,
    pub endings: LineEndings,
}

impl Lexed {
    pub fn chunks(&self) -> Vec<&Chunk> {
        self.list.iter().map(|(_, chunk)| chunk).collect()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.list.iter().map(|(_, chunk)| chunk.kind).collect()
    }

    /// Kind and text of every chunk that is not a newline.
    pub fn code(&self) -> Vec<(TokenKind, String)> {
        self.list
            .iter()
            .filter(|(_, chunk)| !chunk.kind.is_newline())
            .map(|(_, chunk)| (chunk.kind, chunk.text.to_string()))
            .collect()
    }

    /// The first chunk with this text.
    pub fn find(&self, text: &str) -> &Chunk {
        self.list
            .iter()
            .map(|(_, chunk)| chunk)
            .find(|chunk| chunk.is_str(text))
            .unwrap_or_else(|| panic!("no chunk {text:?}"))
    }
}

pub(crate) fn chars(source: &str) -> Vec<char> {
    source.chars().collect()
}

pub(crate) fn lex(source: &str, lang: LangFlags) -> Lexed {
    lex_with(source, lang, &Settings::new(), &KeywordTable::new())
}

pub(crate) fn lex_with(source: &str, lang: LangFlags, settings: &Settings, keywords: &KeywordTable) -> Lexed {
    let mut ctx = LexerContext::new(lang, settings, keywords);
    let list = tokenize(&chars(source), &mut ctx);
    Lexed {
        list,
        errors: ctx.diagnostics.error_count(),
        warnings: ctx.diagnostics.warning_count(),
        suppression_used: ctx.suppression_used(),
        suppressed: ctx.is_suppressed(),
        endings: ctx.line_endings(),
    }
}

/// `tokenize_cleanup` applied to a tokenized source.
pub(crate) fn lex_clean(source: &str, lang: LangFlags) -> Lexed {
    let mut lexed = lex(source, lang);
    crate::tokenize_cleanup(&mut lexed.list, lang);
    lexed
}

pub(crate) fn raw(source: &str, lang: LangFlags) -> Vec<Chunk> {
    let settings = Settings::new();
    let keywords = KeywordTable::new();
    let mut ctx = LexerContext::new(lang, &settings, &keywords);
    lex_raw(&chars(source), &mut ctx)
}

/// Concatenated text of raw chunks.
pub(crate) fn joined(chunks: &[Chunk]) -> String {
    chunks.iter().map(|chunk| chunk.text.to_string()).collect()
}
