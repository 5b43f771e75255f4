//! Tokenizer for the unc source analyzer.
//!
//! Turns decoded code points into a [`ChunkList`]. Two layers:
//! - the [`Scanner`](scanner) recognizes one lexeme at a time, trying the
//!   recognizers in a fixed order (comments, literals, numbers, words,
//!   punctuators);
//! - [`tokenize`] drives it, drops blank runs after recording them in the
//!   next chunk, and tracks preprocessor lines and suppressed regions.
//!
//! [`tokenize_cleanup`] then refines kinds that need a look at neighbouring
//! chunks (`[]`, templates, `operator`, ...) before structure is resolved.
//!
//! # Design
//!
//! Chunk text is always a slice of the input: recognizers only move the
//! cursor. [`lex_raw`] keeps every lexeme verbatim, so concatenating its
//! chunk texts reproduces the input exactly.

/// Union of language flags, usable in `const` table entries.
macro_rules! lang {
    ($first:ident $(| $rest:ident)*) => {
        unc_ir::LangFlags::$first$(.union(unc_ir::LangFlags::$rest))*
    };
}

mod cleanup;
mod comment;
mod context;
mod ignored;
mod keywords;
mod number;
mod punctuators;
mod scanner;
mod string;
#[cfg(test)]
mod test_helpers;
mod word;

use unc_ir::{Chunk, ChunkFlags, ChunkList, ChunkText, TokenKind};

pub use cleanup::tokenize_cleanup;
pub use context::{LexerContext, LineEndings};
pub use keywords::{is_sorted as keywords_sorted, lookup_static, static_keywords, Keyword, KeywordTable};
pub use punctuators::{find_punctuator, punctuators, Punctuator, MAX_PUNCTUATOR_LEN};

use scanner::{Lexeme, Scanner};

/// Tokenize `source` into chunks. Blank runs are not kept.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &[char], ctx: &mut LexerContext<'_>) -> ChunkList {
    let mut list = ChunkList::new();
    scan_chunks(source, ctx, false, |chunk| {
        list.push_back(chunk);
    });
    let endings = ctx.line_endings();
    tracing::debug!(
        chunks = list.len(),
        lf = endings.lf,
        crlf = endings.crlf,
        cr = endings.cr,
        suppressed = ctx.is_suppressed(),
        "tokenized"
    );
    list
}

/// Tokenize `source` keeping every lexeme as it appears in the input,
/// blank runs included, with untrimmed text.
pub fn lex_raw(source: &[char], ctx: &mut LexerContext<'_>) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    scan_chunks(source, ctx, true, |chunk| chunks.push(chunk));
    chunks
}

/// Text of a newline continuation once normalized.
const NL_CONT_TEXT: &str = "\\\n";

fn scan_chunks(source: &[char], ctx: &mut LexerContext<'_>, raw: bool, mut emit: impl FnMut(Chunk)) {
    let mut scanner = Scanner::new(source, ctx);
    let mut prev_sp = 0;
    let mut last_was_tab = false;
    let mut prev: Option<(TokenKind, ChunkFlags)> = None;

    while let Some(lexeme) = scanner.next_lexeme() {
        let mut chunk = chunk_of(&lexeme, source);
        if lexeme.kind == TokenKind::Whitespace {
            last_was_tab = lexeme.ends_with_tab;
            prev_sp = lexeme.end_col.saturating_sub(lexeme.col);
            if raw {
                emit(chunk);
            }
            continue;
        }
        chunk.orig_prev_sp = std::mem::take(&mut prev_sp);

        match lexeme.kind {
            TokenKind::Newline | TokenKind::NlCont => {
                last_was_tab = lexeme.ends_with_tab;
                if !raw {
                    chunk.text = if lexeme.kind == TokenKind::Newline {
                        ChunkText::new()
                    } else {
                        ChunkText::from(NL_CONT_TEXT)
                    };
                }
            }
            _ => chunk.after_tab = std::mem::take(&mut last_was_tab),
        }
        if !raw {
            chunk.text.trim_end_blanks();
        }

        if let Some((_, flags)) = prev {
            chunk.flags |= flags.inherited();
            if chunk.is(TokenKind::Newline) {
                chunk.flags.remove(ChunkFlags::IN_PREPROC);
            }
        }
        track_preproc(&mut chunk, prev.map(|(kind, _)| kind), scanner.ctx);

        prev = Some((chunk.kind, chunk.flags));
        emit(chunk);
    }
}

fn chunk_of(lexeme: &Lexeme, source: &[char]) -> Chunk {
    let mut chunk = Chunk::new(
        lexeme.kind,
        ChunkText::from_chars(&source[lexeme.start..lexeme.end]),
    );
    chunk.orig_line = lexeme.line;
    chunk.orig_col = lexeme.col;
    chunk.orig_col_end = lexeme.end_col;
    chunk.column = lexeme.col;
    chunk.nl_count = lexeme.nl_count;
    chunk.flags = lexeme.flags;
    chunk
}

/// Follow preprocessor lines: a `#` first on its line starts one, the word
/// after it names the directive, and a newline ends it.
fn track_preproc(chunk: &mut Chunk, prev_kind: Option<TokenKind>, ctx: &mut LexerContext<'_>) {
    if chunk.is(TokenKind::Newline) {
        ctx.end_preproc();
    }
    if chunk.is(TokenKind::PpAsm) {
        tracing::debug!(line = chunk.orig_line, "asm block, processing disabled");
        ctx.suppressed = true;
    }

    if ctx.is_preproc == TokenKind::None {
        let line_start = matches!(prev_kind, None | Some(TokenKind::Newline));
        if chunk.is(TokenKind::Pound) && line_start {
            chunk.kind = TokenKind::Preproc;
            chunk.flags |= ChunkFlags::IN_PREPROC;
            ctx.is_preproc = TokenKind::Preproc;
        }
        return;
    }

    chunk.flags |= ChunkFlags::IN_PREPROC;
    if !chunk.kind.is_comment_or_newline() {
        ctx.preproc_ncnl_count += 1;
    }
    if ctx.is_preproc == TokenKind::PpPragma && chunk.text.starts_with("asm") {
        tracing::debug!(line = chunk.orig_line, "pragma asm, processing disabled");
        ctx.suppressed = true;
    }
    if ctx.is_preproc == TokenKind::Preproc {
        if !chunk.kind.is_pp_directive() {
            chunk.kind = TokenKind::PpOther;
        }
        tracing::trace!(line = chunk.orig_line, directive = %chunk.kind, "preprocessor line");
        ctx.is_preproc = chunk.kind;
    }
}

#[cfg(test)]
mod tests;
