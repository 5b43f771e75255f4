//! The lexeme dispatcher.
//!
//! [`Scanner`] owns the cursor of one run and tries the recognizers in a
//! fixed order. The first one that accepts the input consumes it. Each
//! recognizer lives in its own module as an `impl Scanner` block and returns
//! the kind it produced, or `None` with the cursor left where it was.
//!
//! # Invariant
//!
//! Every lexeme returned by [`Scanner::next_lexeme`] covers at least one
//! code point, so a run always terminates.

use unc_diagnostic::{Diagnostic, ErrorCode};
use unc_ir::{ChunkFlags, LangFlags, OptionKey, TokenKind};
use unc_lexer_core::char_class::{is_dec_digit, is_keyword_start, is_space};
use unc_lexer_core::Cursor;

use crate::context::LineEndings;
use crate::punctuators::{find_punctuator, MAX_PUNCTUATOR_LEN};
use crate::LexerContext;

/// One recognized lexeme, located in the source.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Lexeme {
    pub kind: TokenKind,
    pub flags: ChunkFlags,
    /// Code-point range in the source.
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub col: u32,
    /// Column just past the last code point.
    pub end_col: u32,
    pub nl_count: u32,
    /// The last consumed code point was a tab.
    pub ends_with_tab: bool,
}

pub(crate) struct Scanner<'src, 'ctx, 'cfg> {
    pub(crate) cursor: Cursor<'src>,
    pub(crate) ctx: &'ctx mut LexerContext<'cfg>,
    /// Kind of the last lexeme that was not plain whitespace.
    pub(crate) tail_kind: TokenKind,
}

impl<'src, 'ctx, 'cfg> Scanner<'src, 'ctx, 'cfg> {
    pub(crate) fn new(source: &'src [char], ctx: &'ctx mut LexerContext<'cfg>) -> Self {
        let tab_size = ctx.settings.get_num(OptionKey::InputTabSize);
        Scanner {
            cursor: Cursor::new(source, tab_size),
            ctx,
            tail_kind: TokenKind::None,
        }
    }

    /// Recognize and consume the next lexeme. `None` at the end of input.
    pub(crate) fn next_lexeme(&mut self) -> Option<Lexeme> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let (line, col) = (self.cursor.row(), self.cursor.col());

        let (kind, flags) = match self.scan() {
            Some(kind) => (kind, ChunkFlags::empty()),
            None => self.punctuator_or_unknown(line, col),
        };
        debug_assert!(self.cursor.pos() > start, "recognizer consumed nothing");

        let nl_count = tally_line_breaks(self.cursor.slice_from(start), &mut self.ctx.line_endings);
        if kind != TokenKind::Whitespace {
            self.tail_kind = kind;
        }
        Some(Lexeme {
            kind,
            flags,
            start,
            end: self.cursor.pos(),
            line,
            col,
            end_col: self.cursor.col(),
            nl_count,
            ends_with_tab: self.cursor.last() == '\t',
        })
    }

    #[inline]
    pub(crate) fn is_lang(&self, lang: LangFlags) -> bool {
        self.ctx.is_lang(lang)
    }

    /// Queue a diagnostic at a source position.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.ctx.diagnostics.push(diagnostic);
    }

    // ─── Dispatch ───

    fn scan(&mut self) -> Option<TokenKind> {
        if self.ctx.suppressed {
            if let Some(kind) = self.ignored() {
                return Some(kind);
            }
        }
        if let Some(kind) = self.whitespace() {
            return Some(kind);
        }
        if self.ctx.is_preproc.has_opaque_body() {
            if let Some(kind) = self.preproc_body() {
                return Some(kind);
            }
        }
        if let Some(kind) = self.line_continuation() {
            return Some(kind);
        }
        if let Some(kind) = self.comment() {
            return Some(kind);
        }
        if let Some(kind) = self.code_placeholder() {
            return Some(kind);
        }
        if let Some(kind) = self.language_literal() {
            return Some(kind);
        }
        if let Some(kind) = self.number() {
            return Some(kind);
        }
        if let Some(kind) = self.plain_string() {
            return Some(kind);
        }
        if let Some(kind) = self.at_literal() {
            return Some(kind);
        }
        self.identifier()
    }

    fn punctuator_or_unknown(&mut self, line: u32, col: u32) -> (TokenKind, ChunkFlags) {
        let source = self.cursor.source();
        let start = self.cursor.pos();
        let window = &source[start..source.len().min(start + MAX_PUNCTUATOR_LEN)];
        let digraphs = self.ctx.settings.get_bool(OptionKey::EnableDigraphs);
        if let Some(punc) = find_punctuator(window, self.ctx.lang, digraphs) {
            self.cursor.bump_n(punc.text.chars().count());
            return (punc.kind, ChunkFlags::PUNCTUATOR);
        }

        let ch = self.cursor.bump();
        self.report(
            Diagnostic::error(ErrorCode::U0001)
                .at(line, col)
                .with_message(format!("garbage character {ch:?}")),
        );
        (TokenKind::Unknown, ChunkFlags::empty())
    }

    // ─── Layout ───

    /// A run of blanks and line breaks.
    fn whitespace(&mut self) -> Option<TokenKind> {
        let start = self.cursor.pos();
        let mut newlines = 0;
        loop {
            match self.cursor.peek() {
                '\r' => {
                    self.cursor.bump();
                    self.cursor.eat('\n');
                    newlines += 1;
                }
                '\n' => {
                    self.cursor.bump();
                    newlines += 1;
                }
                ch if is_space(ch) => {
                    self.cursor.bump();
                }
                _ => break,
            }
        }
        if self.cursor.pos() == start {
            None
        } else if newlines > 0 {
            Some(TokenKind::Newline)
        } else {
            Some(TokenKind::Whitespace)
        }
    }

    /// Backslash, optional blanks, line break.
    fn line_continuation(&mut self) -> Option<TokenKind> {
        if self.cursor.peek() != '\\' || !self.escapes_line_break() {
            return None;
        }
        self.cursor.bump();
        while is_space(self.cursor.peek()) {
            self.cursor.bump();
        }
        if self.cursor.bump() == '\r' {
            self.cursor.eat('\n');
        }
        Some(TokenKind::NlCont)
    }

    /// Rest of a `#pragma`, `#region` or unknown directive line.
    ///
    /// Stops before a `//` comment and before a backslash that escapes the
    /// line break, so the continuation becomes its own chunk.
    fn preproc_body(&mut self) -> Option<TokenKind> {
        let start = self.cursor.pos();
        while self.cursor.more() {
            match self.cursor.peek() {
                '\n' | '\r' => break,
                '/' if self.cursor.peek_at(1) == '/' => break,
                '\\' if self.escapes_line_break() => break,
                _ => {
                    self.cursor.bump();
                }
            }
        }
        (self.cursor.pos() > start).then_some(TokenKind::PreprocBody)
    }

    /// The backslash under the cursor is followed by blanks and a line break.
    fn escapes_line_break(&self) -> bool {
        let mut n = 1;
        while is_space(self.cursor.peek_at(n)) {
            n += 1;
        }
        matches!(self.cursor.peek_at(n), '\n' | '\r')
    }

    /// Xcode `<#placeholder#>`.
    fn code_placeholder(&mut self) -> Option<TokenKind> {
        if !self.cursor.peek_str("<#") {
            return None;
        }
        let mark = self.cursor.save();
        self.cursor.bump_n(2);
        while self.cursor.more() {
            let ch = self.cursor.bump();
            let text = self.cursor.slice_from(mark.pos());
            if ch == '>' && text.len() >= 4 && text.ends_with(&['#', '>']) {
                return Some(TokenKind::Word);
            }
        }
        self.cursor.restore(mark);
        None
    }

    // ─── Words ───

    /// Identifier or keyword, including `\u` escapes and `@word` forms.
    fn identifier(&mut self) -> Option<TokenKind> {
        let ch = self.cursor.peek();
        let next = self.cursor.peek_at(1);
        let starts_word = is_keyword_start(ch)
            || (ch == '\\' && next.eq_ignore_ascii_case(&'u'))
            || (ch == '@' && is_keyword_start(next));
        if !starts_word || self.cursor.is_eof() {
            return None;
        }
        Some(self.word(false))
    }

    /// `@"..."` strings and `@123` boxed numbers (Objective-C, Vala).
    fn at_literal(&mut self) -> Option<TokenKind> {
        if !self.is_lang(LangFlags::OC | LangFlags::VALA) || self.cursor.peek() != '@' {
            return None;
        }
        let next = self.cursor.peek_at(1);
        if next == '"' || next == '\'' {
            return Some(self.string(1, true));
        }
        if is_dec_digit(next) {
            let mark = self.cursor.save();
            self.cursor.bump();
            if let Some(kind) = self.number() {
                return Some(kind);
            }
            self.cursor.restore(mark);
        }
        None
    }
}

/// Count line breaks in `text` (`\r\n` counts once) and tally their style.
pub(crate) fn tally_line_breaks(text: &[char], endings: &mut LineEndings) -> u32 {
    let mut count = 0;
    let mut iter = text.iter().peekable();
    while let Some(&ch) = iter.next() {
        match ch {
            '\r' if iter.peek() == Some(&&'\n') => {
                iter.next();
                endings.crlf += 1;
                count += 1;
            }
            '\r' => {
                endings.cr += 1;
                count += 1;
            }
            '\n' => {
                endings.lf += 1;
                count += 1;
            }
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests;
