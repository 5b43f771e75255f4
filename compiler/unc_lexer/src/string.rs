//! String and character literal recognizers.
//!
//! Every language has its own set of literal forms. The ones introduced by
//! a prefix (`u8R"..."`, `@"..."`, `$"..."`, `\"...`) are tried before
//! numbers; the plain quoted forms after.

use unc_ir::{LangFlags, OptionKey, TokenKind};
use unc_lexer_core::char_class::{is_dec_digit, is_keyword_char, is_keyword_start, is_oct_digit, is_space};

use crate::scanner::Scanner;

/// Closing delimiter of a string opened by `open`.
fn closing_quote(open: char) -> char {
    if open == '<' {
        '>'
    } else {
        open
    }
}

impl Scanner<'_, '_, '_> {
    /// Literal forms that start with a language-specific prefix.
    pub(crate) fn language_literal(&mut self) -> Option<TokenKind> {
        let ch = self.cursor.peek();
        let next = self.cursor.peek_at(1);

        if self.is_lang(LangFlags::CS) {
            if ch == '@' && next == '"' {
                return Some(self.verbatim_string());
            }
            if ch == '@' && is_keyword_start(next) {
                return Some(self.word(true));
            }
            if ch == '$' && next == '"' {
                return Some(self.interpolated_string());
            }
        }

        if self.is_lang(LangFlags::VALA) && self.cursor.peek_str("\"\"\"") {
            return Some(self.triple_quoted_string());
        }

        if self.is_lang(LangFlags::CPP) && matches!(ch, 'u' | 'U' | 'R') {
            if let Some(kind) = self.prefixed_string() {
                return Some(kind);
            }
        }

        if self.is_lang(LangFlags::PAWN) {
            return self.pawn_literal();
        }
        None
    }

    /// Quoted forms without a language-specific prefix.
    pub(crate) fn plain_string(&mut self) -> Option<TokenKind> {
        if self.is_lang(LangFlags::D) {
            return self.d_string();
        }
        let ch = self.cursor.peek();
        let next = self.cursor.peek_at(1);
        let prefixed = (ch == 'L' || ch == 'S') && (next == '"' || next == '\'');
        if prefixed || ch == '"' || ch == '\'' {
            return Some(self.string(usize::from(prefixed), true));
        }
        if ch == '<' {
            match self.ctx.is_preproc {
                TokenKind::PpInclude => return Some(self.string(0, true)),
                // `#define X <...>` names a header.
                TokenKind::PpDefine if self.tail_kind == TokenKind::Macro => {
                    return Some(self.string(0, false));
                }
                _ => {}
            }
        }
        None
    }

    /// A quoted literal after `prefix_len` prefix characters.
    ///
    /// The closing quote is the one matching the opener. When
    /// `allow_escape` is set, the secondary escape character escapes a
    /// directly following closing quote.
    pub(crate) fn string(&mut self, prefix_len: usize, allow_escape: bool) -> TokenKind {
        let (line, col) = (self.cursor.row(), self.cursor.col());
        let escape = self.ctx.settings.get_char(OptionKey::StringEscapeChar);
        let escape2 = self.ctx.settings.get_char(OptionKey::StringEscapeChar2);

        self.cursor.bump_n(prefix_len);
        let end = closing_quote(self.cursor.bump());
        let mut kind = TokenKind::String;
        let mut escaped = false;
        let mut closed = false;
        while self.cursor.more() {
            let ch = self.cursor.bump();
            if ch == '\n' || (ch == '\r' && self.cursor.peek() != '\n') {
                kind = TokenKind::StringMulti;
                escaped = false;
                continue;
            }
            if escaped {
                escaped = false;
            } else if Some(ch) == escape {
                escaped = true;
            } else if Some(ch) == escape2 && self.cursor.peek() == end {
                escaped = allow_escape;
            } else if ch == end {
                closed = true;
                break;
            }
        }
        if !closed {
            self.unterminated("string", line, col);
        }
        self.suffix(true);
        kind
    }

    /// A user-defined literal suffix directly after a literal.
    ///
    /// After a string, `L"`/`L'`/`S"` start another literal, and a suffix
    /// of four or more characters starting with `PRI` or `SCN` is a format
    /// macro, not a suffix.
    pub(crate) fn suffix(&mut self, for_string: bool) {
        let ch = self.cursor.peek();
        if !is_keyword_start(ch) || self.cursor.is_eof() {
            return;
        }
        let next = self.cursor.peek_at(1);
        if for_string && ((ch == 'L' && (next == '"' || next == '\'')) || (ch == 'S' && next == '"')) {
            return;
        }
        let mark = self.cursor.save();
        while is_keyword_char(self.cursor.peek()) && self.cursor.more() {
            self.cursor.bump();
        }
        let suffix = self.cursor.slice_from(mark.pos());
        let format_macro = suffix.starts_with(&['P', 'R', 'I']) || suffix.starts_with(&['S', 'C', 'N']);
        if for_string && suffix.len() >= 4 && format_macro {
            self.cursor.restore(mark);
        }
    }

    // ─── C# ───

    /// `@"..."`: no escapes, `""` is a quote.
    fn verbatim_string(&mut self) -> TokenKind {
        let (line, col) = (self.cursor.row(), self.cursor.col());
        self.cursor.bump_n(2);
        let mut kind = TokenKind::String;
        while self.cursor.more() {
            match self.cursor.bump() {
                '\n' | '\r' => kind = TokenKind::StringMulti,
                '"' if !self.cursor.eat('"') => return kind,
                _ => {}
            }
        }
        self.unterminated("string", line, col);
        kind
    }

    /// `$"..."`: quotes inside `{...}` holes do not end the literal.
    fn interpolated_string(&mut self) -> TokenKind {
        let (line, col) = (self.cursor.row(), self.cursor.col());
        self.cursor.bump_n(2);
        let mut depth = 0u32;
        while self.cursor.more() {
            let ch = self.cursor.bump();
            if depth > 0 {
                if ch == '}' && !self.cursor.eat('}') {
                    depth -= 1;
                }
            } else if ch == '{' {
                if !self.cursor.eat('{') {
                    depth += 1;
                }
            } else if ch == '"' && !self.cursor.eat('"') {
                return TokenKind::String;
            }
        }
        self.unterminated("string", line, col);
        TokenKind::String
    }

    // ─── Vala ───

    /// `"""..."""`
    fn triple_quoted_string(&mut self) -> TokenKind {
        let (line, col) = (self.cursor.row(), self.cursor.col());
        self.cursor.bump_n(3);
        let mut kind = TokenKind::String;
        while self.cursor.more() {
            if self.cursor.peek_str("\"\"\"") {
                self.cursor.bump_n(3);
                return kind;
            }
            if matches!(self.cursor.bump(), '\n' | '\r') {
                kind = TokenKind::StringMulti;
            }
        }
        self.unterminated("string", line, col);
        kind
    }

    // ─── C++ ───

    /// `u8"..."`, `u"..."`, `U"..."` and the raw forms `R"tag(...)tag"`.
    fn prefixed_string(&mut self) -> Option<TokenKind> {
        let ch = self.cursor.peek();
        let mut idx = if ch == 'u' && self.cursor.peek_at(1) == '8' {
            2
        } else {
            usize::from(ch == 'u' || ch == 'U')
        };
        let raw = self.cursor.peek_at(idx) == 'R';
        if raw {
            idx += 1;
        }
        if self.cursor.peek_at(idx) != '"' {
            return None;
        }
        if raw {
            return self.raw_string(idx);
        }
        Some(self.string(idx, true))
    }

    /// Raw string. The cursor is on the prefix; `quote_idx` is the offset of
    /// the opening quote. Gives up when there is no `(` or no closing
    /// `)tag"`.
    fn raw_string(&mut self, quote_idx: usize) -> Option<TokenKind> {
        let mark = self.cursor.save();
        self.cursor.bump_n(quote_idx + 1);
        let tag_start = self.cursor.pos();
        while self.cursor.more() && self.cursor.peek() != '(' {
            self.cursor.bump();
        }
        if self.cursor.peek() != '(' {
            self.cursor.restore(mark);
            return None;
        }
        let tag = self.cursor.slice_from(tag_start);
        self.cursor.bump();

        let mut kind = TokenKind::String;
        while self.cursor.more() {
            if self.closes_raw_string(tag) {
                self.cursor.bump_n(tag.len() + 2);
                self.suffix(false);
                return Some(kind);
            }
            if matches!(self.cursor.bump(), '\n' | '\r') {
                kind = TokenKind::StringMulti;
            }
        }
        self.cursor.restore(mark);
        None
    }

    /// The cursor is on `)tag"`.
    fn closes_raw_string(&self, tag: &[char]) -> bool {
        self.cursor.peek() == ')'
            && tag
                .iter()
                .enumerate()
                .all(|(i, &ch)| self.cursor.peek_at(i + 1) == ch)
            && self.cursor.peek_at(tag.len() + 1) == '"'
    }

    // ─── Pawn ───

    fn pawn_literal(&mut self) -> Option<TokenKind> {
        let is_macro_name = self.ctx.preproc_ncnl_count == 1
            && matches!(self.ctx.is_preproc, TokenKind::PpDefine | TokenKind::PpEmit);
        if is_macro_name {
            return self.pawn_pattern();
        }

        // Packed and raw strings: \"..." !"..." \!"..." !\"..."
        let ch = self.cursor.peek();
        let next = self.cursor.peek_at(1);
        if ch == '\\' || ch == '!' {
            if next == '"' {
                return Some(self.string(1, ch == '!'));
            }
            if (next == '\\' || next == '!') && self.cursor.peek_at(2) == '"' {
                return Some(self.string(2, false));
            }
        }

        // Macro arguments %0 .. %9
        if self.ctx.is_preproc == TokenKind::PpDefine && ch == '%' && is_dec_digit(next) {
            self.cursor.bump_n(2);
            return Some(TokenKind::Word);
        }
        None
    }

    /// The pattern of a Pawn `#define`: everything up to a blank or an
    /// escaped line break.
    fn pawn_pattern(&mut self) -> Option<TokenKind> {
        let start = self.cursor.pos();
        while self.cursor.more() && !is_space(self.cursor.peek()) {
            let ch = self.cursor.peek();
            if matches!(ch, '\n' | '\r') {
                break;
            }
            if ch == '\\' && matches!(self.cursor.peek_at(1), '\n' | '\r') {
                break;
            }
            self.cursor.bump();
        }
        (self.cursor.pos() > start).then_some(TokenKind::Macro)
    }

    // ─── D ───

    /// D quoted strings, WYSIWYG and hex strings, and escape sequences
    /// written outside any quotes.
    fn d_string(&mut self) -> Option<TokenKind> {
        let ch = self.cursor.peek();
        match ch {
            '"' | '\'' => Some(self.string(0, true)),
            '`' => Some(self.wysiwyg_string(0)),
            '\\' => self.d_escape_sequences(),
            'r' if self.cursor.peek_at(1) == '"' => Some(self.wysiwyg_string(1)),
            'x' if self.cursor.peek_at(1) == '"' => Some(self.string(1, false)),
            _ => None,
        }
    }

    /// `` `...` `` and `r"..."`: no escapes at all.
    fn wysiwyg_string(&mut self, prefix_len: usize) -> TokenKind {
        let (line, col) = (self.cursor.row(), self.cursor.col());
        self.cursor.bump_n(prefix_len);
        let end = self.cursor.bump();
        let mut kind = TokenKind::String;
        while self.cursor.more() {
            match self.cursor.bump() {
                ch if ch == end => {
                    self.suffix(true);
                    return kind;
                }
                '\n' | '\r' => kind = TokenKind::StringMulti,
                _ => {}
            }
        }
        self.unterminated("string", line, col);
        kind
    }

    fn d_escape_sequences(&mut self) -> Option<TokenKind> {
        let mark = self.cursor.save();
        while self.cursor.more() && self.cursor.peek() == '\\' {
            self.cursor.bump();
            match self.cursor.peek() {
                'x' => self.cursor.bump_n(3),
                'u' => self.cursor.bump_n(5),
                'U' => self.cursor.bump_n(9),
                '0'..='7' => {
                    self.cursor.bump();
                    for _ in 0..2 {
                        if !is_oct_digit(self.cursor.peek()) {
                            break;
                        }
                        self.cursor.bump();
                    }
                }
                '&' => {
                    self.cursor.bump();
                    while self.cursor.peek().is_ascii_alphabetic() {
                        self.cursor.bump();
                    }
                    self.cursor.eat(';');
                }
                _ => {
                    self.cursor.bump();
                }
            }
        }
        if self.cursor.pos() - mark.pos() > 1 {
            Some(TokenKind::String)
        } else {
            self.cursor.restore(mark);
            None
        }
    }
}
