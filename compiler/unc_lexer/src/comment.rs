//! Comment recognizers and the suppression markers they carry.

use unc_diagnostic::{Diagnostic, ErrorCode};
use unc_ir::{ChunkText, LangFlags, TokenKind};

use crate::scanner::Scanner;

impl Scanner<'_, '_, '_> {
    /// `// ...`, `/* ... */` or, in D, nesting `/+ ... +/`.
    ///
    /// A comment containing the disable marker starts a suppressed region;
    /// while suppressed, one containing the enable marker ends it.
    pub(crate) fn comment(&mut self) -> Option<TokenKind> {
        if self.cursor.peek() != '/' {
            return None;
        }
        let (line, col) = (self.cursor.row(), self.cursor.col());
        let start = self.cursor.pos();
        let kind = match self.cursor.peek_at(1) {
            '/' => self.line_comment(),
            '*' => self.block_comment(line, col)?,
            '+' if self.is_lang(LangFlags::D) => self.nested_comment(line, col)?,
            _ => return None,
        };
        let text = ChunkText::from_chars(self.cursor.slice_from(start));
        self.check_markers(&text, line);
        Some(kind)
    }

    /// Runs to the end of the line. Outside C#, a line ending in an odd
    /// number of backslashes continues the comment on the next line.
    fn line_comment(&mut self) -> TokenKind {
        self.cursor.bump_n(2);
        let escapes = !self.is_lang(LangFlags::CS);
        loop {
            let mut backslashes = 0u32;
            while self.cursor.more() && !matches!(self.cursor.peek(), '\n' | '\r') {
                if self.cursor.bump() == '\\' && escapes {
                    backslashes += 1;
                } else {
                    backslashes = 0;
                }
            }
            if backslashes % 2 == 0 || self.cursor.is_eof() {
                return TokenKind::CommentCpp;
            }
            self.cursor.eat('\r');
            self.cursor.eat('\n');
        }
    }

    /// `/* ... */`, absorbing directly following block comments separated
    /// only by blanks.
    fn block_comment(&mut self, line: u32, col: u32) -> Option<TokenKind> {
        let mark = self.cursor.save();
        self.cursor.bump_n(2);
        if self.cursor.is_eof() {
            self.cursor.restore(mark);
            return None;
        }
        let mut kind = TokenKind::Comment;
        let mut closed = false;
        while self.cursor.more() {
            if self.cursor.peek_str("*/") {
                self.cursor.bump_n(2);
                closed = true;
                let after = self.cursor.save();
                while matches!(self.cursor.peek(), ' ' | '\t') {
                    self.cursor.bump();
                }
                if !self.cursor.peek_str("/*") {
                    self.cursor.restore(after);
                    break;
                }
                closed = false;
            }
            if matches!(self.cursor.bump(), '\n' | '\r') {
                kind = TokenKind::CommentMulti;
            }
        }
        if !closed {
            self.unterminated("comment", line, col);
        }
        Some(kind)
    }

    /// D `/+ ... +/`, which nests.
    fn nested_comment(&mut self, line: u32, col: u32) -> Option<TokenKind> {
        let mark = self.cursor.save();
        self.cursor.bump_n(2);
        if self.cursor.is_eof() {
            self.cursor.restore(mark);
            return None;
        }
        let mut kind = TokenKind::Comment;
        let mut depth = 1u32;
        while depth > 0 && self.cursor.more() {
            if self.cursor.peek_str("+/") {
                self.cursor.bump_n(2);
                depth -= 1;
            } else if self.cursor.peek_str("/+") {
                self.cursor.bump_n(2);
                depth += 1;
            } else if matches!(self.cursor.bump(), '\n' | '\r') {
                kind = TokenKind::CommentMulti;
            }
        }
        if depth > 0 {
            self.unterminated("comment", line, col);
        }
        Some(kind)
    }

    fn check_markers(&mut self, text: &ChunkText, line: u32) {
        if self.ctx.suppressed {
            if text.contains_str(&self.ctx.on_text) {
                tracing::debug!(line, marker = %self.ctx.on_text, "processing enabled");
                self.ctx.suppressed = false;
            }
        } else if text.contains_str(&self.ctx.off_text) {
            tracing::debug!(line, marker = %self.ctx.off_text, "processing disabled");
            self.ctx.suppress();
        }
    }

    pub(crate) fn unterminated(&mut self, what: &str, line: u32, col: u32) {
        self.report(
            Diagnostic::warning(ErrorCode::U0002)
                .at(line, col)
                .with_message(format!("unterminated {what} runs into the end of the input")),
        );
    }
}

#[cfg(test)]
mod tests;
