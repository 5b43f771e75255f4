//! Identifier and keyword recognizer.

use unc_ir::{LangFlags, TokenKind};
use unc_lexer_core::char_class::is_keyword_char;

use crate::scanner::Scanner;

impl Scanner<'_, '_, '_> {
    /// Consume a word. The first code point is already known to start one.
    ///
    /// `skip_lookup` keeps the result a plain `WORD`; it is also set by
    /// `\u` escapes and non-ASCII characters, which no keyword contains.
    pub(crate) fn word(&mut self, mut skip_lookup: bool) -> TokenKind {
        let start = self.cursor.pos();
        let first = self.cursor.bump();
        if first == '\\' {
            self.cursor.bump();
            skip_lookup = true;
        }
        skip_lookup |= !first.is_ascii();
        while self.cursor.more() {
            let ch = self.cursor.peek();
            if is_keyword_char(ch) {
                self.cursor.bump();
                skip_lookup |= !ch.is_ascii();
            } else if ch == '\\' && self.cursor.peek_at(1).eq_ignore_ascii_case(&'u') {
                self.cursor.bump_n(2);
                skip_lookup = true;
            } else {
                break;
            }
        }
        if skip_lookup {
            return TokenKind::Word;
        }

        if self.ctx.is_preproc == TokenKind::PpDefine && self.ctx.preproc_ncnl_count == 1 {
            return if self.cursor.peek() == '(' {
                TokenKind::MacroFunc
            } else {
                TokenKind::Macro
            };
        }

        let text: String = self.cursor.slice_from(start).iter().collect();
        if self.is_lang(LangFlags::JAVA) && text.starts_with('@') && text != "@interface" {
            return TokenKind::Annotation;
        }
        self.ctx
            .keywords
            .lookup(&text, self.ctx.lang, self.ctx.in_preproc())
    }
}

#[cfg(test)]
mod tests;
