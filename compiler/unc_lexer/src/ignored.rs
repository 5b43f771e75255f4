//! Pass-through of text inside a suppressed region.
//!
//! While processing is disabled, whole lines become `IGNORED` chunks and
//! line breaks stay `NEWLINE` chunks, so line numbers remain right. The
//! only thing recognized is the comment carrying the enable marker, and
//! the end of an `asm` block.

use unc_ir::TokenKind;
use unc_lexer_core::char_class::is_space;

use crate::scanner::Scanner;

impl Scanner<'_, '_, '_> {
    /// `None` when nothing was consumed and the regular recognizers should
    /// run: at the end of input, or when an `asm` block ends on this line.
    pub(crate) fn ignored(&mut self) -> Option<TokenKind> {
        if self.blank_lines() > 0 {
            return Some(TokenKind::Newline);
        }

        let line_start = self.cursor.save();
        self.skip_to_line_end();
        let line = self.cursor.slice_from(line_start.pos());
        if line.is_empty() {
            return None;
        }

        if ends_asm_block(line) {
            self.ctx.suppressed = false;
            self.cursor.restore(line_start);
            return None;
        }
        if !contains(line, &self.ctx.on_text) {
            return Some(TokenKind::Ignored);
        }

        // The enable marker is on this line: let its comment through.
        self.cursor.restore(line_start);
        if is_space(self.cursor.peek()) {
            while is_space(self.cursor.peek()) {
                self.cursor.bump();
            }
            return Some(TokenKind::Ignored);
        }
        if let Some(kind) = self.comment() {
            if !self.ctx.suppressed {
                return Some(kind);
            }
        }
        self.skip_to_line_end();
        (self.cursor.pos() > line_start.pos()).then_some(TokenKind::Ignored)
    }

    /// Consume lines holding nothing but blanks, with their line breaks.
    fn blank_lines(&mut self) -> u32 {
        let mut count = 0;
        loop {
            let mark = self.cursor.save();
            while is_space(self.cursor.peek()) {
                self.cursor.bump();
            }
            match self.cursor.peek() {
                '\r' => {
                    self.cursor.bump();
                    self.cursor.eat('\n');
                }
                '\n' => {
                    self.cursor.bump();
                }
                _ => {
                    self.cursor.restore(mark);
                    return count;
                }
            }
            count += 1;
        }
    }

    fn skip_to_line_end(&mut self) {
        while self.cursor.more() && !matches!(self.cursor.peek(), '\n' | '\r') {
            self.cursor.bump();
        }
    }
}

/// `#endasm`, or `#pragma endasm` with any blank separation.
fn ends_asm_block(line: &[char]) -> bool {
    let pragma = contains(line, "#pragma ") || contains(line, "#pragma\t");
    let endasm = contains(line, " endasm") || contains(line, "\tendasm");
    (pragma && endasm) || contains(line, "#endasm")
}

fn contains(haystack: &[char], needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|window| window == needle.as_slice())
}
