//! Numeric literal recognizer.
//!
//! Deliberately permissive: it accepts every number format of every
//! supported language without checking that the format is valid for the
//! active one. Anything identifier-like glued to the end is kept as a
//! suffix.

use unc_ir::{LangFlags, TokenKind};
use unc_lexer_core::char_class::{is_bin_digit, is_dec_digit, is_hex_digit, is_keyword_char};

use crate::scanner::Scanner;

#[inline]
fn or_underscore(digit: fn(char) -> bool) -> impl Fn(char) -> bool {
    move |ch| digit(ch) || ch == '_'
}

impl Scanner<'_, '_, '_> {
    /// A number starts with a digit, or with `.` and a digit.
    pub(crate) fn number(&mut self) -> Option<TokenKind> {
        let ch = self.cursor.peek();
        let next = self.cursor.peek_at(1);
        if !is_dec_digit(ch) && !(ch == '.' && is_dec_digit(next)) {
            return None;
        }

        let mut is_float = ch == '.';
        let mut is_hex = false;
        if ch == '0' {
            is_hex = self.radix_prefixed();
        } else {
            self.digits(is_dec_digit);
        }

        // `1..2` is a range, not a fraction.
        if self.cursor.peek() == '.' && self.cursor.peek_at(1) != '.' {
            self.cursor.bump();
            is_float = true;
            if is_hex {
                self.digits(is_hex_digit);
            } else {
                self.digits(is_dec_digit);
            }
        }

        if matches!(self.cursor.peek(), 'e' | 'E' | 'p' | 'P') {
            is_float = true;
            self.cursor.bump();
            if matches!(self.cursor.peek(), '+' | '-') {
                self.cursor.bump();
            }
            self.digits(is_dec_digit);
        }

        loop {
            match self.cursor.peek().to_ascii_uppercase() {
                'I' | 'F' | 'D' | 'M' => is_float = true,
                'L' | 'U' => {}
                _ => break,
            }
            self.cursor.bump();
        }
        // Microsoft `i64`-style width.
        if self.cursor.peek_str("64") {
            self.cursor.bump_n(2);
        }
        self.suffix(false);

        Some(if is_float {
            TokenKind::NumberFp
        } else {
            TokenKind::Number
        })
    }

    /// Number starting with `0`: hex, binary, Microsoft `...h` hex, or
    /// plain digits. Returns whether the digits are hexadecimal.
    fn radix_prefixed(&mut self) -> bool {
        self.cursor.bump();

        if self.is_ms_hex() {
            self.digits(is_hex_digit);
            self.cursor.bump();
            return true;
        }

        match self.cursor.peek() {
            'x' | 'X' => {
                self.cursor.bump();
                self.digits(is_hex_digit);
                true
            }
            'b' | 'B' => {
                self.cursor.bump();
                self.digits(is_bin_digit);
                false
            }
            '0'..='9' => {
                self.digits(is_dec_digit);
                false
            }
            _ => false,
        }
    }

    /// After a leading `0`: hex digits and underscores ending in `h`, as in
    /// `0FFh`.
    fn is_ms_hex(&self) -> bool {
        let mut n = 0;
        while is_keyword_char(self.cursor.peek_at(n)) {
            n += 1;
        }
        n >= 1
            && self.cursor.peek_at(n - 1) == 'h'
            && (0..n - 1).all(|i| or_underscore(is_hex_digit)(self.cursor.peek_at(i)))
    }

    /// Digits of one radix, with digit separators: `_` everywhere, and `'`
    /// between digits in C++.
    fn digits(&mut self, digit: fn(char) -> bool) {
        let cpp = self.is_lang(LangFlags::CPP);
        let accept = or_underscore(digit);
        loop {
            let ch = self.cursor.peek();
            if accept(ch) || (cpp && ch == '\'' && digit(self.cursor.peek_at(1))) {
                self.cursor.bump();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests;
