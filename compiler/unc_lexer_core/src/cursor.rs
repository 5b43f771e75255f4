//! Position-tracking cursor over decoded code points.
//!
//! The cursor advances one code point at a time and keeps the 1-based
//! row and column of the next code point up to date:
//! - a tab moves the column to the next tab stop,
//! - `\n`, `\r` and `\r\n` each end exactly one row.
//!
//! Reads past the end return the NUL sentinel (`'\0'`). Use
//! [`is_eof()`](Cursor::is_eof) to tell it apart from an interior NUL.

/// Returned by peeks past the end of the input.
pub const EOF_CHAR: char = '\0';

/// Snapshot of a cursor position, for backtracking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mark {
    idx: usize,
    row: u32,
    col: u32,
    last: char,
}

impl Mark {
    /// Code-point offset of the snapshot.
    #[inline]
    pub fn pos(self) -> usize {
        self.idx
    }
}

/// Cursor over a slice of code points.
///
/// The cursor is [`Copy`]; [`save`](Cursor::save) and
/// [`restore`](Cursor::restore) are the usual way to try a recognizer and
/// back off when it fails.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    chars: &'a [char],
    tab_size: u32,
    at: Mark,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at row 1, column 1.
    ///
    /// A `tab_size` of zero is treated as one.
    pub fn new(chars: &'a [char], tab_size: u32) -> Self {
        Cursor {
            chars,
            tab_size: tab_size.max(1),
            at: Mark {
                idx: 0,
                row: 1,
                col: 1,
                last: EOF_CHAR,
            },
        }
    }

    /// The code point at the current position.
    #[inline]
    pub fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// The code point `n` positions ahead.
    #[inline]
    pub fn peek_at(&self, n: usize) -> char {
        self.chars.get(self.at.idx + n).copied().unwrap_or(EOF_CHAR)
    }

    /// Whether the input at the current position starts with `s`.
    pub fn peek_str(&self, s: &str) -> bool {
        s.chars().enumerate().all(|(i, ch)| self.peek_at(i) == ch)
    }

    /// Whether input remains.
    #[inline]
    pub fn more(&self) -> bool {
        self.at.idx < self.chars.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        !self.more()
    }

    /// Consume one code point and return it (`'\0'` at the end).
    pub fn bump(&mut self) -> char {
        let Some(&ch) = self.chars.get(self.at.idx) else {
            return EOF_CHAR;
        };
        self.at.idx += 1;
        match ch {
            '\t' => self.at.col = next_tab_column(self.at.col, self.tab_size),
            '\n' => {
                if self.at.last != '\r' {
                    self.at.row += 1;
                    self.at.col = 1;
                }
            }
            '\r' => {
                self.at.row += 1;
                self.at.col = 1;
            }
            _ => self.at.col += 1,
        }
        self.at.last = ch;
        ch
    }

    /// Consume `n` code points.
    pub fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Consume the next code point if it is `ch`.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.more() && self.peek() == ch {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Code-point offset of the current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.at.idx
    }

    /// 1-based row of the current position.
    #[inline]
    pub fn row(&self) -> u32 {
        self.at.row
    }

    /// 1-based column of the current position.
    #[inline]
    pub fn col(&self) -> u32 {
        self.at.col
    }

    /// The previously consumed code point (`'\0'` at the start).
    #[inline]
    pub fn last(&self) -> char {
        self.at.last
    }

    #[inline]
    pub fn save(&self) -> Mark {
        self.at
    }

    #[inline]
    pub fn restore(&mut self, mark: Mark) {
        self.at = mark;
    }

    /// Code points from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [char] {
        &self.chars[start.min(self.at.idx)..self.at.idx]
    }

    /// Every code point of the input.
    #[inline]
    pub fn source(&self) -> &'a [char] {
        self.chars
    }
}

/// Column of the tab stop after `col` (1-based).
#[inline]
pub fn next_tab_column(col: u32, tab_size: u32) -> u32 {
    let tab_size = tab_size.max(1);
    (col.saturating_sub(1) / tab_size + 1) * tab_size + 1
}

#[cfg(test)]
mod tests;
