//! Owned chunk text.
//!
//! Text is kept as code points rather than UTF-8 bytes: the recognizers
//! count and slice characters, and later passes rewrite text in place
//! (spacing, casing) without re-lexing.

use std::fmt;
use std::ops::Range;

/// Text of a single chunk as a sequence of code points.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct ChunkText {
    chars: Vec<char>,
}

impl ChunkText {
    /// Create an empty text.
    #[inline]
    pub const fn new() -> Self {
        ChunkText { chars: Vec::new() }
    }

    /// Build from a slice of code points.
    #[inline]
    pub fn from_chars(chars: &[char]) -> Self {
        ChunkText {
            chars: chars.to_vec(),
        }
    }

    /// Append one code point.
    #[inline]
    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Append every code point of `s`.
    pub fn push_str(&mut self, s: &str) {
        self.chars.extend(s.chars());
    }

    /// Append another text.
    pub fn append(&mut self, other: &ChunkText) {
        self.chars.extend_from_slice(&other.chars);
    }

    /// Copy of the code points in `range`, clamped to the text.
    pub fn slice(&self, range: Range<usize>) -> ChunkText {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        ChunkText::from_chars(&self.chars[start..end])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn first(&self) -> Option<char> {
        self.chars.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Code point at `index`, if any.
    #[inline]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        let mut own = self.chars.iter();
        prefix.chars().all(|ch| own.next() == Some(&ch))
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        let mut own = self.chars.iter().rev();
        suffix.chars().rev().all(|ch| own.next() == Some(&ch))
    }

    /// Whether `needle` occurs anywhere in the text.
    pub fn contains_str(&self, needle: &str) -> bool {
        let needle: Vec<char> = needle.chars().collect();
        if needle.is_empty() {
            return true;
        }
        self.chars.windows(needle.len()).any(|w| w == needle.as_slice())
    }

    /// Exact comparison against a string.
    pub fn eq_str(&self, s: &str) -> bool {
        let mut own = self.chars.iter();
        s.chars().all(|ch| own.next() == Some(&ch)) && own.next().is_none()
    }

    /// Remove trailing spaces and tabs.
    ///
    /// One blank is kept after a backslash so an escaped blank is not
    /// turned into a line continuation.
    pub fn trim_end_blanks(&mut self) {
        while let Some(&last) = self.chars.last() {
            if last != ' ' && last != '\t' {
                break;
            }
            if self.chars.len() >= 2 && self.chars[self.chars.len() - 2] == '\\' {
                break;
            }
            self.chars.pop();
        }
    }

    /// Drop every code point.
    #[inline]
    pub fn clear(&mut self) {
        self.chars.clear();
    }
}

impl From<&str> for ChunkText {
    fn from(s: &str) -> Self {
        ChunkText {
            chars: s.chars().collect(),
        }
    }
}

impl fmt::Display for ChunkText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

#[cfg(test)]
mod tests;
