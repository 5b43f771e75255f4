//! Character classes used by the recognizers.
//!
//! Anything outside 7-bit ASCII counts as an identifier character: it can
//! only appear in identifiers, strings and comments, and the latter two are
//! recognized before identifiers are.

/// Space or tab. Form feed and vertical tab count too.
#[inline]
pub fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{0c}' | '\u{0b}')
}

/// Any whitespace, line breaks included.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    is_space(ch) || ch == '\n' || ch == '\r'
}

/// Characters that may start an identifier or keyword.
#[inline]
pub fn is_keyword_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$' || !ch.is_ascii()
}

/// Characters that may continue an identifier or keyword.
#[inline]
pub fn is_keyword_char(ch: char) -> bool {
    is_keyword_start(ch) || ch.is_ascii_digit() || ch == '@'
}

#[inline]
pub fn is_dec_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

#[inline]
pub fn is_oct_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

#[inline]
pub fn is_bin_digit(ch: char) -> bool {
    matches!(ch, '0' | '1')
}
