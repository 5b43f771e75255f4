//! Decoding raw file bytes into code points.
//!
//! # Encoding Detection
//!
//! In order:
//! - A byte order mark selects UTF-8, UTF-16 LE or UTF-16 BE outright.
//! - Pure 7-bit input without NUL bytes is ASCII.
//! - Input where a quarter to a half of the bytes are NUL is tried as
//!   BOM-less UTF-16 (the byte order is guessed from the first words).
//! - Valid UTF-8 is UTF-8.
//! - Anything else is taken one code point per byte.
//!
//! Decoding never fails: the byte fallback accepts every input.

/// Encoding the input was decoded from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Encoding {
    Ascii,
    Utf8,
    Utf16Le,
    Utf16Be,
    /// One code point per byte (Latin-1).
    Byte,
}

/// Decoded source: the code points plus what was learned about the bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceText {
    chars: Vec<char>,
    encoding: Encoding,
    has_bom: bool,
}

impl SourceText {
    /// Decode raw file contents.
    pub fn decode(bytes: &[u8]) -> Self {
        if let Some((encoding, rest)) = split_bom(bytes) {
            let chars = match encoding {
                Encoding::Utf16Le | Encoding::Utf16Be => decode_utf16(rest, encoding),
                _ => std::str::from_utf8(rest).ok().map(|s| s.chars().collect()),
            };
            return match chars {
                Some(chars) => SourceText {
                    chars,
                    encoding,
                    has_bom: true,
                },
                None => SourceText {
                    chars: decode_bytes(rest),
                    encoding: Encoding::Byte,
                    has_bom: true,
                },
            };
        }

        let zero_count = memchr::memchr_iter(0, bytes).count();
        if zero_count == 0 && bytes.is_ascii() {
            return SourceText::with(decode_bytes(bytes), Encoding::Ascii);
        }

        if zero_count > bytes.len() / 4 && zero_count <= bytes.len() / 2 {
            if let Some(encoding) = guess_utf16_order(bytes) {
                if let Some(chars) = decode_utf16(bytes, encoding) {
                    return SourceText::with(chars, encoding);
                }
            }
        }

        match std::str::from_utf8(bytes) {
            Ok(text) => SourceText::with(text.chars().collect(), Encoding::Utf8),
            Err(_) => SourceText::with(decode_bytes(bytes), Encoding::Byte),
        }
    }

    /// Wrap text that is already decoded.
    pub fn from_text(text: &str) -> Self {
        let encoding = if text.is_ascii() {
            Encoding::Ascii
        } else {
            Encoding::Utf8
        };
        SourceText::with(text.chars().collect(), encoding)
    }

    fn with(chars: Vec<char>, encoding: Encoding) -> Self {
        SourceText {
            chars,
            encoding,
            has_bom: false,
        }
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[inline]
    pub fn has_bom(&self) -> bool {
        self.has_bom
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

fn split_bom(bytes: &[u8]) -> Option<(Encoding, &[u8])> {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => Some((Encoding::Utf16Be, rest)),
        [0xFF, 0xFE, rest @ ..] => Some((Encoding::Utf16Le, rest)),
        [0xEF, 0xBB, 0xBF, rest @ ..] => Some((Encoding::Utf8, rest)),
        _ => None,
    }
}

/// Byte order of BOM-less UTF-16, assuming the first three characters are ASCII.
fn guess_utf16_order(bytes: &[u8]) -> Option<Encoding> {
    match bytes {
        [0, _, 0, _, 0, _, ..] => Some(Encoding::Utf16Be),
        [_, 0, _, 0, _, 0, ..] => Some(Encoding::Utf16Le),
        _ => None,
    }
}

fn decode_utf16(bytes: &[u8], encoding: Encoding) -> Option<Vec<char>> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if encoding == Encoding::Utf16Be {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    });
    char::decode_utf16(units).collect::<Result<Vec<_>, _>>().ok()
}

fn decode_bytes(bytes: &[u8]) -> Vec<char> {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests;
