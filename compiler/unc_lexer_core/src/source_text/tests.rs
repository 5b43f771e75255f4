use pretty_assertions::assert_eq;

use super::{Encoding, SourceText};

fn text_of(source: &SourceText) -> String {
    source.chars().iter().collect()
}

#[test]
fn plain_ascii() {
    let source = SourceText::decode(b"int x;\n");
    assert_eq!(source.encoding(), Encoding::Ascii);
    assert!(!source.has_bom());
    assert_eq!(text_of(&source), "int x;\n");
}

#[test]
fn utf8_without_bom() {
    let source = SourceText::decode("char *s = \"größe\";".as_bytes());
    assert_eq!(source.encoding(), Encoding::Utf8);
    assert_eq!(source.len(), 18);
}

#[test]
fn utf8_bom_is_stripped() {
    let source = SourceText::decode(b"\xEF\xBB\xBFa;");
    assert_eq!(source.encoding(), Encoding::Utf8);
    assert!(source.has_bom());
    assert_eq!(text_of(&source), "a;");
}

#[test]
fn utf16_with_bom() {
    let le = SourceText::decode(&[0xFF, 0xFE, b'a', 0, b';', 0]);
    assert_eq!(le.encoding(), Encoding::Utf16Le);
    assert!(le.has_bom());
    assert_eq!(text_of(&le), "a;");

    let be = SourceText::decode(&[0xFE, 0xFF, 0, b'a', 0, b';']);
    assert_eq!(be.encoding(), Encoding::Utf16Be);
    assert_eq!(text_of(&be), "a;");
}

#[test]
fn utf16_guessed_from_zero_bytes() {
    let bytes: Vec<u8> = "x = 1;".bytes().flat_map(|b| [b, 0]).collect();
    let source = SourceText::decode(&bytes);
    assert_eq!(source.encoding(), Encoding::Utf16Le);
    assert!(!source.has_bom());
    assert_eq!(text_of(&source), "x = 1;");
}

#[test]
fn invalid_utf8_falls_back_to_bytes() {
    let source = SourceText::decode(b"a\xE9b");
    assert_eq!(source.encoding(), Encoding::Byte);
    assert_eq!(text_of(&source), "a\u{e9}b");
}

#[test]
fn from_text_picks_ascii_or_utf8() {
    assert_eq!(SourceText::from_text("x").encoding(), Encoding::Ascii);
    assert_eq!(SourceText::from_text("é").encoding(), Encoding::Utf8);
    assert!(SourceText::from_text("").is_empty());
}
