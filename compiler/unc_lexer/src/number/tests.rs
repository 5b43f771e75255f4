#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use unc_ir::{LangFlags, TokenKind};

use crate::test_helpers::lex;

fn number(source: &str, lang: LangFlags) -> (TokenKind, String) {
    lex(source, lang).code().into_iter().next().unwrap()
}

fn int(text: &str) -> (TokenKind, String) {
    (TokenKind::Number, text.to_owned())
}

fn float(text: &str) -> (TokenKind, String) {
    (TokenKind::NumberFp, text.to_owned())
}

#[test]
fn integers_in_every_radix() {
    assert_eq!(number("42;", LangFlags::C), int("42"));
    assert_eq!(number("0x1F;", LangFlags::C), int("0x1F"));
    assert_eq!(number("0b1010;", LangFlags::C), int("0b1010"));
    assert_eq!(number("0755;", LangFlags::C), int("0755"));
    assert_eq!(number("0;", LangFlags::C), int("0"));
}

#[test]
fn suffixes() {
    assert_eq!(number("10UL;", LangFlags::C), int("10UL"));
    assert_eq!(number("0x10ULL;", LangFlags::C), int("0x10ULL"));
    assert_eq!(number("1.5f;", LangFlags::C), float("1.5f"));
    assert_eq!(number("2d;", LangFlags::D), float("2d"));
    assert_eq!(number("12_km;", LangFlags::CPP), int("12_km"));
}

#[test]
fn floats() {
    assert_eq!(number("1.5;", LangFlags::C), float("1.5"));
    assert_eq!(number(".5;", LangFlags::C), float(".5"));
    assert_eq!(number("1e10;", LangFlags::C), float("1e10"));
    assert_eq!(number("1.0e-3;", LangFlags::C), float("1.0e-3"));
    assert_eq!(number("0x1.8p+1;", LangFlags::C), float("0x1.8p+1"));
}

#[test]
fn digit_separators() {
    assert_eq!(number("1'000'000;", LangFlags::CPP), int("1'000'000"));
    assert_eq!(number("1_000;", LangFlags::JAVA), int("1_000"));

    // A quote after a number is a character literal outside C++.
    let lexed = lex("1'2'", LangFlags::C);
    assert_eq!(lexed.code()[0], int("1"));
}

#[test]
fn microsoft_hex() {
    assert_eq!(number("0FFh;", LangFlags::C), int("0FFh"));
    assert_eq!(number("0A_Bh;", LangFlags::C), int("0A_Bh"));
}

#[test]
fn range_is_not_a_fraction() {
    let lexed = lex("a[1..2]", LangFlags::D);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::Word, "a".to_owned()),
            (TokenKind::SquareOpen, "[".to_owned()),
            int("1"),
            (TokenKind::Range, "..".to_owned()),
            int("2"),
            (TokenKind::SquareClose, "]".to_owned()),
        ]
    );
}

#[test]
fn member_access_after_a_number_is_not_a_number() {
    let lexed = lex("a.b", LangFlags::C);
    assert_eq!(lexed.kinds(), vec![TokenKind::Word, TokenKind::Dot, TokenKind::Word]);
}
