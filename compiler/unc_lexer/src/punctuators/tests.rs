use pretty_assertions::assert_eq;
use unc_ir::{LangFlags, TokenKind};

use super::{find_punctuator, punctuators, MAX_PUNCTUATOR_LEN};

fn find(text: &str, lang: LangFlags, digraphs: bool) -> Option<(&'static str, TokenKind)> {
    let chars: Vec<char> = text.chars().collect();
    find_punctuator(&chars, lang, digraphs).map(|p| (p.text, p.kind))
}

#[test]
fn longest_match_wins() {
    assert_eq!(find(">>=x", LangFlags::C, false), Some((">>=", TokenKind::Assign)));
    assert_eq!(find(">>x", LangFlags::C, false), Some((">>", TokenKind::Arith)));
    assert_eq!(find(">x", LangFlags::C, false), Some((">", TokenKind::AngleClose)));
    assert_eq!(find("...", LangFlags::CPP, false), Some(("...", TokenKind::Ellipsis)));
}

#[test]
fn language_specific_entries() {
    assert_eq!(find(">>>=", LangFlags::JAVA, false), Some((">>>=", TokenKind::Assign)));
    // `>>=` is not tried once `>>>` is ruled out in its group.
    assert_eq!(find(">>>=", LangFlags::C, false), Some((">>", TokenKind::Arith)));
    assert_eq!(find("?.", LangFlags::CS, false), Some(("?.", TokenKind::NullCond)));
    assert_eq!(find("?.", LangFlags::C, false), Some(("?", TokenKind::Question)));
    assert_eq!(find("..", LangFlags::D, false), Some(("..", TokenKind::Range)));
}

#[test]
fn digraphs_need_the_setting() {
    assert_eq!(find("<%", LangFlags::CPP, false), Some(("<", TokenKind::AngleOpen)));
    assert_eq!(find("<%", LangFlags::CPP, true), Some(("<%", TokenKind::BraceOpen)));
    assert_eq!(find("??=", LangFlags::C, true), Some(("??=", TokenKind::Pound)));
    assert_eq!(find("??=", LangFlags::C, false), Some(("?", TokenKind::Question)));
}

#[test]
fn nothing_matches_garbage() {
    assert_eq!(find("`", LangFlags::C, false), None);
    assert_eq!(find("", LangFlags::C, false), None);
}

#[test]
fn table_is_grouped_longest_first() {
    let lengths: Vec<usize> = punctuators().iter().map(|p| p.text.chars().count()).collect();
    assert!(lengths.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(lengths.first().copied(), Some(MAX_PUNCTUATOR_LEN));
}
