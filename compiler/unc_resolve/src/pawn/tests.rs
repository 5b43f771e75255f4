#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::{add_vsemi_after, scrub_vsemicolons};
use crate::test_helpers::{resolve, resolve_with};
use unc_ir::{Chunk, ChunkList, LangFlags, OptionKey, Settings, TokenKind};

fn pawn_semicolons() -> Settings {
    let mut settings = Settings::new();
    settings.set(OptionKey::ModPawnSemicolon, "true").unwrap();
    settings
}

#[test]
fn line_end_closes_a_virtual_brace_statement() {
    let r = resolve("if (x)\n    a = 1\nb = 2\n", LangFlags::PAWN);
    assert!(r.result.is_ok());
    assert_eq!(r.errors, 0);

    let vsemis = r.of_kind(TokenKind::VSemicolon);
    assert_eq!(vsemis.len(), 1);
    assert!(vsemis[0].text.is_empty());
    assert_eq!(vsemis[0].orig_line, 2);

    let closes = r.of_kind(TokenKind::VBraceClose);
    assert_eq!(closes.len(), 1);
    assert_eq!(closes[0].parent_kind, TokenKind::If);
    assert_eq!(r.find("a").level, 1);
    assert_eq!(r.find("b").level, 0);
}

#[test]
fn vsemicolon_text_follows_the_option() {
    let r = resolve_with("if (x)\n    a = 1\n", LangFlags::PAWN, &pawn_semicolons());
    let vsemis = r.of_kind(TokenKind::VSemicolon);
    assert_eq!(vsemis.len(), 1);
    assert_eq!(vsemis[0].text.to_string(), ";");
}

#[test]
fn continued_lines_get_no_vsemicolon() {
    let r = resolve("if (x)\n    a = 1 +\n        2\nb = 2\n", LangFlags::PAWN);
    let vsemis = r.of_kind(TokenKind::VSemicolon);
    assert_eq!(vsemis.len(), 1);
    assert_eq!(vsemis[0].orig_line, 3);
}

#[test]
fn real_semicolons_are_left_alone() {
    let r = resolve("if (x)\n    a = 1;\nb = 2;\n", LangFlags::PAWN);
    assert!(r.of_kind(TokenKind::VSemicolon).is_empty());
    assert_eq!(r.of_kind(TokenKind::VBraceClose).len(), 1);
}

#[test]
fn do_while_ends_at_the_line_end() {
    let r = resolve("do\n    x++\nwhile (x)\ny = 1\n", LangFlags::PAWN);
    assert!(r.result.is_ok());
    assert_eq!(r.errors, 0);
    assert_eq!(r.find("while").kind, TokenKind::WhileOfDo);

    let vsemis = r.of_kind(TokenKind::VSemicolon);
    assert_eq!(vsemis.len(), 2);
    assert_eq!(vsemis[1].parent_kind, TokenKind::WhileOfDo);
    assert_eq!(r.find("y").level, 0);
}

#[test]
fn other_languages_get_no_vsemicolons() {
    let r = resolve("if (x)\n    a = 1\nb = 2;\n", LangFlags::C);
    assert!(r.of_kind(TokenKind::VSemicolon).is_empty());
}

#[test]
fn add_after_skips_an_existing_semicolon() {
    let mut list = ChunkList::new();
    let a = list.push_back(Chunk::new(TokenKind::Word, "a"));
    list.push_back(Chunk::new(TokenKind::Semicolon, ";"));

    let settings = Settings::new();
    assert_eq!(add_vsemi_after(&mut list, a, &settings), a);
    assert_eq!(list.len(), 2);
}

#[test]
fn add_after_copies_position_and_flags() {
    let mut list = ChunkList::new();
    let mut word = Chunk::new(TokenKind::Word, "abc");
    word.orig_line = 4;
    word.orig_col = 2;
    word.orig_col_end = 5;
    word.column = 2;
    word.level = 1;
    let a = list.push_back(word);

    let vsemi = add_vsemi_after(&mut list, a, &pawn_semicolons());
    assert_ne!(vsemi, a);
    let chunk = &list[vsemi];
    assert_eq!(chunk.kind, TokenKind::VSemicolon);
    assert_eq!(chunk.text.to_string(), ";");
    assert_eq!(chunk.orig_line, 4);
    assert_eq!(chunk.orig_col, 5);
    assert_eq!(chunk.column, 5);
    assert_eq!(chunk.level, 1);
    assert!(chunk.flags.contains(unc_ir::ChunkFlags::INSERTED));
    assert_eq!(list.next(a), Some(vsemi));
}

#[test]
fn scrub_clears_vsemicolons_after_block_statements() {
    let mut list = ChunkList::new();
    let mut close = Chunk::new(TokenKind::BraceClose, "}");
    close.parent_kind = TokenKind::If;
    list.push_back(close);
    let after_if = list.push_back(Chunk::new(TokenKind::VSemicolon, ";"));
    let mut plain = Chunk::new(TokenKind::BraceClose, "}");
    plain.parent_kind = TokenKind::Function;
    list.push_back(plain);
    let after_fn = list.push_back(Chunk::new(TokenKind::VSemicolon, ";"));

    scrub_vsemicolons(&mut list, &Settings::new());
    assert_eq!(list[after_if].text.to_string(), ";");

    scrub_vsemicolons(&mut list, &pawn_semicolons());
    assert!(list[after_if].text.is_empty());
    assert_eq!(list[after_fn].text.to_string(), ";");
}
