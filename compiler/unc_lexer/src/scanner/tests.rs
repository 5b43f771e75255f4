#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use unc_ir::{ChunkFlags, LangFlags, TokenKind};

use super::tally_line_breaks;
use crate::context::LineEndings;
use crate::test_helpers::{chars, lex};

#[test]
fn blanks_are_recorded_not_kept() {
    let lexed = lex("int  x;", LangFlags::C);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::Type, "int".to_owned()),
            (TokenKind::Word, "x".to_owned()),
            (TokenKind::Semicolon, ";".to_owned()),
        ]
    );
    let x = lexed.find("x");
    assert_eq!(x.orig_prev_sp, 2);
    assert_eq!((x.orig_line, x.orig_col, x.orig_col_end), (1, 6, 7));
    assert_eq!(x.column, x.orig_col);
    assert_eq!(lexed.find(";").orig_prev_sp, 0);
}

#[test]
fn tabs_move_to_the_next_stop() {
    let lexed = lex("a\tb", LangFlags::C);
    let b = lexed.find("b");
    assert_eq!(b.orig_col, 9);
    assert!(b.after_tab);
    assert!(!lexed.find("a").after_tab);
}

#[test]
fn newline_runs_become_one_chunk() {
    let lexed = lex("a\n\n\n  b", LangFlags::C);
    assert_eq!(
        lexed.kinds(),
        vec![TokenKind::Word, TokenKind::Newline, TokenKind::Word]
    );
    let chunks = lexed.chunks();
    assert_eq!(chunks[1].nl_count, 3);
    assert!(chunks[1].text.is_empty());
    assert_eq!((chunks[2].orig_line, chunks[2].orig_col), (4, 3));
}

#[test]
fn line_continuation_is_normalized() {
    let lexed = lex("#define A \\  \n  1\n", LangFlags::C);
    assert_eq!(
        lexed.kinds(),
        vec![
            TokenKind::Preproc,
            TokenKind::PpDefine,
            TokenKind::Macro,
            TokenKind::NlCont,
            TokenKind::Number,
            TokenKind::Newline,
        ]
    );
    let cont = lexed.chunks()[3];
    assert_eq!(cont.text.to_string(), "\\\n");
    assert_eq!(cont.nl_count, 1);
    assert!(cont.in_preproc());
    assert!(lexed.find("1").in_preproc());
}

#[test]
fn preprocessor_lines_are_flagged() {
    let lexed = lex("#define X 1\nint y;\n", LangFlags::C);
    let pound = lexed.find("#");
    assert_eq!(pound.kind, TokenKind::Preproc);
    assert!(pound.flags.contains(ChunkFlags::IN_PREPROC));
    assert!(lexed.find("X").in_preproc());
    assert!(!lexed.find("int").in_preproc());
    assert!(!lexed.find("y").in_preproc());
}

#[test]
fn pound_inside_a_line_is_not_a_directive() {
    let lexed = lex("a # b\n", LangFlags::C);
    assert_eq!(lexed.find("#").kind, TokenKind::Pound);
    assert!(!lexed.find("b").in_preproc());
}

#[test]
fn opaque_directive_bodies() {
    let lexed = lex("#pragma once   // guard\n", LangFlags::C);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::Preproc, "#".to_owned()),
            (TokenKind::PpPragma, "pragma".to_owned()),
            (TokenKind::PreprocBody, "once".to_owned()),
            (TokenKind::CommentCpp, "// guard".to_owned()),
        ]
    );

    let lexed = lex("#frobnicate some (text\n", LangFlags::C);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::Preproc, "#".to_owned()),
            (TokenKind::PpOther, "frobnicate".to_owned()),
            (TokenKind::PreprocBody, "some (text".to_owned()),
        ]
    );
}

#[test]
fn opaque_body_stops_at_continuation() {
    let lexed = lex("#region a \\\nb\n", LangFlags::CS);
    assert_eq!(
        lexed.kinds(),
        vec![
            TokenKind::Preproc,
            TokenKind::PpRegion,
            TokenKind::PreprocBody,
            TokenKind::NlCont,
            TokenKind::PreprocBody,
            TokenKind::Newline,
        ]
    );
}

#[test]
fn garbage_is_reported_and_skipped() {
    let lexed = lex("a ` b", LangFlags::C);
    assert_eq!(
        lexed.kinds(),
        vec![TokenKind::Word, TokenKind::Unknown, TokenKind::Word]
    );
    assert_eq!(lexed.errors, 1);
}

#[test]
fn punctuators_are_flagged() {
    let lexed = lex("a+=b", LangFlags::C);
    let op = lexed.find("+=");
    assert_eq!(op.kind, TokenKind::Assign);
    assert!(op.flags.contains(ChunkFlags::PUNCTUATOR));
    assert!(!lexed.find("a").flags.contains(ChunkFlags::PUNCTUATOR));
}

#[test]
fn code_placeholders_are_words() {
    let lexed = lex("f(<#arg#>);", LangFlags::OC);
    assert_eq!(lexed.find("<#arg#>").kind, TokenKind::Word);

    let lexed = lex("a <#> b", LangFlags::C);
    assert_eq!(lexed.find("<").kind, TokenKind::AngleOpen);
}

#[test]
fn line_endings_are_tallied() {
    let lexed = lex("a\r\nb\r\nc\nd\re", LangFlags::C);
    assert_eq!(lexed.endings, LineEndings { lf: 1, crlf: 2, cr: 1 });
    assert_eq!(lexed.endings.dominant(), "\r\n");
    assert_eq!(lexed.find("e").orig_line, 5);
}

#[test]
fn tally_counts_crlf_once() {
    let mut endings = LineEndings::default();
    assert_eq!(tally_line_breaks(&chars("x\r\n\r\n\n\r"), &mut endings), 4);
    assert_eq!(endings, LineEndings { lf: 1, crlf: 2, cr: 1 });
    assert_eq!(tally_line_breaks(&chars("no breaks"), &mut endings), 0);
}
