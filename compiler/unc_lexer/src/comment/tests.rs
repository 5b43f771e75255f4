#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use unc_ir::{LangFlags, OptionKey, Settings, TokenKind};

use crate::test_helpers::{lex, lex_with};
use crate::KeywordTable;

#[test]
fn comment_kinds() {
    let lexed = lex("// line\n/* block */\n/* multi\nline */\n", LangFlags::C);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::CommentCpp, "// line".to_owned()),
            (TokenKind::Comment, "/* block */".to_owned()),
            (TokenKind::CommentMulti, "/* multi\nline */".to_owned()),
        ]
    );
}

#[test]
fn line_comment_continues_after_backslash() {
    let lexed = lex("// a \\\n b\nc", LangFlags::C);
    assert_eq!(lexed.code()[0], (TokenKind::CommentCpp, "// a \\\n b".to_owned()));
    assert_eq!(lexed.find("c").orig_line, 3);

    // Two backslashes escape each other.
    let lexed = lex("// a \\\\\nb", LangFlags::C);
    assert_eq!(lexed.find("b").kind, TokenKind::Word);

    // C# has no continuation in comments.
    let lexed = lex("// a \\\nb", LangFlags::CS);
    assert_eq!(lexed.find("b").kind, TokenKind::Word);
}

#[test]
fn adjacent_block_comments_merge() {
    let lexed = lex("/* a */ /* b */ x", LangFlags::C);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::Comment, "/* a */ /* b */".to_owned()),
            (TokenKind::Word, "x".to_owned()),
        ]
    );
}

#[test]
fn d_comments_nest() {
    let lexed = lex("/+ a /+ b +/ c +/ x", LangFlags::D);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::Comment, "/+ a /+ b +/ c +/".to_owned()),
            (TokenKind::Word, "x".to_owned()),
        ]
    );
}

#[test]
fn unterminated_comment_is_a_warning() {
    let lexed = lex("x /* open\n", LangFlags::C);
    assert_eq!(lexed.kinds(), vec![TokenKind::Word, TokenKind::CommentMulti]);
    assert_eq!(lexed.warnings, 1);
    assert_eq!(lexed.errors, 0);
}

#[test]
fn lone_slash_star_at_end_is_punctuation() {
    let lexed = lex("a /*", LangFlags::C);
    assert_eq!(lexed.chunks()[1].kind, TokenKind::Arith);
}

#[test]
fn markers_toggle_suppression() {
    let lexed = lex("a;\n// *INDENT-OFF*\n b  =  c ;\n// *INDENT-ON*\nd;\n", LangFlags::C);
    assert!(lexed.suppression_used);
    assert!(!lexed.suppressed);
    assert_eq!(lexed.find(" b  =  c ;").kind, TokenKind::Ignored);
    assert_eq!(lexed.find("d").kind, TokenKind::Word);
}

#[test]
fn markers_are_configurable() {
    let mut settings = Settings::new();
    settings.set(OptionKey::DisableProcessingCmt, "fmt: off").unwrap();
    settings.set(OptionKey::EnableProcessingCmt, "fmt: on").unwrap();
    let keywords = KeywordTable::new();

    let lexed = lex_with("/* fmt: off */\nx  y\n", LangFlags::C, &settings, &keywords);
    assert!(lexed.suppressed);
    assert_eq!(lexed.find("x  y").kind, TokenKind::Ignored);

    let lexed = lex_with("/* *INDENT-OFF* */\nx\n", LangFlags::C, &settings, &keywords);
    assert!(!lexed.suppression_used);
}
