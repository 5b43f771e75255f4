use pretty_assertions::assert_eq;
use unc_ir::{ChunkFlags, LangFlags, TokenKind};

use crate::test_helpers::{joined, lex, raw};

#[test]
fn empty_input() {
    let lexed = lex("", LangFlags::C);
    assert!(lexed.list.is_empty());
    assert_eq!(lexed.errors, 0);
    assert!(raw("", LangFlags::C).is_empty());
}

#[test]
fn raw_keeps_blanks_that_tokenize_drops() {
    let source = "int  x ;\t// c  \n";
    let chunks = raw(source, LangFlags::C);
    assert_eq!(joined(&chunks), source);
    assert!(chunks.iter().any(|chunk| chunk.is(TokenKind::Whitespace)));

    let lexed = lex(source, LangFlags::C);
    assert!(!lexed.kinds().contains(&TokenKind::Whitespace));
    let raw_kinds: Vec<TokenKind> = chunks
        .iter()
        .map(|chunk| chunk.kind)
        .filter(|&kind| kind != TokenKind::Whitespace)
        .collect();
    assert_eq!(lexed.kinds(), raw_kinds);
}

#[test]
fn trailing_blanks_are_trimmed() {
    let lexed = lex("x; // note  \t\n", LangFlags::C);
    assert_eq!(lexed.find("// note").kind, TokenKind::CommentCpp);

    let chunks = raw("x; // note  \t\n", LangFlags::C);
    assert!(chunks.iter().any(|chunk| chunk.is_str("// note  \t")));
}

#[test]
fn blank_before_chunk_is_recorded() {
    let lexed = lex("a   = b;\n  c;  d;\n", LangFlags::C);
    assert_eq!(lexed.find("=").orig_prev_sp, 3);
    assert_eq!(lexed.find("a").orig_prev_sp, 0);
    // Indentation after a newline is not a gap between chunks.
    assert_eq!(lexed.find("c").orig_prev_sp, 0);
    assert_eq!(lexed.find("d").orig_prev_sp, 2);
}

#[test]
fn preprocessor_flag_ends_at_newline() {
    let lexed = lex("#define A 1\nint b;\n", LangFlags::C);
    assert!(lexed.find("A").flags.contains(ChunkFlags::IN_PREPROC));
    assert!(!lexed.find("int").flags.contains(ChunkFlags::IN_PREPROC));
    let newline = lexed
        .chunks()
        .into_iter()
        .find(|chunk| chunk.is(TokenKind::Newline))
        .map(|chunk| chunk.flags);
    assert_eq!(newline.map(|flags| flags.contains(ChunkFlags::IN_PREPROC)), Some(false));
}

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_round_trip {
    use proptest::prelude::*;

    use super::*;

    const LANGS: [LangFlags; 8] = [
        LangFlags::C,
        LangFlags::CPP,
        LangFlags::D,
        LangFlags::CS,
        LangFlags::JAVA,
        LangFlags::OC,
        LangFlags::VALA,
        LangFlags::PAWN,
    ];

    proptest! {
        #[test]
        fn raw_chunks_reproduce_the_input(
            source in r#"[a-zA-Z0-9_ \t\n\r/*"'#{}()\[\];,.<>=+\-\\@$`!?:%&|^~]{0,80}"#,
            lang in 0..LANGS.len(),
        ) {
            let chunks = raw(&source, LANGS[lang]);
            prop_assert_eq!(joined(&chunks), source);
        }

        #[test]
        fn lines_never_go_backwards(
            source in r#"[a-z0-9 \t\n/*"'#{}();<>\\]{0,80}"#,
            lang in 0..LANGS.len(),
        ) {
            let lexed = lex(&source, LANGS[lang]);
            let lines: Vec<u32> = lexed.chunks().iter().map(|chunk| chunk.orig_line).collect();
            prop_assert!(lines.windows(2).all(|pair| pair[0] <= pair[1]));
            prop_assert!(lexed.chunks().iter().all(|chunk| chunk.orig_col >= 1));
        }
    }
}
