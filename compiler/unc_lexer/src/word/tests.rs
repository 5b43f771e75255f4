use pretty_assertions::assert_eq;
use unc_ir::{LangFlags, Settings, TokenKind};

use crate::test_helpers::{lex, lex_with};
use crate::KeywordTable;

#[test]
fn keywords_and_words() {
    let lexed = lex("while (x) return y;", LangFlags::C);
    assert_eq!(lexed.find("while").kind, TokenKind::While);
    assert_eq!(lexed.find("x").kind, TokenKind::Word);
    assert_eq!(lexed.find("return").kind, TokenKind::Return);
}

#[test]
fn directive_words_only_after_pound() {
    let lexed = lex("#if X\nif (x) {}\n#endif\n", LangFlags::C);
    let kinds: Vec<TokenKind> = lexed
        .chunks()
        .iter()
        .filter(|chunk| chunk.is_str("if"))
        .map(|chunk| chunk.kind)
        .collect();
    assert_eq!(kinds, vec![TokenKind::PpIf, TokenKind::If]);
    assert_eq!(lexed.find("endif").kind, TokenKind::PpEndif);
}

#[test]
fn define_names_macros() {
    let lexed = lex("#define F(a) a\n#define V (1)\n", LangFlags::C);
    assert_eq!(lexed.find("F").kind, TokenKind::MacroFunc);
    assert_eq!(lexed.find("V").kind, TokenKind::Macro);

    // Keywords inside a define body are code keywords.
    let lexed = lex("#define LOOP while (1)\n", LangFlags::C);
    assert_eq!(lexed.find("while").kind, TokenKind::While);
}

#[test]
fn unicode_and_escapes_are_plain_words() {
    let lexed = lex("\\u00e9t\u{e9} caf\u{e9} if\\u0041", LangFlags::C);
    assert_eq!(
        lexed.code(),
        vec![
            (TokenKind::Word, "\\u00e9t\u{e9}".to_owned()),
            (TokenKind::Word, "caf\u{e9}".to_owned()),
            (TokenKind::Word, "if\\u0041".to_owned()),
        ]
    );
}

#[test]
fn java_annotations() {
    let lexed = lex("@Override @interface Foo", LangFlags::JAVA);
    assert_eq!(lexed.find("@Override").kind, TokenKind::Annotation);
    assert_eq!(lexed.find("@interface").kind, TokenKind::Class);
}

#[test]
fn objc_at_keywords() {
    let lexed = lex("@interface Foo @end", LangFlags::OC);
    assert_eq!(lexed.find("@interface").kind, TokenKind::OcIntf);
    assert_eq!(lexed.find("@end").kind, TokenKind::OcEnd);
}

#[test]
fn configured_keywords_apply() {
    let settings = Settings::new();
    let mut keywords = KeywordTable::new();
    keywords.add("u8", TokenKind::Type);
    let lexed = lex_with("u8 x;", LangFlags::C, &settings, &keywords);
    assert_eq!(lexed.find("u8").kind, TokenKind::Type);
}
