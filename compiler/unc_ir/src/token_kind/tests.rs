use super::*;
use pretty_assertions::assert_eq;

#[test]
fn names_round_trip() {
    for &kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_name(kind.name()), Some(kind), "{kind:?}");
    }
}

#[test]
fn from_name_is_case_insensitive() {
    assert_eq!(TokenKind::from_name("brace_open"), Some(TokenKind::BraceOpen));
    assert_eq!(TokenKind::from_name("no_such_kind"), None);
}

#[test]
fn names_are_unique() {
    let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(names.len(), before);
}

#[test]
fn inverse_pairs_openers_and_closers() {
    for &kind in TokenKind::ALL {
        if kind.is_opener() {
            let close = kind.inverse();
            assert!(close.is_closer(), "{kind:?} -> {close:?}");
            assert_eq!(close.inverse(), kind);
        } else if !kind.is_closer() {
            assert_eq!(kind.inverse(), kind);
        }
    }
}

#[test]
fn brace_like_covers_virtual_and_macro() {
    assert!(TokenKind::VBraceOpen.is_brace_like());
    assert!(TokenKind::MacroClose.is_brace_like());
    assert!(!TokenKind::ParenOpen.is_brace_like());
    assert!(!TokenKind::SquareOpen.is_brace_like());
}

#[test]
fn virtual_kinds() {
    assert!(TokenKind::VSemicolon.is_virtual());
    assert!(TokenKind::VSemicolon.is_semicolon());
    assert!(!TokenKind::Semicolon.is_virtual());
}

#[test]
fn opaque_bodies_are_directives() {
    for &kind in TokenKind::ALL {
        if kind.has_opaque_body() {
            assert!(kind.is_pp_directive(), "{kind:?}");
        }
    }
    assert!(!TokenKind::PpDefine.has_opaque_body());
    assert!(!TokenKind::PpIf.has_opaque_body());
}

#[test]
fn pattern_classes() {
    use crate::PatternClass;
    assert_eq!(TokenKind::If.pattern_class(), PatternClass::PBraced);
    assert_eq!(TokenKind::Do.pattern_class(), PatternClass::Braced);
    assert_eq!(TokenKind::Catch.pattern_class(), PatternClass::OpBraced);
    assert_eq!(TokenKind::Namespace.pattern_class(), PatternClass::VBraced);
    assert_eq!(TokenKind::WhileOfDo.pattern_class(), PatternClass::Paren);
    assert_eq!(TokenKind::Invariant.pattern_class(), PatternClass::OpParen);
    assert_eq!(TokenKind::Else.pattern_class(), PatternClass::Else);
    assert_eq!(TokenKind::Word.pattern_class(), PatternClass::None);
}
