use pretty_assertions::assert_eq;

use super::{ParenStackEntry, ParseFrame, MAX_PAREN_DEPTH};
use unc_ir::{BraceStage, TokenKind};

fn entry(kind: TokenKind) -> ParenStackEntry {
    ParenStackEntry {
        kind,
        ..ParenStackEntry::default()
    }
}

#[test]
fn new_frame_has_only_the_sentinel() {
    let mut frame = ParseFrame::new();
    assert!(frame.is_empty());
    assert_eq!(frame.depth(), 0);
    assert_eq!(frame.top().kind, TokenKind::None);
    assert_eq!(frame.pop(), None);
    assert_eq!(frame.top().kind, TokenKind::None);
    assert!(frame.entries().is_empty());
}

#[test]
fn push_and_pop_follow_stack_order() {
    let mut frame = ParseFrame::new();
    assert!(frame.push(entry(TokenKind::BraceOpen)));
    assert!(frame.push(entry(TokenKind::ParenOpen)));
    assert_eq!(frame.depth(), 2);
    assert_eq!(frame.top().kind, TokenKind::ParenOpen);
    assert_eq!(frame.prev().map(|e| e.kind), Some(TokenKind::BraceOpen));

    assert_eq!(frame.pop().map(|e| e.kind), Some(TokenKind::ParenOpen));
    assert_eq!(frame.pop().map(|e| e.kind), Some(TokenKind::BraceOpen));
    assert_eq!(frame.pop(), None);
}

#[test]
fn push_refuses_past_the_depth_limit() {
    let mut frame = ParseFrame::new();
    for _ in 0..MAX_PAREN_DEPTH {
        assert!(frame.push(entry(TokenKind::ParenOpen)));
    }
    assert!(!frame.push(entry(TokenKind::SquareOpen)));
    assert_eq!(frame.depth(), MAX_PAREN_DEPTH);
    assert_eq!(frame.top().kind, TokenKind::ParenOpen);
}

#[test]
fn below_top_is_innermost_first_without_the_top() {
    let mut frame = ParseFrame::new();
    assert_eq!(frame.below_top().count(), 0);
    assert!(frame.push(entry(TokenKind::For)));
    assert_eq!(frame.below_top().count(), 0);
    assert!(frame.push(entry(TokenKind::SParenOpen)));
    assert!(frame.push(entry(TokenKind::ParenOpen)));

    let kinds: Vec<TokenKind> = frame.below_top().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![TokenKind::SParenOpen, TokenKind::For]);
}

#[test]
fn define_frame_starts_one_level_in() {
    let frame = ParseFrame::for_define();
    assert_eq!(frame.level, 1);
    assert_eq!(frame.brace_level, 1);
    assert_eq!(frame.depth(), 1);
    assert_eq!(frame.top().kind, TokenKind::PpDefine);
    assert!(frame.top().in_preproc);
}

#[test]
fn describe_shows_stages() {
    let mut frame = ParseFrame::new();
    assert!(frame.push(ParenStackEntry {
        kind: TokenKind::If,
        stage: BraceStage::Brace2,
        ..ParenStackEntry::default()
    }));
    assert!(frame.push(entry(TokenKind::VBraceOpen)));
    assert_eq!(frame.describe(), "[IF-Brace2] [VBRACE_OPEN]");
}
