//! Punctuator table and longest-match lookup.
//!
//! Entries are grouped by length, longest first, so the first entry that
//! prefixes the input and applies to the language is the longest match.
//! Digraph and trigraph entries carry `LangFlags::DIGRAPH` and only match
//! when digraphs are enabled.

use unc_ir::{LangFlags, TokenKind};

/// One entry of the punctuator table.
#[derive(Copy, Clone, Debug)]
pub struct Punctuator {
    pub text: &'static str,
    pub kind: TokenKind,
    pub lang: LangFlags,
}

const fn punc(text: &'static str, kind: TokenKind, lang: LangFlags) -> Punctuator {
    Punctuator { text, kind, lang }
}

/// Longest punctuator text.
pub const MAX_PUNCTUATOR_LEN: usize = 6;

static PUNCTUATORS: &[Punctuator] = &[
    // ─── 6 ───
    punc("??(??)", TokenKind::TSquare, lang!(CPP | DIGRAPH)),
    punc("??!??!", TokenKind::Bool, lang!(CPP | DIGRAPH)),
    punc("??=??=", TokenKind::Pp, lang!(CPP | DIGRAPH)),
    // ─── 5 ───
    punc("??!=", TokenKind::Assign, lang!(CPP | DIGRAPH)),
    punc("??'=", TokenKind::Assign, lang!(CPP | DIGRAPH)),
    punc("??=@", TokenKind::Pound, lang!(CPP | DIGRAPH)),
    // ─── 4 ───
    punc("!<>=", TokenKind::Compare, lang!(D)),
    punc(">>>=", TokenKind::Assign, lang!(D | JAVA | PAWN)),
    punc("<::>", TokenKind::TSquare, lang!(CPP | DIGRAPH)),
    punc("%:%:", TokenKind::Pp, lang!(CPP | DIGRAPH)),
    // ─── 3 ───
    punc("!<=", TokenKind::Compare, lang!(D)),
    punc("!<>", TokenKind::Compare, lang!(D)),
    punc("!==", TokenKind::Compare, lang!(D)),
    punc("!>=", TokenKind::Compare, lang!(D)),
    punc("->*", TokenKind::Member, lang!(C | CPP | D)),
    punc("...", TokenKind::Ellipsis, lang!(C | CPP | D | JAVA | PAWN)),
    punc("<<=", TokenKind::Assign, lang!(ALL)),
    punc("<>=", TokenKind::Compare, lang!(D)),
    punc("===", TokenKind::Compare, lang!(D)),
    punc(">>=", TokenKind::Assign, lang!(ALL)),
    punc(">>>", TokenKind::Arith, lang!(D | JAVA | PAWN)),
    punc("%:@", TokenKind::Pound, lang!(C | CPP | OC)),
    punc("??=", TokenKind::Pound, lang!(C | CPP | DIGRAPH)),
    punc("??(", TokenKind::SquareOpen, lang!(C | CPP | DIGRAPH)),
    punc("??)", TokenKind::SquareClose, lang!(C | CPP | DIGRAPH)),
    punc("??'", TokenKind::Caret, lang!(C | CPP | DIGRAPH)),
    punc("??<", TokenKind::BraceOpen, lang!(C | CPP | DIGRAPH)),
    punc("??>", TokenKind::BraceClose, lang!(C | CPP | DIGRAPH)),
    punc("??-", TokenKind::Inv, lang!(C | CPP | DIGRAPH)),
    punc("??!", TokenKind::Arith, lang!(C | CPP | DIGRAPH)),
    // ─── 2 ───
    punc("!<", TokenKind::Compare, lang!(D)),
    punc("!=", TokenKind::Compare, lang!(ALL)),
    punc("!>", TokenKind::Compare, lang!(D)),
    punc("!~", TokenKind::Compare, lang!(D)),
    punc("##", TokenKind::Pp, lang!(C | CPP | OC)),
    punc("#@", TokenKind::Pound, lang!(C | CPP | OC)),
    punc("%=", TokenKind::Assign, lang!(ALL)),
    punc("&&", TokenKind::Bool, lang!(ALL)),
    punc("&=", TokenKind::Assign, lang!(ALL)),
    punc("*=", TokenKind::Assign, lang!(ALL)),
    punc("++", TokenKind::IncDecAfter, lang!(ALL)),
    punc("+=", TokenKind::Assign, lang!(ALL)),
    punc("--", TokenKind::IncDecAfter, lang!(ALL)),
    punc("-=", TokenKind::Assign, lang!(ALL)),
    punc("->", TokenKind::Member, lang!(C | CPP | D | CS | JAVA | OC | VALA | ECMA)),
    punc(".*", TokenKind::Member, lang!(C | CPP | D)),
    punc("..", TokenKind::Range, lang!(D)),
    punc("?.", TokenKind::NullCond, lang!(CS)),
    punc("/=", TokenKind::Assign, lang!(ALL)),
    punc("::", TokenKind::DcMember, lang!(C | CPP | D | CS | VALA)),
    punc("<<", TokenKind::Arith, lang!(ALL)),
    punc("<=", TokenKind::Compare, lang!(ALL)),
    punc("<>", TokenKind::Compare, lang!(D)),
    punc("==", TokenKind::Compare, lang!(ALL)),
    punc(">=", TokenKind::Compare, lang!(ALL)),
    punc(">>", TokenKind::Arith, lang!(ALL)),
    punc("[]", TokenKind::TSquare, lang!(ALL)),
    punc("^=", TokenKind::Assign, lang!(ALL)),
    punc("|=", TokenKind::Assign, lang!(ALL)),
    punc("||", TokenKind::Bool, lang!(ALL)),
    punc("~=", TokenKind::Compare, lang!(D)),
    punc("~~", TokenKind::Compare, lang!(D)),
    punc("=>", TokenKind::Lambda, lang!(D | CS | VALA)),
    punc("??", TokenKind::Compare, lang!(CS | VALA)),
    punc("<%", TokenKind::BraceOpen, lang!(C | CPP | DIGRAPH)),
    punc("%>", TokenKind::BraceClose, lang!(C | CPP | DIGRAPH)),
    punc("<:", TokenKind::SquareOpen, lang!(C | CPP | DIGRAPH)),
    punc(":>", TokenKind::SquareClose, lang!(C | CPP | DIGRAPH)),
    punc("%:", TokenKind::Pound, lang!(C | CPP | DIGRAPH)),
    // ─── 1 ───
    punc("!", TokenKind::Not, lang!(ALL)),
    punc("#", TokenKind::Pound, lang!(C | CPP | D | CS | OC | VALA | PAWN)),
    punc("$", TokenKind::Compare, lang!(D)),
    punc("%", TokenKind::Arith, lang!(ALL)),
    punc("&", TokenKind::Amp, lang!(ALL)),
    punc("(", TokenKind::ParenOpen, lang!(ALL)),
    punc(")", TokenKind::ParenClose, lang!(ALL)),
    punc("*", TokenKind::Star, lang!(ALL)),
    punc("+", TokenKind::Plus, lang!(ALL)),
    punc(",", TokenKind::Comma, lang!(ALL)),
    punc("-", TokenKind::Minus, lang!(ALL)),
    punc(".", TokenKind::Dot, lang!(ALL)),
    punc("/", TokenKind::Arith, lang!(ALL)),
    punc(":", TokenKind::Colon, lang!(ALL)),
    punc(";", TokenKind::Semicolon, lang!(ALL)),
    punc("<", TokenKind::AngleOpen, lang!(ALL)),
    punc("=", TokenKind::Assign, lang!(ALL)),
    punc(">", TokenKind::AngleClose, lang!(ALL)),
    punc("@", TokenKind::OcAt, lang!(OC)),
    punc("?", TokenKind::Question, lang!(ALL)),
    punc("[", TokenKind::SquareOpen, lang!(ALL)),
    punc("]", TokenKind::SquareClose, lang!(ALL)),
    punc("^", TokenKind::Caret, lang!(ALL)),
    punc("{", TokenKind::BraceOpen, lang!(ALL)),
    punc("|", TokenKind::Arith, lang!(ALL)),
    punc("}", TokenKind::BraceClose, lang!(ALL)),
    punc("~", TokenKind::Inv, lang!(ALL)),
];

/// Longest punctuator at the start of `text` for the active language.
pub fn find_punctuator(text: &[char], lang: LangFlags, digraphs: bool) -> Option<&'static Punctuator> {
    PUNCTUATORS.iter().find(|entry| {
        entry.lang.applies_to(lang)
            && (digraphs || !entry.lang.contains(LangFlags::DIGRAPH))
            && starts_with(text, entry.text)
    })
}

fn starts_with(text: &[char], prefix: &str) -> bool {
    let mut chars = text.iter();
    prefix.chars().all(|ch| chars.next() == Some(&ch))
}

/// The whole table, for tests.
pub fn punctuators() -> &'static [Punctuator] {
    PUNCTUATORS
}

#[cfg(test)]
mod tests;
