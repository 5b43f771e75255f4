//! Kind refinements that need a look at neighbouring chunks.
//!
//! Runs once over the tokenized list, before structure is resolved. Most
//! rules look at a chunk and the next chunk that is not a comment or a
//! newline: `[` `]` with nothing between them, `<...>` templates against
//! comparisons, the value of an `operator`, context keywords that are only
//! keywords in some positions.

use unc_ir::{ChunkFlags, ChunkId, ChunkList, ChunkText, LangFlags, PatternClass, TokenKind};
use unc_lexer_core::char_class::{is_keyword_char, is_keyword_start};

use crate::punctuators::find_punctuator;

/// Languages that write templates or generics with `<...>`.
const TEMPLATE_LANGS: LangFlags = lang!(CPP | CS | JAVA | OC | VALA);

/// Nesting limit while scanning for the end of a template argument list.
const MAX_TEMPLATE_DEPTH: usize = 1024;

/// Refine chunk kinds in place.
#[tracing::instrument(level = "debug", skip_all)]
pub fn tokenize_cleanup(list: &mut ChunkList, lang: LangFlags) {
    merge_empty_squares(list);

    let mut cleanup = Cleanup {
        lang,
        prev: None,
        in_type_cast: false,
    };
    let mut cur = list.head();
    while let Some(pc) = cur {
        let next = list.next_ncnl(pc);
        cleanup.refine(list, pc, next);
        cleanup.prev = Some(pc);
        cur = list.next_ncnl(pc);
    }
}

/// `[` `]` separated only by comments or newlines become one `[]`.
fn merge_empty_squares(list: &mut ChunkList) {
    let mut cur = list.head();
    while let Some(pc) = cur {
        let next = list.next_ncnl(pc);
        if list[pc].is(TokenKind::SquareOpen) && list.kind_of(next) == TokenKind::SquareClose {
            if let Some(close) = next {
                let end = list[close].orig_col_end;
                let open = &mut list[pc];
                open.kind = TokenKind::TSquare;
                open.text = ChunkText::from("[]");
                open.orig_col_end = end;
                list.remove(close);
            }
        }
        if list[pc].is(TokenKind::Semicolon) && list[pc].in_preproc() && !next.is_some_and(|n| list[n].in_preproc()) {
            tracing::debug!(line = list[pc].orig_line, "macro ends with a semicolon");
        }
        cur = list.next_ncnl(pc);
    }
}

struct Cleanup {
    lang: LangFlags,
    prev: Option<ChunkId>,
    /// Between `static_cast<` and its `>`.
    in_type_cast: bool,
}

impl Cleanup {
    #[inline]
    fn is_lang(&self, lang: LangFlags) -> bool {
        self.lang.intersects(lang)
    }

    fn refine(&mut self, list: &mut ChunkList, pc: ChunkId, next: Option<ChunkId>) {
        let next_kind = list.kind_of(next);
        let prev_kind = list.kind_of(self.prev);

        match list[pc].kind {
            TokenKind::Dot => list[pc].kind = TokenKind::Member,
            TokenKind::NullCond if self.is_lang(LangFlags::CS) => list[pc].kind = TokenKind::Member,

            TokenKind::DVersion => {
                list[pc].kind = if next_kind == TokenKind::ParenOpen {
                    TokenKind::DVersionIf
                } else {
                    TokenKind::Word
                };
            }
            TokenKind::DScope => {
                list[pc].kind = if next_kind == TokenKind::ParenOpen {
                    TokenKind::DScopeIf
                } else {
                    TokenKind::Type
                };
            }
            TokenKind::Unittest if self.is_lang(LangFlags::D) && prev_kind == TokenKind::ParenOpen => {
                list[pc].kind = TokenKind::Word;
            }
            TokenKind::If if self.is_lang(LangFlags::D) => self.merge_static_if(list, pc),

            TokenKind::Base if next_kind == TokenKind::ParenOpen => list[pc].kind = TokenKind::Word,
            TokenKind::Enum if next_kind == TokenKind::Class => {
                if let Some(next) = next {
                    list[next].kind = TokenKind::EnumClass;
                }
            }
            TokenKind::GetSet if next_kind != TokenKind::BraceOpen => {
                let after_statement = matches!(
                    prev_kind,
                    TokenKind::Semicolon | TokenKind::BraceClose | TokenKind::BraceOpen
                );
                match next {
                    Some(next) if next_kind == TokenKind::Semicolon && after_statement => {
                        list[pc].kind = TokenKind::GetSetEmpty;
                        list[next].parent_kind = TokenKind::GetSet;
                    }
                    _ => list[pc].kind = TokenKind::Word,
                }
            }
            TokenKind::Class => {
                // `interface` is only a keyword before `class`/`struct`, and
                // `class` may be a member name in Java.
                let next_is_word = next.is_some_and(|n| list[n].text.first().is_some_and(is_keyword_start));
                let scoped = list.kind_of(list.next(pc)) == TokenKind::DcMember;
                if (!next_is_word && !scoped) || prev_kind == TokenKind::Member || next_kind == TokenKind::Dot {
                    list[pc].kind = TokenKind::Word;
                }
            }
            TokenKind::Extern => {
                if !matches!(next_kind, TokenKind::String | TokenKind::ParenOpen) {
                    let after = next.and_then(|n| list.next_ncnl(n));
                    if list.kind_of(after) != TokenKind::BraceOpen {
                        list[pc].kind = TokenKind::Qualifier;
                    }
                }
            }
            TokenKind::TypeCast if next_kind == TokenKind::AngleOpen => {
                if let Some(next) = next {
                    list[next].parent_kind = TokenKind::TypeCast;
                    self.in_type_cast = true;
                }
            }
            TokenKind::AngleOpen if list[pc].parent_kind != TokenKind::TypeCast => {
                if self.is_lang(TEMPLATE_LANGS) {
                    check_template(list, self.lang, pc);
                } else {
                    list[pc].kind = TokenKind::Compare;
                }
            }
            TokenKind::AngleClose if list[pc].parent_kind != TokenKind::Template => {
                if self.in_type_cast {
                    self.in_type_cast = false;
                    list[pc].parent_kind = TokenKind::TypeCast;
                } else {
                    handle_double_angle_close(list, pc);
                }
            }
            TokenKind::Operator => {
                if let Some(next) = next {
                    operator_value(list, pc, next);
                }
            }
            TokenKind::Private => private_or_qualifier(list, pc, next),

            TokenKind::If | TokenKind::For | TokenKind::While
                if self.is_lang(LangFlags::OC) && next_kind != TokenKind::ParenOpen =>
            {
                list[pc].kind = TokenKind::Word;
            }
            TokenKind::Do
                if self.is_lang(LangFlags::OC)
                    && (prev_kind == TokenKind::Minus || next_kind == TokenKind::SquareClose) =>
            {
                list[pc].kind = TokenKind::Word;
            }
            TokenKind::OcImpl | TokenKind::OcIntf | TokenKind::OcProtocol => {
                if let Some(next) = next {
                    oc_class_name(list, pc, next);
                }
            }

            TokenKind::Preproc => list[pc].parent_kind = next_kind,
            TokenKind::PpPragma => {
                if let Some(next) = next.filter(|&n| list[n].is(TokenKind::PreprocBody)) {
                    let body = &list[next].text;
                    let region = if body.starts_with("region") {
                        Some(TokenKind::PpRegion)
                    } else if body.starts_with("endregion") {
                        Some(TokenKind::PpEndregion)
                    } else {
                        None
                    };
                    if let Some(kind) = region {
                        list[pc].kind = kind;
                        if let Some(prev) = self.prev {
                            list[prev].parent_kind = kind;
                        }
                    }
                }
            }

            TokenKind::Default if self.is_lang(LangFlags::CS) && next_kind == TokenKind::ParenOpen => {
                list[pc].kind = TokenKind::Sizeof;
            }
            TokenKind::Unsafe if next_kind != TokenKind::BraceOpen => list[pc].kind = TokenKind::Qualifier,
            TokenKind::Using if next_kind == TokenKind::ParenOpen => list[pc].kind = TokenKind::UsingStmt,
            TokenKind::Try if self.is_lang(LangFlags::JAVA) && next_kind == TokenKind::ParenOpen => {
                list[pc].kind = TokenKind::UsingStmt;
            }
            // A::A(int) try : B() { } catch (...) { }
            TokenKind::Try if list[pc].is_str("try") && next_kind == TokenKind::Colon => {
                list[pc].kind = TokenKind::Qualifier;
            }
            TokenKind::Synchronized if self.is_lang(LangFlags::JAVA) && next_kind != TokenKind::ParenOpen => {
                list[pc].kind = TokenKind::Qualifier;
            }
            TokenKind::For if list.kind_of(list.prev(pc)) == TokenKind::DcMember => {
                list[pc].kind = TokenKind::FuncCall;
            }
            _ => {}
        }

        if self.is_lang(LangFlags::CS) {
            nullable_type(list, pc);
        }
        self.refine_pair(list, pc);
    }

    /// Rules over a chunk and the one after it that only look at kinds.
    fn refine_pair(&self, list: &mut ChunkList, pc: ChunkId) {
        let Some(next) = list.next_ncnl(pc) else {
            return;
        };
        let kind = list[pc].kind;
        match list[next].kind {
            TokenKind::DcMember if kind == TokenKind::Word && self.is_lang(LangFlags::CPP) => {
                list[pc].kind = TokenKind::Type;
            }
            TokenKind::Word => match kind {
                TokenKind::Enum | TokenKind::EnumClass | TokenKind::Union | TokenKind::Struct => {
                    list[next].kind = TokenKind::Type;
                }
                TokenKind::Word => list[pc].kind = TokenKind::Type,
                _ => {}
            },
            TokenKind::Star if matches!(kind, TokenKind::Type | TokenKind::Qualifier | TokenKind::PtrType) => {
                list[next].kind = TokenKind::PtrType;
            }
            TokenKind::ParenOpen if kind == TokenKind::Word => list[pc].kind = TokenKind::Function,
            _ => {}
        }
    }

    /// D `static if` becomes one chunk.
    fn merge_static_if(&mut self, list: &mut ChunkList, pc: ChunkId) {
        let Some(prev) = self.prev.filter(|&p| list[p].is_str("static")) else {
            return;
        };
        let mut text = list[prev].text.clone();
        text.push(' ');
        text.append(&list[pc].text);
        let (line, col) = (list[prev].orig_line, list[prev].orig_col);
        let chunk = &mut list[pc];
        chunk.text = text;
        chunk.orig_line = line;
        chunk.orig_col = col;
        chunk.column = col;
        self.prev = list.prev_ncnl(prev);
        list.remove(prev);
    }
}

/// `public`, `private` and `protected` are labels before a colon and
/// qualifiers otherwise. Qt's `slots:` and `signals` are handled too.
fn private_or_qualifier(list: &mut ChunkList, pc: ChunkId, next: Option<ChunkId>) {
    let mut colon = next;
    if let Some(next) = next {
        if list[next].is_str("slots") || list[next].is_str("Q_SLOTS") {
            if let Some(after) = list.next(next).filter(|&a| list[a].is(TokenKind::Colon)) {
                colon = Some(after);
            }
        }
    }
    match colon.filter(|&c| list[c].is(TokenKind::Colon)) {
        Some(colon) => {
            list[colon].kind = TokenKind::PrivateColon;
            if let Some(after) = list.next_ncnl(colon) {
                list[after].flags |= ChunkFlags::STMT_START | ChunkFlags::EXPR_START;
            }
        }
        None => {
            let signals = list[pc].is_str("signals") || list[pc].is_str("Q_SIGNALS");
            list[pc].kind = if signals { TokenKind::Word } else { TokenKind::Qualifier };
        }
    }
}

/// The chunk after `operator` becomes its value, merging multi-chunk
/// forms: `()`, `>>`, and type names such as `const char *`.
fn operator_value(list: &mut ChunkList, pc: ChunkId, next: ChunkId) {
    let after = list.next(next);
    match list[next].kind {
        TokenKind::ParenOpen => {
            if let Some(close) = after.filter(|&a| list[a].is(TokenKind::ParenClose)) {
                let value = &mut list[next];
                value.kind = TokenKind::OperatorVal;
                value.text = ChunkText::from("()");
                value.orig_col_end += 1;
                list.remove(close);
            }
        }
        TokenKind::AngleClose
            if after.is_some_and(|a| list[a].is(TokenKind::AngleClose) && list[a].orig_col == list[next].orig_col_end) =>
        {
            if let Some(second) = after {
                let value = &mut list[next];
                value.kind = TokenKind::OperatorVal;
                value.text.push('>');
                value.orig_col_end += 1;
                list.remove(second);
            }
        }
        _ if list[next].flags.contains(ChunkFlags::PUNCTUATOR) => list[next].kind = TokenKind::OperatorVal,
        _ => {
            // Conversion operator: collect the whole type.
            let mut text = list[next].text.clone();
            let mut cur = list.next(next);
            while let Some(part) = cur.filter(|&c| is_type_part(list[c].kind)) {
                if text.last().is_some_and(is_keyword_char) && list[part].text.first().is_some_and(is_keyword_char) {
                    text.push(' ');
                }
                text.append(&list[part].text);
                cur = list.next(part);
                list.remove(part);
            }
            let value = &mut list[next];
            value.orig_col_end = value
                .orig_col
                .saturating_add(u32::try_from(text.len()).unwrap_or(u32::MAX));
            value.text = text;
            value.kind = TokenKind::OperatorVal;
        }
    }
    list[next].parent_kind = TokenKind::Operator;
    tracing::trace!(line = list[pc].orig_line, value = %list[next].text, "operator");
}

fn is_type_part(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Word
            | TokenKind::Amp
            | TokenKind::TSquare
            | TokenKind::Qualifier
            | TokenKind::Type
            | TokenKind::Star
            | TokenKind::Caret
    )
}

/// `@interface Name`, `@implementation Name (Category)`, `@protocol Name`.
fn oc_class_name(list: &mut ChunkList, pc: ChunkId, next: ChunkId) {
    let kind = list[pc].kind;
    if !list[next].is(TokenKind::ParenOpen) {
        list[next].kind = TokenKind::OcClass;
    }
    list[next].parent_kind = kind;
    if let Some(after) = list.next_ncnl(next) {
        list[after].flags |= ChunkFlags::STMT_START | ChunkFlags::EXPR_START;
    }

    let end = list.next_of_kind(pc, TokenKind::OcEnd);
    if let Some(end) = end {
        list[end].parent_kind = kind;
    }
    if kind == TokenKind::OcIntf {
        // Statement keywords are plain words inside an interface.
        let mut cur = list.next_ncnl(pc);
        while let Some(id) = cur.filter(|&c| Some(c) != end) {
            if list[id].kind.pattern_class() != PatternClass::None {
                list[id].kind = TokenKind::Word;
            }
            cur = list.next_ncnl(id);
        }
    }
}

/// C# `int?` written without a blank becomes one type chunk.
fn nullable_type(list: &mut ChunkList, pc: ChunkId) {
    let Some(question) = list.next_ncnl(pc).filter(|&q| list[q].is(TokenKind::Question)) else {
        return;
    };
    let adjacent = u32::try_from(list[pc].text.len())
        .is_ok_and(|len| list[question].orig_col == list[pc].orig_col + len);
    if !adjacent {
        return;
    }
    let Some(after) = list.next_ncnl(question) else {
        return;
    };
    let is_type = match list[after].kind {
        TokenKind::ParenClose | TokenKind::AngleClose => true,
        TokenKind::Word => matches!(
            list.kind_of(list.next_ncnl(after)),
            TokenKind::Semicolon | TokenKind::Assign | TokenKind::BraceOpen | TokenKind::Comma
        ),
        _ => false,
    };
    if is_type {
        let end = list[question].orig_col_end;
        let chunk = &mut list[pc];
        chunk.text.push('?');
        chunk.orig_col_end = end;
        list.remove(question);
    }
}

/// A `>` that is not a template close: adjacent `>` `>` merge into a
/// shift, anything else is a comparison.
fn handle_double_angle_close(list: &mut ChunkList, pc: ChunkId) {
    let next = list.next(pc).filter(|&n| {
        list[n].is(TokenKind::AngleClose)
            && list[n].parent_kind == TokenKind::None
            && list[n].orig_col == list[pc].orig_col_end
    });
    match next {
        Some(next) if list[pc].parent_kind == TokenKind::None => {
            let end = list[next].orig_col_end;
            let chunk = &mut list[pc];
            chunk.text.push('>');
            chunk.kind = TokenKind::Arith;
            chunk.orig_col_end = end;
            list.remove(next);
        }
        _ => list[pc].kind = TokenKind::Compare,
    }
}

/// Split a `>>`, `>=` or `>>=` that closes a template into `>` and the
/// rest.
fn split_off_angle_close(list: &mut ChunkList, lang: LangFlags, pc: ChunkId) {
    let rest = &list[pc].text.as_chars()[1..];
    let Some(punc) = find_punctuator(rest, lang, false).filter(|p| p.text.chars().count() == rest.len()) else {
        return;
    };
    let mut tail = list[pc].clone();
    tail.kind = punc.kind;
    tail.text = ChunkText::from_chars(rest);
    tail.orig_col += 1;
    tail.column += 1;

    let chunk = &mut list[pc];
    chunk.text = ChunkText::from(">");
    chunk.kind = TokenKind::AngleClose;
    chunk.orig_col_end = chunk.orig_col + 1;
    list.add_after(pc, tail);
}

/// Step to the next chunk that is not a comment or newline without leaving
/// the preprocessor line `from` is on. From outside one, preprocessor lines
/// are skipped.
fn step_in_scope(list: &ChunkList, from: ChunkId, forward: bool) -> Option<ChunkId> {
    let in_pp = list[from].in_preproc();
    let mut cur = from;
    loop {
        cur = if forward {
            list.next_ncnl(cur)?
        } else {
            list.prev_ncnl(cur)?
        };
        match (in_pp, list[cur].in_preproc()) {
            (true, false) => return None,
            (false, true) => {}
            _ => return Some(cur),
        }
    }
}

/// Decide whether the `<` at `start` opens a template argument list. If
/// so, mark the list and its closing `>`; if not, `start` becomes a
/// comparison.
fn check_template(list: &mut ChunkList, lang: LangFlags, start: ChunkId) {
    let Some(prev) = step_in_scope(list, start, false) else {
        list[start].kind = TokenKind::Compare;
        return;
    };

    let end = if list[prev].is(TokenKind::Template) {
        template_declaration_end(list, lang, start)
    } else {
        let names_template = matches!(
            list[prev].kind,
            TokenKind::Word | TokenKind::Type | TokenKind::Comma | TokenKind::OperatorVal
        ) || list[prev].parent_kind == TokenKind::Operator;
        if !names_template {
            tracing::trace!(line = list[start].orig_line, after = %list[prev].kind, "not a template");
            list[start].kind = TokenKind::Compare;
            return;
        }
        match template_context(list, start) {
            Some(in_if) => template_argument_end(list, lang, start, in_if),
            None => {
                list[start].kind = TokenKind::Compare;
                return;
            }
        }
    };

    if let Some(end) = end.filter(|&e| list[e].is(TokenKind::AngleClose)) {
        let after = step_in_scope(list, end, true);
        if list.kind_of(after) != TokenKind::Number {
            tracing::trace!(line = list[start].orig_line, col = list[start].orig_col, "template");
            mark_template(list, start, end);
            return;
        }
    }
    list[start].kind = TokenKind::Compare;
}

/// `template< ... >`: the first `>` at depth zero.
fn template_declaration_end(list: &mut ChunkList, lang: LangFlags, start: ChunkId) -> Option<ChunkId> {
    let mut depth = 1usize;
    let mut cur = step_in_scope(list, start, true);
    while let Some(pc) = cur {
        if list[pc].text.first() == Some('>') && list[pc].text.len() > 1 {
            split_off_angle_close(list, lang, pc);
        }
        if list[pc].is_str("<") {
            depth += 1;
        } else if list[pc].is_str(">") {
            depth -= 1;
            if depth == 0 {
                return Some(pc);
            }
        }
        cur = step_in_scope(list, pc, true);
    }
    None
}

/// Scan back to the start of the statement. `None` when the `<` is inside
/// square brackets; otherwise whether it follows `if` or `return`.
fn template_context(list: &ChunkList, start: ChunkId) -> Option<bool> {
    let mut cur = step_in_scope(list, start, false);
    while let Some(pc) = cur {
        match list[pc].kind {
            TokenKind::Semicolon | TokenKind::BraceOpen | TokenKind::BraceClose | TokenKind::SquareClose => break,
            TokenKind::If | TokenKind::Return => return Some(true),
            TokenKind::SquareOpen => return None,
            _ => {}
        }
        cur = step_in_scope(list, pc, false);
    }
    Some(false)
}

/// `name< ... >`: the arguments may hold anything but braces, semicolons
/// and unbalanced parens. Inside an `if`, a boolean or comparison
/// operator means this is no template.
fn template_argument_end(list: &mut ChunkList, lang: LangFlags, start: ChunkId, in_if: bool) -> Option<ChunkId> {
    let mut open = vec![TokenKind::AngleOpen];
    let mut cur = step_in_scope(list, start, true);
    while let Some(pc) = cur {
        let text = &list[pc].text;
        if open.last() == Some(&TokenKind::AngleOpen) && open.len() >= 2 && text.eq_str(">>") {
            split_off_angle_close(list, lang, pc);
        }

        if list[pc].is_str("<") {
            open.push(TokenKind::AngleOpen);
        } else if list[pc].is_str(">") {
            if open.last() == Some(&TokenKind::ParenOpen) {
                handle_double_angle_close(list, pc);
            } else {
                open.pop();
                if open.is_empty() {
                    return Some(pc);
                }
            }
        } else {
            match list[pc].kind {
                TokenKind::Bool | TokenKind::Compare if in_if => return Some(pc),
                TokenKind::BraceOpen | TokenKind::BraceClose | TokenKind::Semicolon => return Some(pc),
                TokenKind::ParenOpen => {
                    if open.len() >= MAX_TEMPLATE_DEPTH {
                        return Some(pc);
                    }
                    open.push(TokenKind::ParenOpen);
                }
                TokenKind::ParenClose => {
                    if open.pop() != Some(TokenKind::ParenOpen) {
                        return Some(pc);
                    }
                }
                _ => {}
            }
        }
        cur = step_in_scope(list, pc, true);
    }
    None
}

fn mark_template(list: &mut ChunkList, start: ChunkId, end: ChunkId) {
    list[start].parent_kind = TokenKind::Template;
    let mut cur = Some(start);
    while let Some(pc) = cur.filter(|&c| c != end) {
        let next = step_in_scope(list, pc, true);
        list[pc].flags |= ChunkFlags::IN_TEMPLATE;
        if list.kind_of(next) != TokenKind::ParenOpen {
            make_type(&mut list[pc].kind);
        }
        cur = next;
    }
    list[end].parent_kind = TokenKind::Template;
    list[end].flags |= ChunkFlags::IN_TEMPLATE;
}

fn make_type(kind: &mut TokenKind) {
    match *kind {
        TokenKind::Word => *kind = TokenKind::Type,
        TokenKind::Star => *kind = TokenKind::PtrType,
        _ => {}
    }
}
