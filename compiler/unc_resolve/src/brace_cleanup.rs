//! Brace levels, paren levels and virtual braces.
//!
//! Two stacks drive the pass. The paren stack of the current
//! [`ParseFrame`] holds everything nestable: brackets, virtual braces, and
//! statement keywords going through their stages. For `if (x) { x--; }`:
//!
//! ```text
//! if    [IF-Paren1]
//! (     [IF-Paren1] [SPAREN_OPEN]
//! )     [IF-Brace2]
//! {     [IF-Brace2] [BRACE_OPEN]
//! }     [IF-Else]           no `else` follows: the `if` is closed
//! ```
//!
//! Without braces, `if (x) x--; else x++;` gets virtual ones:
//!
//! ```text
//! x     [IF-Brace2] [VBRACE_OPEN]   inserted before `x`
//! ;     [IF-Brace2] [VBRACE_OPEN]   VBRACE_CLOSE inserted after `;`
//! else  [ELSE-ElseIf]               `if` swapped for `else`
//! x     [ELSE-Brace2] [VBRACE_OPEN]
//! ```
//!
//! The [`FrameStack`] saves whole frames for `#if`/`#else`/`#endif` and for
//! `#define` bodies, which are resolved in a frame of their own.

use unc_diagnostic::{Diagnostic, ErrorCode};
use unc_ir::{BraceStage, Chunk, ChunkFlags, ChunkId, ChunkList, LangFlags, OptionKey, PatternClass, TokenKind};

use crate::frame::ParenStackEntry;
use crate::{pawn, FrameStack, ParseFrame, ResolveError, ResolverContext, MAX_PAREN_DEPTH};

/// Resolve the structure of `list` in place.
///
/// Every chunk gets its levels; openers and closers get their parent kind;
/// virtual braces (and, in Pawn, virtual semicolons) are inserted. Counted
/// problems go to `ctx.diagnostics`.
#[tracing::instrument(level = "debug", skip_all, fields(chunks = list.len()))]
pub fn brace_cleanup(list: &mut ChunkList, ctx: &mut ResolverContext<'_>) -> Result<(), ResolveError> {
    let mut resolver = Resolver {
        list,
        ctx,
        frame: ParseFrame::new(),
        frames: FrameStack::new(),
        is_preproc: TokenKind::None,
        consumed: false,
    };
    resolver.run()?;
    resolver.finish();
    Ok(())
}

struct Resolver<'l, 'c, 's> {
    list: &'l mut ChunkList,
    ctx: &'c mut ResolverContext<'s>,
    frame: ParseFrame,
    frames: FrameStack,
    /// Directive of the preprocessor line being scanned, or `NONE`.
    is_preproc: TokenKind,
    /// The current chunk closed something or ended a statement.
    consumed: bool,
}

impl Resolver<'_, '_, '_> {
    fn run(&mut self) -> Result<(), ResolveError> {
        let mut cur = self.list.head();
        while let Some(mut pc) = cur {
            if self.is_preproc != TokenKind::None && !self.list[pc].in_preproc() {
                if self.is_preproc == TokenKind::PpDefine {
                    // Out of the #define body.
                    self.frames.pop(&mut self.frame);
                }
                self.is_preproc = TokenKind::None;
            }

            let mut pp_level = self.frames.pp_level();
            if self.list[pc].is(TokenKind::Preproc) {
                pp_level = self.preproc_start(pc);
            }

            if self.ctx.is_lang(LangFlags::PAWN)
                && self.frame.top().kind == TokenKind::VBraceOpen
                && self.list[pc].is(TokenKind::Newline)
            {
                pc = pawn::check_vsemicolon(self.list, pc, self.ctx.settings);
            }

            let chunk = &mut self.list[pc];
            chunk.level = self.frame.level;
            chunk.brace_level = self.frame.brace_level;
            chunk.pp_level = pp_level;

            // #define bodies are resolved too, starting from their `#`.
            if !chunk.kind.is_comment_or_newline()
                && matches!(self.is_preproc, TokenKind::PpDefine | TokenKind::None)
            {
                self.consumed = false;
                self.parse_cleanup(pc)?;
                tracing::trace!(
                    line = self.list[pc].orig_line,
                    kind = %self.list[pc].kind,
                    stack = %self.frame.describe(),
                    "resolved"
                );
            }
            cur = self.list.next(pc);
        }
        Ok(())
    }

    /// Close what is left open at end of input.
    fn finish(&mut self) {
        if self.is_preproc == TokenKind::PpDefine {
            self.frames.pop(&mut self.frame);
        }
        if !self.frames.is_empty() {
            let line = self.list.tail().map_or(0, |tail| self.list[tail].orig_line);
            self.ctx.diagnostics.push(
                Diagnostic::error(ErrorCode::U1005)
                    .at(line, 1)
                    .with_message("#if without #endif"),
            );
        }

        // A statement keyword whose virtual body was just closed is done.
        let mut body_closed = false;
        while let Some(entry) = self.frame.pop() {
            let after_body = std::mem::take(&mut body_closed);
            match (entry.kind, entry.stage) {
                (TokenKind::VBraceOpen, _) => {
                    if let Some(tail) = self.list.tail() {
                        let mut close = Chunk::virtual_of(TokenKind::VBraceClose);
                        close.parent_kind = entry.parent;
                        close.orig_line = self.list[tail].orig_line;
                        close.level = entry.level.saturating_sub(1);
                        close.brace_level = entry.brace_level.saturating_sub(1);
                        close.flags = ChunkFlags::INSERTED;
                        self.list.add_after(tail, close);
                    }
                    body_closed = true;
                }
                // Body done, an optional `else`/`catch` never came.
                (_, stage)
                    if matches!(stage, BraceStage::Else | BraceStage::Catch)
                        || (after_body && stage == BraceStage::Brace2) => {}
                (_, stage) if stage == BraceStage::While || (after_body && stage == BraceStage::BraceDo) => {
                    self.unfinished(&entry, ErrorCode::U1002, "'do' body is not followed by 'while'");
                }
                (_, BraceStage::WodSemi) => {
                    self.unfinished(&entry, ErrorCode::U1002, "'while' of a do-while is not followed by ';'");
                }
                (kind, BraceStage::None) => {
                    self.unfinished(&entry, ErrorCode::U1006, &format!("'{kind}' opened here is never closed"));
                }
                (kind, _) => {
                    self.unfinished(&entry, ErrorCode::U1006, &format!("'{kind}' here has no body"));
                }
            }
        }
    }

    fn unfinished(&mut self, entry: &ParenStackEntry, code: ErrorCode, message: &str) {
        self.ctx.diagnostics.push(
            Diagnostic::error(code)
                .at(entry.open_line, 1)
                .with_message(message),
        );
    }

    /// Handle the `#` that starts a directive line and return the line's
    /// preprocessor level.
    fn preproc_start(&mut self, pc: ChunkId) -> u32 {
        let mut pp_level = self.frames.pp_level();
        let Some(next) = self.list.next_ncnl(pc) else {
            return pp_level;
        };
        let directive = self.list[next].kind;
        if self.list[pc].parent_kind != directive {
            tracing::debug!(
                line = self.list[pc].orig_line,
                got = %self.list[pc].parent_kind,
                expected = %directive,
                "preprocessor parent not set"
            );
            self.list[pc].parent_kind = directive;
        }
        self.is_preproc = directive;

        if directive == TokenKind::PpDefine {
            if self.frames.push(&mut self.frame) {
                self.frame = ParseFrame::for_define();
            } else {
                self.ctx.diagnostics.push(
                    Diagnostic::error(ErrorCode::U1004)
                        .at(self.list[pc].orig_line, self.list[pc].orig_col)
                        .with_message("no frame left to resolve this #define body"),
                );
                // Leave the body unresolved rather than corrupt the frame.
                self.is_preproc = TokenKind::PpOther;
            }
        } else {
            let line = self.list[pc].orig_line;
            pp_level = self.frames.pf_check(&mut self.frame, directive, line, &mut self.ctx.diagnostics);
        }
        pp_level
    }

    fn push_entry(&mut self, pc: ChunkId, stage: BraceStage) -> bool {
        let chunk = &self.list[pc];
        let entry = ParenStackEntry {
            kind: chunk.kind,
            parent: TokenKind::None,
            stage,
            level: self.frame.level,
            brace_level: self.frame.brace_level,
            open_line: chunk.orig_line,
            pp_level: chunk.pp_level,
            in_preproc: chunk.in_preproc(),
            ns_count: 0,
            non_vardef: false,
        };
        if self.frame.push(entry) {
            return true;
        }
        let (line, column) = (chunk.orig_line, chunk.orig_col);
        self.ctx.diagnostics.push(
            Diagnostic::error(ErrorCode::U1003)
                .at(line, column)
                .with_message(format!("nesting deeper than {MAX_PAREN_DEPTH} levels")),
        );
        false
    }

    fn pop_entry(&mut self, why: &str) {
        self.frame.pop();
        tracing::trace!(why, stack = %self.frame.describe(), "pop");
    }

    fn report(&mut self, code: ErrorCode, pc: ChunkId, message: String) {
        let chunk = &self.list[pc];
        let diagnostic = Diagnostic::error(code)
            .at(chunk.orig_line, chunk.orig_col)
            .with_message(message);
        self.ctx.diagnostics.push(diagnostic);
    }

    fn parse_cleanup(&mut self, pc: ChunkId) -> Result<(), ResolveError> {
        self.mark_statement_start(pc);

        if self.frame.sparen_count > 0 {
            self.list[pc].flags |= ChunkFlags::IN_SPAREN;
            if self.frame.below_top().any(|entry| entry.kind == TokenKind::For) {
                self.list[pc].flags |= ChunkFlags::IN_FOR;
            }
            if self.list[pc].is(TokenKind::Semicolon)
                && self.frame.prev().is_some_and(|entry| entry.kind == TokenKind::For)
            {
                self.list[pc].parent_kind = TokenKind::For;
            }
        }

        if self.frame.top().stage != BraceStage::None && self.check_complex_statements(pc) {
            return Ok(());
        }

        // A statement inside a virtual brace ends: the close is inserted
        // now and handled when the scan reaches it.
        if self.frame.top().kind == TokenKind::VBraceOpen {
            if self.list[pc].kind.is_semicolon() {
                self.consumed = true;
                self.close_statement(pc);
            } else if self.ctx.is_lang(LangFlags::PAWN) && self.list[pc].is(TokenKind::BraceClose) {
                self.close_statement(pc);
            }
        }

        if matches!(
            self.list[pc].kind,
            TokenKind::ParenClose
                | TokenKind::BraceClose
                | TokenKind::VBraceClose
                | TokenKind::AngleClose
                | TokenKind::MacroClose
                | TokenKind::SquareClose
        ) {
            self.handle_close(pc);
        }

        // Expecting the `;` of `do ... while (...)`. The `)` just before it
        // lands here too, already consumed.
        if self.frame.top().stage == BraceStage::WodSemi {
            if self.consumed {
                if self.ctx.is_lang(LangFlags::PAWN) {
                    let next = self.list.next_ncnl(pc);
                    if !self.list.kind_of(next).is_semicolon() {
                        pawn::add_vsemi_after(self.list, pc, self.ctx.settings);
                    }
                }
            } else {
                if self.list[pc].kind.is_semicolon() {
                    self.consumed = true;
                    self.list[pc].parent_kind = TokenKind::WhileOfDo;
                } else {
                    let got = self.list[pc].text.to_string();
                    self.report(
                        ErrorCode::U1002,
                        pc,
                        format!("expected ';' after do-while, got '{got}'"),
                    );
                }
                self.handle_complex_close(pc);
            }
        }

        let parent = self.open_parent(pc);

        if matches!(
            self.list[pc].kind,
            TokenKind::BraceOpen
                | TokenKind::ParenOpen
                | TokenKind::FParenOpen
                | TokenKind::SParenOpen
                | TokenKind::AngleOpen
                | TokenKind::MacroOpen
                | TokenKind::SquareOpen
        ) {
            self.frame.level += 1;
            if matches!(self.list[pc].kind, TokenKind::BraceOpen | TokenKind::MacroOpen) {
                self.frame.brace_level += 1;
            }
            if self.push_entry(pc, BraceStage::None) {
                self.frame.top_mut().parent = parent;
            } else {
                self.frame.overflow += 1;
            }
            self.list[pc].parent_kind = parent;
        }

        self.push_statement_keyword(pc);
        self.reset_counters(pc);

        if self.list[pc].is(TokenKind::BraceClose) && !self.consumed {
            self.unmatched_brace_close(pc)?;
        }
        Ok(())
    }

    /// Flag the first chunk of a statement or expression.
    fn mark_statement_start(&mut self, pc: ChunkId) {
        let chunk = &mut self.list[pc];
        let eligible = !chunk.kind.is_semicolon()
            && !matches!(chunk.kind, TokenKind::BraceClose | TokenKind::VBraceClose)
            && !chunk.is_str(")")
            && !chunk.is_str("]");
        if eligible && (self.frame.stmt_count == 0 || self.frame.expr_count == 0) {
            chunk.flags |= ChunkFlags::EXPR_START;
            if self.frame.stmt_count == 0 {
                chunk.flags |= ChunkFlags::STMT_START;
            }
        }
        self.frame.stmt_count += 1;
        self.frame.expr_count += 1;
    }

    /// A closer: turn a generic `)` into the paren kind that opened it,
    /// check it against the stack top, then pop.
    fn handle_close(&mut self, pc: ChunkId) {
        if self.frame.overflow > 0 {
            self.close_overflowed(pc);
            return;
        }

        let top = self.frame.top().kind;
        if self.list[pc].is(TokenKind::ParenClose) && matches!(top, TokenKind::FParenOpen | TokenKind::SParenOpen) {
            self.list[pc].kind = top.inverse();
            if top == TokenKind::SParenOpen {
                self.frame.sparen_count = self.frame.sparen_count.saturating_sub(1);
                self.list[pc].flags.remove(ChunkFlags::IN_SPAREN);
            }
        }

        let kind = self.list[pc].kind;
        if kind != top.inverse() || top == TokenKind::None {
            if !matches!(top, TokenKind::None | TokenKind::PpDefine) {
                let text = self.list[pc].text.to_string();
                let open_line = self.frame.top().open_line;
                self.report(
                    ErrorCode::U1001,
                    pc,
                    format!("unexpected '{text}' for '{top}', which was on line {open_line}"),
                );
            }
            return;
        }

        self.consumed = true;
        let parent = self.frame.top().parent;
        self.frame.level = self.frame.level.saturating_sub(1);
        if matches!(kind, TokenKind::BraceClose | TokenKind::VBraceClose | TokenKind::MacroClose) {
            self.frame.brace_level = self.frame.brace_level.saturating_sub(1);
        }
        let chunk = &mut self.list[pc];
        chunk.parent_kind = parent;
        chunk.level = self.frame.level;
        chunk.brace_level = self.frame.brace_level;
        self.pop_entry("close");

        if self.frame.top().stage != BraceStage::None {
            self.handle_complex_close(pc);
        }
    }

    /// A closer matched against an opener that never made it onto the
    /// stack. Only the levels are kept straight.
    fn close_overflowed(&mut self, pc: ChunkId) {
        self.frame.overflow -= 1;
        self.consumed = true;
        self.frame.level = self.frame.level.saturating_sub(1);
        let kind = self.list[pc].kind;
        if matches!(kind, TokenKind::BraceClose | TokenKind::VBraceClose | TokenKind::MacroClose) {
            self.frame.brace_level = self.frame.brace_level.saturating_sub(1);
        }
        let chunk = &mut self.list[pc];
        chunk.level = self.frame.level;
        chunk.brace_level = self.frame.brace_level;
    }

    /// Parent kind for an opening paren or brace, retyping parens that
    /// belong to a statement keyword or a function.
    fn open_parent(&mut self, pc: ChunkId) -> TokenKind {
        let mut parent = self.list[pc].parent_kind;
        let kind = self.list[pc].kind;
        if !matches!(kind, TokenKind::BraceOpen) && !kind.is_paren_open() {
            return parent;
        }
        let Some(prev) = self.list.prev_ncnl(pc) else {
            return parent;
        };
        let (top_kind, staged) = (self.frame.top().kind, self.frame.top().stage != BraceStage::None);
        let prev_chunk = &self.list[prev];
        let (prev_kind, prev_parent) = (prev_chunk.kind, prev_chunk.parent_kind);
        let prev_is_eq = prev_chunk.text.first() == Some('=');
        let oc = self.ctx.is_lang(LangFlags::OC);

        if kind.is_paren_open() {
            if staged {
                parent = top_kind;
                self.list[pc].kind = TokenKind::SParenOpen;
                self.frame.sparen_count += 1;
            } else if prev_kind == TokenKind::Function {
                parent = TokenKind::Function;
                self.list[pc].kind = TokenKind::FParenOpen;
            } else if prev_kind == TokenKind::Enum && oc {
                // NS_ENUM (type, name)
                parent = TokenKind::Enum;
                self.list[pc].kind = TokenKind::FParenOpen;
            }
        } else if staged {
            parent = top_kind;
        } else if prev_kind == TokenKind::Assign && prev_is_eq {
            parent = TokenKind::Assign;
        } else if prev_kind == TokenKind::FParenClose {
            parent = if oc && prev_parent == TokenKind::Enum {
                TokenKind::Enum
            } else {
                TokenKind::Function
            };
        }
        parent
    }

    /// Statement keywords stay on the stack while their pattern is
    /// recognized.
    fn push_statement_keyword(&mut self, pc: ChunkId) {
        let kind = self.list[pc].kind;
        let stage = match kind.pattern_class() {
            PatternClass::Braced if kind == TokenKind::Do => BraceStage::BraceDo,
            PatternClass::Braced => BraceStage::Brace2,
            PatternClass::PBraced if kind == TokenKind::While && self.maybe_while_of_do(pc) => {
                self.list[pc].kind = TokenKind::WhileOfDo;
                BraceStage::WodParen
            }
            PatternClass::PBraced => BraceStage::Paren1,
            PatternClass::OpBraced => BraceStage::OpParen1,
            PatternClass::Else => BraceStage::ElseIf,
            PatternClass::None
            | PatternClass::VBraced
            | PatternClass::Paren
            | PatternClass::OpParen => return,
        };
        if self.push_entry(pc, stage) {
            tracing::trace!(kind = %self.list[pc].kind, ?stage, "complex statement");
        }
    }

    /// A `while` right after a preprocessor block may still end a `do`
    /// whose body closed before the block.
    fn maybe_while_of_do(&self, pc: ChunkId) -> bool {
        let Some(mut prev) = self.list.prev_ncnl(pc) else {
            return false;
        };
        if !self.list[prev].in_preproc() {
            return false;
        }
        while self.list[prev].in_preproc() {
            match self.list.prev_ncnl(prev) {
                Some(p) => prev = p,
                None => return false,
            }
        }
        let chunk = &self.list[prev];
        chunk.parent_kind == TokenKind::Do && matches!(chunk.kind, TokenKind::BraceClose | TokenKind::VBraceClose)
    }

    fn reset_counters(&mut self, pc: ChunkId) {
        let chunk = &self.list[pc];
        let top = self.frame.top().kind;
        let ends_statement = matches!(
            chunk.kind,
            TokenKind::SquareOpen | TokenKind::Colon | TokenKind::OcEnd | TokenKind::BraceClose | TokenKind::VBraceClose
        ) || (chunk.is(TokenKind::BraceOpen) && chunk.parent_kind != TokenKind::Assign)
            || (chunk.is(TokenKind::SParenOpen) && chunk.parent_kind == TokenKind::For)
            || (chunk.kind.is_semicolon()
                && !matches!(top, TokenKind::ParenOpen | TokenKind::FParenOpen | TokenKind::SParenOpen));
        if ends_statement {
            self.frame.stmt_count = 0;
            self.frame.expr_count = 0;
        }

        let starts_expression = matches!(
            chunk.kind,
            TokenKind::ParenOpen
                | TokenKind::Arith
                | TokenKind::Case
                | TokenKind::Compare
                | TokenKind::AngleClose
                | TokenKind::Minus
                | TokenKind::Plus
                | TokenKind::Return
                | TokenKind::AngleOpen
                | TokenKind::Assign
                | TokenKind::Bool
                | TokenKind::Continue
                | TokenKind::FParenOpen
                | TokenKind::Caret
                | TokenKind::Goto
                | TokenKind::Throw
                | TokenKind::SParenOpen
                | TokenKind::Comma
                | TokenKind::Not
                | TokenKind::Colon
                | TokenKind::BraceOpen
                | TokenKind::Inv
                | TokenKind::Question
        ) || chunk.kind.is_semicolon()
            || (chunk.is(TokenKind::Star)
                && self
                    .list
                    .next_ncnl(pc)
                    .is_some_and(|next| !self.list[next].is(TokenKind::Star)));
        if starts_expression {
            self.frame.expr_count = 0;
        }
    }

    /// A `}` that closed nothing.
    fn unmatched_brace_close(&mut self, pc: ChunkId) -> Result<(), ResolveError> {
        if self.ctx.suppression_used {
            tracing::debug!(line = self.list[pc].orig_line, "unmatched '}}' in a file with disabled regions");
            return Ok(());
        }
        if self.is_preproc == TokenKind::PpDefine {
            // Macros may close what the code around their use opened.
            tracing::debug!(line = self.list[pc].orig_line, "unmatched '}}' in a #define body");
            return Ok(());
        }
        if !self.frame.is_empty() {
            // Already reported as a mismatch.
            return Ok(());
        }
        if self.frame.in_ifdef != TokenKind::None {
            self.report(
                ErrorCode::U1001,
                pc,
                "unmatched '}' in a preprocessor branch".to_owned(),
            );
            return Ok(());
        }

        let chunk = &self.list[pc];
        let (line, column) = (chunk.orig_line, chunk.orig_col);
        self.report(ErrorCode::U2001, pc, "unmatched '}'".to_owned());
        Err(ResolveError::UnmatchedBraceClose { line, column })
    }

    /// Advance the pattern of the statement on top of the stack.
    ///
    /// Returns `true` when `pc` is fully handled.
    fn check_complex_statements(&mut self, pc: ChunkId) -> bool {
        let kind = self.list[pc].kind;

        // Optional parens become real parens or a body.
        if self.frame.top().stage == BraceStage::OpParen1 {
            self.frame.top_mut().stage = if kind == TokenKind::ParenOpen {
                BraceStage::Paren1
            } else {
                BraceStage::Brace2
            };
        }

        // `else` after an `if` body.
        while self.frame.top().stage == BraceStage::Else {
            if kind == TokenKind::Else {
                let top = self.frame.top_mut();
                top.kind = TokenKind::Else;
                top.stage = BraceStage::ElseIf;
                return true;
            }
            self.pop_entry("if without else");
            if self.close_statement(pc) {
                return true;
            }
        }

        // `if` after an `else`.
        if self.frame.top().stage == BraceStage::ElseIf {
            if kind == TokenKind::If {
                let on_new_line = self.list.kind_of(self.list.prev_nc(pc)).is_newline();
                if !self.ctx.settings.get_bool(OptionKey::IndentElseIf) || !on_new_line {
                    self.list[pc].kind = TokenKind::ElseIf;
                    let top = self.frame.top_mut();
                    top.kind = TokenKind::ElseIf;
                    top.stage = BraceStage::Paren1;
                    return true;
                }
            }
            self.frame.top_mut().stage = BraceStage::Brace2;
        }

        // `catch` or `finally` after a `try` or `catch` body.
        while self.frame.top().stage == BraceStage::Catch {
            if matches!(kind, TokenKind::Catch | TokenKind::Finally) {
                let top = self.frame.top_mut();
                top.kind = kind;
                top.stage = if kind == TokenKind::Catch {
                    BraceStage::CatchWhen
                } else {
                    BraceStage::Brace2
                };
                return true;
            }
            self.pop_entry("try without catch");
            if self.close_statement(pc) {
                return true;
            }
        }

        // Optional parens and `when` filter of a `catch`.
        if self.frame.top().stage == BraceStage::CatchWhen {
            match kind {
                TokenKind::ParenOpen => {
                    self.list[pc].kind = TokenKind::SParenOpen;
                    self.frame.top_mut().stage = BraceStage::Paren1;
                    return false;
                }
                TokenKind::When => {
                    self.frame.top_mut().stage = BraceStage::OpParen1;
                    return true;
                }
                TokenKind::BraceOpen => {
                    self.frame.top_mut().stage = BraceStage::Brace2;
                    return false;
                }
                _ => {}
            }
        }

        // `while` after a `do` body.
        if self.frame.top().stage == BraceStage::While {
            if kind == TokenKind::While {
                self.list[pc].kind = TokenKind::WhileOfDo;
                let top = self.frame.top_mut();
                top.kind = TokenKind::WhileOfDo;
                top.stage = BraceStage::WodParen;
                return true;
            }
            let text = self.list[pc].text.to_string();
            self.report(ErrorCode::U1002, pc, format!("expected 'while' after do body, got '{text}'"));
            self.pop_entry("do without while");
        }

        let kind = self.list[pc].kind;
        let stage = self.frame.top().stage;
        if kind != TokenKind::BraceOpen && matches!(stage, BraceStage::Brace2 | BraceStage::BraceDo) {
            let unindented_using = self.ctx.is_lang(LangFlags::CS)
                && kind == TokenKind::UsingStmt
                && !self.ctx.settings.get_bool(OptionKey::IndentUsingBlock);
            if !unindented_using {
                self.open_virtual_brace(pc);
            }
        }

        let stage = self.frame.top().stage;
        if self.list[pc].kind != TokenKind::ParenOpen && matches!(stage, BraceStage::Paren1 | BraceStage::WodParen) {
            let text = self.list[pc].text.to_string();
            let owner = self.frame.top().kind;
            self.report(ErrorCode::U1002, pc, format!("expected '(' after '{owner}', got '{text}'"));
            self.pop_entry("missing paren");
        }
        false
    }

    /// The body of the construct on top of the stack starts at `pc`
    /// without a `{`.
    fn open_virtual_brace(&mut self, pc: ChunkId) {
        if self.frame.depth() >= MAX_PAREN_DEPTH {
            self.report(
                ErrorCode::U1003,
                pc,
                format!("nesting deeper than {MAX_PAREN_DEPTH} levels"),
            );
            self.pop_entry("no room for a body");
            return;
        }
        let parent = self.frame.top().kind;
        let vbrace = self.insert_vbrace_open_before(pc);
        self.list[vbrace].parent_kind = parent;

        self.frame.level += 1;
        self.frame.brace_level += 1;
        if self.push_entry(vbrace, BraceStage::None) {
            self.frame.top_mut().parent = parent;
        }

        let chunk = &mut self.list[pc];
        chunk.level = self.frame.level;
        chunk.brace_level = self.frame.brace_level;
        chunk.flags |= ChunkFlags::STMT_START | ChunkFlags::EXPR_START;
        self.frame.stmt_count = 1;
        self.frame.expr_count = 1;
    }

    /// A paren or brace just closed and the stack top is a staged
    /// statement: move it along.
    ///
    /// Returns `true` when `pc` is fully handled.
    fn handle_complex_close(&mut self, pc: ChunkId) -> bool {
        let (stage, owner) = (self.frame.top().stage, self.frame.top().kind);
        match stage {
            BraceStage::Paren1 => {
                if self.list.kind_of(self.list.next_ncnl(pc)) == TokenKind::When {
                    self.frame.top_mut().stage = BraceStage::CatchWhen;
                    return true;
                }
                self.frame.top_mut().stage = BraceStage::Brace2;
            }
            BraceStage::Brace2 => {
                let next = self.list.kind_of(self.list.next_ncnl(pc));
                match owner {
                    TokenKind::If | TokenKind::ElseIf => {
                        self.frame.top_mut().stage = BraceStage::Else;
                        if next != TokenKind::Else {
                            self.pop_entry("if done");
                            return self.close_statement(pc);
                        }
                    }
                    TokenKind::Try | TokenKind::Catch => {
                        self.frame.top_mut().stage = BraceStage::Catch;
                        if !matches!(next, TokenKind::Catch | TokenKind::Finally) {
                            self.pop_entry("try done");
                            return self.close_statement(pc);
                        }
                    }
                    _ => {
                        self.pop_entry("body done");
                        return self.close_statement(pc);
                    }
                }
            }
            BraceStage::BraceDo => self.frame.top_mut().stage = BraceStage::While,
            BraceStage::WodParen => self.frame.top_mut().stage = BraceStage::WodSemi,
            BraceStage::WodSemi => {
                self.pop_entry("do-while done");
                return self.close_statement(pc);
            }
            _ => {
                self.report(
                    ErrorCode::U1002,
                    pc,
                    format!("unexpected close for '{owner}' in stage {stage:?}"),
                );
            }
        }
        false
    }

    /// A statement just ended at `pc` and its entry was popped. Closes an
    /// enclosing virtual brace and lets the construct around it react.
    ///
    /// Returns `true` when `pc` is fully handled.
    fn close_statement(&mut self, pc: ChunkId) -> bool {
        let mut vbc = pc;
        if self.consumed {
            self.frame.stmt_count = 0;
            self.frame.expr_count = 0;
        }

        if self.frame.top().kind == TokenKind::VBraceOpen {
            if self.consumed {
                // Handled when the scan reaches it.
                self.insert_vbrace_close_after(pc);
            } else {
                // Close before `pc` and pop right away.
                let anchor = self.list.prev_ncnl(pc).unwrap_or(pc);
                vbc = self.insert_vbrace_close_after(anchor);
                let parent = self.frame.top().parent;
                self.frame.level = self.frame.level.saturating_sub(1);
                self.frame.brace_level = self.frame.brace_level.saturating_sub(1);
                self.pop_entry("virtual close");

                let (level, brace_level) = (self.frame.level, self.frame.brace_level);
                let close = &mut self.list[vbc];
                close.parent_kind = parent;
                close.level = level;
                close.brace_level = brace_level;
                let chunk = &mut self.list[pc];
                chunk.level = level;
                chunk.brace_level = brace_level;

                self.close_statement(pc);
                return true;
            }
        }

        if self.frame.top().stage != BraceStage::None {
            return self.handle_complex_close(vbc);
        }
        false
    }

    fn new_vbrace(&self, kind: TokenKind, pc: ChunkId) -> Chunk {
        let chunk = &self.list[pc];
        let mut vbrace = Chunk::virtual_of(kind);
        vbrace.parent_kind = self.frame.top().kind;
        vbrace.orig_line = chunk.orig_line;
        vbrace.level = self.frame.level;
        vbrace.brace_level = self.frame.brace_level;
        vbrace.pp_level = chunk.pp_level;
        vbrace.flags = chunk.flags.inherited() | ChunkFlags::INSERTED;
        vbrace
    }

    fn insert_vbrace_close_after(&mut self, pc: ChunkId) -> ChunkId {
        let mut vbrace = self.new_vbrace(TokenKind::VBraceClose, pc);
        let chunk = &self.list[pc];
        vbrace.orig_col = chunk.orig_col_end;
        vbrace.orig_col_end = chunk.orig_col_end;
        vbrace.column = chunk.column + u32::try_from(chunk.text.len()).unwrap_or(0);
        self.list.add_after(pc, vbrace)
    }

    /// Insert a virtual `{` before `pc`, in front of any comments and
    /// newlines that precede it but never inside a preprocessor line that
    /// `pc` is not part of.
    fn insert_vbrace_open_before(&mut self, pc: ChunkId) -> ChunkId {
        let mut vbrace = self.new_vbrace(TokenKind::VBraceOpen, pc);
        let Some(mut anchor) = self.list.prev(pc) else {
            return self.list.add_before(pc, vbrace);
        };
        if !self.list[anchor].in_preproc() {
            vbrace.flags.remove(ChunkFlags::IN_PREPROC);
        }

        while self.list[anchor].kind.is_comment_or_newline() {
            let chunk = &mut self.list[anchor];
            chunk.level += 1;
            chunk.brace_level += 1;
            match self.list.prev(anchor) {
                Some(prev) => anchor = prev,
                None => return self.list.add_before(anchor, vbrace),
            }
        }

        if !self.list[pc].in_preproc() && self.list[anchor].in_preproc() {
            let outside = if self.list[anchor].is(TokenKind::PreprocBody) {
                self.list.prev_non_pp(anchor)
            } else {
                self.list.next(anchor)
            };
            match outside {
                Some(outside) => anchor = outside,
                None => return self.list.add_before(pc, vbrace),
            }
        }

        let chunk = &self.list[anchor];
        vbrace.orig_line = chunk.orig_line;
        vbrace.orig_col = chunk.orig_col_end;
        vbrace.orig_col_end = chunk.orig_col_end;
        vbrace.column = chunk.column + u32::try_from(chunk.text.len()).unwrap_or(0) + 1;
        self.list.add_after(anchor, vbrace)
    }
}
