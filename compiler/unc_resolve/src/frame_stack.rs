//! Saved frames for preprocessor conditionals and `#define` bodies.
//!
//! The stack holds whole [`ParseFrame`] copies. An `#if` saves the frame it
//! starts from; the first `#else` saves the frame the `#if` branch ended
//! with and restarts from the one before the `#if`; `#endif` drops the
//! saved copies and continues with the `#if` branch's result. Structure
//! after a conditional therefore never depends on which branch is taken.

use unc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use unc_ir::TokenKind;

use crate::ParseFrame;

/// Most frames the stack holds.
pub const MAX_FRAMES: usize = 16;

#[derive(Clone, Debug, Default)]
pub struct FrameStack {
    frames: Vec<ParseFrame>,
    next_ref: u32,
    /// Depth of preprocessor conditionals at the current chunk.
    pp_level: u32,
}

impl FrameStack {
    pub fn new() -> Self {
        FrameStack {
            frames: Vec::with_capacity(MAX_FRAMES),
            next_ref: 1,
            pp_level: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn pp_level(&self) -> u32 {
        self.pp_level
    }

    /// Save a copy of `frame`. Returns `false` when the stack is full.
    #[must_use]
    pub fn push(&mut self, frame: &mut ParseFrame) -> bool {
        if self.frames.len() >= MAX_FRAMES {
            return false;
        }
        self.frames.push(frame.clone());
        frame.ref_no = self.next_ref;
        self.next_ref += 1;
        true
    }

    /// Save a copy of `frame` under the top frame.
    #[must_use]
    pub fn push_under(&mut self, frame: &ParseFrame) -> bool {
        if self.frames.is_empty() || self.frames.len() >= MAX_FRAMES {
            return false;
        }
        let at = self.frames.len() - 1;
        self.frames.insert(at, frame.clone());
        true
    }

    /// Overwrite `frame` with the top frame.
    pub fn copy_tos(&self, frame: &mut ParseFrame) {
        if let Some(top) = self.frames.last() {
            frame.clone_from(top);
        }
    }

    /// Overwrite `frame` with the frame under the top one.
    pub fn copy_2nd_tos(&self, frame: &mut ParseFrame) {
        if let Some(idx) = self.frames.len().checked_sub(2) {
            frame.clone_from(&self.frames[idx]);
        }
    }

    /// Drop the top frame.
    pub fn trash_tos(&mut self) {
        self.frames.pop();
    }

    /// Restore `frame` from the top frame and drop it.
    pub fn pop(&mut self, frame: &mut ParseFrame) {
        if let Some(top) = self.frames.pop() {
            *frame = top;
        }
    }

    /// Apply a conditional directive to `frame`. Returns the preprocessor
    /// level of the directive line itself: an `#if` sits outside the
    /// conditional it opens, and `#else`/`#endif` one level out from their
    /// branch bodies.
    pub fn pf_check(
        &mut self,
        frame: &mut ParseFrame,
        directive: TokenKind,
        line: u32,
        diagnostics: &mut DiagnosticQueue,
    ) -> u32 {
        let mut pp_level = self.pp_level;
        let before = self.frames.len();

        let action = match directive {
            TokenKind::PpIf => {
                self.pp_level += 1;
                self.save(frame, line, diagnostics);
                frame.in_ifdef = TokenKind::PpIf;
                "if-push"
            }
            TokenKind::PpElse => {
                if frame.in_ifdef == TokenKind::PpIf {
                    // [...] [base]-[if]: keep the #if result.
                    self.save(frame, line, diagnostics);
                } else if frame.in_ifdef != TokenKind::PpElse {
                    unbalanced(diagnostics, line, "#else without #if");
                    return pp_level;
                }
                pp_level = pp_level.saturating_sub(1);
                // [...] [base] [if]-[else]: restart from [base].
                self.copy_2nd_tos(frame);
                frame.in_ifdef = TokenKind::PpElse;
                "else-push"
            }
            TokenKind::PpEndif => {
                self.pp_level = self.pp_level.saturating_sub(1);
                pp_level = pp_level.saturating_sub(1);
                match frame.in_ifdef {
                    TokenKind::PpElse => {
                        // [...] [base] [if]-[else] becomes [...]-[if].
                        self.copy_tos(frame);
                        frame.in_ifdef = self
                            .frames
                            .len()
                            .checked_sub(2)
                            .map_or(TokenKind::None, |idx| self.frames[idx].in_ifdef);
                        self.trash_tos();
                        self.trash_tos();
                        "endif-trash/pop"
                    }
                    TokenKind::PpIf => {
                        self.pop(frame);
                        "endif-pop"
                    }
                    _ => {
                        unbalanced(diagnostics, line, "#endif without #if");
                        "unknown"
                    }
                }
            }
            _ => return pp_level,
        };

        tracing::debug!(
            line,
            directive = %directive,
            action,
            frames_before = before,
            frames_after = self.frames.len(),
            in_ifdef = %frame.in_ifdef,
            level = frame.level,
            "preprocessor frame"
        );
        pp_level
    }

    fn save(&mut self, frame: &mut ParseFrame, line: u32, diagnostics: &mut DiagnosticQueue) {
        if !self.push(frame) {
            diagnostics.push(
                Diagnostic::error(ErrorCode::U1004)
                    .at(line, 1)
                    .with_message(format!("preprocessor nesting deeper than {MAX_FRAMES} frames")),
            );
        }
    }
}

fn unbalanced(diagnostics: &mut DiagnosticQueue, line: u32, message: &str) {
    diagnostics.push(
        Diagnostic::error(ErrorCode::U1005)
            .at(line, 1)
            .with_message(message),
    );
}
