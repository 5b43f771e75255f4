//! Structural resolver for the unc source analyzer.
//!
//! One forward pass over a tokenized [`ChunkList`](unc_ir::ChunkList) that
//! fills in `level`, `brace_level`, `pp_level` and `parent_kind`, marks
//! statement and expression starts, and inserts virtual braces around
//! bodies written without `{ }`.
//!
//! # Design
//!
//! Open constructs live on the paren stack of a [`ParseFrame`]. Statement
//! keywords (`if`, `do`, `try`, ...) stay on the stack while their pattern
//! is recognized one [`BraceStage`](unc_ir::BraceStage) at a time.
//!
//! Preprocessor conditionals and `#define` bodies save and restore whole
//! frames on a [`FrameStack`], so neither branch of an `#if` nor a macro
//! body can change the nesting of the code around it.
//!
//! Problems are counted in the context's diagnostic queue. The one
//! condition the pass cannot continue from, a `}` with nothing open, is
//! returned as a [`ResolveError`].

mod brace_cleanup;
mod context;
mod frame;
mod frame_stack;
mod pawn;

pub use brace_cleanup::brace_cleanup;
pub use context::ResolverContext;
pub use frame::{ParenStackEntry, ParseFrame, MAX_PAREN_DEPTH};
pub use frame_stack::{FrameStack, MAX_FRAMES};
pub use pawn::scrub_vsemicolons;

/// Conditions that stop the resolver.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("unmatched '}}' at line {line}, column {column}")]
    UnmatchedBraceClose { line: u32, column: u32 },
}

#[cfg(test)]
mod test_helpers;
