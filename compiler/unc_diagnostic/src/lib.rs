//! Diagnostic system for the analyzer.
//!
//! Every problem found while tokenizing or resolving is:
//! - identified by an error code (for searchability)
//! - located by source line and column
//! - counted in a [`DiagnosticQueue`] rather than aborting the run
//!
//! The single fatal condition (an unmatched close brace) is still recorded
//! here with its code, but is reported to the caller as an error value by
//! the resolver.

mod diagnostic;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
