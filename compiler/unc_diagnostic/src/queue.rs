//! The running diagnostic queue.
//!
//! Every counted problem of a run lands here, in the order it was found.
//! Nothing in the tokenizer or resolver stops on a queued diagnostic; the
//! caller decides what to do with the counts once the run is over.

use std::io;

use crate::{Diagnostic, Severity};

/// Ordered collection of diagnostics plus running counts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            code = %diagnostic.code,
            line = diagnostic.line,
            column = diagnostic.column,
            "{}",
            diagnostic.message
        );
        if diagnostic.severity == Severity::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Number of error-severity diagnostics.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    #[inline]
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Move every diagnostic of `other` to the end of this queue.
    pub fn append(&mut self, other: &mut DiagnosticQueue) {
        self.error_count += other.error_count;
        self.diagnostics.append(&mut other.diagnostics);
        other.error_count = 0;
    }

    /// Write every diagnostic as `file:line:col: severity[code]: message`.
    pub fn emit_all(&self, out: &mut impl io::Write, file: &str) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(out, "{file}:{diagnostic}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DiagnosticQueue {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
