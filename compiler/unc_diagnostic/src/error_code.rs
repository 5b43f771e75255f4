//! Error codes for every counted diagnostic.
//!
//! Each code is a unique identifier (e.g., `U1001`) with the first digit
//! indicating the phase that reports it.

use std::fmt;

/// Error codes for all analyzer diagnostics.
///
/// Format: U#### where first digit indicates phase:
/// - U0xxx: Tokenizer
/// - U1xxx: Structural resolver
/// - U2xxx: Fatal resolver conditions
/// - U3xxx: Configuration
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tokenizer (U0xxx)
    /// Character no recognizer accepts
    U0001,
    /// Literal or comment runs into the end of the input
    U0002,

    // Resolver (U1xxx)
    /// Closer does not match the innermost opener
    U1001,
    /// Token does not fit the stage of a complex statement
    U1002,
    /// Bracket nesting exceeds the paren stack
    U1003,
    /// Conditional nesting exceeds the frame stack
    U1004,
    /// `#else` or `#endif` without a matching `#if`
    U1005,
    /// Opener still unclosed at the end of the input
    U1006,

    // Fatal (U2xxx)
    /// Close brace with nothing open
    U2001,

    // Configuration (U3xxx)
    /// Malformed or unknown configuration line
    U3001,
}

impl ErrorCode {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::U0001 => "U0001",
            ErrorCode::U0002 => "U0002",
            ErrorCode::U1001 => "U1001",
            ErrorCode::U1002 => "U1002",
            ErrorCode::U1003 => "U1003",
            ErrorCode::U1004 => "U1004",
            ErrorCode::U1005 => "U1005",
            ErrorCode::U1006 => "U1006",
            ErrorCode::U2001 => "U2001",
            ErrorCode::U3001 => "U3001",
        }
    }

    /// Check if this code aborts the analysis of a file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCode::U2001)
    }

    /// Check if this is a tokenizer error (U0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::U0001 | ErrorCode::U0002)
    }

    /// Check if this is a resolver error (U1xxx and U2xxx ranges).
    pub fn is_resolver_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::U1001
                | ErrorCode::U1002
                | ErrorCode::U1003
                | ErrorCode::U1004
                | ErrorCode::U1005
                | ErrorCode::U1006
                | ErrorCode::U2001
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
