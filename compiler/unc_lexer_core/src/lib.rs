//! Code-point source for the unc tokenizer.
//!
//! Standalone: no `unc_*` dependencies. Provides
//! - [`SourceText`]: raw bytes decoded to code points, with the detected
//!   [`Encoding`] and byte order mark,
//! - [`Cursor`]: peek/consume over the code points with tab-aware
//!   row and column tracking and cheap save/restore,
//! - the character classes the recognizers share.

pub mod char_class;
mod cursor;
mod source_text;

pub use cursor::{next_tab_column, Cursor, Mark, EOF_CHAR};
pub use source_text::{Encoding, SourceText};
