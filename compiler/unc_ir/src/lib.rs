//! unc IR - the chunk data model
//!
//! This crate contains the data shared by the tokenizer, the structural
//! resolver and every later pass:
//! - `TokenKind` and the pattern classes of statement keywords
//! - `Chunk` and the arena-backed `ChunkList`
//! - Chunk and language flag sets
//! - The `Settings` options table
//!
//! # Design Philosophy
//!
//! - **Index, don't point**: chunks are addressed by `ChunkId(u32)` and
//!   never move, so inserting virtual chunks mid-scan is safe.
//! - **Closed kinds**: every token kind is one enum variant, and lookups
//!   over kinds are exhaustive matches.

mod chunk;
mod chunk_id;
mod chunk_list;
mod flags;
mod pattern;
mod settings;
mod text;
mod token_kind;

pub use chunk::Chunk;
pub use chunk_id::ChunkId;
pub use chunk_list::{ChunkList, Iter};
pub use flags::{ChunkFlags, LangFlags};
pub use pattern::{BraceStage, PatternClass};
pub use settings::{OptionKey, OptionValue, Settings, SettingsError};
pub use text::ChunkText;
pub use token_kind::TokenKind;
