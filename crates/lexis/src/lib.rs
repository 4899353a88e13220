//! Streaming lexer framework: buffered code-point source, position tracking,
//! columnar token storage, and lex error reporting.
//!
//! This crate is the data plane a concrete tokenizer drives one code point at
//! a time. It owns no lexical grammar: normalization, position bookkeeping,
//! and append-only storage live here, the state machine lives in the consumer.
//!
//! Invariants:
//! - Buffers are append-only while the owning tokenizer is live; growth never
//!   mutates already-written entries.
//! - Growth past the pre-reserved capacity goes through `try_reserve`, so an
//!   allocator refusal surfaces as `CapacityError` instead of an abort.

pub mod code_point;
pub mod error;
pub mod source;
pub mod store;

mod grow;

pub use code_point::{CodePoint, EOF_SENTINEL, MAX_SCALAR, REPLACEMENT};
pub use error::{CapacityError, LexError, LexErrorKind, SNIPPET_RADIUS};
pub use source::SourceBuffer;
pub use store::TokenTable;
