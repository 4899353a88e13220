//! Streaming tokenizer for the CSS Syntax Module Level 3 lexical grammar.
//!
//! The tokenizer is push-driven: feed decoded code points (or text) in any
//! chunking, call `end()` once, then read tokens back by index or iterator.
//! Tokens live in a columnar store with typed value arenas (see the `lexis`
//! crate); per-token semantics are reconstructed on demand through
//! [`TokenRef`].
//!
//! ```
//! use css::{CssTokenizer, TokenKind, TokenizerConfig};
//!
//! let mut tokenizer = CssTokenizer::new(TokenizerConfig::default());
//! tokenizer.push_str("a { color: #fff }").unwrap();
//! tokenizer.end().unwrap();
//! let kinds: Vec<TokenKind> = tokenizer.tokens().map(|t| t.kind()).collect();
//! assert_eq!(kinds[0], TokenKind::Ident);
//! ```

mod classify;
mod introspect;
pub mod token;
pub mod tokenizer;

pub use introspect::TokenRef;
pub use token::TokenKind;
pub use tokenizer::{CssTokenizer, DebugMode, TokenizerConfig, TokenizerStats, token_table_line};

pub use lexis::{LexError, LexErrorKind};
