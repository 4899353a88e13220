//! Input adapters: byte streams and files in, code points out.

pub mod utf8;

pub use utf8::{Utf8Decoder, decode_file, decode_str};
