//! Per-token introspection.
//!
//! `TokenRef` reconstructs semantic values from the columnar store. Returned
//! views borrow the tokenizer; Rust's borrow rules make them valid snapshots
//! (no push can run while a view is live), and completed tokens are never
//! mutated, so anything read before the current in-progress token is final.

use crate::token::TokenKind;
use crate::tokenizer::CssTokenizer;
use lexis::CodePoint;

/// Read-only view of one emitted token.
#[derive(Clone, Copy)]
pub struct TokenRef<'a> {
    tokenizer: &'a CssTokenizer,
    index: usize,
}

impl<'a> TokenRef<'a> {
    pub(crate) fn new(tokenizer: &'a CssTokenizer, index: usize) -> Self {
        debug_assert!(index < tokenizer.store().len());
        Self { tokenizer, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> TokenKind {
        self.tokenizer.store().kind(self.index)
    }

    /// Inclusive source start: the previous token's end, or 0.
    pub fn start(&self) -> usize {
        self.tokenizer.store().start(self.index) as usize
    }

    /// Exclusive source end.
    pub fn end(&self) -> usize {
        self.tokenizer.store().end(self.index) as usize
    }

    /// (line, column) of the token's first code point, both 1-based.
    pub fn origin(&self) -> (u32, u32) {
        self.tokenizer.source().position(self.start())
    }

    pub fn source_slice(&self) -> &'a [CodePoint] {
        self.tokenizer.source().slice(self.start()..self.end())
    }

    pub fn source_text(&self) -> String {
        lexis::code_point::string_from(self.source_slice())
    }

    /// Decoded string value for identifier-like and string-like kinds. For a
    /// DIMENSION this is the unit.
    pub fn string_value(&self) -> Option<String> {
        let (start, end) = self.string_value_span()?;
        Some(lexis::code_point::string_from(
            self.tokenizer.store().value_slice(start, end),
        ))
    }

    /// Whether decoding the string value consumed at least one escape. A
    /// backslash in these productions always begins an escape, so the source
    /// slice is the authority.
    pub fn has_escape(&self) -> bool {
        self.string_value_span().is_some() && self.source_slice().contains(&0x5C)
    }

    /// `Some(true)` for an ID hash, `Some(false)` for an unrestricted one.
    pub fn hash_is_id(&self) -> Option<bool> {
        match self.kind() {
            TokenKind::Hash => Some(self.tokenizer.store().slot_a(self.index) & 1 == 1),
            _ => None,
        }
    }

    /// Numeric value of NUMBER, PERCENTAGE, and DIMENSION tokens.
    pub fn numeric_value(&self) -> Option<f64> {
        let store = self.tokenizer.store();
        match self.kind() {
            TokenKind::Number => {
                let index = store.slot_b(self.index);
                Some(if store.slot_a(self.index) == 1 {
                    store.float(index)
                } else {
                    store.int(index) as f64
                })
            }
            TokenKind::Percentage => Some(store.float(store.slot_a(self.index))),
            TokenKind::Dimension => {
                let (is_float, index) = self.dimension_trailer();
                Some(if is_float {
                    store.float(index)
                } else {
                    store.int(index) as f64
                })
            }
            _ => None,
        }
    }

    /// `Some(true)` when the numeric value lives in the integer arena.
    /// Percentages always commit as floats.
    pub fn is_integer(&self) -> Option<bool> {
        match self.kind() {
            TokenKind::Number => Some(self.tokenizer.store().slot_a(self.index) == 0),
            TokenKind::Percentage => Some(false),
            TokenKind::Dimension => Some(!self.dimension_trailer().0),
            _ => None,
        }
    }

    /// Decoded unit of a DIMENSION token.
    pub fn unit(&self) -> Option<String> {
        match self.kind() {
            TokenKind::Dimension => {
                let store = self.tokenizer.store();
                let start = store.slot_a(self.index);
                let end = store.slot_b(self.index);
                Some(lexis::code_point::string_from(store.value_slice(start, end)))
            }
            _ => None,
        }
    }

    /// The code point of a DELIM token.
    pub fn delim(&self) -> Option<char> {
        match self.kind() {
            TokenKind::Delim => char::from_u32(self.tokenizer.store().slot_a(self.index)),
            _ => None,
        }
    }

    fn string_value_span(&self) -> Option<(u32, u32)> {
        let store = self.tokenizer.store();
        match self.kind() {
            TokenKind::Ident
            | TokenKind::Function
            | TokenKind::AtKeyword
            | TokenKind::String
            | TokenKind::Url
            | TokenKind::BadUrl
            | TokenKind::Dimension => Some((store.slot_a(self.index), store.slot_b(self.index))),
            TokenKind::Hash => Some((store.slot_a(self.index) >> 1, store.slot_b(self.index))),
            _ => None,
        }
    }

    /// DIMENSION trailer behind the unit: int/float flag, then value index.
    fn dimension_trailer(&self) -> (bool, u32) {
        let store = self.tokenizer.store();
        let unit_end = store.slot_b(self.index);
        (
            store.string_value_at(unit_end) == 1,
            store.string_value_at(unit_end + 1),
        )
    }
}

impl std::fmt::Debug for TokenRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRef")
            .field("index", &self.index)
            .field("kind", &self.kind())
            .field("start", &self.start())
            .field("end", &self.end())
            .finish()
    }
}

impl CssTokenizer {
    /// Number of emitted tokens, comment rows included.
    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    pub fn token(&self, index: usize) -> TokenRef<'_> {
        TokenRef::new(self, index)
    }

    /// Every stored row, comment rows included. Their concatenated source
    /// slices reproduce the normalized source exactly.
    pub fn raw_tokens(&self) -> impl Iterator<Item = TokenRef<'_>> {
        (0..self.len()).map(move |index| TokenRef::new(self, index))
    }

    /// Surfaced tokens: everything except comment rows.
    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'_>> {
        self.raw_tokens().filter(|t| t.kind().is_surfaced())
    }
}
