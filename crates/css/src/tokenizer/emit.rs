//! Token finalization.
//!
//! `finish_token` is the single commit point: it derives the kind-specific
//! slots from the transient fields, appends the row, and resets the state
//! machine to the start of the next token. Numeric kinds read their own
//! source slice back here ("commit-number"); no other path reads the source.

use super::states::State;
use super::{CssTokenizer, DebugMode, token_fmt};
use crate::token::TokenKind;
use lexis::{CapacityError, LexError};

impl CssTokenizer {
    pub(super) fn finish_token(&mut self, kind: TokenKind) -> Result<(), LexError> {
        let end = self.cursor as u32;
        let (a, b) = match kind {
            TokenKind::Ident
            | TokenKind::Function
            | TokenKind::AtKeyword
            | TokenKind::String
            | TokenKind::Url
            | TokenKind::BadUrl => (self.store.watermark(), self.store.string_len()),
            TokenKind::Hash => (
                (self.store.watermark() << 1) | self.hash_is_id as u32,
                self.store.string_len(),
            ),
            TokenKind::Delim => (self.pending_delim, 0),
            TokenKind::Number => {
                let value = self.parse_number_slice();
                let index = if self.number_is_float {
                    self.store_float(value)?
                } else {
                    self.store_int(value as i64)?
                };
                (self.number_is_float as u32, index)
            }
            TokenKind::Percentage => {
                let value = self.parse_number_slice();
                (self.store_float(value)?, 0)
            }
            TokenKind::Dimension => {
                let value = self.parse_number_slice();
                let index = if self.number_is_float {
                    self.store_float(value)?
                } else {
                    self.store_int(value as i64)?
                };
                let unit_start = self.store.watermark();
                let unit_end = self.store.string_len();
                // Trailer behind the unit: int/float flag, then value index.
                self.push_value(self.number_is_float as u32)?;
                self.push_value(index)?;
                (unit_start, unit_end)
            }
            _ => (0, 0),
        };

        let index = match self.store.push(kind, end, a, b) {
            Ok(index) => index,
            Err(CapacityError) => return Err(self.capacity_lex_error()),
        };
        self.stats.tokens_emitted = self.stats.tokens_emitted.saturating_add(1);
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "css.tokenizer",
            "emit {} end={end}",
            kind.name()
        );
        if matches!(self.config.debug, Some(DebugMode::Lexing)) {
            let view = crate::introspect::TokenRef::new(self, index as usize);
            log::debug!(target: "css.tokenizer", "{}", token_fmt::token_table_line(&view));
        }
        self.transition(State::TokenStart);
        Ok(())
    }

    /// Parse the numeric part of the current token with the host's decimal
    /// parser. The grammar guarantees the slice is a valid signed decimal.
    fn parse_number_slice(&self) -> f64 {
        let start = self.store.last_end() as usize;
        let text = self.source.slice_to_string(start..self.number_end);
        text.parse::<f64>().unwrap_or_else(|_| {
            debug_assert!(false, "numeric source slice must parse: {text:?}");
            0.0
        })
    }

    fn store_int(&mut self, value: i64) -> Result<u32, LexError> {
        match self.store.push_int(value) {
            Ok(index) => Ok(index),
            Err(CapacityError) => Err(self.capacity_lex_error()),
        }
    }

    fn store_float(&mut self, value: f64) -> Result<u32, LexError> {
        match self.store.push_float(value) {
            Ok(index) => Ok(index),
            Err(CapacityError) => Err(self.capacity_lex_error()),
        }
    }
}
