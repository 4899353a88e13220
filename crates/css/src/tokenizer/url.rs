//! Url tokens.
//!
//! Entered from the ident state once the decoded value `url` meets a `(`.
//! The accreted `url` name is still uncommitted at that point: the quoted
//! form keeps it and emits FUNCTION, the literal form discards it and
//! accretes the url value in its place.

use super::Flow;
use super::states::State;
use super::CssTokenizer;
use crate::classify::{is_hex_digit, is_non_printable, is_whitespace};
use crate::token::TokenKind;
use lexis::{CodePoint, EOF_SENTINEL, LexError, LexErrorKind, REPLACEMENT};

impl CssTokenizer {
    pub(super) fn state_url_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_whitespace(c) => {
                self.transition(State::UrlStartWs);
                Ok(Flow::Continue)
            }
            // Quoted form: `url(` re-reads as a FUNCTION token and the quote
            // re-tokenizes as an ordinary string.
            0x22 | 0x27 => Ok(Flow::EmitReconsume(TokenKind::Function, 1)),
            0x29 => {
                self.store.truncate_values();
                Ok(Flow::Emit(TokenKind::Url))
            }
            EOF_SENTINEL => {
                self.store.truncate_values();
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                Ok(Flow::Emit(TokenKind::Url))
            }
            _ => {
                self.store.truncate_values();
                Ok(Flow::Reconsume(1, State::UrlLiteral))
            }
        }
    }

    /// Leading whitespace after `url(`. All but the most recent whitespace
    /// code point is absorbed into the token being built, so the replay
    /// depth stays bounded when a quote turns this into a FUNCTION.
    pub(super) fn state_url_start_ws(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_whitespace(c) => Ok(Flow::Continue),
            0x22 | 0x27 => Ok(Flow::EmitReconsume(TokenKind::Function, 2)),
            0x29 => {
                self.store.truncate_values();
                Ok(Flow::Emit(TokenKind::Url))
            }
            EOF_SENTINEL => {
                self.store.truncate_values();
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                Ok(Flow::Emit(TokenKind::Url))
            }
            _ => {
                self.store.truncate_values();
                Ok(Flow::Reconsume(1, State::UrlLiteral))
            }
        }
    }

    pub(super) fn state_url_literal(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x29 => Ok(Flow::Emit(TokenKind::Url)),
            c if is_whitespace(c) => {
                self.transition(State::UrlTail);
                Ok(Flow::Continue)
            }
            0x22 | 0x27 | 0x28 => {
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                self.transition(State::BadUrlRec);
                Ok(Flow::Continue)
            }
            c if is_non_printable(c) => {
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                self.transition(State::BadUrlRec);
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::UrlEscape);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                Ok(Flow::Emit(TokenKind::Url))
            }
            c => {
                self.push_value(c)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub(super) fn state_url_escape(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x0A => {
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                self.transition(State::BadUrlRec);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::InvalidEscape, cp)?;
                self.push_value(REPLACEMENT)?;
                Ok(Flow::Reconsume(0, State::UrlLiteral))
            }
            c if is_hex_digit(c) => {
                self.begin_hex_escape(c, State::UrlLiteral);
                Ok(Flow::Continue)
            }
            c => {
                self.push_value(c)?;
                self.transition(State::UrlLiteral);
                Ok(Flow::Continue)
            }
        }
    }

    /// Whitespace after the url value: only more whitespace and `)` are
    /// well-formed from here.
    pub(super) fn state_url_tail(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_whitespace(c) => Ok(Flow::Continue),
            0x29 => Ok(Flow::Emit(TokenKind::Url)),
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                Ok(Flow::Emit(TokenKind::Url))
            }
            _ => {
                self.parse_error(LexErrorKind::BadUrl, cp)?;
                self.transition(State::BadUrlRec);
                Ok(Flow::Continue)
            }
        }
    }

    /// Recover-mode absorption to the closing `)` (or end of input). Escapes
    /// are skipped pairwise so an escaped `)` cannot end the token early.
    pub(super) fn state_bad_url(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x29 => Ok(Flow::Emit(TokenKind::BadUrl)),
            0x5C => {
                self.transition(State::BadUrlEscape);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => Ok(Flow::Emit(TokenKind::BadUrl)),
            _ => Ok(Flow::Continue),
        }
    }

    pub(super) fn state_bad_url_escape(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => Ok(Flow::Reconsume(0, State::BadUrlRec)),
            _ => {
                self.transition(State::BadUrlRec);
                Ok(Flow::Continue)
            }
        }
    }
}
