//! String tokens.

use super::Flow;
use super::states::State;
use super::CssTokenizer;
use crate::classify::is_hex_digit;
use crate::token::TokenKind;
use lexis::{CodePoint, EOF_SENTINEL, LexError, LexErrorKind, REPLACEMENT};

impl CssTokenizer {
    pub(super) fn state_in_string(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::UnterminatedString, cp)?;
                Ok(Flow::Emit(TokenKind::String))
            }
            c if c == self.string_delim => Ok(Flow::Emit(TokenKind::String)),
            0x0A => {
                // The line feed is not part of the string; it re-tokenizes as
                // whitespace after the recovery emit.
                self.parse_error(LexErrorKind::UnterminatedString, cp)?;
                Ok(Flow::EmitReconsume(TokenKind::String, 1))
            }
            0x5C => {
                self.transition(State::StringEscape);
                Ok(Flow::Continue)
            }
            c => {
                self.push_value(c)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub(super) fn state_string_escape(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::InvalidEscape, cp)?;
                self.push_value(REPLACEMENT)?;
                Ok(Flow::Reconsume(0, State::InString))
            }
            // Escaped line feed: the string continues on the next line and
            // the value gains nothing.
            0x0A => {
                self.transition(State::InString);
                Ok(Flow::Continue)
            }
            c if is_hex_digit(c) => {
                self.begin_hex_escape(c, State::InString);
                Ok(Flow::Continue)
            }
            c => {
                self.push_value(c)?;
                self.transition(State::InString);
                Ok(Flow::Continue)
            }
        }
    }
}
