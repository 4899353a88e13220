//! Numeric tokens: signed entry points, the number grammar, and the
//! percent/unit tail.
//!
//! Digits are never copied anywhere; the number states only track the float
//! flag and where the digits end (`number_end`). `finish_token` parses the
//! source slice once at commit.

use super::Flow;
use super::states::State;
use super::CssTokenizer;
use crate::classify::{is_digit, is_ident_continue, is_ident_start};
use crate::token::TokenKind;
use lexis::{CodePoint, EOF_SENTINEL, LexError};

impl CssTokenizer {
    // ---- signed / fractional entry points ----

    pub(super) fn state_plus_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.transition(State::NumberInt);
                Ok(Flow::Continue)
            }
            0x2E => {
                self.transition(State::PlusDot);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x2B;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = 0x2B;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    pub(super) fn state_plus_dot(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.number_is_float = true;
                self.transition(State::NumberFrac);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x2B;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            _ => {
                self.pending_delim = 0x2B;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
        }
    }

    pub(super) fn state_minus_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.transition(State::NumberInt);
                Ok(Flow::Continue)
            }
            0x2E => {
                self.transition(State::MinusDot);
                Ok(Flow::Continue)
            }
            0x2D => {
                self.transition(State::MinusMinus);
                Ok(Flow::Continue)
            }
            c if is_ident_start(c) => Ok(Flow::Reconsume(2, State::Ident)),
            0x5C => {
                self.transition(State::MinusEscapeCheck);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x2D;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = 0x2D;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    pub(super) fn state_minus_dot(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.number_is_float = true;
                self.transition(State::NumberFrac);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x2D;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            _ => {
                self.pending_delim = 0x2D;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
        }
    }

    /// `--`: either CDC's tail or the start of a dashed identifier.
    pub(super) fn state_minus_minus(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x3E => Ok(Flow::Emit(TokenKind::Cdc)),
            EOF_SENTINEL => Ok(Flow::Reconsume(2, State::Ident)),
            _ => Ok(Flow::Reconsume(3, State::Ident)),
        }
    }

    pub(super) fn state_minus_escape_check(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.pending_delim = 0x2D;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            0x0A => {
                self.pending_delim = 0x2D;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
            _ => Ok(Flow::Reconsume(3, State::Ident)),
        }
    }

    pub(super) fn state_dot_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.number_is_float = true;
                self.transition(State::NumberFrac);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x2E;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = 0x2E;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    // ---- number grammar ----

    pub(super) fn state_number_int(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => Ok(Flow::Continue),
            0x2E => {
                self.transition(State::NumberFracStart);
                Ok(Flow::Continue)
            }
            0x45 | 0x65 => {
                self.transition(State::NumberExpStart);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.number_end = self.cursor;
                Ok(Flow::Emit(TokenKind::Number))
            }
            _ => {
                self.number_end = self.cursor - 1;
                Ok(Flow::Reconsume(1, State::NumberTail))
            }
        }
    }

    pub(super) fn state_number_frac_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.number_is_float = true;
                self.transition(State::NumberFrac);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                // `1.` at end of input: the dot is not part of the number.
                self.number_end = self.cursor - 1;
                Ok(Flow::Reconsume(1, State::NumberTail))
            }
            _ => {
                self.number_end = self.cursor - 2;
                Ok(Flow::Reconsume(2, State::NumberTail))
            }
        }
    }

    pub(super) fn state_number_frac(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => Ok(Flow::Continue),
            0x45 | 0x65 => {
                self.transition(State::NumberExpStart);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.number_end = self.cursor;
                Ok(Flow::Emit(TokenKind::Number))
            }
            _ => {
                self.number_end = self.cursor - 1;
                Ok(Flow::Reconsume(1, State::NumberTail))
            }
        }
    }

    pub(super) fn state_number_exp_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.number_is_float = true;
                self.transition(State::NumberExp);
                Ok(Flow::Continue)
            }
            0x2B | 0x2D => {
                self.transition(State::NumberExpSign);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                // The `e` starts a unit instead of an exponent.
                self.number_end = self.cursor - 1;
                Ok(Flow::Reconsume(1, State::NumberTail))
            }
            _ => {
                self.number_end = self.cursor - 2;
                Ok(Flow::Reconsume(2, State::NumberTail))
            }
        }
    }

    pub(super) fn state_number_exp_sign(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => {
                self.number_is_float = true;
                self.transition(State::NumberExp);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.number_end = self.cursor - 2;
                Ok(Flow::Reconsume(2, State::NumberTail))
            }
            _ => {
                self.number_end = self.cursor - 3;
                Ok(Flow::Reconsume(3, State::NumberTail))
            }
        }
    }

    pub(super) fn state_number_exp(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_digit(c) => Ok(Flow::Continue),
            EOF_SENTINEL => {
                self.number_end = self.cursor;
                Ok(Flow::Emit(TokenKind::Number))
            }
            _ => {
                self.number_end = self.cursor - 1;
                Ok(Flow::Reconsume(1, State::NumberTail))
            }
        }
    }

    // ---- percent / unit / plain tail ----

    /// The digits are complete; decide what the number becomes. On entry the
    /// cursor sits one past `number_end` (exactly at it for end-of-input).
    pub(super) fn state_number_tail(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x25 => Ok(Flow::Emit(TokenKind::Percentage)),
            c if is_ident_start(c) => Ok(Flow::Reconsume(1, State::Unit)),
            0x2D => {
                self.transition(State::NumberTailMinus);
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::NumberTailEscapeCheck);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => Ok(Flow::Emit(TokenKind::Number)),
            _ => Ok(Flow::EmitReconsume(TokenKind::Number, 1)),
        }
    }

    pub(super) fn state_number_tail_minus(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_start(c) || c == 0x2D => Ok(Flow::Reconsume(2, State::Unit)),
            0x5C => {
                self.transition(State::NumberTailMinusEscapeCheck);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => Ok(Flow::EmitReconsume(TokenKind::Number, 1)),
            _ => Ok(Flow::EmitReconsume(TokenKind::Number, 2)),
        }
    }

    pub(super) fn state_number_tail_escape_check(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => Ok(Flow::EmitReconsume(TokenKind::Number, 1)),
            0x0A => Ok(Flow::EmitReconsume(TokenKind::Number, 2)),
            _ => Ok(Flow::Reconsume(2, State::Unit)),
        }
    }

    pub(super) fn state_number_tail_minus_escape_check(
        &mut self,
        cp: CodePoint,
    ) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => Ok(Flow::EmitReconsume(TokenKind::Number, 2)),
            0x0A => Ok(Flow::EmitReconsume(TokenKind::Number, 3)),
            _ => Ok(Flow::Reconsume(3, State::Unit)),
        }
    }

    pub(super) fn state_unit(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_continue(c) => {
                self.push_value(c)?;
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::UnitEscape);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => Ok(Flow::Emit(TokenKind::Dimension)),
            _ => Ok(Flow::EmitReconsume(TokenKind::Dimension, 1)),
        }
    }

    pub(super) fn state_unit_escape(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.name_escape(cp, State::Unit, TokenKind::Dimension)
    }
}
