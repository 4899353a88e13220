//! Multi-code-point punctuation: CDO and the legacy match operators.
//!
//! A partial match falls back to DELIM tokens for the code points already
//! consumed; the remainder replays from the initial state. CDC lives with
//! the `-` family in `numeric.rs` (it shares the `--` prefix).

use super::Flow;
use super::states::State;
use super::CssTokenizer;
use crate::token::TokenKind;
use lexis::{CodePoint, EOF_SENTINEL, LexError};

impl CssTokenizer {
    pub(super) fn state_lt_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x21 => {
                self.transition(State::LtBang);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x3C;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = 0x3C;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    pub(super) fn state_lt_bang(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x2D => {
                self.transition(State::LtBangMinus);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x3C;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            _ => {
                self.pending_delim = 0x3C;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
        }
    }

    pub(super) fn state_lt_bang_minus(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x2D => Ok(Flow::Emit(TokenKind::Cdo)),
            EOF_SENTINEL => {
                self.pending_delim = 0x3C;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
            _ => {
                self.pending_delim = 0x3C;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 3))
            }
        }
    }

    // ---- legacy match operators (entered only under the runtime flag) ----

    fn legacy_pair(
        &mut self,
        cp: CodePoint,
        first: CodePoint,
        matched: TokenKind,
    ) -> Result<Flow, LexError> {
        match cp {
            0x3D => Ok(Flow::Emit(matched)),
            EOF_SENTINEL => {
                self.pending_delim = first;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = first;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    pub(super) fn state_pipe_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        if cp == 0x7C {
            return Ok(Flow::Emit(TokenKind::Column));
        }
        self.legacy_pair(cp, 0x7C, TokenKind::DashMatch)
    }

    pub(super) fn state_tilde_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.legacy_pair(cp, 0x7E, TokenKind::IncludeMatch)
    }

    pub(super) fn state_caret_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.legacy_pair(cp, 0x5E, TokenKind::PrefixMatch)
    }

    pub(super) fn state_star_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.legacy_pair(cp, 0x2A, TokenKind::SubstringMatch)
    }

    pub(super) fn state_dollar_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.legacy_pair(cp, 0x24, TokenKind::SuffixMatch)
    }
}
