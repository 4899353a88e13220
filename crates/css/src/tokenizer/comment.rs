//! Comments.
//!
//! Comment rows are stored with the internal `Comment` kind so the token
//! table still covers every source code point; surfaced iteration filters
//! them out.

use super::Flow;
use super::states::State;
use super::CssTokenizer;
use crate::token::TokenKind;
use lexis::{CodePoint, EOF_SENTINEL, LexError, LexErrorKind};

impl CssTokenizer {
    pub(super) fn state_slash_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x2A => {
                self.transition(State::InComment);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x2F;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = 0x2F;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    pub(super) fn state_in_comment(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x2A => {
                self.transition(State::CommentStar);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::UnterminatedComment, cp)?;
                Ok(Flow::Emit(TokenKind::Comment))
            }
            _ => Ok(Flow::Continue),
        }
    }

    pub(super) fn state_comment_star(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            0x2F => Ok(Flow::Emit(TokenKind::Comment)),
            0x2A => Ok(Flow::Continue),
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::UnterminatedComment, cp)?;
                Ok(Flow::Emit(TokenKind::Comment))
            }
            _ => {
                self.transition(State::InComment);
                Ok(Flow::Continue)
            }
        }
    }
}
