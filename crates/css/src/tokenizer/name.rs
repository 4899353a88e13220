//! Identifier-family tokens (ident, function, at-keyword, hash) and the
//! shared hex-escape machinery.

use super::Flow;
use super::states::State;
use super::CssTokenizer;
use crate::classify::{hex_value, is_hex_digit, is_ident_continue, is_ident_start, is_whitespace};
use crate::token::TokenKind;
use lexis::{CodePoint, EOF_SENTINEL, LexError, LexErrorKind, MAX_SCALAR, REPLACEMENT};

impl CssTokenizer {
    // ---- shared escape machinery ----

    /// Enter the hex accumulator after `\` + first hex digit. `owner` is the
    /// accreting state control returns to once the escape terminates.
    pub(super) fn begin_hex_escape(&mut self, first: CodePoint, owner: State) {
        self.escape_value = hex_value(first);
        self.escape_digits = 1;
        self.escape_return = owner;
        self.transition(State::EscapeHex);
    }

    pub(super) fn state_escape_hex(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_hex_digit(c) => {
                self.escape_value = self.escape_value * 16 + hex_value(c);
                self.escape_digits += 1;
                if self.escape_digits == 6 {
                    self.transition(State::EscapeTerm);
                }
                Ok(Flow::Continue)
            }
            c if is_whitespace(c) => {
                // A single trailing whitespace code point terminates the
                // escape and is consumed with it.
                self.end_hex_escape()?;
                let owner = self.escape_return;
                self.transition(owner);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.end_hex_escape()?;
                Ok(Flow::Reconsume(0, self.escape_return))
            }
            _ => {
                self.end_hex_escape()?;
                Ok(Flow::Reconsume(1, self.escape_return))
            }
        }
    }

    /// Reached after six hex digits: the escape value is complete, only the
    /// optional whitespace terminator remains.
    pub(super) fn state_escape_term(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_whitespace(c) => {
                self.end_hex_escape()?;
                let owner = self.escape_return;
                self.transition(owner);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.end_hex_escape()?;
                Ok(Flow::Reconsume(0, self.escape_return))
            }
            _ => {
                self.end_hex_escape()?;
                Ok(Flow::Reconsume(1, self.escape_return))
            }
        }
    }

    /// Decode the accumulated hex value into the string arena. Zero, values
    /// past the scalar range, and surrogates all decode to U+FFFD.
    fn end_hex_escape(&mut self) -> Result<(), LexError> {
        let value = self.escape_value;
        let decoded = if value == 0 || value > MAX_SCALAR || (0xD800..=0xDFFF).contains(&value) {
            REPLACEMENT
        } else {
            value
        };
        self.push_value(decoded)
    }

    /// Shared handler for `\` inside a name-accreting state. A line feed is
    /// not escapable here: the name ends before the backslash and both code
    /// points re-tokenize (the backslash will raise the parse error as a
    /// DELIM). End-of-input decodes to U+FFFD with a parse error, then the
    /// owner sees end-of-input and finishes its token.
    pub(super) fn name_escape(
        &mut self,
        cp: CodePoint,
        owner: State,
        kind_on_newline: TokenKind,
    ) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::InvalidEscape, cp)?;
                self.push_value(REPLACEMENT)?;
                Ok(Flow::Reconsume(0, owner))
            }
            0x0A => Ok(Flow::EmitReconsume(kind_on_newline, 2)),
            c if is_hex_digit(c) => {
                self.begin_hex_escape(c, owner);
                Ok(Flow::Continue)
            }
            c => {
                self.push_value(c)?;
                self.transition(owner);
                Ok(Flow::Continue)
            }
        }
    }

    // ---- ident / function ----

    pub(super) fn state_ident(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_continue(c) => {
                self.push_value(c)?;
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::IdentEscape);
                Ok(Flow::Continue)
            }
            0x28 => {
                if self.value_is_url() {
                    self.transition(State::UrlStart);
                    Ok(Flow::Continue)
                } else {
                    Ok(Flow::Emit(TokenKind::Function))
                }
            }
            EOF_SENTINEL => Ok(Flow::Emit(TokenKind::Ident)),
            _ => Ok(Flow::EmitReconsume(TokenKind::Ident, 1)),
        }
    }

    pub(super) fn state_ident_escape(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.name_escape(cp, State::Ident, TokenKind::Ident)
    }

    /// Case-insensitive `url` check on the decoded value, so escaped
    /// spellings such as `\75rl(` disambiguate the same way.
    fn value_is_url(&self) -> bool {
        let value = self
            .store
            .value_slice(self.store.watermark(), self.store.string_len());
        value.len() == 3
            && (value[0] | 0x20) == 0x75
            && (value[1] | 0x20) == 0x72
            && (value[2] | 0x20) == 0x6C
    }

    /// A token-initial `\`: either an escaped identifier or a parse error
    /// that degrades to a DELIM.
    pub(super) fn state_backslash_check(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.parse_error(LexErrorKind::InvalidEscape, cp)?;
                self.pending_delim = 0x5C;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            0x0A => {
                self.parse_error(LexErrorKind::InvalidEscape, cp)?;
                self.pending_delim = 0x5C;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            _ => Ok(Flow::Reconsume(2, State::Ident)),
        }
    }

    // ---- hash ----

    pub(super) fn state_hash_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_start(c) => {
                self.hash_is_id = true;
                Ok(Flow::Reconsume(1, State::HashName))
            }
            c if crate::classify::is_digit(c) => {
                self.hash_is_id = false;
                Ok(Flow::Reconsume(1, State::HashName))
            }
            0x2D => {
                self.transition(State::HashMinus);
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::HashEscapeCheck);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x23;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = 0x23;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    pub(super) fn state_hash_minus(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_start(c) || c == 0x2D => {
                self.hash_is_id = true;
                Ok(Flow::Reconsume(2, State::HashName))
            }
            c if crate::classify::is_digit(c) => {
                self.hash_is_id = false;
                Ok(Flow::Reconsume(2, State::HashName))
            }
            0x5C => {
                self.transition(State::HashMinusEscapeCheck);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                // `-` is a name code point on its own, so `#-` is still a
                // hash, just not an ID one.
                self.hash_is_id = false;
                Ok(Flow::Reconsume(1, State::HashName))
            }
            _ => {
                self.hash_is_id = false;
                Ok(Flow::Reconsume(2, State::HashName))
            }
        }
    }

    pub(super) fn state_hash_escape_check(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.pending_delim = 0x23;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            0x0A => {
                self.pending_delim = 0x23;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
            _ => {
                self.hash_is_id = true;
                Ok(Flow::Reconsume(2, State::HashName))
            }
        }
    }

    pub(super) fn state_hash_minus_escape_check(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                // `#-\` at end of input keeps the ID flag even though the
                // would-start-an-identifier check fails. Possibly a defect in
                // the hash-token type rules; tracked against the CSS Syntax 3
                // issue list at https://github.com/w3c/csswg-drafts/issues.
                self.hash_is_id = true;
                self.parse_error(LexErrorKind::InvalidEscape, cp)?;
                self.push_value(0x2D)?;
                self.push_value(REPLACEMENT)?;
                Ok(Flow::Emit(TokenKind::Hash))
            }
            0x0A => {
                self.hash_is_id = false;
                self.push_value(0x2D)?;
                Ok(Flow::EmitReconsume(TokenKind::Hash, 2))
            }
            _ => {
                self.hash_is_id = true;
                Ok(Flow::Reconsume(3, State::HashName))
            }
        }
    }

    pub(super) fn state_hash_name(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_continue(c) => {
                self.push_value(c)?;
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::HashNameEscape);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => Ok(Flow::Emit(TokenKind::Hash)),
            _ => Ok(Flow::EmitReconsume(TokenKind::Hash, 1)),
        }
    }

    pub(super) fn state_hash_name_escape(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.name_escape(cp, State::HashName, TokenKind::Hash)
    }

    // ---- at-keyword ----

    pub(super) fn state_at_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_start(c) => Ok(Flow::Reconsume(1, State::AtKeyword)),
            0x2D => {
                self.transition(State::AtMinus);
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::AtEscapeCheck);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x40;
                Ok(Flow::Emit(TokenKind::Delim))
            }
            _ => {
                self.pending_delim = 0x40;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
        }
    }

    pub(super) fn state_at_minus(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_start(c) || c == 0x2D => Ok(Flow::Reconsume(2, State::AtKeyword)),
            0x5C => {
                self.transition(State::AtMinusEscapeCheck);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => {
                self.pending_delim = 0x40;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            _ => {
                self.pending_delim = 0x40;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
        }
    }

    pub(super) fn state_at_escape_check(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.pending_delim = 0x40;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 1))
            }
            0x0A => {
                self.pending_delim = 0x40;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
            _ => Ok(Flow::Reconsume(2, State::AtKeyword)),
        }
    }

    pub(super) fn state_at_minus_escape_check(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => {
                self.pending_delim = 0x40;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 2))
            }
            0x0A => {
                self.pending_delim = 0x40;
                Ok(Flow::EmitReconsume(TokenKind::Delim, 3))
            }
            _ => Ok(Flow::Reconsume(3, State::AtKeyword)),
        }
    }

    pub(super) fn state_at_keyword(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_ident_continue(c) => {
                self.push_value(c)?;
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::AtKeywordEscape);
                Ok(Flow::Continue)
            }
            EOF_SENTINEL => Ok(Flow::Emit(TokenKind::AtKeyword)),
            _ => Ok(Flow::EmitReconsume(TokenKind::AtKeyword, 1)),
        }
    }

    pub(super) fn state_at_keyword_escape(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        self.name_escape(cp, State::AtKeyword, TokenKind::AtKeyword)
    }
}
