//! Streaming CSS tokenizer public API.
//!
//! This is a push-driven tokenizer: the producer feeds decoded code points
//! through `push_chunk`/`push_str` and signals end-of-input with `end`. Each
//! code point is normalized and stored once, then run through the current
//! lexical state; completed tokens land in a columnar store readable through
//! `token`/`tokens` at any point between pushes.
//!
//! Invariants:
//! - Chunk-equivalence: feeding input in one chunk or many yields the same
//!   token sequence, string values, and numeric values.
//! - Emitted tokens are immutable; accessors may read any completed token
//!   while tokenization is still in progress.
//! - Replay ("reconsume") is bounded: a state steps the cursor back at most
//!   three code points, and replayed code points are never re-stored.

use crate::classify::{is_digit, is_ident_start, is_whitespace};
use crate::token::TokenKind;
use lexis::{CapacityError, CodePoint, EOF_SENTINEL, LexError, LexErrorKind, SourceBuffer, TokenTable};
use states::State;

mod comment;
mod compound;
mod emit;
mod name;
mod numeric;
mod states;
mod string;
mod token_fmt;
mod url;

pub use token_fmt::token_table_line;

/// Construction options.
#[derive(Clone, Debug)]
pub struct TokenizerConfig {
    /// Expected input length in code points; a capacity hint only.
    pub size: usize,
    /// When true, parse errors accrete into `errors()` and tokenization
    /// continues through a recovery transition. When false, the first parse
    /// error is returned and the tokenizer refuses further input.
    pub recover: bool,
    /// Produce the legacy match-operator tokens (`~=`, `|=`, `^=`, `$=`,
    /// `*=`, `||`) instead of decomposing them into DELIM pairs.
    pub legacy_match_tokens: bool,
    /// Optional debug instrumentation.
    pub debug: Option<DebugMode>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            size: 65536,
            recover: true,
            legacy_match_tokens: false,
            debug: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugMode {
    /// Log each emitted token in tabular form at debug level.
    Lexing,
}

/// Minimal tokenizer instrumentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerStats {
    pub code_points: u64,
    pub state_transitions: u64,
    pub tokens_emitted: u64,
    pub parse_errors: u64,
}

/// Directive a state hands back to the dispatcher.
///
/// Reconsumption steps the effective cursor back `n` (at most 3) and replays
/// the last `n` stored code points into the new state; when end-of-input has
/// already been signalled it is re-signalled after the replay. `Reconsume`
/// with `n == 0` is the degenerate form: switch state and re-signal
/// end-of-input only.
#[derive(Clone, Copy, Debug)]
enum Flow {
    Continue,
    Emit(TokenKind),
    EmitReconsume(TokenKind, u8),
    Reconsume(u8, State),
}

/// Streaming tokenizer for the CSS Syntax 3 lexical grammar.
#[derive(Debug)]
pub struct CssTokenizer {
    config: TokenizerConfig,
    source: SourceBuffer,
    store: TokenTable<TokenKind>,
    state: State,
    /// Effective source cursor: count of consumed code points. Trails
    /// `source.len()` only transiently, inside a replay.
    cursor: usize,

    // Transient per-token fields.
    string_delim: CodePoint,
    pending_delim: CodePoint,
    escape_value: u32,
    escape_digits: u8,
    escape_return: State,
    number_is_float: bool,
    number_end: usize,
    hash_is_id: bool,

    errors: Vec<LexError>,
    end_of_stream: bool,
    poisoned: bool,
    stats: TokenizerStats,
}

impl CssTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        let size = config.size;
        Self {
            config,
            source: SourceBuffer::with_size_hint(size),
            store: TokenTable::with_size_hint(size),
            state: State::TokenStart,
            cursor: 0,
            string_delim: 0,
            pending_delim: 0,
            escape_value: 0,
            escape_digits: 0,
            escape_return: State::TokenStart,
            number_is_float: false,
            number_end: 0,
            hash_is_id: false,
            errors: Vec::new(),
            end_of_stream: false,
            poisoned: false,
            stats: TokenizerStats::default(),
        }
    }

    /// Consume a chunk of decoded code points.
    ///
    /// On a fatal error (any parse error in strict mode, a capacity failure
    /// in either mode) the remainder of the chunk is not consumed and the
    /// tokenizer refuses further input.
    pub fn push_chunk(&mut self, chunk: &[CodePoint]) -> Result<(), LexError> {
        self.assert_accepting("push_chunk");
        for &cp in chunk {
            self.push_one(cp)?;
        }
        Ok(())
    }

    /// Adapter: consume already-decoded text.
    ///
    /// Canonical form is `push_chunk`; this helper is for convenience when
    /// the caller already has a `&str`.
    pub fn push_str(&mut self, text: &str) -> Result<(), LexError> {
        self.assert_accepting("push_str");
        for ch in text.chars() {
            self.push_one(ch as u32)?;
        }
        Ok(())
    }

    /// Signal end-of-input. Each call site of the current state either
    /// completes its token or raises a parse error; nothing is implicit.
    /// Idempotent once it has succeeded.
    pub fn end(&mut self) -> Result<(), LexError> {
        assert!(
            !self.poisoned,
            "CssTokenizer::end called after a fatal lex error"
        );
        if self.end_of_stream {
            return Ok(());
        }
        self.end_of_stream = true;
        self.feed(EOF_SENTINEL)
    }

    /// Whether `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.end_of_stream
    }

    /// Parse errors accreted so far (recover mode).
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn stats(&self) -> TokenizerStats {
        self.stats
    }

    pub(crate) fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub(crate) fn store(&self) -> &TokenTable<TokenKind> {
        &self.store
    }

    fn assert_accepting(&self, entry: &str) {
        assert!(
            !self.end_of_stream,
            "CssTokenizer::{entry} called after end(); this violates the end-of-stream contract"
        );
        assert!(
            !self.poisoned,
            "CssTokenizer::{entry} called after a fatal lex error"
        );
    }

    fn push_one(&mut self, cp: CodePoint) -> Result<(), LexError> {
        self.stats.code_points = self.stats.code_points.saturating_add(1);
        match self.source.accept(cp) {
            Ok(Some(normalized)) => self.feed(normalized),
            Ok(None) => Ok(()), // line feed swallowed after carriage return
            Err(CapacityError) => Err(self.capacity_lex_error()),
        }
    }

    /// Run one code point (or the end-of-input sentinel) through the current
    /// state and interpret the resulting flow directive.
    fn feed(&mut self, cp: CodePoint) -> Result<(), LexError> {
        let at_eof = cp == EOF_SENTINEL;
        if !at_eof {
            self.cursor += 1;
        }
        match self.dispatch(cp)? {
            Flow::Continue => Ok(()),
            Flow::Emit(kind) => self.finish_token(kind),
            Flow::EmitReconsume(kind, n) => {
                debug_assert!(n as usize <= self.cursor && n <= 3);
                self.cursor -= n as usize;
                self.finish_token(kind)?;
                self.replay(n as usize, at_eof)
            }
            Flow::Reconsume(n, next) => {
                debug_assert!(n as usize <= self.cursor && n <= 3);
                self.cursor -= n as usize;
                self.transition(next);
                self.replay(n as usize, at_eof)
            }
        }
    }

    /// Re-feed the `n` stored code points at the cursor, then re-signal
    /// end-of-input if it had already been signalled. Replayed code points
    /// are read back from the source buffer; they are not re-stored.
    fn replay(&mut self, n: usize, at_eof: bool) -> Result<(), LexError> {
        let start = self.cursor;
        for i in 0..n {
            let cp = self.source.code_point(start + i);
            self.feed(cp)?;
        }
        if at_eof {
            self.feed(EOF_SENTINEL)?;
        }
        Ok(())
    }

    fn transition(&mut self, next: State) {
        if self.state == next {
            return;
        }
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "css.tokenizer",
            "state {:?} -> {:?} @{}",
            self.state,
            next,
            self.cursor
        );
        self.state = next;
        self.stats.state_transitions = self.stats.state_transitions.saturating_add(1);
    }

    fn dispatch(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match self.state {
            State::TokenStart => self.state_token_start(cp),
            State::Whitespace => self.state_whitespace(cp),

            State::InString => self.state_in_string(cp),
            State::StringEscape => self.state_string_escape(cp),

            State::EscapeHex => self.state_escape_hex(cp),
            State::EscapeTerm => self.state_escape_term(cp),

            State::Ident => self.state_ident(cp),
            State::IdentEscape => self.state_ident_escape(cp),
            State::BackslashCheck => self.state_backslash_check(cp),

            State::HashStart => self.state_hash_start(cp),
            State::HashMinus => self.state_hash_minus(cp),
            State::HashEscapeCheck => self.state_hash_escape_check(cp),
            State::HashMinusEscapeCheck => self.state_hash_minus_escape_check(cp),
            State::HashName => self.state_hash_name(cp),
            State::HashNameEscape => self.state_hash_name_escape(cp),

            State::AtStart => self.state_at_start(cp),
            State::AtMinus => self.state_at_minus(cp),
            State::AtEscapeCheck => self.state_at_escape_check(cp),
            State::AtMinusEscapeCheck => self.state_at_minus_escape_check(cp),
            State::AtKeyword => self.state_at_keyword(cp),
            State::AtKeywordEscape => self.state_at_keyword_escape(cp),

            State::PlusStart => self.state_plus_start(cp),
            State::PlusDot => self.state_plus_dot(cp),
            State::MinusStart => self.state_minus_start(cp),
            State::MinusDot => self.state_minus_dot(cp),
            State::MinusMinus => self.state_minus_minus(cp),
            State::MinusEscapeCheck => self.state_minus_escape_check(cp),
            State::DotStart => self.state_dot_start(cp),

            State::NumberInt => self.state_number_int(cp),
            State::NumberFracStart => self.state_number_frac_start(cp),
            State::NumberFrac => self.state_number_frac(cp),
            State::NumberExpStart => self.state_number_exp_start(cp),
            State::NumberExpSign => self.state_number_exp_sign(cp),
            State::NumberExp => self.state_number_exp(cp),
            State::NumberTail => self.state_number_tail(cp),
            State::NumberTailMinus => self.state_number_tail_minus(cp),
            State::NumberTailEscapeCheck => self.state_number_tail_escape_check(cp),
            State::NumberTailMinusEscapeCheck => self.state_number_tail_minus_escape_check(cp),
            State::Unit => self.state_unit(cp),
            State::UnitEscape => self.state_unit_escape(cp),

            State::UrlStart => self.state_url_start(cp),
            State::UrlStartWs => self.state_url_start_ws(cp),
            State::UrlLiteral => self.state_url_literal(cp),
            State::UrlEscape => self.state_url_escape(cp),
            State::UrlTail => self.state_url_tail(cp),
            State::BadUrlRec => self.state_bad_url(cp),
            State::BadUrlEscape => self.state_bad_url_escape(cp),

            State::SlashStart => self.state_slash_start(cp),
            State::InComment => self.state_in_comment(cp),
            State::CommentStar => self.state_comment_star(cp),

            State::LtStart => self.state_lt_start(cp),
            State::LtBang => self.state_lt_bang(cp),
            State::LtBangMinus => self.state_lt_bang_minus(cp),

            State::PipeStart => self.state_pipe_start(cp),
            State::TildeStart => self.state_tilde_start(cp),
            State::CaretStart => self.state_caret_start(cp),
            State::StarStart => self.state_star_start(cp),
            State::DollarStart => self.state_dollar_start(cp),
        }
    }

    fn state_token_start(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            EOF_SENTINEL => Ok(Flow::Continue),
            0x09 | 0x0A | 0x20 => {
                self.transition(State::Whitespace);
                Ok(Flow::Continue)
            }
            0x22 | 0x27 => {
                self.string_delim = cp;
                self.transition(State::InString);
                Ok(Flow::Continue)
            }
            0x23 => {
                self.transition(State::HashStart);
                Ok(Flow::Continue)
            }
            0x28 => Ok(Flow::Emit(TokenKind::LeftParenthesis)),
            0x29 => Ok(Flow::Emit(TokenKind::RightParenthesis)),
            0x2C => Ok(Flow::Emit(TokenKind::Comma)),
            0x3A => Ok(Flow::Emit(TokenKind::Colon)),
            0x3B => Ok(Flow::Emit(TokenKind::Semicolon)),
            0x5B => Ok(Flow::Emit(TokenKind::LeftBracket)),
            0x5D => Ok(Flow::Emit(TokenKind::RightBracket)),
            0x7B => Ok(Flow::Emit(TokenKind::LeftBrace)),
            0x7D => Ok(Flow::Emit(TokenKind::RightBrace)),
            0x2B => {
                self.number_is_float = false;
                self.transition(State::PlusStart);
                Ok(Flow::Continue)
            }
            0x2D => {
                self.number_is_float = false;
                self.transition(State::MinusStart);
                Ok(Flow::Continue)
            }
            0x2E => {
                self.number_is_float = false;
                self.transition(State::DotStart);
                Ok(Flow::Continue)
            }
            0x2F => {
                self.transition(State::SlashStart);
                Ok(Flow::Continue)
            }
            0x3C => {
                self.transition(State::LtStart);
                Ok(Flow::Continue)
            }
            0x40 => {
                self.transition(State::AtStart);
                Ok(Flow::Continue)
            }
            0x5C => {
                self.transition(State::BackslashCheck);
                Ok(Flow::Continue)
            }
            0x7C if self.config.legacy_match_tokens => {
                self.transition(State::PipeStart);
                Ok(Flow::Continue)
            }
            0x7E if self.config.legacy_match_tokens => {
                self.transition(State::TildeStart);
                Ok(Flow::Continue)
            }
            0x5E if self.config.legacy_match_tokens => {
                self.transition(State::CaretStart);
                Ok(Flow::Continue)
            }
            0x2A if self.config.legacy_match_tokens => {
                self.transition(State::StarStart);
                Ok(Flow::Continue)
            }
            0x24 if self.config.legacy_match_tokens => {
                self.transition(State::DollarStart);
                Ok(Flow::Continue)
            }
            c if is_digit(c) => {
                self.number_is_float = false;
                self.transition(State::NumberInt);
                Ok(Flow::Continue)
            }
            c if is_ident_start(c) => Ok(Flow::Reconsume(1, State::Ident)),
            other => {
                self.pending_delim = other;
                Ok(Flow::Emit(TokenKind::Delim))
            }
        }
    }

    fn state_whitespace(&mut self, cp: CodePoint) -> Result<Flow, LexError> {
        match cp {
            c if is_whitespace(c) => Ok(Flow::Continue),
            EOF_SENTINEL => Ok(Flow::Emit(TokenKind::Whitespace)),
            _ => Ok(Flow::EmitReconsume(TokenKind::Whitespace, 1)),
        }
    }

    /// Record a parse error at the code point just consumed (or at
    /// end-of-input). Recover mode accretes and returns `Ok` so the caller
    /// can run its recovery transition; strict mode poisons and returns the
    /// error.
    fn parse_error(&mut self, kind: LexErrorKind, cp: CodePoint) -> Result<(), LexError> {
        let at = if cp == EOF_SENTINEL {
            self.source.len()
        } else {
            self.cursor - 1
        };
        let err = LexError::at(kind, &self.source, self.store.last_end() as usize, at);
        self.stats.parse_errors = self.stats.parse_errors.saturating_add(1);
        if self.config.recover {
            #[cfg(any(test, feature = "debug-stats"))]
            log::trace!(
                target: "css.tokenizer",
                "parse error (recovering): {} at {}:{}",
                err.kind.describe(),
                err.line,
                err.column
            );
            self.errors.push(err);
            Ok(())
        } else {
            self.poisoned = true;
            Err(err)
        }
    }

    fn capacity_lex_error(&mut self) -> LexError {
        self.poisoned = true;
        let at = self.cursor.min(self.source.len());
        LexError::at(
            LexErrorKind::Capacity,
            &self.source,
            self.store.last_end() as usize,
            at,
        )
    }

    /// Append one decoded code point to the in-progress string value.
    fn push_value(&mut self, cp: CodePoint) -> Result<(), LexError> {
        match self.store.push_value(cp) {
            Ok(()) => Ok(()),
            Err(CapacityError) => Err(self.capacity_lex_error()),
        }
    }
}
