//! Buffered code-point source with stream preprocessing and position tracking.

use crate::code_point::{CodePoint, REPLACEMENT};
use crate::error::CapacityError;
use crate::grow::ensure_push_capacity;

/// Append-only buffer of post-normalization code points.
///
/// Each stored code point carries the (line, column) it originated at, both
/// 1-based. Indices into this buffer identify positions in the input.
///
/// Preprocessing, applied before storage:
/// - U+0000 becomes U+FFFD.
/// - U+000C and U+000D become U+000A.
/// - A U+000A immediately after a raw U+000D is swallowed (CR LF collapses to
///   one stored line feed).
#[derive(Debug)]
pub struct SourceBuffer {
    code_points: Vec<CodePoint>,
    lines: Vec<u32>,
    columns: Vec<u32>,
    line: u32,
    column: u32,
    last_was_cr: bool,
}

impl SourceBuffer {
    /// `size_hint` is the expected input length in code points; storage is
    /// pre-reserved to match and doubles on exhaustion.
    pub fn with_size_hint(size_hint: usize) -> Self {
        Self {
            code_points: Vec::with_capacity(size_hint),
            lines: Vec::with_capacity(size_hint),
            columns: Vec::with_capacity(size_hint),
            line: 1,
            column: 1,
            last_was_cr: false,
        }
    }

    /// Normalize and store one incoming code point.
    ///
    /// Returns the stored (normalized) code point, or `None` when the code
    /// point is a line feed swallowed by CR LF coalescing. Position advances
    /// per stored code point: a stored line feed increments the line and
    /// resets the column.
    pub fn accept(&mut self, cp: CodePoint) -> Result<Option<CodePoint>, CapacityError> {
        debug_assert!(
            crate::code_point::is_scalar(cp),
            "source input must be scalar values, got {cp:#X}"
        );
        if self.last_was_cr && cp == 0x0A {
            self.last_was_cr = false;
            return Ok(None);
        }
        self.last_was_cr = cp == 0x0D;
        let normalized = match cp {
            0x00 => REPLACEMENT,
            0x0C | 0x0D => 0x0A,
            other => other,
        };

        ensure_push_capacity(&mut self.code_points)?;
        ensure_push_capacity(&mut self.lines)?;
        ensure_push_capacity(&mut self.columns)?;
        self.code_points.push(normalized);
        self.lines.push(self.line);
        self.columns.push(self.column);

        if normalized == 0x0A {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(Some(normalized))
    }

    /// Number of stored (post-normalization) code points.
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    pub fn code_point(&self, index: usize) -> CodePoint {
        self.code_points[index]
    }

    pub fn slice(&self, range: std::ops::Range<usize>) -> &[CodePoint] {
        &self.code_points[range]
    }

    /// (line, column) the code point at `index` originated at.
    pub fn position(&self, index: usize) -> (u32, u32) {
        (self.lines[index], self.columns[index])
    }

    /// Position one past the last stored code point (where end-of-input sits).
    pub fn current_position(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    pub fn slice_to_string(&self, range: std::ops::Range<usize>) -> String {
        crate::code_point::string_from(&self.code_points[range])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept_all(source: &mut SourceBuffer, text: &str) {
        for ch in text.chars() {
            let _ = source.accept(ch as u32).expect("growth in tests");
        }
    }

    fn stored(source: &SourceBuffer) -> String {
        source.slice_to_string(0..source.len())
    }

    #[test]
    fn nul_form_feed_and_cr_are_normalized() {
        let mut source = SourceBuffer::with_size_hint(16);
        accept_all(&mut source, "a\u{0}b\u{C}c\rd");
        assert_eq!(stored(&source), "a\u{FFFD}b\nc\nd");
    }

    #[test]
    fn cr_lf_collapses_to_one_line_feed() {
        let mut source = SourceBuffer::with_size_hint(16);
        accept_all(&mut source, "a\r\nb\rc\nd");
        assert_eq!(stored(&source), "a\nb\nc\nd");
    }

    #[test]
    fn cr_lf_collapses_across_accept_boundaries() {
        let mut source = SourceBuffer::with_size_hint(16);
        accept_all(&mut source, "a\r");
        accept_all(&mut source, "\nb");
        assert_eq!(stored(&source), "a\nb");
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut first = SourceBuffer::with_size_hint(16);
        accept_all(&mut first, "x\u{0}y\r\nz\u{C}w");
        let normalized = stored(&first);

        let mut second = SourceBuffer::with_size_hint(16);
        accept_all(&mut second, &normalized);
        assert_eq!(stored(&second), normalized);
    }

    #[test]
    fn positions_are_one_based_and_follow_line_feeds() {
        let mut source = SourceBuffer::with_size_hint(16);
        accept_all(&mut source, "ab\ncd");
        assert_eq!(source.position(0), (1, 1));
        assert_eq!(source.position(1), (1, 2));
        assert_eq!(source.position(2), (1, 3)); // the line feed itself
        assert_eq!(source.position(3), (2, 1));
        assert_eq!(source.position(4), (2, 2));
        assert_eq!(source.current_position(), (2, 3));
    }

    #[test]
    fn cr_lf_advances_one_line() {
        let mut source = SourceBuffer::with_size_hint(16);
        accept_all(&mut source, "a\r\nb");
        assert_eq!(source.position(2), (2, 1));
        assert_eq!(source.current_position(), (2, 2));
    }

    #[test]
    fn grows_past_the_declared_size() {
        let mut source = SourceBuffer::with_size_hint(2);
        accept_all(&mut source, "abcdefgh");
        assert_eq!(stored(&source), "abcdefgh");
        assert_eq!(source.len(), 8);
    }
}
