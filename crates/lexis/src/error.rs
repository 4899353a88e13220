//! Lex errors with location, source snippet, and spec reference.

use crate::code_point::to_char_lossy;
use crate::source::SourceBuffer;

/// Marker for a refused buffer growth; the driver converts it into a
/// `LexError` with location context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// `\` followed by end-of-input, or `\` + line feed where an identifier
    /// was required to start.
    InvalidEscape,
    /// Line feed or end-of-input inside a string.
    UnterminatedString,
    /// Unescaped quote/parenthesis or non-printable inside a url, content
    /// after the url value, or end-of-input before `)`.
    BadUrl,
    /// End-of-input inside `/* ... */`.
    UnterminatedComment,
    /// The source outgrew the declared capacity and the allocator refused
    /// further growth.
    Capacity,
}

impl LexErrorKind {
    pub fn describe(self) -> &'static str {
        match self {
            LexErrorKind::InvalidEscape => "invalid escape",
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::BadUrl => "bad url",
            LexErrorKind::UnterminatedComment => "unterminated comment",
            LexErrorKind::Capacity => "source buffer growth refused",
        }
    }

    pub fn spec_url(self) -> &'static str {
        match self {
            LexErrorKind::InvalidEscape => {
                "https://drafts.csswg.org/css-syntax-3/#consume-escaped-code-point"
            }
            LexErrorKind::UnterminatedString => {
                "https://drafts.csswg.org/css-syntax-3/#consume-string-token"
            }
            LexErrorKind::BadUrl => "https://drafts.csswg.org/css-syntax-3/#consume-url-token",
            LexErrorKind::UnterminatedComment => {
                "https://drafts.csswg.org/css-syntax-3/#consume-comment"
            }
            LexErrorKind::Capacity => "https://drafts.csswg.org/css-syntax-3/#input-stream",
        }
    }
}

/// Maximum code points of prior context and of offending region shown in a
/// rendered snippet.
pub const SNIPPET_RADIUS: usize = 60;

/// A lex error at a specific source location.
///
/// `line`/`column` are where the error became evident, which may lie past the
/// start of the offending region (e.g. the end of input for an unterminated
/// string). The snippet shows prior context plus the offending region with a
/// caret line underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
    pub snippet: String,
    pub spec_url: &'static str,
}

impl LexError {
    /// Build an error evident at source index `at` (== `source.len()` for
    /// end-of-input), with the offending region starting at `region_start`.
    pub fn at(kind: LexErrorKind, source: &SourceBuffer, region_start: usize, at: usize) -> Self {
        let (line, column) = if at < source.len() {
            source.position(at)
        } else {
            source.current_position()
        };
        Self {
            kind,
            line,
            column,
            snippet: render_snippet(source, region_start, at),
            spec_url: kind.spec_url(),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} at {}:{} ({})",
            self.kind.describe(),
            self.line,
            self.column,
            self.spec_url
        )?;
        write!(f, "{}", self.snippet)
    }
}

impl std::error::Error for LexError {}

fn render_snippet(source: &SourceBuffer, region_start: usize, at: usize) -> String {
    let end = at.saturating_add(1).min(source.len());
    let region_start = region_start.min(end);
    let region_from = region_start.max(end.saturating_sub(SNIPPET_RADIUS));
    let context_from = region_from.saturating_sub(SNIPPET_RADIUS);

    let mut text = String::new();
    for &cp in source.slice(context_from..region_from) {
        text.push(printable(cp));
    }
    let caret_offset = text.chars().count();
    for &cp in source.slice(region_from..end) {
        text.push(printable(cp));
    }

    let mut out = text;
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', caret_offset));
    out.push('^');
    let tail = end.saturating_sub(region_from).saturating_sub(1);
    out.extend(std::iter::repeat_n('~', tail));
    out
}

/// One snippet column per code point; control characters would break the
/// caret alignment, so they render as spaces.
fn printable(cp: u32) -> char {
    if cp < 0x20 || cp == 0x7F {
        ' '
    } else {
        to_char_lossy(cp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_of(text: &str) -> SourceBuffer {
        let mut source = SourceBuffer::with_size_hint(text.len());
        for ch in text.chars() {
            let _ = source.accept(ch as u32).expect("growth in tests");
        }
        source
    }

    #[test]
    fn snippet_points_at_the_offending_region() {
        let source = source_of("a { color: \"oops");
        let err = LexError::at(LexErrorKind::UnterminatedString, &source, 11, 16);
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 17);
        let lines: Vec<&str> = err.snippet.lines().collect();
        assert_eq!(lines[0], "a { color: \"oops");
        assert_eq!(lines[1], "           ^~~~~");
    }

    #[test]
    fn snippet_clamps_context_and_region() {
        let long = "x".repeat(200);
        let source = source_of(&long);
        let err = LexError::at(LexErrorKind::BadUrl, &source, 0, 199);
        let first = err.snippet.lines().next().unwrap();
        assert_eq!(first.chars().count(), 2 * SNIPPET_RADIUS);
    }

    #[test]
    fn error_at_end_of_input_uses_the_current_position() {
        let source = source_of("ab\nc");
        let err = LexError::at(LexErrorKind::UnterminatedComment, &source, 0, source.len());
        assert_eq!((err.line, err.column), (2, 2));
    }

    #[test]
    fn display_carries_kind_location_and_reference() {
        let source = source_of("\"x");
        let err = LexError::at(LexErrorKind::UnterminatedString, &source, 0, 2);
        let rendered = err.to_string();
        assert!(rendered.contains("unterminated string at 1:3"));
        assert!(rendered.contains("#consume-string-token"));
    }
}
