//! Code-point model shared by the framework and its consumers.

/// A Unicode code point widened to `u32` so the end-of-input sentinel fits
/// outside the scalar range.
pub type CodePoint = u32;

/// End-of-input sentinel. Deliberately outside `0..=MAX_SCALAR` so no
/// classification predicate can mistake it for input.
pub const EOF_SENTINEL: CodePoint = u32::MAX;

/// Largest valid Unicode scalar value.
pub const MAX_SCALAR: CodePoint = 0x10FFFF;

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT: CodePoint = 0xFFFD;

pub fn is_surrogate(cp: CodePoint) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

pub fn is_scalar(cp: CodePoint) -> bool {
    cp <= MAX_SCALAR && !is_surrogate(cp)
}

/// Render a stored code point for diagnostics. Stored code points are always
/// scalar values, but the fallback keeps rendering total.
pub fn to_char_lossy(cp: CodePoint) -> char {
    char::from_u32(cp).unwrap_or('\u{FFFD}')
}

/// Collect a code-point slice into an owned `String`.
pub fn string_from(code_points: &[CodePoint]) -> String {
    code_points.iter().copied().map(to_char_lossy).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_a_scalar() {
        assert!(!is_scalar(EOF_SENTINEL));
        assert!(is_scalar(0));
        assert!(is_scalar(MAX_SCALAR));
        assert!(!is_scalar(0xD800));
        assert!(!is_scalar(MAX_SCALAR + 1));
    }

    #[test]
    fn string_from_round_trips_text() {
        let cps: Vec<CodePoint> = "péu\u{1F600}".chars().map(|c| c as u32).collect();
        assert_eq!(string_from(&cps), "péu\u{1F600}");
    }
}
