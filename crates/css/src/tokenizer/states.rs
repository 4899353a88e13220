//! Lexical state definitions.
//!
//! The CSS Syntax 3 consume-* algorithms are linearized here to
//! single-code-point consumption: every piece of look-ahead the prose
//! algorithms take becomes an explicit state, and "as if the input had not
//! been consumed" becomes a bounded replay of at most three stored code
//! points (see `CssTokenizer::feed`).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Initial dispatch on the first code point of each token.
    TokenStart,
    /// Accreting a whitespace run.
    Whitespace,

    /// Inside a string; the delimiter lives in `string_delim`.
    InString,
    /// Immediately after `\` inside a string.
    StringEscape,

    /// Accumulating hex digits of an escape; returns to `escape_return`.
    EscapeHex,
    /// After six hex digits, deciding whether the next code point is the
    /// single consumable whitespace terminator.
    EscapeTerm,

    /// Accreting an identifier (may become IDENT, FUNCTION, or a url token).
    Ident,
    /// Immediately after `\` inside an identifier.
    IdentEscape,
    /// After a token-initial `\`, deciding between an escaped identifier and
    /// a DELIM parse error.
    BackslashCheck,

    /// After `#`.
    HashStart,
    /// After `#-`.
    HashMinus,
    /// After `#\`.
    HashEscapeCheck,
    /// After `#-\`.
    HashMinusEscapeCheck,
    /// Accreting a hash name.
    HashName,
    /// Immediately after `\` inside a hash name.
    HashNameEscape,

    /// After `@`.
    AtStart,
    /// After `@-`.
    AtMinus,
    /// After `@\`.
    AtEscapeCheck,
    /// After `@-\`.
    AtMinusEscapeCheck,
    /// Accreting an at-keyword name.
    AtKeyword,
    /// Immediately after `\` inside an at-keyword name.
    AtKeywordEscape,

    /// After `+`.
    PlusStart,
    /// After `+.`.
    PlusDot,
    /// After `-`.
    MinusStart,
    /// After `-.`.
    MinusDot,
    /// After `--` (CDC or a dashed identifier).
    MinusMinus,
    /// After `-\`.
    MinusEscapeCheck,
    /// After a token-initial `.`.
    DotStart,

    /// Consuming integer digits.
    NumberInt,
    /// After `.` following digits.
    NumberFracStart,
    /// Consuming fraction digits.
    NumberFrac,
    /// After `e`/`E` following digits.
    NumberExpStart,
    /// After an exponent sign.
    NumberExpSign,
    /// Consuming exponent digits.
    NumberExp,
    /// Digits are done; deciding between NUMBER, PERCENTAGE, and DIMENSION.
    NumberTail,
    /// After `-` following a complete number.
    NumberTailMinus,
    /// After `\` following a complete number.
    NumberTailEscapeCheck,
    /// After `-\` following a complete number.
    NumberTailMinusEscapeCheck,
    /// Accreting a dimension unit.
    Unit,
    /// Immediately after `\` inside a dimension unit.
    UnitEscape,

    /// Just after `url(`.
    UrlStart,
    /// Inside the leading whitespace of `url(`.
    UrlStartWs,
    /// Accreting an unquoted url value.
    UrlLiteral,
    /// Immediately after `\` inside a url value.
    UrlEscape,
    /// Whitespace after the url value, expecting `)`.
    UrlTail,
    /// Recover-mode absorption of a failed url up to its `)`.
    BadUrlRec,
    /// Immediately after `\` inside a failed url.
    BadUrlEscape,

    /// After `/`.
    SlashStart,
    /// Inside `/* ... */`.
    InComment,
    /// After `*` inside a comment.
    CommentStar,

    /// After `<`.
    LtStart,
    /// After `<!`.
    LtBang,
    /// After `<!-`.
    LtBangMinus,

    /// After `|` (legacy match tokens only).
    PipeStart,
    /// After `~` (legacy match tokens only).
    TildeStart,
    /// After `^` (legacy match tokens only).
    CaretStart,
    /// After `*` (legacy match tokens only).
    StarStart,
    /// After `$` (legacy match tokens only).
    DollarStart,
}
