//! Token kinds produced by the tokenizer.

/// The complete kind set.
///
/// `Comment` rows are stored for source coverage but filtered from surfaced
/// iteration. `BadUrl` is only produced in recover mode, closing off an
/// unsalvageable url token at its `)` or at end of input. The match-operator
/// kinds (`Column` through `SuffixMatch`) are only produced when the
/// `legacy_match_tokens` construction flag is set; without it those inputs
/// decompose into DELIM sequences, matching current CSS Syntax 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    AtKeyword,
    BadUrl,
    Cdc,
    Cdo,
    Colon,
    Comma,
    Comment,
    Delim,
    Dimension,
    Function,
    Hash,
    Ident,
    LeftBrace,
    LeftBracket,
    LeftParenthesis,
    Number,
    Percentage,
    RightBrace,
    RightBracket,
    RightParenthesis,
    Semicolon,
    String,
    Url,
    Whitespace,
    Column,
    DashMatch,
    IncludeMatch,
    PrefixMatch,
    SubstringMatch,
    SuffixMatch,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::AtKeyword => "AT_KEYWORD",
            TokenKind::BadUrl => "BAD_URL",
            TokenKind::Cdc => "CDC",
            TokenKind::Cdo => "CDO",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Comment => "COMMENT",
            TokenKind::Delim => "DELIM",
            TokenKind::Dimension => "DIMENSION",
            TokenKind::Function => "FUNCTION",
            TokenKind::Hash => "HASH",
            TokenKind::Ident => "IDENT",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::LeftParenthesis => "LEFT_PARENTHESIS",
            TokenKind::Number => "NUMBER",
            TokenKind::Percentage => "PERCENTAGE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::RightParenthesis => "RIGHT_PARENTHESIS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::String => "STRING",
            TokenKind::Url => "URL",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Column => "COLUMN",
            TokenKind::DashMatch => "DASH_MATCH",
            TokenKind::IncludeMatch => "INCLUDE_MATCH",
            TokenKind::PrefixMatch => "PREFIX_MATCH",
            TokenKind::SubstringMatch => "SUBSTRING_MATCH",
            TokenKind::SuffixMatch => "SUFFIX_MATCH",
        }
    }

    /// Whether the kind appears in surfaced iteration (`Comment` does not).
    pub fn is_surfaced(self) -> bool {
        self != TokenKind::Comment
    }

    /// Kinds whose slots span the string-value arena.
    pub fn has_string_value(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::Function
                | TokenKind::AtKeyword
                | TokenKind::Hash
                | TokenKind::String
                | TokenKind::Url
                | TokenKind::BadUrl
        )
    }

    /// Kinds carrying a numeric value.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Percentage | TokenKind::Dimension
        )
    }
}
