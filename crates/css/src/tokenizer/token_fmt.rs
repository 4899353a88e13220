//! Deterministic token formatting for debug logging and golden tests.

use crate::introspect::TokenRef;
use crate::token::TokenKind;

/// One tabular line per token: index, kind, origin, source range, and the
/// kind-specific payload.
pub fn token_table_line(token: &TokenRef<'_>) -> String {
    let (line, column) = token.origin();
    let mut out = format!(
        "{:>5}  {:<17} {:>4}:{:<4} {:>6}..{:<6}",
        token.index(),
        token.kind().name(),
        line,
        column,
        token.start(),
        token.end()
    );
    match token.kind() {
        TokenKind::Delim => {
            if let Some(ch) = token.delim() {
                out.push_str(&format!(" '{}'", escape_text(&ch.to_string())));
            }
        }
        TokenKind::Hash => {
            let value = token.string_value().unwrap_or_default();
            let id = if token.hash_is_id() == Some(true) {
                "id"
            } else {
                "unrestricted"
            };
            out.push_str(&format!(" value=\"{}\" {id}", escape_text(&value)));
        }
        TokenKind::Number | TokenKind::Percentage => {
            if let Some(value) = token.numeric_value() {
                out.push_str(&format!(" value={value}"));
            }
        }
        TokenKind::Dimension => {
            if let (Some(value), Some(unit)) = (token.numeric_value(), token.unit()) {
                out.push_str(&format!(" value={value} unit=\"{}\"", escape_text(&unit)));
            }
        }
        kind if kind.has_string_value() => {
            let value = token.string_value().unwrap_or_default();
            out.push_str(&format!(" value=\"{}\"", escape_text(&value)));
        }
        _ => {}
    }
    out
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' || ch == '\u{7f}' => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{CssTokenizer, TokenizerConfig};

    #[test]
    fn table_lines_carry_kind_origin_and_payload() {
        let mut tokenizer = CssTokenizer::new(TokenizerConfig::default());
        tokenizer.push_str("a:#b 2px").expect("lex");
        tokenizer.end().expect("end");

        let lines: Vec<String> = tokenizer
            .tokens()
            .map(|t| token_table_line(&t))
            .collect();
        assert!(lines[0].contains("IDENT") && lines[0].contains("value=\"a\""));
        assert!(lines[1].contains("COLON"));
        assert!(lines[2].contains("HASH") && lines[2].contains("id"));
        assert!(lines[4].contains("DIMENSION") && lines[4].contains("unit=\"px\""));
    }

    #[test]
    fn escape_text_keeps_lines_single_line() {
        assert_eq!(escape_text("a\nb\"c\\"), "a\\nb\\\"c\\\\");
        assert_eq!(escape_text("\u{1}"), "\\u{01}");
    }
}
