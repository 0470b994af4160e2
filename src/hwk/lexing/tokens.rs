//! Token definitions for hwk
//!
//! Raw tokens produced by the logos lexer. They are deliberately small: each one is a
//! fixed string or a run of a single character class, so that logos never has to
//! backtrack and every input byte is covered by some token.
use logos::Logos;
use serde::Serialize;

/// All raw tokens of the hwk lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Token {
    // Line breaks
    #[token("\n")]
    Newline,

    // Whitespace (excluding newlines)
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    // Comment markers
    #[token("--")]
    DoubleDash,
    #[token("-")]
    Dash,

    // Long bracket pieces
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("=")]
    Equals,

    // Structural operators
    #[token("=>")]
    Arrow,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // String pieces
    #[token("\"")]
    DoubleQuote,
    #[token("'")]
    SingleQuote,
    #[token("\\")]
    Backslash,

    // Text content (catch-all for non-special characters)
    #[regex(r#"[^ \t\r\f\n\-\[\]="'\\{}]+"#)]
    Text,
}

impl Token {
    /// Check if this token can start a long-bracket delimiter
    pub fn is_bracket(&self) -> bool {
        matches!(self, Token::OpenBracket | Token::CloseBracket)
    }

    /// Check if this token opens a quoted string
    pub fn is_quote(&self) -> bool {
        matches!(self, Token::DoubleQuote | Token::SingleQuote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_arrow_and_equals() {
        assert_eq!(lex_all("=>"), vec![Token::Arrow]);
        assert_eq!(lex_all("=="), vec![Token::Equals, Token::Equals]);
        assert_eq!(lex_all("==>"), vec![Token::Equals, Token::Arrow]);
    }

    #[test]
    fn test_dashes() {
        assert_eq!(lex_all("---"), vec![Token::DoubleDash, Token::Dash]);
        assert_eq!(lex_all("a-b"), vec![Token::Text, Token::Dash, Token::Text]);
    }

    #[test]
    fn test_long_bracket_pieces() {
        assert_eq!(
            lex_all("--[=["),
            vec![
                Token::DoubleDash,
                Token::OpenBracket,
                Token::Equals,
                Token::OpenBracket
            ]
        );
    }

    #[test]
    fn test_text_stops_at_specials() {
        assert_eq!(
            lex_all("say(\"hi\")"),
            vec![
                Token::Text,
                Token::DoubleQuote,
                Token::Text,
                Token::DoubleQuote,
                Token::Text
            ]
        );
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(
            lex_all(" \t\r\n"),
            vec![Token::Whitespace, Token::Newline]
        );
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(lex_all("ø→é"), vec![Token::Text]);
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::OpenBracket.is_bracket());
        assert!(Token::CloseBracket.is_bracket());
        assert!(!Token::Equals.is_bracket());
        assert!(Token::SingleQuote.is_quote());
        assert!(!Token::Backslash.is_quote());
    }
}
