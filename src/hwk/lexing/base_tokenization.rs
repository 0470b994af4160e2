//! Base tokenization implementation for the hwk lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.

use crate::hwk::lexing::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Tokenize source code with location information
///
/// The token grammar covers every character, so logos should never report an error.
/// Should it do so anyway, the slice is kept as `Text` rather than dropped: later
/// stages rely on the spans tiling the source.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(Token::Text), lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("key => go");
        assert_eq!(
            tokens,
            vec![
                (Token::Text, 0..3),
                (Token::Whitespace, 3..4),
                (Token::Arrow, 4..6),
                (Token::Whitespace, 6..7),
                (Token::Text, 7..9),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_spans_tile_the_source() {
        let source = "--[[ {x} ]] 'it\\'s' \"q\" =>\n\t}";
        let tokens = tokenize(source);
        let mut expected_start = 0;
        for (_, span) in &tokens {
            assert_eq!(span.start, expected_start);
            expected_start = span.end;
        }
        assert_eq!(expected_start, source.len());
    }
}
