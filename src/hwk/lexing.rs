//! Lexer
//!
//! This module orchestrates the tokenization of hwk source.
//!
//! Structure:
//!     Tokenization happens in two stages.
//!
//!     1. Base tokenization with the logos lexer ./lexing/tokens.rs. Raw tokens are single
//!        characters or plain runs: `--`, `[`, `=`, `"`, `\` and so on. Every byte of the
//!        input belongs to exactly one raw token, so this stage can never fail.
//!     2. Segmentation ./lexing/segmentation.rs. Runs of raw tokens are assembled into
//!        the segments the rewriter cares about: long-bracket delimiters, quoted strings,
//!        comment markers.
//!
//!     The delimiters that need lookahead (`--[==[` versus a bare `--`, a quote versus an
//!     unterminated quote) are resolved in the second stage by walking the raw tokens.
//!     This keeps the logos grammar free of overlapping regexes, and keeps the precedence
//!     rules in plain code where they can be read:
//!
//!     - a long-bracket delimiter wins over a bare `--`,
//!     - a quoted string runs to the first unescaped matching quote on the same line,
//!     - a quote with no partner is just text.

pub mod base_tokenization;
pub mod segmentation;
pub mod tokens;

pub use base_tokenization::tokenize;
pub use segmentation::segment;
pub use tokens::Token;

use crate::hwk::segment::Segment;

/// Tokenize and segment `source`.
pub fn lex(source: &str) -> Vec<Segment> {
    let tokens = tokenize(source);
    segment(&tokens)
}
