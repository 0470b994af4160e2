//! Segmentation
//!
//!     Turns the flat raw token stream into segments. Most raw tokens map one to one; the
//!     interesting cases need to look ahead:
//!
//!         `--` `[` `=`* `[`    long comment opener
//!         `--` `]` `=`* `]`    long comment closer
//!         `[` `=`* `[`         long string opener
//!         `]` `=`* `]`         long string closer
//!         `--`                 line comment, when no delimiter follows
//!         `"` ... `"`          quoted string, `\` escapes the next raw token
//!         `'` ... `'`          same
//!
//!     A quote that has no partner before the end of its line is text. A `[` or `]` that
//!     does not complete a delimiter is text. Adjacent text segments are merged so that
//!     segment listings stay readable.
//!
//!     The scanner follows comments the same way the rewriter does. After a bare `--`
//!     everything up to the next newline is text. Inside a long bracket only long-bracket
//!     delimiters are recognised; quotes and bare `--` there are text.

use crate::hwk::lexing::tokens::Token;
use crate::hwk::segment::{LongBracket, Quote, Segment, SegmentKind};
use std::ops::Range;

/// Segment a raw token stream. The segments cover exactly the spans of the tokens.
pub fn segment(tokens: &[(Token, Range<usize>)]) -> Vec<Segment> {
    let mut scanner = Scanner {
        tokens,
        pos: 0,
        mode: Mode::Code,
    };
    let mut segments: Vec<Segment> = Vec::with_capacity(tokens.len());

    while let Some(next) = scanner.next_segment() {
        match segments.last_mut() {
            Some(last) if last.kind == SegmentKind::Text && next.kind == SegmentKind::Text => {
                last.span.end = next.span.end;
            }
            _ => segments.push(next),
        }
    }

    segments
}

/// A long-bracket delimiter found in the raw stream.
struct Delimiter {
    opening: bool,
    level: usize,
    /// Index of the first raw token after the delimiter.
    next: usize,
    /// Byte offset where the delimiter ends.
    end: usize,
}

/// What the raw tokens at the scanner position belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    /// After a bare `--`, up to the next newline.
    LineComment,
    /// Inside long brackets, with the number of delimiters still open.
    LongBracket(usize),
}

struct Scanner<'t> {
    tokens: &'t [(Token, Range<usize>)],
    pos: usize,
    mode: Mode,
}

impl Scanner<'_> {
    fn next_segment(&mut self) -> Option<Segment> {
        let (token, span) = self.tokens.get(self.pos)?;
        let (token, span) = (*token, span.clone());

        if self.mode == Mode::LineComment {
            self.pos += 1;
            let kind = if token == Token::Newline {
                self.mode = Mode::Code;
                SegmentKind::LineBreak
            } else {
                SegmentKind::Text
            };
            return Some(Segment::new(kind, span));
        }
        let in_code = self.mode == Mode::Code;

        let kind = match token {
            Token::DoubleDash => {
                if let Some(delimiter) = self.delimiter_at(self.pos + 1) {
                    return Some(self.take_delimiter(span.start, true, delimiter));
                }
                if in_code {
                    self.mode = Mode::LineComment;
                    SegmentKind::LineComment
                } else {
                    SegmentKind::Text
                }
            }
            Token::OpenBracket | Token::CloseBracket => {
                if let Some(delimiter) = self.delimiter_at(self.pos) {
                    return Some(self.take_delimiter(span.start, false, delimiter));
                }
                SegmentKind::Text
            }
            quote if quote.is_quote() && in_code => {
                if let Some((next, end)) = self.closing_quote(token, self.pos + 1) {
                    self.pos = next;
                    let quote = if token == Token::DoubleQuote {
                        Quote::Double
                    } else {
                        Quote::Single
                    };
                    return Some(Segment::new(SegmentKind::Quoted(quote), span.start..end));
                }
                SegmentKind::Text
            }
            Token::Newline => SegmentKind::LineBreak,
            Token::Whitespace => SegmentKind::Whitespace,
            Token::Arrow => SegmentKind::Arrow,
            Token::OpenBrace => SegmentKind::OpenBrace,
            Token::CloseBrace => SegmentKind::CloseBrace,
            Token::DoubleQuote
            | Token::SingleQuote
            | Token::Dash
            | Token::Equals
            | Token::Backslash
            | Token::Text => SegmentKind::Text,
        };

        self.pos += 1;
        Some(Segment::new(kind, span))
    }

    fn take_delimiter(&mut self, start: usize, comment: bool, delimiter: Delimiter) -> Segment {
        self.pos = delimiter.next;
        self.mode = match (self.mode, delimiter.opening) {
            (Mode::LongBracket(open), true) => Mode::LongBracket(open + 1),
            (_, true) => Mode::LongBracket(1),
            (Mode::LongBracket(open), false) if open > 1 => Mode::LongBracket(open - 1),
            (_, false) => Mode::Code,
        };
        let bracket = LongBracket::new(comment, delimiter.level);
        let kind = if delimiter.opening {
            SegmentKind::LongOpen(bracket)
        } else {
            SegmentKind::LongClose(bracket)
        };
        Segment::new(kind, start..delimiter.end)
    }

    /// Match `[` `=`* `[` or `]` `=`* `]` starting at raw token `index`.
    fn delimiter_at(&self, index: usize) -> Option<Delimiter> {
        let (bracket, _) = self.tokens.get(index)?;
        if !bracket.is_bracket() {
            return None;
        }

        let mut cursor = index + 1;
        while matches!(self.tokens.get(cursor), Some((Token::Equals, _))) {
            cursor += 1;
        }

        match self.tokens.get(cursor) {
            Some((token, span)) if token == bracket => Some(Delimiter {
                opening: *bracket == Token::OpenBracket,
                level: cursor - index - 1,
                next: cursor + 1,
                end: span.end,
            }),
            _ => None,
        }
    }

    /// Find the quote closing a string whose body starts at raw token `index`.
    /// Returns the index after the closing quote and its end offset.
    fn closing_quote(&self, quote: Token, index: usize) -> Option<(usize, usize)> {
        let mut cursor = index;
        while let Some((token, span)) = self.tokens.get(cursor) {
            match token {
                t if *t == quote => return Some((cursor + 1, span.end)),
                Token::Backslash => cursor += 2,
                Token::Newline => return None,
                _ => cursor += 1,
            }
        }
        None
    }
}
