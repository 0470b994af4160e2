//! Segments, the unit the rewriter works on
//!
//!     A segment is a slice of the source, identified by its byte range and tagged with
//!     what it is. The lexer produces them in source order, and the concatenation of
//!     their texts is the source itself.
//!
//!     Line starts are explicit: every newline character is its own `LineBreak`
//!     segment. Newlines that belong to a quoted string or to a long-bracket delimiter
//!     never produce one, since they are inside a single segment.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A Lua long-bracket delimiter: `[==[`, `]==]`, and their `--` prefixed forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LongBracket {
    /// Whether the delimiter was written with a leading `--`.
    pub comment: bool,
    /// Number of `=` between the brackets.
    pub level: usize,
}

impl LongBracket {
    pub fn new(comment: bool, level: usize) -> Self {
        LongBracket { comment, level }
    }

    /// Source form of the opening delimiter, e.g. `--[==[`.
    pub fn opener(&self) -> String {
        self.delimiter('[')
    }

    /// Source form of the closing delimiter, e.g. `]==]`.
    pub fn closer(&self) -> String {
        self.delimiter(']')
    }

    fn delimiter(&self, bracket: char) -> String {
        let prefix = if self.comment { "--" } else { "" };
        format!("{prefix}{bracket}{}{bracket}", "=".repeat(self.level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quote {
    Double,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SegmentKind {
    /// A `\n`; the next segment starts a line.
    LineBreak,
    /// Spaces, tabs, carriage returns.
    Whitespace,
    /// Anything without structural meaning.
    Text,
    /// `=>`
    Arrow,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// A bare `--`.
    LineComment,
    LongOpen(LongBracket),
    LongClose(LongBracket),
    /// A complete quoted literal, quotes included.
    Quoted(Quote),
}

impl SegmentKind {
    /// Whitespace is the only kind that does not count as "the last thing seen".
    pub fn is_significant(&self) -> bool {
        !matches!(self, SegmentKind::Whitespace)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::LineBreak => write!(f, "LineBreak"),
            SegmentKind::Whitespace => write!(f, "Whitespace"),
            SegmentKind::Text => write!(f, "Text"),
            SegmentKind::Arrow => write!(f, "Arrow"),
            SegmentKind::OpenBrace => write!(f, "OpenBrace"),
            SegmentKind::CloseBrace => write!(f, "CloseBrace"),
            SegmentKind::LineComment => write!(f, "LineComment"),
            SegmentKind::LongOpen(bracket) => write!(f, "LongOpen({})", bracket.opener()),
            SegmentKind::LongClose(bracket) => write!(f, "LongClose({})", bracket.closer()),
            SegmentKind::Quoted(Quote::Double) => write!(f, "Quoted(\")"),
            SegmentKind::Quoted(Quote::Single) => write!(f, "Quoted(')"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub span: Range<usize>,
}

impl Segment {
    pub fn new(kind: SegmentKind, span: Range<usize>) -> Self {
        Segment { kind, span }
    }

    /// The slice of `source` this segment covers.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.clone()]
    }
}
