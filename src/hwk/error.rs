//! Transpile errors
//!
//! All errors are fatal for the call that raised them: the rewriter stops at the first
//! violation and no partial output is produced.

use crate::hwk::segment::LongBracket;
use std::fmt;

/// A 1-based line/column position in the source. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }

    /// Locate a byte offset in `source`. Offsets past the end clamp to the end.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that can occur while transpiling hwk to Lua
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranspileError {
    /// A `}` with no open `{`
    UnbalancedClose { location: Location },
    /// A `{` still open at the end of the input, located at the innermost one
    UnbalancedOpen { location: Location },
    /// A long-bracket closer whose level does not match the open bracket, or that
    /// closes nothing at all
    MismatchedLongBracket {
        location: Location,
        opened: Option<LongBracket>,
        found: LongBracket,
    },
    /// The input ended inside a long comment or string, located at its opener
    UnterminatedLongBracket {
        location: Location,
        opened: LongBracket,
    },
}

impl TranspileError {
    pub fn location(&self) -> Location {
        match self {
            TranspileError::UnbalancedClose { location }
            | TranspileError::UnbalancedOpen { location }
            | TranspileError::MismatchedLongBracket { location, .. }
            | TranspileError::UnterminatedLongBracket { location, .. } => *location,
        }
    }
}

impl fmt::Display for TranspileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranspileError::UnbalancedClose { location } => {
                write!(f, "too many closing braces: `}}` at {}", location)
            }
            TranspileError::UnbalancedOpen { location } => {
                write!(f, "unclosed `{{` opened at {}", location)
            }
            TranspileError::MismatchedLongBracket {
                location,
                opened: Some(opened),
                found,
            } => write!(
                f,
                "mismatched long comment/string: `{}` at {} does not close `{}`",
                found.closer(),
                location,
                opened.opener()
            ),
            TranspileError::MismatchedLongBracket {
                location,
                opened: None,
                found,
            } => write!(
                f,
                "mismatched long comment/string: `{}` at {} closes nothing",
                found.closer(),
                location
            ),
            TranspileError::UnterminatedLongBracket { location, opened } => write!(
                f,
                "unterminated long comment/string: `{}` opened at {} is never closed",
                opened.opener(),
                location
            ),
        }
    }
}

impl std::error::Error for TranspileError {}
