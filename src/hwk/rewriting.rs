//! Rewriter
//!
//!     Consumes the segment stream once, left to right, and emits one piece per segment.
//!
//! Context
//!
//!     Structural rules only apply in code. The rewriter is always in one of three
//!     contexts:
//!
//!         Code           `{`, `}` and `=>` are rewritten
//!         LineComment    from a bare `--` up to the next line break
//!         LongBracket    inside `[==[ ... ]==]` or `--[==[ ... ]==]`, with a stack of
//!                        the openers seen so far
//!
//!     Outside of code every segment is copied verbatim, so comments and long strings can
//!     contain braces and arrows. Delimiters seen inside a line comment are not tracked.
//!
//! Rules in code
//!
//!     `{`    push a scope. It is a match scope when the last significant segment was a
//!            `=>`, and is emitted as `MatchScope.new(function (__match)`. Otherwise it is
//!            a literal brace and is kept.
//!     `}`    pop a scope, emitting `end)` for a match scope and `}` otherwise. Popping
//!            an empty stack is an error.
//!     `=>`   take back every piece emitted since the last line break, and emit
//!            `<indent>__match[<pattern>] =` instead, where `<indent>` is the leading run of
//!            spaces and tabs and `<pattern>` the rest, trimmed.
//!
//!     Line breaks are kept as their own piece kind so that `=>` can find the start of its
//!     line.

use crate::hwk::error::{Location, TranspileError};
use crate::hwk::options::TranspileOptions;
use crate::hwk::segment::{LongBracket, Segment, SegmentKind};

/// One emitted piece of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'src> {
    /// A newline copied from the source. Marks the start of the next line.
    LineBreak(&'src str),
    /// Any other text copied from the source.
    Source(&'src str),
    /// Text the rewriter produced.
    Generated(String),
}

impl Piece<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Piece::LineBreak(text) | Piece::Source(text) => *text,
            Piece::Generated(text) => text.as_str(),
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Piece::LineBreak(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Match,
    Literal,
}

#[derive(Debug, Clone, Copy)]
struct Scope {
    kind: ScopeKind,
    offset: usize,
}

#[derive(Debug, Clone, Copy)]
struct OpenBracket {
    bracket: LongBracket,
    offset: usize,
}

#[derive(Debug, Clone)]
enum Context {
    Code,
    LineComment,
    LongBracket(Vec<OpenBracket>),
}

/// Single-pass rewriter. Feed it every segment in order, then call [finish](Rewriter::finish).
pub struct Rewriter<'src, 'o> {
    source: &'src str,
    options: &'o TranspileOptions,
    pieces: Vec<Piece<'src>>,
    scopes: Vec<Scope>,
    context: Context,
    after_arrow: bool,
}

impl<'src, 'o> Rewriter<'src, 'o> {
    pub fn new(source: &'src str, options: &'o TranspileOptions) -> Self {
        Rewriter {
            source,
            options,
            pieces: Vec::new(),
            scopes: Vec::new(),
            context: Context::Code,
            after_arrow: false,
        }
    }

    /// Process the next segment.
    pub fn feed(&mut self, segment: &Segment) -> Result<(), TranspileError> {
        let text = segment.text(self.source);
        let in_code = matches!(self.context, Context::Code);

        let piece = match self.context {
            Context::Code => self.feed_code(segment, text)?,
            Context::LineComment => {
                if segment.kind == SegmentKind::LineBreak {
                    self.context = Context::Code;
                }
                verbatim(segment, text)
            }
            Context::LongBracket(_) => {
                self.feed_long_bracket(segment)?;
                verbatim(segment, text)
            }
        };
        self.pieces.push(piece);

        if segment.kind.is_significant() {
            self.after_arrow = in_code && segment.kind == SegmentKind::Arrow;
        }
        Ok(())
    }

    /// Check the end-of-input conditions and hand back the pieces.
    pub fn finish(self) -> Result<Vec<Piece<'src>>, TranspileError> {
        if let Context::LongBracket(open) = &self.context {
            if let (true, Some(outermost)) = (self.options.reject_unterminated, open.first()) {
                return Err(TranspileError::UnterminatedLongBracket {
                    location: self.locate(outermost.offset),
                    opened: outermost.bracket,
                });
            }
        }

        if let Some(innermost) = self.scopes.last() {
            return Err(TranspileError::UnbalancedOpen {
                location: self.locate(innermost.offset),
            });
        }

        Ok(self.pieces)
    }

    fn feed_code(
        &mut self,
        segment: &Segment,
        text: &'src str,
    ) -> Result<Piece<'src>, TranspileError> {
        let piece = match segment.kind {
            SegmentKind::OpenBrace => self.open_scope(segment, text),
            SegmentKind::CloseBrace => self.close_scope(segment, text)?,
            SegmentKind::Arrow => self.rewrite_match(),
            SegmentKind::LineComment => {
                self.context = Context::LineComment;
                Piece::Source(text)
            }
            SegmentKind::LongOpen(bracket) => {
                self.context = Context::LongBracket(vec![OpenBracket {
                    bracket,
                    offset: segment.span.start,
                }]);
                Piece::Source(text)
            }
            SegmentKind::LongClose(found) => {
                return Err(TranspileError::MismatchedLongBracket {
                    location: self.locate(segment.span.start),
                    opened: None,
                    found,
                })
            }
            SegmentKind::LineBreak
            | SegmentKind::Whitespace
            | SegmentKind::Text
            | SegmentKind::Quoted(_) => verbatim(segment, text),
        };
        Ok(piece)
    }

    fn feed_long_bracket(&mut self, segment: &Segment) -> Result<(), TranspileError> {
        let Context::LongBracket(open) = &mut self.context else {
            return Ok(());
        };

        match segment.kind {
            SegmentKind::LongOpen(bracket) => open.push(OpenBracket {
                bracket,
                offset: segment.span.start,
            }),
            SegmentKind::LongClose(found) => match open.pop() {
                Some(innermost) if innermost.bracket.level == found.level => {}
                innermost => {
                    return Err(TranspileError::MismatchedLongBracket {
                        location: Location::from_offset(self.source, segment.span.start),
                        opened: innermost.map(|o| o.bracket),
                        found,
                    })
                }
            },
            _ => return Ok(()),
        }

        if open.is_empty() {
            self.context = Context::Code;
        }
        Ok(())
    }

    fn open_scope(&mut self, segment: &Segment, text: &'src str) -> Piece<'src> {
        let kind = if self.after_arrow {
            ScopeKind::Match
        } else {
            ScopeKind::Literal
        };
        self.scopes.push(Scope {
            kind,
            offset: segment.span.start,
        });
        tracing::trace!(depth = self.scopes.len(), ?kind, "opened scope");

        match kind {
            ScopeKind::Match => Piece::Generated(self.options.scope_open()),
            ScopeKind::Literal => Piece::Source(text),
        }
    }

    fn close_scope(
        &mut self,
        segment: &Segment,
        text: &'src str,
    ) -> Result<Piece<'src>, TranspileError> {
        let scope = self
            .scopes
            .pop()
            .ok_or_else(|| TranspileError::UnbalancedClose {
                location: self.locate(segment.span.start),
            })?;
        tracing::trace!(depth = self.scopes.len(), kind = ?scope.kind, "closed scope");

        Ok(match scope.kind {
            ScopeKind::Match => Piece::Generated("end)".to_string()),
            ScopeKind::Literal => Piece::Source(text),
        })
    }

    fn rewrite_match(&mut self) -> Piece<'src> {
        let line_start = self
            .pieces
            .iter()
            .rposition(Piece::is_line_break)
            .map_or(0, |i| i + 1);

        let mut pattern = String::new();
        for piece in self.pieces.drain(line_start..) {
            pattern.push_str(piece.as_str());
        }

        let body = pattern.trim_start_matches(|c: char| c == ' ' || c == '\t');
        let indent = &pattern[..pattern.len() - body.len()];
        tracing::trace!(pattern = body.trim(), "rewrote match");
        Piece::Generated(self.options.match_assignment(indent, body.trim()))
    }

    fn locate(&self, offset: usize) -> Location {
        Location::from_offset(self.source, offset)
    }
}

fn verbatim<'src>(segment: &Segment, text: &'src str) -> Piece<'src> {
    match segment.kind {
        SegmentKind::LineBreak => Piece::LineBreak(text),
        _ => Piece::Source(text),
    }
}
