//! File processing API for hwk scripts
//!
//! Besides the Lua output, the processor can show the lexer's view of a script, which
//! is what one wants when a `=>` or a brace is not rewritten the way it should be.
//!
//! Formats:
//!     lua              the transpiled script
//!     segments         one segment per line: kind, tab, the segment text (debug-quoted)
//!     segments-json    the same as a JSON array of { kind, span, text }

use crate::hwk::error::TranspileError;
use crate::hwk::lexing::lex;
use crate::hwk::script::Script;
use crate::hwk::segment::{Segment, SegmentKind};
use crate::hwk::Transpiler;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Lua,
    Segments,
    SegmentsJson,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Lua => "lua",
            OutputFormat::Segments => "segments",
            OutputFormat::SegmentsJson => "segments-json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Lua => "Transpiled Lua source",
            OutputFormat::Segments => "Lexer segments, one per line",
            OutputFormat::SegmentsJson => "Lexer segments as JSON",
        }
    }

    pub fn all() -> [OutputFormat; 3] {
        [
            OutputFormat::Lua,
            OutputFormat::Segments,
            OutputFormat::SegmentsJson,
        ]
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::all()
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ProcessingError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    Io(String),
    Transpile(TranspileError),
    Serialization(String),
    InvalidFormat(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Io(msg) => write!(f, "IO error: {}", msg),
            // Shown as is: this is the message users see for a broken script
            ProcessingError::Transpile(err) => write!(f, "{}", err),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ProcessingError::InvalidFormat(format) => {
                let known: Vec<&str> = OutputFormat::all().iter().map(|known| known.name()).collect();
                write!(
                    f,
                    "Invalid format: {} (available: {})",
                    format,
                    known.join(", ")
                )
            }
        }
    }
}

impl From<TranspileError> for ProcessingError {
    fn from(err: TranspileError) -> Self {
        ProcessingError::Transpile(err)
    }
}

impl From<std::io::Error> for ProcessingError {
    fn from(err: std::io::Error) -> Self {
        ProcessingError::Io(err.to_string())
    }
}

#[derive(Serialize)]
struct SegmentView<'src> {
    kind: SegmentKind,
    span: Range<usize>,
    text: &'src str,
}

/// Process hwk source according to the given format
pub fn process_source(
    source: &str,
    format: OutputFormat,
    transpiler: &Transpiler,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Lua => Ok(transpiler.transpile(source)?),
        OutputFormat::Segments | OutputFormat::SegmentsJson => {
            format_segments(source, &lex(source), format)
        }
    }
}

/// Process a script file according to the given format
///
/// `.lua` files are passed through unchanged for the `lua` format.
pub fn process_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    transpiler: &Transpiler,
) -> Result<String, ProcessingError> {
    let script = Script::from_path(path)?;
    match format {
        OutputFormat::Lua => Ok(script.to_lua(transpiler)?.into_owned()),
        _ => process_source(&script.source, format, transpiler),
    }
}

fn format_segments(
    source: &str,
    segments: &[Segment],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::SegmentsJson => {
            let views: Vec<SegmentView<'_>> = segments
                .iter()
                .map(|segment| SegmentView {
                    kind: segment.kind,
                    span: segment.span.clone(),
                    text: segment.text(source),
                })
                .collect();
            serde_json::to_string_pretty(&views)
                .map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        _ => {
            let mut result = String::new();
            for segment in segments {
                result.push_str(&format!("{}\t{:?}\n", segment.kind, segment.text(source)));
            }
            Ok(result)
        }
    }
}
