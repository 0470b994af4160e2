//! Main module for hwk transpilation
//!
//! The pipeline is linear and keeps no state between calls:
//!
//! 1. [lexing] splits the source into [segments](segment::Segment). The split is
//!    lossless: concatenating the segment texts gives back the source.
//! 2. [rewriting] walks the segments once, tracking brace scopes and comment/string
//!    context, and emits one [piece](rewriting::Piece) per segment. A `=>` takes back
//!    the pieces emitted since the start of its line and replaces them.
//! 3. [assembling] concatenates the pieces.

pub mod assembling;
pub mod error;
pub mod lexing;
pub mod options;
pub mod processor;
pub mod rewriting;
pub mod script;
pub mod segment;

pub use error::{Location, TranspileError};
pub use options::TranspileOptions;

use rewriting::Rewriter;

/// Transpile hwk source to Lua with the default options.
pub fn transpile(source: &str) -> Result<String, TranspileError> {
    Transpiler::default().transpile(source)
}

/// A configured transpiler. Cheap to build, and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    options: TranspileOptions,
}

impl Transpiler {
    pub fn new(options: TranspileOptions) -> Self {
        Transpiler { options }
    }

    /// Run the whole pipeline over `source`.
    ///
    /// The first violation aborts the call; no partial output is returned.
    pub fn transpile(&self, source: &str) -> Result<String, TranspileError> {
        let segments = lexing::lex(source);
        tracing::debug!(
            bytes = source.len(),
            segments = segments.len(),
            "lexed hwk source"
        );

        let mut rewriter = Rewriter::new(source, &self.options);
        for segment in &segments {
            rewriter.feed(segment)?;
        }
        let pieces = rewriter.finish()?;

        let output = assembling::assemble(&pieces);
        tracing::debug!(pieces = pieces.len(), bytes = output.len(), "assembled lua");
        Ok(output)
    }
}
