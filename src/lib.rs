//! # hwk2lua
//!
//! A transpiler from hwk keybinding scripts to plain Lua.
//!
//! hwk is Lua plus two constructs for binding key patterns to actions:
//!
//!     down + key "a" => say "hi"
//!     ctrl + key "k" => {
//!         foo()
//!     }
//!
//! which become
//!
//!     __match[down + key "a"] = say "hi"
//!     __match[ctrl + key "k"] = MatchScope.new(function (__match)
//!         foo()
//!     end)
//!
//! The transform is purely lexical: nothing checks that the produced Lua is valid.
//! Everything else (comments, strings, table literals) is copied through verbatim.
//!
//! File Layout
//!
//!     src/hwk
//!       ├── lexing       raw logos tokens, then segments
//!       ├── rewriting    the single pass over segments
//!       ├── assembling   pieces back into a string
//!       └── processor    output formats and file processing
//!
//!     The configuration loader and the tracing setup used by the binary live next to
//!     the `hwk` module, in [config] and [logging].

pub mod config;
pub mod hwk;
pub mod logging;

pub use hwk::{transpile, TranspileError, TranspileOptions, Transpiler};
