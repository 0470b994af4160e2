//! Script loading
//!
//! Mirrors how the macro daemon picks up user scripts: `.lua` files run as they are,
//! `.hwk` files go through the transpiler first. The daemon refuses any other extension,
//! as well as names starting with a `.`; the transpiler itself accepts any path and only
//! warns about those.

use crate::hwk::error::TranspileError;
use crate::hwk::Transpiler;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Hwk,
    Lua,
}

impl ScriptKind {
    /// `.lua` is plain Lua, anything else is treated as hwk.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("lua") => ScriptKind::Lua,
            _ => ScriptKind::Hwk,
        }
    }
}

/// Whether the macro daemon would load a script from this path.
pub fn is_daemon_loadable(path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    !file_name.starts_with('.') && (file_name.ends_with(".lua") || file_name.ends_with(".hwk"))
}

/// Name a script is registered under: its file name without the extension.
pub fn script_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub name: String,
    pub kind: ScriptKind,
    pub source: String,
}

impl Script {
    pub fn new(name: impl Into<String>, kind: ScriptKind, source: impl Into<String>) -> Self {
        Script {
            name: name.into(),
            kind,
            source: source.into(),
        }
    }

    /// Read a script from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if !is_daemon_loadable(path) {
            tracing::warn!(
                path = %path.display(),
                "the macro daemon will not load this file: names must end in .lua or .hwk \
                 and may not start with a '.'"
            );
        }

        let source = fs::read_to_string(path)?;
        let script = Script::new(script_name(path), ScriptKind::from_path(path), source);
        tracing::debug!(name = %script.name, kind = ?script.kind, "loaded script");
        Ok(script)
    }

    /// Lua source for this script. Lua scripts are borrowed as they are.
    pub fn to_lua(&self, transpiler: &Transpiler) -> Result<Cow<'_, str>, TranspileError> {
        match self.kind {
            ScriptKind::Lua => Ok(Cow::Borrowed(&self.source)),
            ScriptKind::Hwk => transpiler.transpile(&self.source).map(Cow::Owned),
        }
    }
}
