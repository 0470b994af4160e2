//! Configuration loader for hwk2lua.
//!
//! `defaults/hwk2lua.default.toml` is embedded into the binary so that the documented
//! defaults and the runtime behavior stay in sync. User files and command line settings
//! are layered on top with [`Loader`] before deserializing into [`Hwk2LuaConfig`].

use crate::hwk::processor::OutputFormat;
use crate::hwk::TranspileOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/hwk2lua.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Hwk2LuaConfig {
    pub transpile: TranspileOptions,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Hwk2LuaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Hwk2LuaConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.transpile, TranspileOptions::default());
        assert_eq!(config.output.format, OutputFormat::Lua);
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "segments-json")
            .expect("override to apply")
            .set_override("transpile.reject_unterminated", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::SegmentsJson);
        assert!(!config.transpile.reject_unterminated);
        assert_eq!(config.transpile.match_table, "__match");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[transpile]\nmatch_table = \"bindings\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.transpile.match_table, "bindings");
        assert_eq!(config.transpile.scope_constructor, "MatchScope.new");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/hwk2lua.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/hwk2lua.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Lua);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Loader::new()
            .set_override("output.format", "xml")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
