//! Configuration loading.
//!
//! `defaults/gedcom.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GedcomConfig`].

use super::parsing::DuplicatePolicy;
use super::query::CyclePolicy;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/gedcom.default.toml");

/// Top-level configuration consumed by gedcom applications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GedcomConfig {
    pub parsing: ParsingConfig,
    pub query: QueryConfig,
    pub output: OutputConfig,
}

/// Options for turning source text into a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub duplicate_identifiers: DuplicatePolicy,
    pub skip_blank_lines: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryConfig {
    pub cycles: CyclePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How `show` renders a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Lines,
    #[default]
    Treeviz,
    Json,
    Yaml,
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
    pub fn build(self) -> Result<GedcomConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GedcomConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parsing, ParsingConfig::default());
        assert_eq!(config.query.cycles, CyclePolicy::Error);
        assert_eq!(config.output.format, OutputFormat::Treeviz);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.duplicate_identifiers", "reject")
            .unwrap()
            .set_override("query.cycles", "truncate")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            config.parsing.duplicate_identifiers,
            DuplicatePolicy::Reject
        );
        assert_eq!(config.query.cycles, CyclePolicy::Truncate);
    }

    #[test]
    fn layers_user_files() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[parsing]\nskip_blank_lines = true\n[output]\nformat = \"json\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert!(config.parsing.skip_blank_lines);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.query.cycles, CyclePolicy::Error);
    }

    #[test]
    fn optional_files_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .unwrap();
        assert!(!config.parsing.skip_blank_lines);
    }
}
