//! Shared configuration loader for the filterex tools.
//!
//! `defaults/filterex.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. On top of those defaults the CLI layers a `filterex.toml` from the
//! working directory when there is one ([`LOCAL_FILE`]), then an explicit `--config` file, then
//! single-key overrides from flags.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/filterex.default.toml");

/// Project-local configuration picked up from the working directory when present.
pub const LOCAL_FILE: &str = "filterex.toml";

/// Top-level configuration consumed by filterex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterexConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// How leaf terms and operators are turned into SQL text.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub column: String,
    pub term_template: String,
    pub negated_term_template: String,
    pub not_template: String,
    pub and_keyword: String,
    pub or_keyword: String,
}

impl RenderConfig {
    /// Fills `{column}` and `{term}` in `template`.
    ///
    /// Single quotes in `term` are doubled, so a term placed inside `'...'` stays one SQL string
    /// literal. The column is inserted as configured.
    pub fn term(&self, template: &str, term: &str) -> String {
        template
            .replace("{column}", &self.column)
            .replace("{term}", &term.replace('\'', "''"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Sql,
    Json,
    Yaml,
}

/// Layers configuration sources over the embedded defaults, later sources winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Adds a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Adds a TOML file that is skipped when absent, such as [LOCAL_FILE].
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Sets one dotted key, e.g. `render.column` from `--column`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<FilterexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<FilterexConfig, ConfigError> {
    Loader::new().build()
}
