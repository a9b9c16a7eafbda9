//! Layered configuration: defaults, then the config file, then `FORMA_*`
//! environment variables, then command-line flags.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File read when `--config` is not given.
pub const DEFAULT_FILE: &str = "forma.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive, e.g. `warn` or `forma=debug`.
    pub log_level: String,
    /// Path of the runtime crate in generated code.
    pub crate_path: String,
    /// Pipe generated source through rustfmt.
    pub rustfmt: bool,
    /// First line of generated files; `{source}` is replaced by the
    /// descriptor file name.
    pub header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            crate_path: "::forma".to_owned(),
            rustfmt: false,
            header: "// @generated by `forma expand` from {source}. Do not edit.".to_owned(),
        }
    }
}

impl Config {
    pub fn figment(file: Option<&Path>) -> Figment {
        let file = file.unwrap_or_else(|| Path::new(DEFAULT_FILE));
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("FORMA_").ignore(&["config"]))
    }

    /// Loads configuration. A missing file is not an error.
    pub fn load(file: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(file).extract()
    }
}
