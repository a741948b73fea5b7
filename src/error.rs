//! Error types for the profile renderer.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that abort the whole page render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Profile source unavailable{}: {reason}", status_suffix(.status))]
    SourceUnavailable { status: Option<u16>, reason: String },

    #[error("Malformed profile document: {0}")]
    MalformedDocument(String),
}

/// Errors local to one section; always recovered by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{section} region `{region}` not found")]
    RegionMissing { section: &'static str, region: String },

    #[error("No {section} data found")]
    DataMissing { section: &'static str },
}

/// Errors in renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}
