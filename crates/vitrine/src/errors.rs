//! Error types for Vitrine.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from `main` are shown through Debug, thiserror only gives us Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum HighlightError {
    #[error("Theme '{0}' is not one of the default syntax highlighting themes")]
    UnknownTheme(String),

    #[error("Failed to highlight code")]
    Syntect(#[from] syntect::Error),
}

#[derive(Error)]
pub enum StyleError {
    #[error("Failed to write generated stylesheet: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to generate stylesheet `{name}`")]
    GenerationFailed {
        name: String,
        #[source]
        source: HighlightError,
    },
}

#[derive(Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Error)]
pub enum PropsError {
    #[error("Page properties must be keyed by strings, found key `{0}`")]
    NonStringKey(String),

    #[error("Page properties must be a mapping")]
    NotAMapping,

    #[error("Invalid page properties")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Props(#[from] PropsError),

    #[error(transparent)]
    Asset(#[from] maudit::errors::AssetError),
}

impl_debug_for_error!(HighlightError, StyleError, ConfigError, PropsError);
