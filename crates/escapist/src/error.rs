use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EscapistError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("TOML parse error in {path}: {message}")]
    TomlParse { path: PathBuf, message: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}

impl EscapistError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        EscapistError::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EscapistError>;
