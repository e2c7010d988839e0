//! Errors surfaced by CLI commands.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse recipe YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PNG export failed: {0}")]
    Png(String),

    /// Bad or missing command-line arguments.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Core(#[from] wagara::Error),
}

impl CliError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CliError::Io { path: path.into(), source }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Usage errors get the command's help text printed after them.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage(_) | CliError::Core(wagara::Error::UnknownMotif(_)))
    }
}

pub type CliResult<T> = Result<T, CliError>;
