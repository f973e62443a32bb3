use std::io;
use thiserror::Error;

/// Comprehensive error type for shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Error: Empty command line")]
    EmptyInput,

    #[error("Error: Separator before any command")]
    LeadingSeparator,

    #[error("Error: Two consecutive separators")]
    ConsecutiveSeparators,

    #[error("Error: Too many commands in one line")]
    TooManyStages,

    #[error("{0}")]
    CommandNotFound(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Redirection error: {0}")]
    RedirectionError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),

    #[error("Error: Expected Argument - {0}")]
    MissingArgument(String),

    #[error("Error: Limit Exceeded - {0}")]
    LimitExceeded(String),

    #[error("Interrupted")]
    Interrupted,
}

pub type ShellResult<T> = Result<T, ShellError>;
