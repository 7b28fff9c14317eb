use thiserror::Error;

/// SenaGen unified error type
#[derive(Error, Debug)]
pub enum SenaGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Draw error: game size {size} exceeds the {available} available numbers")]
    Draw { size: u8, available: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type SenaGenResult<T> = Result<T, SenaGenError>;
