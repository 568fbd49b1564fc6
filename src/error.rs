use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to load input '{path}': {message}")]
    Load { path: String, message: String },

    #[error("required source columns missing: {0}")]
    Schema(String),

    #[error("failed to write output '{path}': {message}")]
    Write { path: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid skill pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
