// src/core/error.rs
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    PromptError(#[from] inquire::InquireError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Logger error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
