//! Error types for Backpack

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackpackError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Nobody has packed a backpack for {0}")]
    UnknownBackpack(String),

    #[error("{0} already has a backpack")]
    DuplicateBackpack(String),

    #[error("Invalid script: {0}")]
    InvalidScript(String),
}

pub type Result<T> = std::result::Result<T, BackpackError>;
