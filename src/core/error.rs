use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid command definition: {0}")]
    InvalidCommand(String),
    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
