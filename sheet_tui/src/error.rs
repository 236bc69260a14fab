//! Application errors

use sheet_core::{ConfigError, SchemaError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Started without a character export to work on
    #[error(
        "No character export given. Save the character JSON from the character service, \
         then run `sheet_tui <character.json>`."
    )]
    MissingContext,
    #[error("Failed to convert the character data, export it again and retry. ({0})")]
    Schema(#[from] SchemaError),
    #[error("Invalid rules file: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
