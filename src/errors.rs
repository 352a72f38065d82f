//! Unified application error type.
//! All modules (store, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Sheet store
    // ---------------------------
    #[error("Sheet data error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Sheet '{0}' not found. Run `promptbank init` first, or check --workbook")]
    SheetNotFound(String),

    #[error("Failed to append the record: {0}")]
    Append(String),

    #[error("Failed to delete the record: {0}")]
    Delete(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("The prompt is empty. Write or draft a prompt first")]
    EmptyPrompt,

    #[error("No activity code given. Choose the code students will type")]
    MissingCode,

    #[error("Activity code '{0}' is made of digits only. Use letters or a letter+digit mix")]
    NumericCode(String),

    #[error("Activity code '{0}' is already in use. Pick a different code")]
    DuplicateCode(String),

    #[error("The password is made of digits only. Use letters or a letter+digit mix")]
    NumericPassword,

    // ---------------------------
    // Lookup / deletion
    // ---------------------------
    #[error("No stored prompt with activity code '{0}' matches that password")]
    RecordNotFound(String),

    // ---------------------------
    // CLI input errors
    // ---------------------------
    #[error("Unknown activity kind '{0}'. Use 'vision', 'text' or 'image'")]
    UnknownKind(String),

    #[error("Unknown sample prompt '{0}'. Run `promptbank samples` for the full list")]
    UnknownSample(String),

    #[error("Prompt drafting failed: {0}")]
    Draft(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),
}

pub type AppResult<T> = Result<T, AppError>;
