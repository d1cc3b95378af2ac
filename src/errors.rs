//! Unified application error type.
//! All modules (api, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::api::ApiError;
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
    // Backend
    // ---------------------------
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid server URL: {0:?}")]
    InvalidServerUrl(String),

    /// An adjustment that was not confirmed; carries the status text.
    #[error("{0}")]
    Rejected(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
