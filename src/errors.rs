// ABOUTME: Error types for the slidegen application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("Failed to read or write file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("Invalid theme setting: {0}")]
    ThemeError(String),

    #[error("Backend error: {message}")]
    BackendError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Slide generation failed: {message}")]
    GenerationFailed {
        message: String,
        #[source]
        source: Box<SlideError>,
    },

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl SlideError {
    /// Shorthand for a backend failure without an underlying cause
    pub fn backend(message: impl Into<String>) -> Self {
        SlideError::BackendError {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a fatal error the way the entry adapters report it to callers
    pub fn generation_failed(source: SlideError) -> Self {
        SlideError::GenerationFailed {
            message: source.to_string(),
            source: Box::new(source),
        }
    }
}

impl From<serde_json::Error> for SlideError {
    fn from(err: serde_json::Error) -> Self {
        SlideError::InputError(format!("JSON parse failed: {}", err))
    }
}

impl From<anyhow::Error> for SlideError {
    fn from(err: anyhow::Error) -> Self {
        SlideError::UnknownError(format!("{:#}", err))
    }
}

impl From<zip::result::ZipError> for SlideError {
    fn from(err: zip::result::ZipError) -> Self {
        SlideError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
