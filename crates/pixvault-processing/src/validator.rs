use std::path::Path;

use pixvault_core::models::ImageFormat;
use pixvault_core::AppError;

/// Validation errors for uploaded files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("file too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("invalid file extension: {extension}")]
    InvalidExtension { extension: String },

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("empty file")]
    EmptyFile,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidExtension { extension } => {
                AppError::InvalidExtension { extension }
            }
            other => AppError::InvalidImage(other.to_string()),
        }
    }
}

/// Upload validator
///
/// Checks size and extension before any pixels are decoded, so obviously bad
/// input is rejected without touching the image codecs.
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Validate the raw upload and resolve its declared format family from
    /// the filename extension.
    pub fn validate(&self, filename: &str, data: &[u8]) -> Result<ImageFormat, ValidationError> {
        if data.is_empty() {
            return Err(ValidationError::EmptyFile);
        }
        if data.len() > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size: data.len(),
                max: self.max_file_size,
            });
        }

        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ValidationError::InvalidFilename(filename.to_string()))?;

        ImageFormat::from_extension(&extension)
            .map_err(|_| ValidationError::InvalidExtension { extension })
    }
}
