use serde::{Deserialize, Serialize};

use crate::AppError;

/// Encoding family of a stored image. Thumbnails are re-encoded in the same
/// family as the uploaded original; no cross-family transcoding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Map a file extension to a format family. `jpg` and `jpeg` are the
    /// same family.
    pub fn from_extension(extension: &str) -> Result<Self, AppError> {
        match extension.to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            other => Err(AppError::InvalidExtension {
                extension: other.to_string(),
            }),
        }
    }

    pub fn from_content_type(content_type: &str) -> Result<Self, AppError> {
        match content_type.to_lowercase().as_str() {
            "image/png" => Ok(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Ok(ImageFormat::Jpeg),
            other => Err(AppError::InvalidImage(format!(
                "unsupported content type: {other}"
            ))),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }
}
