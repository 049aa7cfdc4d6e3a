//! Pixvault Image Processing Library
//!
//! Thumbnail derivation: decode, dimension math, resize, and re-encode in the
//! original's format family. Everything here is synchronous and CPU-bound;
//! callers run it under `tokio::task::spawn_blocking`.

pub mod image;
pub mod validator;

// Re-export commonly used types
pub use crate::image::{decode, encode, DerivedThumbnail, ThumbnailEngine};
pub use validator::{UploadValidator, ValidationError};
