//! Decode and re-encode helpers for the two supported format families.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use pixvault_core::models::ImageFormat;
use pixvault_core::AppError;

/// Decode raw upload bytes into pixels.
pub fn decode(data: &[u8]) -> Result<DynamicImage, AppError> {
    image::load_from_memory(data).map_err(|e| AppError::InvalidImage(e.to_string()))
}

/// Encode pixels in the given format family. PNG is lossless; JPEG uses the
/// configured quality.
pub fn encode(
    img: &DynamicImage,
    format: ImageFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    match format {
        ImageFormat::Png => {
            img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                .map_err(|e| AppError::Internal(format!("png encode failed: {e}")))?;
        }
        ImageFormat::Jpeg => {
            // JPEG has no alpha channel; flatten before encoding.
            let rgb = img.to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(&mut buf, jpeg_quality);
            encoder
                .encode_image(&rgb)
                .map_err(|e| AppError::Internal(format!("jpeg encode failed: {e}")))?;
        }
    }
    Ok(buf)
}
