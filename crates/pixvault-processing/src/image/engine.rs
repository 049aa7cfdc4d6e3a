//! Thumbnail derivation engine.
//!
//! Turns one decoded original into one re-encoded variant per configured
//! thumbnail height, preserving aspect ratio. The catalog snapshot is an
//! explicit argument; the engine never touches storage.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use pixvault_core::models::{ImageFormat, SizeCatalog, ThumbnailSpec};
use pixvault_core::AppError;

use super::codec;

/// One derived variant, ready to be persisted by the caller.
#[derive(Debug, Clone)]
pub struct DerivedThumbnail {
    pub spec: ThumbnailSpec,
    pub payload: Vec<u8>,
    pub width_px: i32,
    pub height_px: i32,
}

pub struct ThumbnailEngine {
    jpeg_quality: u8,
}

impl ThumbnailEngine {
    pub fn new(jpeg_quality: u8) -> Self {
        Self { jpeg_quality }
    }

    /// Width of a thumbnail scaled to `target_height`, floor-rounded from the
    /// source aspect ratio. Integer math in u64 so large dimensions cannot
    /// overflow or drift.
    pub fn scaled_width(
        target_height: u32,
        orig_width: u32,
        orig_height: u32,
    ) -> Result<u32, AppError> {
        if orig_height == 0 {
            return Err(AppError::InvalidImage(
                "source image has zero height".to_string(),
            ));
        }
        let width = (target_height as u64 * orig_width as u64 / orig_height as u64) as u32;
        if width == 0 {
            return Err(AppError::InvalidImage(format!(
                "source aspect ratio collapses to zero width at {target_height}px"
            )));
        }
        Ok(width)
    }

    /// Filter choice by downscale ratio: cheaper filters for heavy reductions,
    /// Lanczos3 near 1:1 (and for upscales).
    fn select_filter(orig_width: u32, orig_height: u32, new_width: u32, new_height: u32) -> FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            FilterType::Triangle
        } else if max_ratio > 1.5 {
            FilterType::CatmullRom
        } else {
            FilterType::Lanczos3
        }
    }

    /// Derive one re-encoded variant per configured thumbnail height, in
    /// catalog order.
    ///
    /// Targets taller than the source are upscaled, never clamped or skipped.
    /// Returns only in-memory payloads; persistence is the caller's job, so a
    /// failure partway through produces nothing visible.
    pub fn derive_thumbnails(
        &self,
        original: &DynamicImage,
        format: ImageFormat,
        catalog: &SizeCatalog,
    ) -> Result<Vec<DerivedThumbnail>, AppError> {
        let (orig_width, orig_height) = original.dimensions();

        let specs = catalog.non_original_specs();
        let mut out = Vec::with_capacity(specs.len());
        for spec in specs {
            // non_original_specs only yields positive heights
            let target_height = spec.target_height_px.unwrap_or_default() as u32;
            let target_width = Self::scaled_width(target_height, orig_width, orig_height)?;

            let filter = Self::select_filter(orig_width, orig_height, target_width, target_height);
            let resized = original.resize_exact(target_width, target_height, filter);
            let payload = codec::encode(&resized, format, self.jpeg_quality)?;

            tracing::debug!(
                spec_id = %spec.id,
                width = target_width,
                height = target_height,
                bytes = payload.len(),
                "Derived thumbnail"
            );

            out.push(DerivedThumbnail {
                spec: spec.clone(),
                payload,
                width_px: target_width as i32,
                height_px: target_height as i32,
            });
        }
        Ok(out)
    }
}
