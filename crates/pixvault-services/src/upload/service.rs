//! Upload pipeline: validate → decode → derive → persist as one family.

use std::sync::Arc;

use image::GenericImageView;
use uuid::Uuid;

use pixvault_core::models::{ImageAsset, NewImageAsset};
use pixvault_core::AppError;
use pixvault_db::{AssetRepository, SpecRepository};
use pixvault_processing::{decode, DerivedThumbnail, ThumbnailEngine, UploadValidator};

pub struct UploadService {
    specs: Arc<dyn SpecRepository>,
    assets: Arc<dyn AssetRepository>,
    validator: UploadValidator,
    engine: Arc<ThumbnailEngine>,
}

impl UploadService {
    pub fn new(
        specs: Arc<dyn SpecRepository>,
        assets: Arc<dyn AssetRepository>,
        max_file_size_bytes: usize,
        jpeg_quality: u8,
    ) -> Self {
        Self {
            specs,
            assets,
            validator: UploadValidator::new(max_file_size_bytes),
            engine: Arc::new(ThumbnailEngine::new(jpeg_quality)),
        }
    }

    /// Store an upload as a complete family: the original plus one derived
    /// variant per configured thumbnail height.
    ///
    /// The family is committed atomically; a failure at any stage leaves zero
    /// new rows. Fails with `NotConfigured` when the catalog has no original
    /// spec, since the original row could not be typed.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn upload(
        &self,
        owner_id: Uuid,
        title: &str,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<Vec<ImageAsset>, AppError> {
        let format = self.validator.validate(filename, &data)?;

        let catalog = self.specs.load_catalog().await?;
        let original_spec = catalog.original_spec()?.clone();

        // Decode and resize are CPU-bound; run off the async pool.
        let engine = Arc::clone(&self.engine);
        let (data, width, height, thumbnails) = tokio::task::spawn_blocking(
            move || -> Result<(Vec<u8>, u32, u32, Vec<DerivedThumbnail>), AppError> {
                let decoded = decode(&data)?;
                let (width, height) = decoded.dimensions();
                let thumbnails = engine.derive_thumbnails(&decoded, format, &catalog)?;
                Ok((data, width, height, thumbnails))
            },
        )
        .await
        .map_err(|e| AppError::Internal(format!("upload worker panicked: {e}")))??;

        let mut family = Vec::with_capacity(1 + thumbnails.len());
        family.push(NewImageAsset {
            owner_id,
            spec_id: original_spec.id,
            title: format!("{title} (original)"),
            payload: data,
            content_type: format.content_type().to_string(),
            width_px: width as i32,
            height_px: height as i32,
        });
        for thumb in thumbnails {
            family.push(NewImageAsset {
                owner_id,
                spec_id: thumb.spec.id,
                title: format!("{title} ({}px thumbnail)", thumb.height_px),
                payload: thumb.payload,
                content_type: format.content_type().to_string(),
                width_px: thumb.width_px,
                height_px: thumb.height_px,
            });
        }

        let created = self.assets.create_family(family).await?;

        tracing::info!(
            owner_id = %owner_id,
            assets = created.len(),
            content_type = format.content_type(),
            "Upload stored"
        );
        Ok(created)
    }
}
