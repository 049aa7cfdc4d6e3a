use crate::models::ThumbnailSpec;
use crate::AppError;

/// In-memory snapshot of the full thumbnail-spec catalog.
///
/// Loaded once per operation by the repository and passed explicitly into the
/// thumbnail engine, so the resize routine never reaches into ambient storage
/// and tests can run against a hand-built catalog.
#[derive(Debug, Clone)]
pub struct SizeCatalog {
    specs: Vec<ThumbnailSpec>,
}

impl SizeCatalog {
    pub fn new(specs: Vec<ThumbnailSpec>) -> Self {
        Self { specs }
    }

    /// The spec marking the stored original.
    ///
    /// A catalog without one is a hard configuration error: uploads cannot
    /// proceed until an administrator creates it. This is distinct from a
    /// catalog with zero thumbnail heights, which is a valid (degenerate)
    /// configuration yielding only the original.
    pub fn original_spec(&self) -> Result<&ThumbnailSpec, AppError> {
        self.specs
            .iter()
            .find(|s| s.is_original)
            .ok_or(AppError::NotConfigured)
    }

    /// Specs with a positive target height, in catalog order.
    ///
    /// When two specs share a height, the last one in catalog order wins and
    /// a single variant is derived for that height, keeping the position of
    /// the first occurrence. One derived variant per distinct height.
    pub fn non_original_specs(&self) -> Vec<&ThumbnailSpec> {
        let mut out: Vec<&ThumbnailSpec> = Vec::new();
        for spec in &self.specs {
            let height = match (spec.is_original, spec.target_height_px) {
                (false, Some(h)) if h > 0 => h,
                _ => continue,
            };
            match out.iter().position(|s| s.target_height_px == Some(height)) {
                Some(idx) => out[idx] = spec,
                None => out.push(spec),
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }
}
