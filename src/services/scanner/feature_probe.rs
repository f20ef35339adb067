//! HUD icon atlas probing.
//!
//! Only `assets/<ns>/textures/gui/icons.png` is probed. Unreadable or
//! non-image bytes yield an empty feature list; the probe never fails.

use super::classifier::is_icon_atlas;
use crate::services::pack_files::archive::{ArchiveEntry, PackArchive};
use crate::types::pack::FeatureKey;
use image::{ImageError, ImageReader};
use std::io::Cursor;
use std::sync::Arc;

/// Derives feature keys from icon atlas bytes.
///
/// Implementations must return an empty list for bytes that are not an image.
pub trait FeatureExtractor: Send + Sync {
    fn extract(&self, atlas: &[u8]) -> Vec<FeatureKey>;
}

/// Reports the full feature catalog for any atlas that decodes.
///
/// Region slicing is not implemented; a slicing extractor can replace this
/// one without touching the manifest builder.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogExtractor;

impl FeatureExtractor for CatalogExtractor {
    fn extract(&self, atlas: &[u8]) -> Vec<FeatureKey> {
        match image_dimensions(atlas) {
            Ok((width, height)) => {
                log::debug!("Icon atlas decoded ({width}x{height})");
                FeatureKey::ALL.to_vec()
            }
            Err(e) => {
                log::warn!("Icon atlas is not a valid image: {e}");
                Vec::new()
            }
        }
    }
}

/// Sniff the format and decode the header of an image.
pub fn image_dimensions(bytes: &[u8]) -> Result<(u32, u32), ImageError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}

/// Applies an extractor to icon atlas entries, with a size cap.
#[derive(Clone)]
pub struct FeatureProbe {
    extractor: Arc<dyn FeatureExtractor>,
    max_bytes: u64,
}

impl FeatureProbe {
    pub fn new(extractor: Arc<dyn FeatureExtractor>, max_bytes: u64) -> Self {
        Self {
            extractor,
            max_bytes,
        }
    }

    /// Probe backed by [`CatalogExtractor`].
    pub fn catalog(max_bytes: u64) -> Self {
        Self::new(Arc::new(CatalogExtractor), max_bytes)
    }

    pub fn probe(&self, archive: &mut PackArchive, entry: &ArchiveEntry) -> Vec<FeatureKey> {
        if !is_icon_atlas(&entry.path) {
            return Vec::new();
        }
        if entry.size > self.max_bytes {
            log::warn!(
                "Skipping feature probe for {}: {} bytes exceeds {}",
                entry.path,
                entry.size,
                self.max_bytes
            );
            return Vec::new();
        }

        match archive.read_bytes(entry, self.max_bytes) {
            Ok(bytes) => self.extractor.extract(&bytes),
            Err(e) => {
                log::warn!("Feature probe read failed: {e}");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for FeatureProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureProbe")
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/feature_probe_tests.rs"]
mod tests;
