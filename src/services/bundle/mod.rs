//! Bundle assembly: one manifest per upload, then cross-pack conflicts.
//!
//! Each upload is parsed on its own blocking worker; the workers are joined
//! in upload order under the request deadline. The first unreadable archive
//! fails the request, and no partial bundle is ever returned.

use crate::services::config::ValidateConfig;
use crate::services::ids::short_id;
use crate::services::pack_files::archive::PackArchive;
use crate::services::scanner::{
    build_manifest_cancellable, detect_conflicts, FeatureExtractor, FeatureProbe,
};
use crate::types::errors::BundleError;
use crate::types::pack::{Bundle, Manifest, PackUpload};
use futures_util::future::try_join_all;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub struct BundleAssembler {
    config: ValidateConfig,
    probe: FeatureProbe,
}

impl BundleAssembler {
    pub fn new(config: ValidateConfig) -> Self {
        let probe = FeatureProbe::catalog(config.max_probe_bytes);
        Self { config, probe }
    }

    /// Swap the icon atlas extractor (e.g. for a slicing implementation).
    pub fn with_extractor(mut self, extractor: Arc<dyn FeatureExtractor>) -> Self {
        self.probe = FeatureProbe::new(extractor, self.config.max_probe_bytes);
        self
    }

    pub fn config(&self) -> &ValidateConfig {
        &self.config
    }

    /// Validate a set of uploads into one bundle.
    pub async fn assemble<R>(&self, uploads: Vec<PackUpload>, rng: &mut R) -> Result<Bundle, BundleError>
    where
        R: Rng + Send + ?Sized,
    {
        check_uploads(&uploads, &self.config)?;

        let started = Instant::now();
        let pack_count = uploads.len();

        // Raised on timeout so detached workers stop at the next entry
        let cancel = Arc::new(AtomicBool::new(false));

        let workers = uploads.into_iter().map(|upload| {
            let probe = self.probe.clone();
            let cancel = Arc::clone(&cancel);
            let handle =
                tokio::task::spawn_blocking(move || manifest_for_upload(upload, &probe, &cancel));
            async move {
                handle
                    .await
                    .map_err(|e| BundleError::Worker(e.to_string()))?
            }
        });

        let deadline = self.config.request_timeout;
        let manifests = match tokio::time::timeout(deadline, try_join_all(workers)).await {
            Ok(joined) => joined?,
            Err(_) => {
                cancel.store(true, Ordering::Relaxed);
                log::warn!("Validation of {pack_count} packs exceeded {deadline:?}; cancelling workers");
                return Err(BundleError::TimedOut(deadline));
            }
        };

        let issues = detect_conflicts(&manifests);
        let bundle = Bundle {
            bundle_id: short_id(rng),
            max_pack_format: max_pack_format(&manifests),
            manifests,
            issues,
        };

        log::info!(
            "Bundle {}: {} packs, {} issues, max pack_format {} ({:?})",
            bundle.bundle_id,
            pack_count,
            bundle.issues.len(),
            bundle.max_pack_format,
            started.elapsed()
        );
        Ok(bundle)
    }
}

/// Reject a request before any archive is opened.
pub fn check_uploads(uploads: &[PackUpload], config: &ValidateConfig) -> Result<(), BundleError> {
    if uploads.is_empty() {
        return Err(BundleError::NoFiles);
    }
    for upload in uploads {
        let size = upload.bytes.len() as u64;
        if size > config.max_upload_bytes {
            return Err(BundleError::FileTooLarge {
                name: upload.filename.clone(),
                size,
                limit: config.max_upload_bytes,
            });
        }
    }
    Ok(())
}

/// Highest positive `pack_format`, or 0 when none is positive.
pub fn max_pack_format(manifests: &[Manifest]) -> i64 {
    manifests
        .iter()
        .map(|m| m.pack_format)
        .filter(|format| *format > 0)
        .max()
        .unwrap_or(0)
}

fn manifest_for_upload(
    upload: PackUpload,
    probe: &FeatureProbe,
    cancel: &AtomicBool,
) -> Result<Manifest, BundleError> {
    let pack = upload.pack_name();
    let to_bundle_err = |source| BundleError::Archive {
        pack: pack.clone(),
        source,
    };

    let archive = PackArchive::open(upload.bytes).map_err(to_bundle_err)?;
    build_manifest_cancellable(&archive, &pack, probe, cancel).map_err(to_bundle_err)
}

#[cfg(test)]
#[path = "tests/bundle_tests.rs"]
mod tests;
