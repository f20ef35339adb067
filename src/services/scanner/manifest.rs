//! Per-archive manifest building.
//!
//! Classification and feature probing run on rayon, one task per qualifying
//! entry. Each task writes only its own pre-sized slot, so asset order is the
//! archive's entry order no matter which task finishes first.

use super::classifier::{classify_path, is_asset_path, namespace_of};
use super::feature_probe::FeatureProbe;
use super::pack_format::detect_pack_format;
use crate::services::pack_files::archive::{ArchiveEntry, PackArchive};
use crate::types::errors::ArchiveError;
use crate::types::pack::{Asset, Manifest, DEFAULT_PACK_FORMAT};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Build the manifest of one opened archive.
///
/// Only container-level faults are errors; metadata and probe failures
/// degrade to the default format and empty features.
pub fn build_manifest(
    archive: &PackArchive,
    pack_name: &str,
    probe: &FeatureProbe,
) -> Result<Manifest, ArchiveError> {
    build_manifest_cancellable(archive, pack_name, probe, &AtomicBool::new(false))
}

/// [`build_manifest`] that stops early once `cancel` is set.
///
/// The flag is checked before each entry; entries already being probed run
/// to completion, the rest are skipped and the build fails with
/// [`ArchiveError::Cancelled`].
pub fn build_manifest_cancellable(
    archive: &PackArchive,
    pack_name: &str,
    probe: &FeatureProbe,
    cancel: &AtomicBool,
) -> Result<Manifest, ArchiveError> {
    let mut archive = archive.clone();
    let entries: Vec<ArchiveEntry> = archive
        .entries()?
        .into_iter()
        .filter(|entry| !entry.is_dir && is_asset_path(&entry.path))
        .collect();

    let pack_format = detect_pack_format(&mut archive).unwrap_or_else(|| {
        log::debug!("'{pack_name}' declares no pack_format; using {DEFAULT_PACK_FORMAT}");
        DEFAULT_PACK_FORMAT
    });

    let mut slots: Vec<Option<Asset>> = vec![None; entries.len()];
    slots
        .par_iter_mut()
        .zip(entries.par_iter())
        .for_each_with(archive, |archive, (slot, entry)| {
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            *slot = Some(describe_entry(archive, entry, probe));
        });

    if cancel.load(Ordering::Relaxed) {
        log::debug!("Manifest '{pack_name}' cancelled");
        return Err(ArchiveError::Cancelled);
    }

    let assets: Vec<Asset> = slots.into_iter().flatten().collect();
    log::info!(
        "Manifest '{}': {} assets, pack_format {}",
        pack_name,
        assets.len(),
        pack_format
    );

    Ok(Manifest {
        pack_name: pack_name.to_string(),
        pack_format,
        assets,
    })
}

/// Open raw bytes and build their manifest.
pub fn build_manifest_from_bytes(
    bytes: impl Into<std::sync::Arc<[u8]>>,
    pack_name: &str,
    probe: &FeatureProbe,
) -> Result<Manifest, ArchiveError> {
    let archive = PackArchive::open(bytes)?;
    build_manifest(&archive, pack_name, probe)
}

fn describe_entry(archive: &mut PackArchive, entry: &ArchiveEntry, probe: &FeatureProbe) -> Asset {
    Asset {
        path: entry.path.clone(),
        category: classify_path(&entry.path),
        namespace: namespace_of(&entry.path).unwrap_or_default().to_string(),
        size_bytes: entry.size,
        features: probe.probe(archive, entry),
    }
}

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod tests;
