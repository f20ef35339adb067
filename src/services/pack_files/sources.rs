//! Flattened per-file view of loaded packs, used by the HUD feature selector.

use super::archive::PackArchive;
use crate::types::errors::ArchiveError;
use crate::types::pack::{PackUpload, PACK_METADATA_FILE};
use serde::Serialize;
use std::sync::Arc;

const PACK_ICON_FILE: &str = "pack.png";

/// A single file taken from a source pack.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackFile {
    pub path: String,
    #[serde(skip)]
    pub bytes: Arc<[u8]>,
    /// Filename of the upload this file came from.
    pub source_pack: String,
}

/// Read every relevant file of an upload.
///
/// Keeps entries under `assets/` plus the pack's `pack.mcmeta` and `pack.png`.
/// A file that inflates past `max_entry_bytes` fails the whole upload with
/// [`ArchiveError::TooLarge`].
pub fn load_pack_files(
    upload: &PackUpload,
    max_entry_bytes: u64,
) -> Result<Vec<PackFile>, ArchiveError> {
    let mut archive = PackArchive::open(upload.bytes.clone())?;
    let entries = archive.entries()?;

    let mut files = Vec::new();
    for entry in entries {
        if entry.is_dir || !is_source_path(&entry.path) {
            continue;
        }
        let bytes = archive.read_bytes(&entry, max_entry_bytes)?;
        files.push(PackFile {
            path: entry.path,
            bytes: bytes.into(),
            source_pack: upload.filename.clone(),
        });
    }

    log::debug!(
        "Loaded {} source files from '{}'",
        files.len(),
        upload.filename
    );
    Ok(files)
}

/// Load several uploads into one flat list, preserving upload order.
pub fn load_all(
    uploads: &[PackUpload],
    max_entry_bytes: u64,
) -> Result<Vec<PackFile>, ArchiveError> {
    let mut all = Vec::new();
    for upload in uploads {
        all.extend(load_pack_files(upload, max_entry_bytes)?);
    }
    Ok(all)
}

fn is_source_path(path: &str) -> bool {
    path.starts_with("assets/") || path.ends_with(PACK_METADATA_FILE) || path.ends_with(PACK_ICON_FILE)
}

#[cfg(test)]
#[path = "tests/sources_tests.rs"]
mod tests;
