//! Declared `pack_format` detection from `pack.mcmeta`.

use crate::services::pack_files::archive::PackArchive;
use crate::types::pack::PACK_METADATA_FILE;
use serde::Deserialize;

/// Largest `pack.mcmeta` worth parsing. Real files are a few hundred bytes.
pub const METADATA_MAX_BYTES: u64 = 64 * 1024;

#[derive(Debug, Deserialize)]
struct PackMetadata {
    pack: Option<PackSection>,
}

#[derive(Debug, Deserialize)]
struct PackSection {
    pack_format: Option<serde_json::Value>,
}

/// Read the declared format of a pack.
///
/// `None` means "no usable value": the metadata entry is missing, unreadable,
/// larger than [`METADATA_MAX_BYTES`] once inflated, not JSON, or lacks an
/// integer `pack.pack_format`. Failures are logged and
/// swallowed; callers choose the fallback.
pub fn detect_pack_format(archive: &mut PackArchive) -> Option<i64> {
    let entry = archive.find(PACK_METADATA_FILE)?;

    let raw = match archive.read_text(&entry, METADATA_MAX_BYTES) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Unreadable {PACK_METADATA_FILE}: {e}");
            return None;
        }
    };

    parse_pack_format(&raw)
}

/// Extract `pack.pack_format` from metadata JSON text.
pub fn parse_pack_format(raw: &str) -> Option<i64> {
    // Some editors save metadata with a BOM
    let raw = raw.trim_start_matches('\u{feff}');

    let metadata: PackMetadata = match serde_json::from_str(raw) {
        Ok(metadata) => metadata,
        Err(e) => {
            log::debug!("Invalid {PACK_METADATA_FILE} JSON: {e}");
            return None;
        }
    };

    let value = metadata.pack?.pack_format?;
    let format = value.as_i64();
    if format.is_none() {
        log::debug!("Non-integer pack_format: {value}");
    }
    format
}

#[cfg(test)]
#[path = "tests/pack_format_tests.rs"]
mod tests;
