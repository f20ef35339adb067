use super::atlas::{canonical_path, HudSelection};
use crate::services::pack_files::sources::PackFile;
use crate::types::errors::ExportError;
use crate::types::pack::PACK_METADATA_FILE;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Format declared by exported HUD packs.
pub const EXPORT_PACK_FORMAT: i64 = 22;

const EXPORT_DESCRIPTION: &str = "PackBuilder export";

/// Output entries for a selection, one per canonical path.
///
/// Paths keep the order of the first feature that uses them; when several
/// picked features share a path, the last one in catalog order supplies the
/// bytes.
pub fn planned_entries<'a>(selection: &HudSelection<'a>) -> Vec<(&'static str, &'a PackFile)> {
    let mut planned: Vec<(&'static str, &'a PackFile)> = Vec::new();
    for (feature, file) in selection.iter() {
        let path = canonical_path(feature);
        match planned.iter_mut().find(|(existing, _)| *existing == path) {
            Some(slot) => slot.1 = file,
            None => planned.push((path, file)),
        }
    }
    planned
}

/// Write a minimal resource pack containing the picked HUD textures.
pub fn build_hud_pack(selection: &HudSelection<'_>) -> Result<Vec<u8>, ExportError> {
    if selection.is_empty() {
        return Err(ExportError::NothingSelected);
    }

    let metadata = serde_json::to_string_pretty(&serde_json::json!({
        "pack": {
            "pack_format": EXPORT_PACK_FORMAT,
            "description": EXPORT_DESCRIPTION,
        }
    }))?;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    writer.start_file(PACK_METADATA_FILE, options)?;
    writer.write_all(metadata.as_bytes())?;

    for (path, file) in planned_entries(selection) {
        log::debug!("Export {path} from '{}'", file.source_pack);
        writer.start_file(path, options)?;
        writer.write_all(&file.bytes)?;
    }

    let bytes = writer.finish()?.into_inner();
    log::info!(
        "Exported HUD pack: {} features, {} bytes",
        selection.len(),
        bytes.len()
    );
    Ok(bytes)
}
