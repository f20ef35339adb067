//! HUD builder commands: list per-feature sources and export a picked pack.

use crate::services::bundle::check_uploads;
use crate::services::config::ValidateConfig;
use crate::services::hud::{self, HudSelection};
use crate::services::pack_files::sources::{self, PackFile};
use crate::types::errors::{CommandError, CommandResult, ExportError};
use crate::types::pack::{FeatureKey, PackUpload};
use serde::{Deserialize, Serialize};

/// Sources available for one HUD feature.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOptions {
    pub feature: FeatureKey,
    pub path: String,
    /// Upload filenames that provide the feature's texture.
    pub sources: Vec<String>,
}

/// One user choice: take `feature` from the upload named `source_pack`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePick {
    pub feature: FeatureKey,
    pub source_pack: String,
}

pub async fn hud_candidates_cmd(
    uploads: Vec<PackUpload>,
    config: &ValidateConfig,
) -> CommandResult<Vec<FeatureOptions>> {
    let files = load_files(uploads, config).await?;

    Ok(hud::candidates_by_feature(&files)
        .into_iter()
        .map(|c| FeatureOptions {
            feature: c.feature,
            path: c.path.to_string(),
            sources: c.sources.iter().map(|f| f.source_pack.clone()).collect(),
        })
        .collect())
}

/// Build the HUD pack archive. Later picks for the same feature win.
pub async fn export_hud_pack_cmd(
    uploads: Vec<PackUpload>,
    picks: Vec<FeaturePick>,
    config: &ValidateConfig,
) -> CommandResult<Vec<u8>> {
    let files = load_files(uploads, config).await?;

    tokio::task::spawn_blocking(move || export_blocking(&files, &picks))
        .await
        .map_err(|e| CommandError::Internal(format!("Export task failed: {e}")))?
}

fn export_blocking(files: &[PackFile], picks: &[FeaturePick]) -> CommandResult<Vec<u8>> {
    let mut selection = HudSelection::new();
    for pick in picks {
        let path = hud::canonical_path(pick.feature);
        let file = hud::find_candidates(files, path)
            .into_iter()
            .find(|f| f.source_pack == pick.source_pack)
            .ok_or_else(|| ExportError::NotACandidate {
                feature: pick.feature.as_str().to_string(),
                path: format!("{}:{}", pick.source_pack, path),
            })?;
        selection.pick(pick.feature, file)?;
    }

    Ok(hud::build_hud_pack(&selection)?)
}

/// Apply the same request limits as validation, then read every upload.
async fn load_files(
    uploads: Vec<PackUpload>,
    config: &ValidateConfig,
) -> CommandResult<Vec<PackFile>> {
    check_uploads(&uploads, config)?;

    let max_entry_bytes = config.max_entry_bytes;
    let files = tokio::task::spawn_blocking(move || sources::load_all(&uploads, max_entry_bytes))
        .await
        .map_err(|e| CommandError::Internal(format!("Pack loading failed: {e}")))??;
    Ok(files)
}
