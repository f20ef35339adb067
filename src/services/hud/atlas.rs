//! HUD feature → texture mapping and per-feature source selection.
//!
//! Without pixel slicing, each feature is sourced as a whole file: picking
//! "hearts" from a pack means taking that pack's entire `icons.png`.

use crate::services::pack_files::sources::PackFile;
use crate::types::errors::ExportError;
use crate::types::pack::FeatureKey;
use serde::Serialize;
use std::collections::BTreeMap;

pub const ICONS_TEXTURE: &str = "assets/minecraft/textures/gui/icons.png";
pub const WIDGETS_TEXTURE: &str = "assets/minecraft/textures/gui/widgets.png";

/// Texture a feature is sourced from.
pub fn canonical_path(feature: FeatureKey) -> &'static str {
    match feature {
        FeatureKey::Hotbar => WIDGETS_TEXTURE,
        _ => ICONS_TEXTURE,
    }
}

/// Files whose path equals `rel_path`, ignoring ASCII case.
pub fn find_candidates<'a>(files: &'a [PackFile], rel_path: &str) -> Vec<&'a PackFile> {
    files
        .iter()
        .filter(|f| f.path.eq_ignore_ascii_case(rel_path))
        .collect()
}

/// Candidate sources for one feature.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCandidates<'a> {
    pub feature: FeatureKey,
    pub path: &'static str,
    pub sources: Vec<&'a PackFile>,
}

/// Candidates for every feature, in catalog order.
pub fn candidates_by_feature(files: &[PackFile]) -> Vec<FeatureCandidates<'_>> {
    FeatureKey::ALL
        .into_iter()
        .map(|feature| {
            let path = canonical_path(feature);
            FeatureCandidates {
                feature,
                path,
                sources: find_candidates(files, path),
            }
        })
        .collect()
}

/// At most one chosen source file per feature.
#[derive(Debug, Default, Clone)]
pub struct HudSelection<'a> {
    picks: BTreeMap<FeatureKey, &'a PackFile>,
}

impl<'a> HudSelection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `file` for `feature`, replacing any earlier pick.
    pub fn pick(&mut self, feature: FeatureKey, file: &'a PackFile) -> Result<(), ExportError> {
        if !file.path.eq_ignore_ascii_case(canonical_path(feature)) {
            return Err(ExportError::NotACandidate {
                feature: feature.as_str().to_string(),
                path: file.path.clone(),
            });
        }
        self.picks.insert(feature, file);
        Ok(())
    }

    pub fn skip(&mut self, feature: FeatureKey) {
        self.picks.remove(&feature);
    }

    pub fn get(&self, feature: FeatureKey) -> Option<&'a PackFile> {
        self.picks.get(&feature).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Picks in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &'a PackFile)> + '_ {
        self.picks.iter().map(|(feature, file)| (*feature, *file))
    }
}
