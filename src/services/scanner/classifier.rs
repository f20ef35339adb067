//! Path taxonomy for resource pack entries.
//!
//! `RULES` is the only place category patterns live. Rules are tried top to
//! bottom and the first match wins, so the two named HUD atlases must stay
//! ahead of the generic `textures/gui/` catch-all.

use crate::types::pack::Category;
use regex::Regex;
use std::sync::LazyLock;

/// Entries the manifest cares about: `assets/<namespace>/<anything>`.
static RE_ASSET_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^assets/([^/]+)/.+").expect("valid asset path regex"));

/// Ordered `(pattern, category)` table.
static RULES: LazyLock<Vec<(Regex, Category)>> = LazyLock::new(|| {
    [
        (ICON_ATLAS_PATTERN, Category::Hud),
        (r"(?i)^assets/[^/]+/textures/gui/widgets\.png$", Category::Hud),
        (r"(?i)^assets/[^/]+/textures/block/.+\.png$", Category::Blocks),
        (r"(?i)^assets/[^/]+/textures/item/.+\.png$", Category::Items),
        (r"(?i)^assets/[^/]+/textures/entity/.+\.png$", Category::Entities),
        (r"(?i)^assets/[^/]+/textures/gui/.+\.png$", Category::Hud),
    ]
    .into_iter()
    .map(|(pattern, category)| (Regex::new(pattern).expect("valid rule regex"), category))
    .collect()
});

const ICON_ATLAS_PATTERN: &str = r"(?i)^assets/[^/]+/textures/gui/icons\.png$";

static RE_ICON_ATLAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ICON_ATLAS_PATTERN).expect("valid icon atlas regex"));

/// Classify a normalized entry path. Total: unmatched paths are `Other`.
pub fn classify_path(path: &str) -> Category {
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(path))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

/// Namespace segment of an `assets/<namespace>/...` path.
pub fn namespace_of(path: &str) -> Option<&str> {
    RE_ASSET_PATH
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether an entry belongs in a manifest's asset list.
pub fn is_asset_path(path: &str) -> bool {
    RE_ASSET_PATH.is_match(path)
}

/// Whether the path is the HUD icon atlas probed for features.
pub fn is_icon_atlas(path: &str) -> bool {
    RE_ICON_ATLAS.is_match(path)
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
