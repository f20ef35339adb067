//! Pack inventory contracts returned by the validate command.
//!
//! Wire boundary:
//! - Field names are camelCase (`packName`, `sizeBytes`, `maxPackFormat`).
//! - Categories serialize as their upper-case code; `label()` gives the UI text.
//! - Feature keys serialize snake_case and keep catalog order.

use serde::{Deserialize, Serialize};

/// Declared format used when a pack has no readable `pack.mcmeta`.
pub const DEFAULT_PACK_FORMAT: i64 = 34;

/// Name of the metadata entry at the archive root.
pub const PACK_METADATA_FILE: &str = "pack.mcmeta";

/// Coarse semantic bucket for an asset path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Hud,
    Blocks,
    Items,
    Entities,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hud => "HUD & GUI",
            Self::Blocks => "Blocks",
            Self::Items => "Items",
            Self::Entities => "Entities",
            Self::Other => "Other",
        }
    }
}

/// A named sub-element of the HUD icon atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    Hotbar,
    Hearts,
    HeartsPoison,
    HeartsWither,
    Absorption,
    XpBar,
    XpOrb,
    Armor,
    Food,
    FoodPoisoned,
    HorseHearts,
    HorseJumpBar,
}

impl FeatureKey {
    /// Every feature key, in catalog order.
    pub const ALL: [FeatureKey; 12] = [
        Self::Hotbar,
        Self::Hearts,
        Self::HeartsPoison,
        Self::HeartsWither,
        Self::Absorption,
        Self::XpBar,
        Self::XpOrb,
        Self::Armor,
        Self::Food,
        Self::FoodPoisoned,
        Self::HorseHearts,
        Self::HorseJumpBar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotbar => "hotbar",
            Self::Hearts => "hearts",
            Self::HeartsPoison => "hearts_poison",
            Self::HeartsWither => "hearts_wither",
            Self::Absorption => "absorption",
            Self::XpBar => "xp_bar",
            Self::XpOrb => "xp_orb",
            Self::Armor => "armor",
            Self::Food => "food",
            Self::FoodPoisoned => "food_poisoned",
            Self::HorseHearts => "horse_hearts",
            Self::HorseJumpBar => "horse_jump_bar",
        }
    }

    /// Parse a snake_case key as accepted on the command line.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.as_str().eq_ignore_ascii_case(key.trim()))
    }
}

/// One relevant archive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub path: String,
    pub category: Category,
    pub namespace: String,
    pub size_bytes: u64,
    pub features: Vec<FeatureKey>,
}

/// Inventory of one uploaded pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub pack_name: String,
    pub pack_format: i64,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueKind {
    Conflict,
}

/// A problem the user must resolve before merging packs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    /// The colliding path, repeated once per contributing pack.
    pub paths: Vec<String>,
}

/// Aggregate result of validating a set of packs in one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub bundle_id: String,
    pub manifests: Vec<Manifest>,
    pub issues: Vec<Issue>,
    pub max_pack_format: i64,
}

/// One uploaded archive, as received from the transport layer.
#[derive(Debug, Clone)]
pub struct PackUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PackUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Filename with a trailing `.zip` removed (case-insensitive).
    pub fn pack_name(&self) -> String {
        let name = self.filename.as_str();
        let cut = name.len().saturating_sub(4);
        match name.get(cut..) {
            Some(ext) if ext.eq_ignore_ascii_case(".zip") => name[..cut].to_string(),
            _ => name.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/pack_tests.rs"]
mod tests;
