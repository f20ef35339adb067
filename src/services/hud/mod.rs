//! HUD builder: pick one source pack per HUD feature and export the result.

pub mod atlas;
pub mod export;

pub use atlas::{candidates_by_feature, canonical_path, find_candidates, FeatureCandidates, HudSelection};
pub use export::{build_hud_pack, planned_entries, EXPORT_PACK_FORMAT};

#[cfg(test)]
#[path = "tests/hud_tests.rs"]
mod tests;
