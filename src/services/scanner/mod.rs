pub mod classifier;
pub mod conflict;
pub mod feature_probe;
pub mod manifest;
pub mod pack_format;

pub use conflict::detect_conflicts;
pub use feature_probe::{CatalogExtractor, FeatureExtractor, FeatureProbe};
pub use manifest::{build_manifest, build_manifest_cancellable, build_manifest_from_bytes};
