//! PackBuilder core: reads uploaded resource pack archives, builds per-pack
//! asset manifests, and reports path conflicts across packs.

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;
