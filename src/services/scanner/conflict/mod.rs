//! Cross-pack path conflict detection.
//!
//! Two packs that ship the same relative path cannot both win when merged;
//! every such path becomes one `CONFLICT` issue for the user to resolve.

use crate::types::pack::{Issue, IssueKind, Manifest};
use std::collections::HashMap;

/// Contribution tally for one path.
#[derive(Debug)]
struct PathEntry<'a> {
    path: &'a str,
    packs: usize,
    last_pack: usize,
}

/// Detect paths supplied by two or more manifests.
///
/// Manifests are scanned in order, assets in order within each manifest.
/// Issues come out in the order their path was first seen, and `paths`
/// repeats the path once per contributing pack. A path listed twice inside
/// one pack counts as a single contribution.
pub fn detect_conflicts(manifests: &[Manifest]) -> Vec<Issue> {
    let mut seen: Vec<PathEntry<'_>> = Vec::new();
    let mut by_path: HashMap<&str, usize> = HashMap::new();

    for (pack_index, manifest) in manifests.iter().enumerate() {
        for asset in &manifest.assets {
            let path = asset.path.as_str();
            match by_path.get(path) {
                Some(&slot) => {
                    let entry = &mut seen[slot];
                    if entry.last_pack != pack_index {
                        entry.packs += 1;
                        entry.last_pack = pack_index;
                    }
                }
                None => {
                    by_path.insert(path, seen.len());
                    seen.push(PathEntry {
                        path,
                        packs: 1,
                        last_pack: pack_index,
                    });
                }
            }
        }
    }

    let issues: Vec<Issue> = seen
        .into_iter()
        .filter(|entry| entry.packs > 1)
        .map(|entry| Issue {
            kind: IssueKind::Conflict,
            message: format!(
                "Multiple packs provide '{}'. User must choose one.",
                entry.path
            ),
            paths: vec![entry.path.to_string(); entry.packs],
        })
        .collect();

    if !issues.is_empty() {
        log::info!(
            "{} conflicting paths across {} packs",
            issues.len(),
            manifests.len()
        );
    }
    issues
}

#[cfg(test)]
#[path = "tests/conflict_tests.rs"]
mod tests;
