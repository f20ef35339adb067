use super::*;
use crate::types::pack::{Asset, Category};

fn manifest(name: &str, paths: &[&str]) -> Manifest {
    Manifest {
        pack_name: name.to_string(),
        pack_format: 34,
        assets: paths
            .iter()
            .map(|p| Asset {
                path: p.to_string(),
                category: Category::Other,
                namespace: "minecraft".into(),
                size_bytes: 1,
                features: vec![],
            })
            .collect(),
    }
}

#[test]
fn test_detect_conflict() {
    let a = manifest("A", &["assets/a/textures/block/dirt.png"]);
    let b = manifest(
        "B",
        &[
            "assets/a/textures/block/dirt.png",
            "assets/b/textures/item/sword.png",
        ],
    );

    let issues = detect_conflicts(&[a, b]);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::Conflict);
    assert_eq!(
        issues[0].paths,
        vec![
            "assets/a/textures/block/dirt.png",
            "assets/a/textures/block/dirt.png"
        ]
    );
    assert_eq!(
        issues[0].message,
        "Multiple packs provide 'assets/a/textures/block/dirt.png'. User must choose one."
    );
}

#[test]
fn test_no_conflict_for_single_contributor() {
    let a = manifest("A", &["assets/a/x.png"]);
    let b = manifest("B", &["assets/b/x.png"]);
    assert!(detect_conflicts(&[a, b]).is_empty());
}

#[test]
fn test_no_conflict_inputs() {
    assert!(detect_conflicts(&[]).is_empty());
    assert!(detect_conflicts(&[manifest("Solo", &["assets/a/x.png"])]).is_empty());
}

#[test]
fn test_paths_length_matches_contributors() {
    let shared = "assets/minecraft/textures/gui/icons.png";
    let packs = vec![
        manifest("A", &[shared]),
        manifest("B", &["assets/b/y.png"]),
        manifest("C", &[shared]),
        manifest("D", &[shared]),
    ];

    let issues = detect_conflicts(&packs);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].paths.len(), 3);
}

#[test]
fn test_issues_follow_first_seen_order() {
    let a = manifest("A", &["assets/m/z.png", "assets/m/a.png", "assets/m/q.png"]);
    let b = manifest("B", &["assets/m/q.png", "assets/m/a.png"]);
    let c = manifest("C", &["assets/m/z.png"]);

    let issues = detect_conflicts(&[a, b, c]);
    let firsts: Vec<&str> = issues.iter().map(|i| i.paths[0].as_str()).collect();
    assert_eq!(firsts, vec!["assets/m/z.png", "assets/m/a.png", "assets/m/q.png"]);
}

#[test]
fn test_duplicate_within_one_pack_is_not_a_conflict() {
    let a = manifest("A", &["assets/m/dup.png", "assets/m/dup.png"]);
    assert!(detect_conflicts(&[a.clone()]).is_empty());

    let b = manifest("B", &["assets/m/dup.png"]);
    let issues = detect_conflicts(&[a, b]);
    assert_eq!(issues[0].paths.len(), 2);
}

#[test]
fn test_paths_are_case_sensitive() {
    let a = manifest("A", &["assets/m/Stone.png"]);
    let b = manifest("B", &["assets/m/stone.png"]);
    assert!(detect_conflicts(&[a, b]).is_empty());
}
