use super::*;
use crate::test_utils::build_zip;
use crate::types::errors::ArchiveError;

#[test]
fn test_lists_entries_in_archive_order() {
    let bytes = build_zip(&[
        ("pack.mcmeta", b"{}"),
        ("assets/", b""),
        ("assets/minecraft/lang/en_us.json", b"{\"a\":\"b\"}"),
    ]);

    let mut archive = PackArchive::open(bytes).unwrap();
    let entries = archive.entries().unwrap();

    let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["pack.mcmeta", "assets/", "assets/minecraft/lang/en_us.json"]
    );
    assert!(!entries[0].is_dir);
    assert!(entries[1].is_dir);
    assert_eq!(entries[2].size, 9);
    assert_eq!(entries[2].index, 2);
}

#[test]
fn test_backslash_names_are_normalized() {
    let bytes = build_zip(&[("assets\\foo\\textures\\block\\stone.png", b"x")]);

    let mut archive = PackArchive::open(bytes).unwrap();
    let entries = archive.entries().unwrap();
    assert_eq!(entries[0].path, "assets/foo/textures/block/stone.png");

    let found = archive.find("assets/foo/textures/block/stone.png");
    assert_eq!(found.map(|e| e.index), Some(0));
}

#[test]
fn test_read_text_and_find() {
    let bytes = build_zip(&[("a.txt", b"hello"), ("pack.mcmeta", b"{\"pack\":{}}")]);

    let mut archive = PackArchive::open(bytes).unwrap();
    let entry = archive.find("pack.mcmeta").unwrap();
    assert_eq!(archive.read_text(&entry, 1024).unwrap(), "{\"pack\":{}}");
    assert!(archive.find("missing.txt").is_none());
}

#[test]
fn test_capped_read_rejects_oversize_entry() {
    let bytes = build_zip(&[("big.bin", &[7u8; 64])]);

    let mut archive = PackArchive::open(bytes).unwrap();
    let entry = archive.find("big.bin").unwrap();

    assert_eq!(archive.read_bytes(&entry, 64).unwrap().len(), 64);
    let err = archive.read_bytes(&entry, 63).unwrap_err();
    assert!(matches!(err, ArchiveError::TooLarge { limit: 63, .. }));
}

#[test]
fn test_clones_read_independently() {
    let bytes = build_zip(&[("a.txt", b"one"), ("b.txt", b"two")]);

    let mut first = PackArchive::open(bytes).unwrap();
    let mut second = first.clone();
    let entries = first.entries().unwrap();

    assert_eq!(first.read_bytes(&entries[1], 16).unwrap(), b"two");
    assert_eq!(second.read_bytes(&entries[0], 16).unwrap(), b"one");
}

#[test]
fn test_garbage_is_corrupt() {
    let err = PackArchive::open(b"definitely not a zip".to_vec()).unwrap_err();
    assert!(matches!(err, ArchiveError::Corrupt(_)));
}

#[test]
fn test_truncated_archive_is_corrupt() {
    let mut bytes = build_zip(&[("a.txt", b"hello world")]);
    bytes.truncate(bytes.len() / 2);

    assert!(PackArchive::open(bytes).is_err());
}

#[test]
fn test_highly_compressible_entry_stops_at_cap() {
    // 4 MiB of zeros deflates to a few KiB
    let zeros = vec![0u8; 4 * 1024 * 1024];
    let bytes = build_zip(&[("pack.mcmeta", zeros.as_slice())]);
    assert!(bytes.len() < 64 * 1024);

    let mut archive = PackArchive::open(bytes).unwrap();
    let entry = archive.find("pack.mcmeta").unwrap();

    let err = archive.read_text(&entry, 64 * 1024).unwrap_err();
    assert!(matches!(err, ArchiveError::TooLarge { .. }));
}
