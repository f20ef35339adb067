use super::*;

#[test]
fn test_named_hud_atlases() {
    assert_eq!(
        classify_path("assets/minecraft/textures/gui/icons.png"),
        Category::Hud
    );
    assert_eq!(
        classify_path("assets/minecraft/textures/gui/widgets.png"),
        Category::Hud
    );
    assert_eq!(
        namespace_of("assets/minecraft/textures/gui/icons.png"),
        Some("minecraft")
    );
}

#[test]
fn test_texture_buckets() {
    assert_eq!(
        classify_path("assets/foo/textures/block/stone.png"),
        Category::Blocks
    );
    assert_eq!(namespace_of("assets/foo/textures/block/stone.png"), Some("foo"));
    assert_eq!(
        classify_path("assets/foo/textures/block/nested/deep/ore.png"),
        Category::Blocks
    );
    assert_eq!(
        classify_path("assets/foo/textures/item/sword.png"),
        Category::Items
    );
    assert_eq!(
        classify_path("assets/foo/textures/entity/creeper/creeper.png"),
        Category::Entities
    );
    assert_eq!(
        classify_path("assets/foo/textures/gui/container/inventory.png"),
        Category::Hud
    );
}

#[test]
fn test_unmatched_is_other() {
    assert_eq!(
        classify_path("assets/x/textures/misc/banner.png"),
        Category::Other
    );
    assert_eq!(namespace_of("assets/x/textures/misc/banner.png"), Some("x"));
    assert_eq!(
        classify_path("assets/foo/textures/block/stone.png.mcmeta"),
        Category::Other
    );
    assert_eq!(classify_path("assets/foo/sounds.json"), Category::Other);
    assert_eq!(classify_path("pack.mcmeta"), Category::Other);
}

#[test]
fn test_rules_are_case_insensitive() {
    assert_eq!(
        classify_path("Assets/Minecraft/Textures/GUI/Icons.PNG"),
        Category::Hud
    );
    assert_eq!(
        classify_path("assets/foo/textures/BLOCK/Dirt.PNG"),
        Category::Blocks
    );
    assert!(is_icon_atlas("assets/minecraft/textures/gui/ICONS.png"));
}

#[test]
fn test_asset_path_guard() {
    assert!(is_asset_path("assets/a/b.txt"));
    assert!(!is_asset_path("assets/a/"));
    assert!(!is_asset_path("assets/a"));
    assert!(!is_asset_path("pack.mcmeta"));
    assert!(!is_asset_path("data/foo/recipes/x.json"));
    assert_eq!(namespace_of("pack.mcmeta"), None);
}

#[test]
fn test_icon_atlas_requires_full_path() {
    assert!(is_icon_atlas("assets/minecraft/textures/gui/icons.png"));
    assert!(!is_icon_atlas("assets/minecraft/textures/gui/sprites/icons.png"));
    assert!(!is_icon_atlas("textures/gui/icons.png"));
}
