use std::path::PathBuf;

use mikocli::management::{Theme, ThemeStore, ViewMode, ViewModeStore};

// Helper function to get a clean scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mikocli-prefs-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[tokio::test]
async fn test_view_mode_defaults_to_grid() {
    let base = scratch_dir("default");
    let store = ViewModeStore::open_at(base, "albums").await;

    assert_eq!(store.mode(), ViewMode::Grid);
    assert_eq!(store.key(), "albums");
}

#[tokio::test]
async fn test_view_mode_round_trip_through_rekeying() {
    let base = scratch_dir("round-trip");

    let mut store = ViewModeStore::open_at(base, "albums").await;
    store.set_mode(ViewMode::Table).await.unwrap();

    // Switching scope adopts the other scope's (default) value
    store.set_key("tracks").await;
    assert_eq!(store.key(), "tracks");
    assert_eq!(store.mode(), ViewMode::Grid);

    // Switching back restores the persisted value for the scope
    store.set_key("albums").await;
    assert_eq!(store.mode(), ViewMode::Table);
}

#[tokio::test]
async fn test_view_mode_scopes_are_independent() {
    let base = scratch_dir("scopes");

    let mut albums = ViewModeStore::open_at(base.clone(), "albums").await;
    albums.set_mode(ViewMode::Table).await.unwrap();

    let artists = ViewModeStore::open_at(base, "artists").await;
    assert_eq!(artists.mode(), ViewMode::Grid);
}

#[tokio::test]
async fn test_view_mode_invalid_persisted_value_reads_as_default() {
    let base = scratch_dir("corrupted");
    let prefs_dir = base.join("prefs");
    std::fs::create_dir_all(&prefs_dir).unwrap();

    // A corrupted value string
    std::fs::write(prefs_dir.join("library-view-albums.json"), "\"sideways\"").unwrap();
    let store = ViewModeStore::open_at(base.clone(), "albums").await;
    assert_eq!(store.mode(), ViewMode::Grid);

    // Not even JSON
    std::fs::write(prefs_dir.join("library-view-albums.json"), "{{{").unwrap();
    let store = ViewModeStore::open_at(base, "albums").await;
    assert_eq!(store.mode(), ViewMode::Grid);
}

#[tokio::test]
async fn test_theme_round_trip() {
    let base = scratch_dir("theme");
    let store = ThemeStore::at(base);

    assert_eq!(store.load().await, Theme::System);

    store.set(Theme::Dark).await.unwrap();
    assert_eq!(store.load().await, Theme::Dark);
}

#[tokio::test]
async fn test_theme_toggle_cycles() {
    let base = scratch_dir("theme-toggle");
    let store = ThemeStore::at(base);

    store.set(Theme::Light).await.unwrap();
    assert_eq!(store.toggle().await.unwrap(), Theme::Dark);
    assert_eq!(store.toggle().await.unwrap(), Theme::System);
    assert_eq!(store.toggle().await.unwrap(), Theme::Light);
}

#[tokio::test]
async fn test_theme_invalid_persisted_value_reads_as_default() {
    let base = scratch_dir("theme-corrupted");
    let prefs_dir = base.join("prefs");
    std::fs::create_dir_all(&prefs_dir).unwrap();
    std::fs::write(prefs_dir.join("theme.json"), "\"neon\"").unwrap();

    let store = ThemeStore::at(base);
    assert_eq!(store.load().await, Theme::System);
}
