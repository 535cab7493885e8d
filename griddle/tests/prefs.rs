//! Tests for preference storage.

use griddle::page::DEFAULT_PAGE_SIZE;
use griddle::prefs::{GridPrefs, MemoryBackend, PrefsProvider};

#[tokio::test]
async fn test_get_missing_key_is_none() {
    let prefs = PrefsProvider::new(MemoryBackend::new());
    let loaded: Option<GridPrefs> = prefs.get("grid.students").await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn test_set_then_get_round_trips() {
    let prefs = PrefsProvider::new(MemoryBackend::new());
    let stored = GridPrefs { page_size: 50 };
    prefs.set("grid.students", &stored).await.unwrap();

    let loaded: GridPrefs = prefs
        .get_or("grid.students", GridPrefs::default())
        .await
        .unwrap();
    assert_eq!(loaded, stored);
}

#[tokio::test]
async fn test_get_or_falls_back_to_default() {
    let prefs = PrefsProvider::new(MemoryBackend::new());
    let loaded = prefs
        .get_or("grid.tasks", GridPrefs::default())
        .await
        .unwrap();
    assert_eq!(loaded.page_size, DEFAULT_PAGE_SIZE);
}

#[tokio::test]
async fn test_keys_are_independent() {
    let prefs = PrefsProvider::new(MemoryBackend::new());
    prefs
        .set("grid.students", &GridPrefs { page_size: 20 })
        .await
        .unwrap();
    prefs
        .set("grid.tasks", &GridPrefs { page_size: 100 })
        .await
        .unwrap();

    let students: GridPrefs = prefs.get("grid.students").await.unwrap().unwrap();
    let tasks: GridPrefs = prefs.get("grid.tasks").await.unwrap().unwrap();
    assert_eq!(students.page_size, 20);
    assert_eq!(tasks.page_size, 100);
}
