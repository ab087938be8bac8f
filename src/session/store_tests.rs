//! Tests for the session store

use super::*;
use serde_json::json;
use tempfile::tempdir;

#[tokio::test]
async fn test_in_memory_store() {
    let store = SessionStore::in_memory();
    assert!(store.is_in_memory());

    store.set_json("{\"a\": 1}").await.unwrap();
    assert_eq!(store.session().await.json, "{\"a\": 1}");
    // saving is a no-op without a path
    store.save().await.unwrap();
}

#[tokio::test]
async fn test_from_json() {
    let store = SessionStore::from_json(
        r#"{"json": "[1]", "modifications": {"root": {"isOptional": true}}}"#,
    )
    .unwrap();

    let session = store.snapshot().await;
    assert_eq!(session.json, "[1]");
    assert_eq!(
        session.modifications.get("root").unwrap().is_optional,
        Some(true)
    );
}

#[test]
fn test_from_json_rejects_garbage() {
    let err = SessionStore::from_json("not json").unwrap_err();
    assert!(matches!(err, crate::Error::Session { .. }));
}

#[tokio::test]
async fn test_auto_save_persists_updates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::new(&path);
    store.set_json("{\"name\": \"ann\"}").await.unwrap();
    let renamed = store
        .update(|s| s.rename("root.name", "fullName"))
        .await
        .unwrap();
    assert!(renamed.is_ok());

    let reopened = SessionStore::from_file(&path).unwrap();
    let session = reopened.snapshot().await;
    assert_eq!(session.json, "{\"name\": \"ann\"}");
    assert_eq!(
        session
            .modifications
            .get("root.name")
            .unwrap()
            .renamed_key
            .as_deref(),
        Some("fullName")
    );

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.get("saved_at").is_some());
    assert!(!dir.path().join("session.tmp").exists());
}

#[tokio::test]
async fn test_without_auto_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::without_auto_save(&path);
    store.set_json("{}").await.unwrap();
    assert!(!path.exists());

    store.save().await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_load_replaces_cached_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, json!({ "json": "{\"x\": 1}" }).to_string()).unwrap();

    let store = SessionStore::without_auto_save(&path);
    assert_eq!(store.session().await.json, "");

    store.load().await.unwrap();
    assert_eq!(store.session().await.json, "{\"x\": 1}");
    assert!(store.session().await.modifications.is_empty());
}

#[test]
fn test_from_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let store = SessionStore::from_file(dir.path().join("missing.json")).unwrap();
    assert!(!store.is_in_memory());
}

#[tokio::test]
async fn test_save_to_other_file() {
    let dir = tempdir().unwrap();
    let store = SessionStore::in_memory();
    store.set_json("[true]").await.unwrap();

    let target = dir.path().join("copy.json");
    store.save_to_file(&target).await.unwrap();

    let copy = SessionStore::from_file(&target).unwrap();
    assert_eq!(copy.snapshot().await.json, "[true]");
}
