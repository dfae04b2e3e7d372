use storage::repository::{KeyValueRepository, PROGRESS_KEY, Storage};
use storage::sqlite::{SqliteInitError, SqliteRepository};

#[tokio::test]
async fn sqlite_roundtrips_progress_value() {
    let repo = SqliteRepository::open("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("open");

    assert_eq!(repo.get_value(PROGRESS_KEY).await.unwrap(), None);

    repo.put_value(PROGRESS_KEY, r#"{"p_frac_0":true}"#)
        .await
        .unwrap();
    repo.put_value(PROGRESS_KEY, r#"{"p_frac_0":true,"p_frac_1":false}"#)
        .await
        .unwrap();

    let stored = repo.get_value(PROGRESS_KEY).await.expect("fetch");
    assert_eq!(
        stored.as_deref(),
        Some(r#"{"p_frac_0":true,"p_frac_1":false}"#)
    );
}

#[tokio::test]
async fn sqlite_delete_removes_value() {
    let repo = SqliteRepository::open("sqlite:file:memdb_kv_delete?mode=memory&cache=shared")
        .await
        .expect("open");

    repo.put_value(PROGRESS_KEY, "{}").await.unwrap();
    repo.delete_value(PROGRESS_KEY).await.unwrap();
    repo.delete_value(PROGRESS_KEY).await.unwrap();
    assert_eq!(repo.get_value(PROGRESS_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn reopening_keeps_values() {
    let url = "sqlite:file:memdb_kv_reopen?mode=memory&cache=shared";
    let first = SqliteRepository::open(url).await.expect("first open");
    first.put_value("other", "kept").await.unwrap();

    // migrations run again on the second open and must not touch existing rows
    let second = SqliteRepository::open(url).await.expect("second open");
    assert_eq!(second.get_value("other").await.unwrap().as_deref(), Some("kept"));
}

#[tokio::test]
async fn open_creates_missing_file() {
    let path =
        std::env::temp_dir().join(format!("study_quest_open_{}.sqlite3", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let repo = SqliteRepository::open(&format!("sqlite://{}", path.display()))
        .await
        .expect("open");
    repo.put_value(PROGRESS_KEY, "{}").await.unwrap();
    assert!(path.exists());

    drop(repo);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn open_rejects_malformed_url() {
    let result = SqliteRepository::open("sqlite:file:memdb_kv_bad?mode=sideways").await;
    assert!(matches!(result, Err(SqliteInitError::InvalidUrl { .. })));
}

#[tokio::test]
async fn storage_sqlite_exposes_kv() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.put_value("k", "v").await.unwrap();
    assert_eq!(storage.kv.get_value("k").await.unwrap().as_deref(), Some("v"));
}
