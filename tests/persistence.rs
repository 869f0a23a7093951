use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use financas::dashboard::HistoryMode;
use financas::model::{Entry, UserRecord};
use financas::store::{connection, migrate, record_key, LocalStore, Persistence, RemoteStore};

async fn file_backed_remote(dir: &std::path::Path) -> RemoteStore {
    let db_url = format!("sqlite://{}/records.db", dir.display());
    let pool = connection::get_db_pool(&db_url).await.expect("open pool");
    migrate::run_migrations(&pool).await.expect("run migrations");
    RemoteStore::new(pool)
}

fn sample_record(user_id: &str) -> UserRecord {
    let mut record = UserRecord::for_user(user_id);
    record.incomes.push(Entry::new(
        "salary".into(),
        Decimal::new(100000, 2),
        "Salary".into(),
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
    ));
    record.expenses.push(Entry::new(
        "rent".into(),
        Decimal::new(40000, 2),
        "Housing".into(),
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
    ));
    record
}

#[tokio::test]
async fn dual_write_leaves_identical_copies_in_both_stores() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalStore::open(dir.path()).unwrap();
    let remote = file_backed_remote(dir.path()).await;
    let store = Persistence::new(Some(remote.clone()), local.clone(), HistoryMode::Frozen);

    let mut record = sample_record("u-1");
    store.save(&mut record).await.unwrap();

    let remote_copy = remote.load("u-1").await.unwrap().expect("remote copy");
    let local_copy: UserRecord = local.get(&record_key("u-1")).expect("local copy");
    assert_eq!(remote_copy, record);
    assert_eq!(local_copy, record);
}

#[tokio::test]
async fn load_prefers_the_remote_copy() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalStore::open(dir.path()).unwrap();
    let remote = file_backed_remote(dir.path()).await;

    // remote and local disagree; remote wins on load
    let remote_version = sample_record("u-2");
    remote.save(&remote_version).await.unwrap();

    let mut stale = UserRecord::for_user("u-2");
    stale.settings.theme = "dark".into();
    local.set(&record_key("u-2"), &stale).unwrap();

    let store = Persistence::new(Some(remote), local, HistoryMode::Frozen);
    assert_eq!(store.load("u-2").await, remote_version);
}

#[tokio::test]
async fn load_falls_back_to_local_without_a_remote() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalStore::open(dir.path()).unwrap();

    let record = sample_record("u-3");
    local.set(&record_key("u-3"), &record).unwrap();

    let store = Persistence::new(None, local, HistoryMode::Frozen);
    assert_eq!(store.load("u-3").await, record);
}

#[tokio::test]
async fn total_absence_synthesizes_a_default_record() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalStore::open(dir.path()).unwrap();
    let store = Persistence::new(None, local, HistoryMode::Frozen);

    let record = store.load("nobody").await;
    assert_eq!(record.user_id, "nobody");
    assert!(record.incomes.is_empty());
    assert!(!record.categories.is_empty(), "default categories missing");
}

#[tokio::test]
async fn malformed_local_record_degrades_to_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalStore::open(dir.path()).unwrap();
    std::fs::write(
        dir.path().join(format!("{}.json", record_key("u-4"))),
        "{definitely not json",
    )
    .unwrap();

    let store = Persistence::new(None, local, HistoryMode::Frozen);
    let record = store.load("u-4").await;
    assert_eq!(record.user_id, "u-4");
    assert!(record.expenses.is_empty());
}

#[tokio::test]
async fn merge_patch_touches_only_the_patched_keys() {
    let dir = tempfile::tempdir().unwrap();
    let remote = file_backed_remote(dir.path()).await;

    let record = sample_record("u-5");
    remote.save(&record).await.unwrap();

    remote
        .merge("u-5", &json!({"settings": {"theme": "dark"}}))
        .await
        .unwrap();

    let merged = remote.load("u-5").await.unwrap().expect("merged record");
    assert_eq!(merged.settings.theme, "dark");
    assert_eq!(merged.settings.currency, record.settings.currency);
    assert_eq!(merged.incomes, record.incomes);
}

#[tokio::test]
async fn merge_patch_creates_a_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let remote = file_backed_remote(dir.path()).await;

    remote
        .merge("u-6", &json!({"settings": {"theme": "dark", "currency": "EUR"}}))
        .await
        .unwrap();

    let created = remote.load("u-6").await.unwrap().expect("created record");
    assert_eq!(created.user_id, "u-6");
    assert_eq!(created.settings.currency, "EUR");
}

#[tokio::test]
async fn tracked_history_gains_at_most_one_point_per_day() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalStore::open(dir.path()).unwrap();
    let store = Persistence::new(None, local, HistoryMode::Tracked);

    let mut record = sample_record("u-7");
    store.save(&mut record).await.unwrap();
    store.save(&mut record).await.unwrap();

    assert_eq!(record.history.len(), 1);
    let reloaded = store.load("u-7").await;
    assert_eq!(reloaded.history, record.history);
}

#[tokio::test]
async fn remote_failure_still_writes_the_local_backup() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalStore::open(dir.path()).unwrap();

    // a pool over a closed database: every remote call fails
    let db_url = format!("sqlite://{}/gone.db", dir.path().display());
    let pool = connection::get_db_pool(&db_url).await.unwrap();
    migrate::run_migrations(&pool).await.unwrap();
    let remote = RemoteStore::new(pool.clone());
    pool.close().await;

    let store = Persistence::new(Some(remote), local.clone(), HistoryMode::Frozen);
    let mut record = sample_record("u-8");
    store.save(&mut record).await.unwrap();

    let local_copy: UserRecord = local.get(&record_key("u-8")).expect("local backup");
    assert_eq!(local_copy, record);

    // and the next load falls through the failing remote to that backup
    assert_eq!(store.load("u-8").await, record);
}
