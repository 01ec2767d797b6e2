use storage::repository::{ProgressRepository, SettingsRepository};
use storage::sqlite::SqliteRepository;
use tracker_core::model::{ThemePreference, TopicKey};
use tracker_core::time::fixed_now;

fn key(raw: &str) -> TopicKey {
    raw.parse().expect("valid topic key")
}

#[tokio::test]
async fn sqlite_roundtrip_persists_completion() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set_completed(&key("physics_c0_t0"), true, fixed_now())
        .await
        .unwrap();
    repo.set_completed(&key("math_c2_t1"), true, fixed_now())
        .await
        .unwrap();

    assert!(repo.is_completed(&key("physics_c0_t0")).await.unwrap());
    assert!(!repo.is_completed(&key("physics_c0_t1")).await.unwrap());

    // Unchecking upserts the same row rather than inserting a second one.
    repo.set_completed(&key("physics_c0_t0"), false, fixed_now())
        .await
        .unwrap();
    assert!(!repo.is_completed(&key("physics_c0_t0")).await.unwrap());

    let records = repo.list_records().await.expect("list");
    assert_eq!(records.len(), 2);
    let physics = records
        .iter()
        .find(|r| r.key == key("physics_c0_t0"))
        .unwrap();
    assert!(!physics.completed);
    assert_eq!(physics.updated_at, fixed_now());
    let math = records.iter().find(|r| r.key == key("math_c2_t1")).unwrap();
    assert!(math.completed);
}

#[tokio::test]
async fn sqlite_keeps_records_for_unknown_keys() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_orphans?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    // A key no current syllabus references is still stored and listed;
    // whether it counts is the caller's decision.
    repo.set_completed(&key("biology_c9_t9"), true, fixed_now())
        .await
        .unwrap();

    let records = repo.list_records().await.expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, key("biology_c9_t9"));
    assert!(records[0].completed);
}

#[tokio::test]
async fn sqlite_theme_roundtrip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_theme?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_theme().await.unwrap(), None);

    repo.save_theme(ThemePreference::Dark).await.unwrap();
    assert_eq!(repo.get_theme().await.unwrap(), Some(ThemePreference::Dark));

    repo.save_theme(ThemePreference::Light).await.unwrap();
    assert_eq!(
        repo.get_theme().await.unwrap(),
        Some(ThemePreference::Light)
    );
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate_twice?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.set_completed(&key("physics_c0_t0"), true, fixed_now())
        .await
        .unwrap();
    assert!(repo.is_completed(&key("physics_c0_t0")).await.unwrap());
}
