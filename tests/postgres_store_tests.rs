//! Postgres Store Tests
//!
//! Runs the repository SQL against a real database. `#[sqlx::test]` creates a
//! fresh database per test from `DATABASE_URL`.

use item_service::store::{ItemRepository, PostgresStore, StoreError};
use sqlx::PgPool;

// == Helper Functions ==

async fn store_with_schema(pool: PgPool) -> PostgresStore {
    let store = PostgresStore::new(pool);
    store.ensure_schema().await.expect("create items table");
    store
}

// == Schema Tests ==

#[sqlx::test(migrations = false)]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    let store = store_with_schema(pool.clone()).await;
    store.insert("pen", "blue pen").await.unwrap();

    store.ensure_schema().await.expect("second schema run");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// == Insert Tests ==

#[sqlx::test(migrations = false)]
async fn test_insert_returns_generated_id(pool: PgPool) {
    let store = store_with_schema(pool).await;

    let first = store.insert("pen", "blue pen").await.unwrap();
    let second = store.insert("marker", "black marker").await.unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.name, "pen");
    assert_eq!(first.description, "blue pen");

    let found = store.find(first.id).await.unwrap();
    assert_eq!(found, Some(first));
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_insert_is_duplicate(pool: PgPool) {
    let store = store_with_schema(pool).await;
    store.insert("pen", "blue pen").await.unwrap();

    let err = store.insert("pen", "red pen").await.unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { .. }), "got {:?}", err);
}

#[sqlx::test(migrations = false)]
async fn test_find_missing_id(pool: PgPool) {
    let store = store_with_schema(pool).await;

    assert_eq!(store.find(78).await.unwrap(), None);
}

// == Update Tests ==

#[sqlx::test(migrations = false)]
async fn test_update_returns_new_row(pool: PgPool) {
    let store = store_with_schema(pool).await;
    let item = store.insert("pen", "blue pen").await.unwrap();

    let updated = store
        .update(item.id, "inkpen", "blue ink pen")
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.name, "inkpen");
    assert_eq!(updated.description, "blue ink pen");
}

#[sqlx::test(migrations = false)]
async fn test_update_to_taken_name_is_duplicate(pool: PgPool) {
    let store = store_with_schema(pool).await;
    store.insert("pen", "blue pen").await.unwrap();
    let marker = store.insert("marker", "black marker").await.unwrap();

    let err = store
        .update(marker.id, "pen", "black marker")
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { .. }), "got {:?}", err);
}

#[sqlx::test(migrations = false)]
async fn test_update_missing_id(pool: PgPool) {
    let store = store_with_schema(pool).await;

    assert_eq!(store.update(78, "marker", "black marker").await.unwrap(), None);
}

// == Delete Tests ==

#[sqlx::test(migrations = false)]
async fn test_delete_reports_existence(pool: PgPool) {
    let store = store_with_schema(pool).await;
    let item = store.insert("pen", "blue pen").await.unwrap();

    assert!(store.delete(item.id).await.unwrap());
    assert!(!store.delete(item.id).await.unwrap());
    assert_eq!(store.find(item.id).await.unwrap(), None);
}

#[sqlx::test(migrations = false)]
async fn test_ping(pool: PgPool) {
    let store = PostgresStore::new(pool);

    assert!(store.ping().await.is_ok());
}
