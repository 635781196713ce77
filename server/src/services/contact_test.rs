use super::*;
use crate::state::test_helpers::FailingStore;
use serde_json::json;

fn new_message(name: &str) -> NewContactMessage {
    NewContactMessage { name: name.to_owned(), email: format!("{name}@example.com"), message: "hi".to_owned() }
}

#[tokio::test]
async fn memory_store_assigns_sequential_ids_from_one() {
    let store = MemoryContactStore::new();
    let first = store.create(new_message("alice")).await.unwrap();
    let second = store.create(new_message("bob")).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn memory_store_lists_in_insertion_order() {
    let store = MemoryContactStore::new();
    store.create(new_message("zed")).await.unwrap();
    store.create(new_message("amy")).await.unwrap();
    let names: Vec<String> = store.list().await.unwrap().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["zed", "amy"]);
}

#[tokio::test]
async fn memory_store_starts_empty() {
    assert!(MemoryContactStore::new().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_store_stamps_rfc3339_created_at() {
    let store = MemoryContactStore::new();
    let stored = store.create(new_message("alice")).await.unwrap();
    assert!(OffsetDateTime::parse(&stored.created_at, &Rfc3339).is_ok(), "bad timestamp {}", stored.created_at);
}

#[tokio::test]
async fn submit_stores_valid_body() {
    let store = MemoryContactStore::new();
    let stored = submit(&store, &json!({"name": "Alice", "email": "a@example.com", "message": "hi"}))
        .await
        .unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(stored.name, "Alice");
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn submit_rejects_invalid_body_without_storing() {
    let store = MemoryContactStore::new();
    let err = submit(&store, &json!({"name": "", "email": "a@example.com", "message": "hi"}))
        .await
        .unwrap_err();
    match err {
        SubmitError::Invalid(errors) => assert_eq!(errors.fields(), vec!["name"]),
        SubmitError::Store(e) => panic!("unexpected store error: {e}"),
    }
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_surfaces_store_failure() {
    let err = submit(&FailingStore, &json!({"name": "A", "email": "b", "message": "c"}))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Store(StoreError::Database(_))));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn pg_store_round_trips_messages_in_order() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
    let pool = crate::db::init_pool(&url, 2).await.expect("pool");
    sqlx::query("TRUNCATE contact_messages RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("truncate");

    let store = PgContactStore::new(pool);
    let first = store.create(new_message("alice")).await.unwrap();
    let second = store.create(new_message("bob")).await.unwrap();
    assert!(second.id > first.id);

    let listed = store.list().await.unwrap();
    assert_eq!(listed, vec![first, second]);
}
