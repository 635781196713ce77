use super::*;
use contact::NewContactMessage;

fn sample() -> NewContactMessage {
    NewContactMessage { name: "Alice".into(), email: "a@example.com".into(), message: "hi".into() }
}

#[tokio::test]
async fn in_memory_state_starts_empty() {
    let state = AppState::in_memory();
    assert!(state.contacts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn cloned_state_shares_one_store() {
    let state = AppState::in_memory();
    let clone = state.clone();
    clone.contacts.create(sample()).await.unwrap();
    assert_eq!(state.contacts.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failing_state_reports_store_errors() {
    let state = test_helpers::failing_app_state();
    assert!(state.contacts.list().await.is_err());
    assert!(state.contacts.create(sample()).await.is_err());
}
