//! Tests for TodoManager workflows

use chrono::{Duration, TimeZone, Utc};
use todo_core::{DomainError, Todo, TodoId, TodoStatus};
use todo_manager::{TodoError, TodoManager};
use todo_storage::{InMemoryTodoRepository, StorageError, TodoRepository};

fn manager() -> TodoManager<InMemoryTodoRepository> {
    TodoManager::new(InMemoryTodoRepository::new())
}

#[tokio::test]
async fn test_full_todo_lifecycle() {
    let manager = manager();

    let added = manager
        .add_todo("Write report", "quarterly numbers")
        .await
        .expect("add");
    assert!(added.is_pending());
    assert_eq!(added.created_at(), added.updated_at());

    let listed = manager.list_todos().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), added.id());

    let completed = manager.complete_todo(added.id()).await.expect("complete");
    assert!(completed.is_completed());
    assert!(completed.updated_at() >= added.updated_at());

    let fetched = manager
        .get_todo(added.id())
        .await
        .expect("get")
        .expect("present");
    assert_eq!(fetched, completed);

    let reopened = manager
        .uncomplete_todo(added.id())
        .await
        .expect("uncomplete");
    assert!(reopened.is_pending());

    manager.remove_todo(added.id()).await.expect("remove");
    assert!(manager.list_todos().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_rename_unblocks_blank_todo() {
    let manager = manager();

    let added = manager.add_todo("  ", "no title yet").await.expect("add");
    assert_eq!(added.title(), "");

    let err = manager.complete_todo(added.id()).await.unwrap_err();
    assert!(matches!(
        err,
        TodoError::Domain(DomainError::RuleViolation(_))
    ));

    let renamed = manager
        .rename_todo(added.id(), "File expenses")
        .await
        .expect("rename");
    assert_eq!(renamed.title(), "File expenses");

    let completed = manager.complete_todo(added.id()).await.expect("complete");
    assert!(completed.is_completed());
}

#[tokio::test]
async fn test_uncomplete_pending_is_rejected() {
    let manager = manager();
    let added = manager.add_todo("Water plants", "").await.expect("add");

    let err = manager.uncomplete_todo(added.id()).await.unwrap_err();

    assert!(matches!(
        err,
        TodoError::Domain(DomainError::RuleViolation(_))
    ));
    let fetched = manager
        .get_todo(added.id())
        .await
        .expect("get")
        .expect("present");
    assert!(fetched.is_pending());
}

#[tokio::test]
async fn test_rename_rejects_blank_title_without_changes() {
    let manager = manager();
    let added = manager.add_todo("Water plants", "").await.expect("add");

    let err = manager.rename_todo(added.id(), "   ").await.unwrap_err();

    assert!(matches!(err, TodoError::Domain(DomainError::Validation(_))));
    let fetched = manager
        .get_todo(added.id())
        .await
        .expect("get")
        .expect("present");
    assert_eq!(fetched, added);
}

#[tokio::test]
async fn test_missing_ids_surface_not_found() {
    let manager = manager();
    let ghost = TodoId::new("ghost");

    let err = manager.rename_todo(&ghost, "anything").await.unwrap_err();
    assert!(matches!(
        err,
        TodoError::Storage(StorageError::NotFound(_))
    ));

    let err = manager.remove_todo(&ghost).await.unwrap_err();
    assert!(matches!(
        err,
        TodoError::Storage(StorageError::NotFound(_))
    ));

    assert!(manager.get_todo(&ghost).await.expect("get").is_none());
}

#[tokio::test]
async fn test_list_todos_newest_first() {
    let manager = manager();
    let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    let t1 = t0 + Duration::hours(1);

    let older = Todo::from_parts(TodoId::new("older"), "Older", "", TodoStatus::Pending, t0, t0);
    let newer = Todo::from_parts(TodoId::new("newer"), "Newer", "", TodoStatus::Pending, t1, t1);
    manager.repository().create(older).await.expect("seed");
    manager.repository().create(newer).await.expect("seed");

    let listed = manager.list_todos().await.expect("list");

    let ids: Vec<&str> = listed.iter().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_update_description_can_be_cleared() {
    let manager = manager();
    let added = manager
        .add_todo("Pack bags", "warm clothes")
        .await
        .expect("add");

    let updated = manager
        .update_description(added.id(), "  beach gear  ")
        .await
        .expect("update");
    assert_eq!(updated.description(), "beach gear");

    let cleared = manager
        .update_description(added.id(), "")
        .await
        .expect("update");
    assert_eq!(cleared.description(), "");
}

#[tokio::test]
async fn test_fetched_clones_are_snapshots() {
    let manager = manager();
    let added = manager.add_todo("Read book", "").await.expect("add");

    let snapshot = manager
        .get_todo(added.id())
        .await
        .expect("get")
        .expect("present");

    manager.complete_todo(added.id()).await.expect("complete");

    // The earlier clone does not see the write; a re-fetch does
    assert!(snapshot.is_pending());
    let refetched = manager
        .get_todo(added.id())
        .await
        .expect("get")
        .expect("present");
    assert!(refetched.is_completed());
}
