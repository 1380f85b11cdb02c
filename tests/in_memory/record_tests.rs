//! In-memory integration tests for task record lifecycle operations.

use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use taskbook::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{AuthorId, TaskDomainError, TaskId},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskRecordError, TaskRecordService, UpdateTaskRequest},
};

use super::helpers::{TestService, create_record, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_record_lifecycle(service: TestService) {
    let author = AuthorId::new();
    let created = create_record(&service, author, "Prepare the launch checklist")
        .await
        .expect("task creation should succeed");
    assert!(!created.is_done());
    assert_eq!(created.created_at(), created.updated_at());

    let fetched = service
        .fetch(created.id())
        .await
        .expect("fetch after create should succeed");
    assert_eq!(fetched, created);

    let updated = service
        .update(UpdateTaskRequest::new(created.id(), author, true))
        .await
        .expect("author update should succeed");
    assert!(updated.is_done());
    assert!(updated.updated_at() >= created.updated_at());

    let reopened = service
        .update(UpdateTaskRequest::new(created.id(), author, false))
        .await
        .expect("author reopen should succeed");
    assert!(!reopened.is_done());
    assert!(reopened.updated_at() >= updated.updated_at());

    let closed = service
        .close(created.id(), author)
        .await
        .expect("close should succeed");
    assert!(closed.is_done());

    let last = service
        .fetch(created.id())
        .await
        .expect("closed record should remain fetchable");
    assert_eq!(last, closed);
    assert_eq!(last.text(), created.text());
    assert_eq!(last.author(), author);
    assert_eq!(last.created_at(), created.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unauthorized_update_leaves_the_record_intact(service: TestService) {
    let author = AuthorId::new();
    let intruder = AuthorId::new();
    let created = create_record(&service, author, "Rotate the signing keys")
        .await
        .expect("task creation should succeed");

    let result = service
        .update(UpdateTaskRequest::new(created.id(), intruder, true))
        .await;

    assert!(matches!(
        result,
        Err(TaskRecordError::Domain(TaskDomainError::NotTaskAuthor { task_id, caller }))
            if task_id == created.id() && caller == intruder
    ));
    let stored = service
        .fetch(created.id())
        .await
        .expect("record should remain fetchable");
    assert_eq!(stored, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifier_collision_is_reported_without_overwrite(service: TestService) {
    let task_id = TaskId::new();
    let author = AuthorId::new();
    service
        .create(CreateTaskRequest::new(task_id, author, "Keep me"))
        .await
        .expect("first creation should succeed");

    let result = service
        .create(CreateTaskRequest::new(
            task_id,
            AuthorId::new(),
            "Try to replace",
        ))
        .await;

    assert!(matches!(
        result,
        Err(TaskRecordError::Repository(
            TaskRepositoryError::IdentifierTaken(id)
        )) if id == task_id
    ));
    let stored = service
        .fetch(task_id)
        .await
        .expect("original record should survive the collision");
    assert_eq!(stored.text().as_str(), "Keep me");
    assert_eq!(stored.author(), author);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_records_report_unknown_task(service: TestService) {
    let task_id = TaskId::new();

    let fetch_result = service.fetch(task_id).await;
    let update_result = service
        .update(UpdateTaskRequest::new(task_id, AuthorId::new(), true))
        .await;

    assert!(matches!(
        fetch_result,
        Err(TaskRecordError::UnknownTask(id)) if id == task_id
    ));
    assert!(matches!(
        update_result,
        Err(TaskRecordError::UnknownTask(id)) if id == task_id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shared_repository_is_visible_across_service_clones() {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let writer = TaskRecordService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let reader = writer.clone();

    let author = AuthorId::new();
    let created = create_record(&writer, author, "Written through one handle")
        .await
        .expect("task creation should succeed");

    let fetched = reader
        .fetch(created.id())
        .await
        .expect("record should be visible through the cloned service");
    assert_eq!(fetched, created);
}
