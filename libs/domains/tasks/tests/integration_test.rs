//! Integration tests for the Tasks domain
//!
//! Repository and service against a real (in-memory) SQLite database.

use domain_tasks::*;
use test_utils::assertions::{assert_positive_id, assert_some};
use test_utils::{TestDataBuilder, TestDatabase};

async fn setup() -> (TestDatabase, TaskService<SqliteTaskRepository>) {
    let db = TestDatabase::new().await;
    let repo = SqliteTaskRepository::new(db.connection());
    repo.init_schema().await.unwrap();
    (db, TaskService::new(repo))
}

fn payload(builder: &TestDataBuilder, suffix: &str) -> TaskPayload {
    TaskPayload {
        title: builder.title(suffix),
        description: builder.description(suffix),
    }
}

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let db = TestDatabase::new().await;
    let repo = SqliteTaskRepository::new(db.connection());

    repo.init_schema().await.unwrap();
    repo.init_schema().await.unwrap();
}

#[tokio::test]
async fn test_create_then_fetch() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("create_then_fetch");

    let id = service
        .create(CreateTaskRequest {
            task: payload(&builder, "main"),
        })
        .await
        .unwrap();
    assert_positive_id(id, "create");

    let task = service.get_by_id(GetTaskRequest { id }).await.unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.title, builder.title("main"));
    assert_eq!(task.description, builder.description("main"));
    assert!(!task.completed);
    assert!(task.completed_on.is_none());
}

#[tokio::test]
async fn test_list_is_capped_and_ordered() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("list_capped");

    for i in 0..3 {
        service
            .create(CreateTaskRequest {
                task: payload(&builder, &i.to_string()),
            })
            .await
            .unwrap();
    }
    let tasks = service.list(ListTasksRequest { limit: 10 }).await.unwrap();
    assert_eq!(tasks.len(), 3);

    for i in 3..12 {
        service
            .create(CreateTaskRequest {
                task: payload(&builder, &i.to_string()),
            })
            .await
            .unwrap();
    }
    let tasks = service.list(ListTasksRequest { limit: 10 }).await.unwrap();
    assert_eq!(tasks.len(), 10);

    let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(tasks[0].title, builder.title("0"));
}

#[tokio::test]
async fn test_list_empty_table() {
    let (_db, service) = setup().await;

    let tasks = service.list(ListTasksRequest { limit: 10 }).await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_complete_sets_flag_and_timestamp() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("complete");

    let id = service
        .create(CreateTaskRequest {
            task: payload(&builder, "main"),
        })
        .await
        .unwrap();
    let before = service.get_by_id(GetTaskRequest { id }).await.unwrap();

    let completed = service
        .complete(CompleteTaskRequest { id })
        .await
        .unwrap();
    assert!(completed.completed);
    let completed_on = assert_some(completed.completed_on, "completed_on");
    assert!(completed_on >= before.created_on);

    let fetched = service.get_by_id(GetTaskRequest { id }).await.unwrap();
    assert!(fetched.completed);
    assert_eq!(fetched.created_on, before.created_on);
}

#[tokio::test]
async fn test_update_keeps_id_and_completion() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("update");

    let id = service
        .create(CreateTaskRequest {
            task: payload(&builder, "old"),
        })
        .await
        .unwrap();
    service
        .complete(CompleteTaskRequest { id })
        .await
        .unwrap();
    let before = service.get_by_id(GetTaskRequest { id }).await.unwrap();

    service
        .update(UpdateTaskRequest {
            id,
            task: payload(&builder, "new"),
        })
        .await
        .unwrap();

    let after = service.get_by_id(GetTaskRequest { id }).await.unwrap();
    assert_eq!(after.id, id);
    assert_eq!(after.title, builder.title("new"));
    assert_eq!(after.description, builder.description("new"));
    assert!(after.completed);
    assert_eq!(after.completed_on, before.completed_on);
    assert_eq!(after.created_on, before.created_on);
}

#[tokio::test]
async fn test_delete_then_fetch_is_not_found() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("delete");

    let id = service
        .create(CreateTaskRequest {
            task: payload(&builder, "main"),
        })
        .await
        .unwrap();
    service.delete(DeleteTaskRequest { id }).await.unwrap();

    let result = service.get_by_id(GetTaskRequest { id }).await;
    assert!(matches!(result, Err(TaskError::NotFound(found)) if found == id));

    let again = service.delete(DeleteTaskRequest { id }).await;
    assert!(matches!(again, Err(TaskError::NotFound(_))));
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("no_reuse");

    let first = service
        .create(CreateTaskRequest {
            task: payload(&builder, "a"),
        })
        .await
        .unwrap();
    service
        .delete(DeleteTaskRequest { id: first })
        .await
        .unwrap();

    let second = service
        .create(CreateTaskRequest {
            task: payload(&builder, "b"),
        })
        .await
        .unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("missing");

    for id in [1, 999, u64::MAX] {
        assert!(matches!(
            service.get_by_id(GetTaskRequest { id }).await,
            Err(TaskError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update(UpdateTaskRequest {
                    id,
                    task: payload(&builder, "x"),
                })
                .await,
            Err(TaskError::NotFound(_))
        ));
        assert!(matches!(
            service.complete(CompleteTaskRequest { id }).await,
            Err(TaskError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(DeleteTaskRequest { id }).await,
            Err(TaskError::NotFound(_))
        ));
    }
}

#[tokio::test]
async fn test_character_limits_round_trip() {
    let (_db, service) = setup().await;
    let builder = TestDataBuilder::from_test_name("limits");

    let task = TaskPayload {
        title: builder.text_of_len(255),
        description: builder.text_of_len(1024),
    };
    let id = service
        .create(CreateTaskRequest { task: task.clone() })
        .await
        .unwrap();

    let fetched = service.get_by_id(GetTaskRequest { id }).await.unwrap();
    assert_eq!(fetched.title, task.title);
    assert_eq!(fetched.description, task.description);
}
