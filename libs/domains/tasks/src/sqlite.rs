use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{NewTask, TaskChanges, TaskRecord},
    repository::TaskRepository,
};

/// SQLite-backed TaskRepository
///
/// Every write runs in its own transaction. Dropping the future before the
/// commit rolls the transaction back.
pub struct SqliteTaskRepository {
    db: DatabaseConnection,
}

impl SqliteTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the tasks table if it does not exist yet
    pub async fn init_schema(&self) -> TaskResult<()> {
        self.db.execute_unprepared(entity::CREATE_TABLE_SQL).await?;
        tracing::info!("Tasks schema ready");
        Ok(())
    }
}

/// SQLite rowids are signed; anything above `i64::MAX` cannot be stored.
fn row_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<u64> {
        let active_model = entity::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            created_on: Set(Utc::now()),
            completed: Set(false),
            completed_on: Set(None),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let inserted = entity::Entity::insert(active_model).exec(&txn).await?;
        txn.commit().await?;

        let id = u64::try_from(inserted.last_insert_id).map_err(|_| {
            TaskError::Internal(format!("insert returned id {}", inserted.last_insert_id))
        })?;
        tracing::info!(task_id = id, "Created task");
        Ok(id)
    }

    async fn get_by_id(&self, id: u64) -> TaskResult<Option<TaskRecord>> {
        let Some(row_id) = row_id(id) else {
            return Ok(None);
        };

        entity::Entity::find_by_id(row_id)
            .one(&self.db)
            .await?
            .map(TaskRecord::try_from)
            .transpose()
    }

    async fn list(&self, limit: u64) -> TaskResult<Vec<TaskRecord>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        models.into_iter().map(TaskRecord::try_from).collect()
    }

    async fn update(&self, id: u64, changes: TaskChanges) -> TaskResult<bool> {
        let Some(row_id) = row_id(id) else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel {
                title: Set(changes.title),
                description: Set(changes.description),
                ..Default::default()
            })
            .filter(entity::Column::Id.eq(row_id))
            .exec(&txn)
            .await?;
        txn.commit().await?;

        let updated = result.rows_affected > 0;
        if updated {
            tracing::info!(task_id = id, "Updated task");
        }
        Ok(updated)
    }

    async fn complete(&self, id: u64) -> TaskResult<bool> {
        let Some(row_id) = row_id(id) else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel {
                completed: Set(true),
                completed_on: Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(entity::Column::Id.eq(row_id))
            .exec(&txn)
            .await?;
        txn.commit().await?;

        let completed = result.rows_affected > 0;
        if completed {
            tracing::info!(task_id = id, "Completed task");
        }
        Ok(completed)
    }

    async fn delete(&self, id: u64) -> TaskResult<bool> {
        let Some(row_id) = row_id(id) else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;
        let result = entity::Entity::delete_by_id(row_id).exec(&txn).await?;
        txn.commit().await?;

        let deleted = result.rows_affected > 0;
        if deleted {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_rejects_out_of_range() {
        assert_eq!(row_id(1), Some(1));
        assert_eq!(row_id(i64::MAX as u64), Some(i64::MAX));
        assert_eq!(row_id(i64::MAX as u64 + 1), None);
        assert_eq!(row_id(u64::MAX), None);
    }
}
