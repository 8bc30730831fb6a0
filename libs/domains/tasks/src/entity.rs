use sea_orm::entity::prelude::*;

use crate::error::TaskError;
use crate::models::TaskRecord;

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_on: DateTimeUtc,
    pub completed: bool,
    pub completed_on: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Idempotent DDL for the table above. `AUTOINCREMENT` keeps ids of deleted
/// rows from being handed out again.
pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    title        VARCHAR(255)  NOT NULL,
    description  VARCHAR(1024) NOT NULL,
    created_on   TIMESTAMP     NOT NULL,
    completed    BOOLEAN       NOT NULL DEFAULT 0,
    completed_on TIMESTAMP     NULL
)";

impl TryFrom<Model> for TaskRecord {
    type Error = TaskError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = u64::try_from(model.id)
            .map_err(|_| TaskError::Internal(format!("stored task id {} is negative", model.id)))?;

        Ok(Self {
            id,
            title: model.title,
            description: model.description,
            created_on: model.created_on,
            completed: model.completed,
            completed_on: model.completed_on,
        })
    }
}
