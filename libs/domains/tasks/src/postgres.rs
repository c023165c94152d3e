use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{entity, error::TaskResult, models::Task, repository::TaskRepository};

/// [`TaskRepository`] backed by the `tasks` table
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_all_by_completed(&self, completed: bool) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Completed.eq(completed))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, task: Task) -> TaskResult<Task> {
        let is_new = task.id.is_none();
        let active_model: entity::ActiveModel = task.into();

        let model = if is_new {
            active_model.insert(&self.db).await?
        } else {
            active_model.update(&self.db).await?
        };

        tracing::debug!(task_id = %model.id, inserted = is_new, "Saved task");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> TaskResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(task_id = %id, rows_affected = result.rows_affected, "Deleted task");
        Ok(())
    }
}
