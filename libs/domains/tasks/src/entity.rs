use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::models::Task;

/// Row of the `tasks` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub completed: bool,
    pub completed_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            content: model.content,
            completed: model.completed,
            completed_at: model.completed_at.map(Into::into),
            created_at: Some(model.created_at.into()),
            modified_at: Some(model.modified_at.into()),
        }
    }
}

// Timestamps stay NotSet: the column defaults fill them on insert and the
// update trigger maintains modified_at.
impl From<Task> for ActiveModel {
    fn from(task: Task) -> Self {
        ActiveModel {
            id: task.id.map_or(NotSet, Unchanged),
            title: Set(task.title),
            content: Set(task.content),
            completed: Set(task.completed),
            completed_at: Set(task.completed_at.map(Into::into)),
            created_at: NotSet,
            modified_at: NotSet,
        }
    }
}
