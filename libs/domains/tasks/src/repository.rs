use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::Task;

/// Repository trait for Task persistence
///
/// Lookups that miss return `None` or an empty list, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// All tasks, in store order
    async fn find_all(&self) -> TaskResult<Vec<Task>>;

    async fn find_all_by_completed(&self, completed: bool) -> TaskResult<Vec<Task>>;

    /// Insert when `task.id` is `None`, otherwise update the row with that id.
    ///
    /// Returns the persisted row including store-assigned fields.
    async fn save(&self, task: Task) -> TaskResult<Task>;

    /// Remove the row if present; a missing id is not an error.
    async fn delete_by_id(&self, id: Uuid) -> TaskResult<()>;
}
