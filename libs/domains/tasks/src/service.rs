use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{Task, TaskInfo, TaskStatus};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Owns the completion rule: `completed_at` is stamped when a task is marked
/// completed and cleared when it is reopened.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        info!("Get task by id");
        let task = self.repository.find_by_id(id).await?;

        match task {
            Some(_) => info!("Task found"),
            None => info!("Task not found"),
        }
        Ok(task)
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        info!(count = tasks.len(), "Get all tasks");
        Ok(tasks)
    }

    #[instrument(skip(self))]
    pub async fn find_all_by_completed(&self, completed: bool) -> TaskResult<Vec<Task>> {
        let tasks = self.repository.find_all_by_completed(completed).await?;
        info!(count = tasks.len(), "Get tasks by completion");
        Ok(tasks)
    }

    #[instrument(skip(self, info), fields(task_title = %info.title))]
    pub async fn create(&self, info: TaskInfo) -> TaskResult<Task> {
        let task = self.repository.save(Task::new(info)).await?;
        info!(task_id = ?task.id, "Task created");
        Ok(task)
    }

    /// Overwrite title and content; `None` if the task does not exist.
    #[instrument(skip(self, info), fields(task_id = %id))]
    pub async fn update(&self, info: TaskInfo, id: Uuid) -> TaskResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            info!("Task not found, nothing to update");
            return Ok(None);
        };

        task.apply_info(info);
        let task = self.repository.save(task).await?;
        info!("Task updated");
        Ok(Some(task))
    }

    /// Set the completion flag; `None` if the task does not exist.
    #[instrument(skip(self, status), fields(task_id = %id, completed = status.completed))]
    pub async fn update_status(&self, status: TaskStatus, id: Uuid) -> TaskResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            info!("Task not found, nothing to update");
            return Ok(None);
        };

        task.set_completed(status.completed, Utc::now());
        let task = self.repository.save(task).await?;
        info!("Task status updated");
        Ok(Some(task))
    }

    /// Delete by id; deleting a missing task is not an error.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete(&self, id: Uuid) -> TaskResult<()> {
        self.repository.delete_by_id(id).await?;
        info!("Task deleted");
        Ok(())
    }
}
