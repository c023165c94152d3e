use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// A task as stored and as returned by the API.
///
/// `id`, `created_at` and `modified_at` are assigned by the store and are
/// `None` only on a task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Option<Uuid>,
    #[schema(example = "Title")]
    pub title: String,
    #[schema(example = "Content")]
    pub content: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Unsaved, not-completed task built from client input
    pub fn new(info: TaskInfo) -> Self {
        Self {
            id: None,
            title: info.title,
            content: info.content,
            completed: false,
            completed_at: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Replace title and content; completion state is left alone.
    pub fn apply_info(&mut self, info: TaskInfo) {
        self.title = info.title;
        self.content = info.content;
    }

    /// Set the completion flag, keeping `completed_at` present exactly when
    /// the task is completed.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = completed.then_some(now);
    }
}

/// Title and content supplied on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskInfo {
    #[schema(example = "Title")]
    pub title: String,
    #[schema(example = "Content")]
    pub content: String,
}

/// Body of a status update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskStatus {
    pub completed: bool,
}

/// Query filters for listing tasks
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskFilter {
    /// Only tasks whose completion flag equals this value.
    /// Accepts `true/false`, `yes/no`, `on/off` and `1/0`; an empty value
    /// means no filter.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub completed: Option<bool>,
}

fn parse_flag(raw: &str) -> Result<Option<bool>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(Some(true)),
        "false" | "no" | "off" | "0" => Ok(Some(false)),
        _ => Err(format!("invalid boolean value '{}'", value)),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_flag(&raw).map_err(de::Error::custom),
        None => Ok(None),
    }
}
