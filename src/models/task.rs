use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
///
/// All three values are freely settable from any state; the enum itself is
/// the only constraint (an unknown label fails at deserialization).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is yet to be started. Initial state on creation.
    #[default]
    Pending,
    /// Task is currently being worked on.
    InProgress,
    /// Task is done.
    Completed,
}

/// A task entity as stored by the repository and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Identifier of the owning user. Every task has exactly one owner.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task. Title and description are normalized by the
/// validators before persistence; status always starts as `Pending`.
#[derive(Debug, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
}

/// Partial update: only the provided fields are overwritten.
#[derive(Debug, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Body of the status-update operation.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: TaskStatus,
}
