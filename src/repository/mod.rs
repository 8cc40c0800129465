//! Repository traits, the only storage surface the core depends on.
//!
//! Handlers never touch a connection pool directly; they go through these
//! traits so the storage adapter stays swappable. `postgres` is the
//! production adapter, `memory` backs the integration tests.

pub mod memory;
pub mod postgres;

use crate::error::AppError;
use crate::models::{Task, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user. A username or email collision yields
    /// `AppError::Conflict`.
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError>;

    /// Looks up an account by username, the token subject claim.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Overwrites username and email; the password hash only when provided.
    /// Uniqueness conflicts yield `AppError::Conflict`.
    async fn update(
        &self,
        id: i32,
        username: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> Result<User, AppError>;

    /// Removes the account. Returns whether a record was deleted.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task for `owner_id` with status `Pending`.
    async fn insert(
        &self,
        owner_id: i32,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, AppError>;

    /// All tasks owned by `owner_id`, in insertion order.
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Task>, AppError>;

    /// Looks up a task by id, scoped to its owner. A task owned by someone
    /// else is indistinguishable from a missing one.
    async fn find_owned(&self, id: i32, owner_id: i32) -> Result<Option<Task>, AppError>;

    /// Saves a modified task back, refreshing `updated_at`.
    async fn update(&self, task: Task) -> Result<Task, AppError>;

    /// Deletes a task by id, scoped to its owner. Returns whether a record
    /// was deleted.
    async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<bool, AppError>;

    /// Deletes every task owned by `owner_id` (account-deletion cascade).
    /// Returns the number of tasks removed.
    async fn delete_by_owner(&self, owner_id: i32) -> Result<u64, AppError>;
}
