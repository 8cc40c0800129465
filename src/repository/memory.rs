//! In-memory adapter for the repository traits.
//!
//! Vec-backed so listing preserves insertion order. Used by the integration
//! tests, which exercise the full HTTP surface without a database.

use crate::error::AppError;
use crate::models::{Task, TaskStatus, User};
use crate::repository::{TaskRepository, UserRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let mut users = lock(&self.users);
        if users.iter().any(|u| u.username == username || u.email == email) {
            return Err(AppError::Conflict("Resource already exists".into()));
        }
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users)
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update(
        &self,
        id: i32,
        username: &str,
        email: &str,
        password_hash: Option<&str>,
    ) -> Result<User, AppError> {
        let mut users = lock(&self.users);
        if users
            .iter()
            .any(|u| u.id != id && (u.username == username || u.email == email))
        {
            return Err(AppError::Conflict("Resource already exists".into()));
        }
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        user.username = username.to_string();
        user.email = email.to_string();
        if let Some(hash) = password_hash {
            user.password_hash = hash.to_string();
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut users = lock(&self.users);
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

pub struct MemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicI32,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Total number of stored tasks, across all owners.
    pub fn count(&self) -> usize {
        lock(&self.tasks).len()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn insert(
        &self,
        owner_id: i32,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, AppError> {
        let now = Utc::now();
        let task = Task {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: title.to_string(),
            description: description.map(str::to_string),
            status: TaskStatus::Pending,
            user_id: owner_id,
            created_at: now,
            updated_at: now,
        };
        lock(&self.tasks).push(task.clone());
        Ok(task)
    }

    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Task>, AppError> {
        Ok(lock(&self.tasks)
            .iter()
            .filter(|t| t.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_owned(&self, id: i32, owner_id: i32) -> Result<Option<Task>, AppError> {
        Ok(lock(&self.tasks)
            .iter()
            .find(|t| t.id == id && t.user_id == owner_id)
            .cloned())
    }

    async fn update(&self, mut task: Task) -> Result<Task, AppError> {
        let mut tasks = lock(&self.tasks);
        let stored = tasks
            .iter_mut()
            .find(|t| t.id == task.id && t.user_id == task.user_id)
            .ok_or_else(|| AppError::NotFound("Task not found".into()))?;
        task.updated_at = Utc::now();
        *stored = task.clone();
        Ok(task)
    }

    async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<bool, AppError> {
        let mut tasks = lock(&self.tasks);
        let before = tasks.len();
        tasks.retain(|t| !(t.id == id && t.user_id == owner_id));
        Ok(tasks.len() < before)
    }

    async fn delete_by_owner(&self, owner_id: i32) -> Result<u64, AppError> {
        let mut tasks = lock(&self.tasks);
        let before = tasks.len();
        tasks.retain(|t| t.user_id != owner_id);
        Ok((before - tasks.len()) as u64)
    }
}
