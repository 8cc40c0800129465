use crate::{
    auth::CurrentUser,
    error::AppError,
    models::{StatusUpdate, TaskInput, TaskUpdate},
    state::AppState,
    validation::{normalize_description, normalize_title},
};
use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};

/// Task ids are positive serials; anything else is rejected before the
/// repository is consulted.
fn require_valid_id(id: i32) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::ValidationError(
            "Task id must be a positive integer".into(),
        ));
    }
    Ok(())
}

/// Lists the authenticated user's tasks, in insertion order.
#[get("")]
pub async fn list_tasks(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let tasks = state.tasks.find_by_owner(user.0.id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task owned by the authenticated user.
///
/// Title and description are trimmed and validated; status starts as
/// `Pending`.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    user: CurrentUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task_data = task_data.into_inner();
    let title = normalize_title(&task_data.title)?;
    let description = normalize_description(task_data.description)?;

    let task = state
        .tasks
        .insert(user.0.id, &title, description.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Fetches one of the authenticated user's tasks.
///
/// A task owned by another user responds exactly like a missing one, so
/// existence never leaks to non-owners.
#[get("/{id}")]
pub async fn get_task(
    state: web::Data<AppState>,
    user: CurrentUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();
    require_valid_id(task_id)?;

    let task = state
        .tasks
        .find_owned(task_id, user.0.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(task))
}

/// Updates one of the authenticated user's tasks.
///
/// Only the provided fields are overwritten; each is validated
/// individually. Status changes are unrestricted within the enum;
/// reopening a completed task is allowed.
#[put("/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    user: CurrentUser,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();
    require_valid_id(task_id)?;
    let task_data = task_data.into_inner();

    let mut task = state
        .tasks
        .find_owned(task_id, user.0.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    if let Some(title) = task_data.title {
        task.title = normalize_title(&title)?;
    }
    if let Some(description) = task_data.description {
        task.description = normalize_description(Some(description))?;
    }
    if let Some(status) = task_data.status {
        task.status = status;
    }

    let task = state.tasks.update(task).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Sets the status of one of the authenticated user's tasks.
///
/// The body is the closed status enum; an unknown label never reaches this
/// handler (it fails JSON deserialization as a malformed request).
#[patch("/{id}/status")]
pub async fn update_status(
    state: web::Data<AppState>,
    user: CurrentUser,
    task_id: web::Path<i32>,
    status_data: web::Json<StatusUpdate>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();
    require_valid_id(task_id)?;

    let mut task = state
        .tasks
        .find_owned(task_id, user.0.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    task.status = status_data.status;
    let task = state.tasks.update(task).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes one of the authenticated user's tasks.
#[delete("/{id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    user: CurrentUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();
    require_valid_id(task_id)?;

    let deleted = state.tasks.delete_owned(task_id, user.0.id).await?;
    if !deleted {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}
