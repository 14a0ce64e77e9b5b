//! User handlers.
//!
//! When a database is configured every endpoint runs exactly one statement
//! against the shared pool; without one, `/users` answers from the seeded
//! fallback list and the database-only endpoints answer 503.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::AppError;
use crate::response::IndentedJson;
use crate::storage::{seed, Database};
use crate::types::User;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    id: Option<String>,
}

fn require_db(state: &AppState) -> Result<&Database, AppError> {
    state.db.as_deref().ok_or(AppError::NoDatabase)
}

/// All users: the table contents when a database is configured, the seeded
/// fallback list otherwise.
pub async fn list(State(state): State<AppState>) -> Result<IndentedJson<Vec<User>>, AppError> {
    match &state.db {
        Some(db) => Ok(IndentedJson(db.list_users().await?)),
        None => Ok(IndentedJson(state.fallback_users.as_ref().clone())),
    }
}

/// One user by id, from the `id` query parameter.
pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<IndentedJson<User>, AppError> {
    let db = require_db(&state)?;
    let id = query
        .id
        .ok_or_else(|| AppError::BadRequest("missing id parameter".to_string()))?;

    let user = db.get_user(&id).await?.ok_or(AppError::NotFound)?;
    Ok(IndentedJson(user))
}

/// Inserts the hard-coded test user and responds with the full
/// post-mutation user list.
pub async fn add(State(state): State<AppState>) -> Result<IndentedJson<Vec<User>>, AppError> {
    let db = require_db(&state)?;

    let id = db.add_user(&seed::test_user()).await?;
    tracing::info!("Inserted test user with id {}", id);

    Ok(IndentedJson(db.list_users().await?))
}

/// Deletes by id and responds with the full post-mutation user list. A
/// non-existent id still runs the statement (zero rows) and is not an
/// error.
pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<IndentedJson<Vec<User>>, AppError> {
    let db = require_db(&state)?;
    let id = query
        .id
        .ok_or_else(|| AppError::BadRequest("missing id parameter".to_string()))?;

    let affected = db.delete_user(&id).await?;
    tracing::info!("Deleted user id {} ({} rows)", id, affected);

    Ok(IndentedJson(db.list_users().await?))
}

/// Decodes a user from the JSON body and echoes a formatted sentence.
pub async fn decode(Json(user): Json<User>) -> String {
    format!(
        "{} {} is {} years old!",
        user.firstname, user.lastname, user.age
    )
}
