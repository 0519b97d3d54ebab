//! Handlers for the `/api/comments` resource.
//!
//! Comments are created and listed only; no update or delete route exists.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thoughts_core::error::CoreError;
use thoughts_core::types::DbId;
use thoughts_db::models::comment::{Comment, CreateComment};
use thoughts_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /api/comments`. The author comes from the session.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,
    pub post_id: DbId,
}

/// GET /api/comments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Comment>>> {
    let comments = CommentRepo::list(&state.pool).await?;
    Ok(Json(comments))
}

/// POST /api/comments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    // Resolve the parent post first so a dangling post_id reads as a domain
    // 404 rather than a foreign-key failure.
    PostRepo::find_by_id(&state.pool, input.post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "post",
            id: input.post_id,
        }))?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            comment_text: input.comment_text,
            post_id: input.post_id,
            user_id: auth.user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
