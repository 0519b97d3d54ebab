//! Handlers for the `/api/posts` resource.
//!
//! Update and delete require a session but deliberately do not check that
//! the session user owns the post; see DESIGN.md for the decision record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thoughts_core::error::CoreError;
use thoughts_core::types::DbId;
use thoughts_db::models::post::{CreatePost, Post, PostDetail, UpdatePost};
use thoughts_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /api/posts`. The owner comes from the session,
/// never from the payload.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub post_text: String,
}

/// Request body for `PUT /api/posts/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub post_text: Option<String>,
}

/// GET /api/posts
///
/// All posts with authors and comments, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PostDetail>>> {
    let posts = PostRepo::feed(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostDetail>> {
    let post = PostRepo::detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;
    Ok(Json(post))
}

/// POST /api/posts
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let post = PostRepo::create(
        &state.pool,
        &CreatePost {
            title: input.title,
            post_text: input.post_text,
            user_id: auth.user_id,
        },
    )
    .await?;

    tracing::info!(post_id = post.id, user_id = auth.user_id, "created post");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePostRequest>,
) -> AppResult<Json<Post>> {
    let post = PostRepo::update(
        &state.pool,
        id,
        &UpdatePost {
            title: input.title,
            post_text: input.post_text,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;

    Ok(Json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PostRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "post", id }))
    }
}
