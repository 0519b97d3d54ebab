//! Handlers for the session-guarded dashboard pages.
//!
//! All routes here use [`PageAuth`], which redirects anonymous visitors to
//! `/login` instead of returning a 401 body.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use thoughts_core::error::CoreError;
use thoughts_core::types::DbId;
use thoughts_db::models::post::PostDetail;
use thoughts_db::models::user::UserResponse;
use thoughts_db::repositories::{PostRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::PageAuth;
use crate::state::AppState;

/// View model for the dashboard: the session user's own posts.
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub posts: Vec<PostDetail>,
    pub logged_in: bool,
}

/// View model for the edit-post form.
#[derive(Debug, Serialize)]
pub struct EditPostPage {
    pub post: PostDetail,
    pub logged_in: bool,
}

/// View model for the edit-profile form.
#[derive(Debug, Serialize)]
pub struct EditUserPage {
    pub user: UserResponse,
    pub logged_in: bool,
}

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    PageAuth(auth): PageAuth,
) -> AppResult<Json<DashboardPage>> {
    let posts = PostRepo::feed_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DashboardPage {
        posts,
        logged_in: true,
    }))
}

/// GET /dashboard/edit/{id}
pub async fn edit_post(
    State(state): State<AppState>,
    PageAuth(_auth): PageAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<EditPostPage>> {
    let post = PostRepo::detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;

    Ok(Json(EditPostPage {
        post,
        logged_in: true,
    }))
}

/// GET /dashboard/edituser
///
/// The session user's own profile, password excluded.
pub async fn edit_user(
    State(state): State<AppState>,
    PageAuth(auth): PageAuth,
) -> AppResult<Json<EditUserPage>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: auth.user_id,
        }))?;

    Ok(Json(EditUserPage {
        user: user.into(),
        logged_in: true,
    }))
}
