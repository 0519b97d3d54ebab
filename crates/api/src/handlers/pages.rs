//! Handlers for the public page routes.
//!
//! Template rendering is out of scope; each page route returns the composed
//! view model as JSON, shaped the way a template layer would consume it.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use thoughts_core::error::CoreError;
use thoughts_core::types::DbId;
use thoughts_db::models::post::PostDetail;
use thoughts_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// View model for the home page: the post feed, newest first.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub posts: Vec<PostDetail>,
    pub logged_in: bool,
}

/// View model for the single-post page.
#[derive(Debug, Serialize)]
pub struct SinglePostPage {
    pub post: PostDetail,
    pub logged_in: bool,
}

/// View model for the login and signup forms.
#[derive(Debug, Serialize)]
pub struct AuthFormPage {
    pub logged_in: bool,
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
) -> AppResult<Json<HomePage>> {
    let posts = PostRepo::feed(&state.pool).await?;
    Ok(Json(HomePage {
        posts,
        logged_in: auth.is_logged_in(),
    }))
}

/// GET /post/{id}
pub async fn single_post(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<SinglePostPage>> {
    let post = PostRepo::detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "post", id }))?;

    Ok(Json(SinglePostPage {
        post,
        logged_in: auth.is_logged_in(),
    }))
}

/// GET /login
///
/// Already-authenticated visitors are sent back to the home page.
pub async fn login_page(auth: MaybeAuthUser) -> Response {
    if auth.is_logged_in() {
        return Redirect::to("/").into_response();
    }
    Json(AuthFormPage { logged_in: false }).into_response()
}

/// GET /signup
///
/// Already-authenticated visitors are sent back to the home page.
pub async fn signup_page(auth: MaybeAuthUser) -> Response {
    if auth.is_logged_in() {
        return Redirect::to("/").into_response();
    }
    Json(AuthFormPage { logged_in: false }).into_response()
}
