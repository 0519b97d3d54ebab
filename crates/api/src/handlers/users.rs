//! Handlers for the `/api/users` resource (CRUD, login, logout).

use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::AppendHeaders;
use axum::Json;
use serde::{Deserialize, Serialize};
use thoughts_core::error::CoreError;
use thoughts_core::types::DbId;
use thoughts_db::models::user::{CreateUser, UpdateUser, UserDetail, UserResponse};
use thoughts_db::repositories::{CommentRepo, PostRepo, SessionRepo, UserRepo};
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{clear_session_cookie, establish_session};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// A single `Set-Cookie` header attached to a session-changing response.
type SetCookie = AppendHeaders<[(axum::http::HeaderName, String); 1]>;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/users` (registration).
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters long"))]
    pub password: String,
}

/// Request body for `POST /api/users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response: the user plus a confirmation message.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: &'static str,
}

/// Request body for `PUT /api/users/{id}`. All fields are optional; the
/// password is re-hashed only when present.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 4, message = "password must be at least 4 characters long"))]
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/users
///
/// List all users. The password hash never leaves the server: every outbound
/// path maps through [`UserResponse`].
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
///
/// One user with their posts and authored comments (each comment carries the
/// title of the post it sits on).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserDetail>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;

    let posts = PostRepo::list_by_user(&state.pool, id).await?;
    let comments = CommentRepo::list_by_user_with_post(&state.pool, id).await?;

    Ok(Json(UserDetail {
        user: user.into(),
        posts,
        comments,
    }))
}

/// POST /api/users
///
/// Register a new user: validate the payload, hash the password, persist,
/// and establish a session.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, SetCookie, Json<UserResponse>)> {
    input.validate()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "registered new user");

    let cookie = establish_session(&state.pool, &state.config.session, user.id).await?;

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(user.into()),
    ))
}

/// POST /api/users/login
///
/// Authenticate by email + password and establish a session.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(SetCookie, Json<LoginResponse>)> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "There are no users with this email found!".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Validation(
            "Incorrect password!".into(),
        )));
    }

    let cookie = establish_session(&state.pool, &state.config.session, user.id).await?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            user: user.into(),
            message: "You are now logged in!",
        }),
    ))
}

/// POST /api/users/logout
///
/// Destroy the current session. Returns 204 No Content and clears the cookie.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<(StatusCode, SetCookie)> {
    SessionRepo::delete(&state.pool, auth.session_id).await?;

    Ok((
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, clear_session_cookie(&state.config.session))]),
    ))
}

/// PUT /api/users/{id}
///
/// Partial update. The password is hashed only when the payload carries one;
/// other fields pass through untouched.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;

    let password_hash = match &input.password {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        ),
        None => None,
    };

    let user = UserRepo::update(
        &state.pool,
        id,
        &UpdateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;

    Ok(Json(user.into()))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "user", id }))
    }
}