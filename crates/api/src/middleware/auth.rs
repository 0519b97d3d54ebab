//! Session-based authentication extractors for Axum handlers.
//!
//! The guard is a pure predicate gate over request-scoped state: it reads
//! the session cookie, resolves it against the `user_sessions` table, and
//! either yields the authenticated identity or short-circuits the request.
//! The downstream handler is never invoked on failure.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use thoughts_core::error::CoreError;
use thoughts_core::types::DbId;
use thoughts_db::repositories::SessionRepo;

use crate::auth::session::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any API handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The session row id, needed to destroy the session on logout.
    pub session_id: DbId,
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's username, carried in session state.
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token_from_cookies(parts, &state.config.session.cookie_name)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "You must be logged in to do that".into(),
                ))
            })?;

        let session = SessionRepo::find_active_by_token_hash(
            &state.pool,
            &hash_session_token(&token),
        )
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Your session has expired. Please log in again".into(),
            ))
        })?;

        Ok(AuthUser {
            session_id: session.session_id,
            user_id: session.user_id,
            username: session.username,
        })
    }
}

/// Optional authentication for public pages that only need a `logged_in`
/// flag. Extraction never fails; an absent or expired session yields `None`.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn is_logged_in(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

/// Page-route guard: same session resolution as [`AuthUser`], but an
/// unauthenticated request is redirected to the login page instead of
/// receiving a 401 JSON body.
#[derive(Debug, Clone)]
pub struct PageAuth(pub AuthUser);

/// Rejection for [`PageAuth`]: a redirect to `/login`.
pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

impl FromRequestParts<AppState> for PageAuth {
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state)
            .await
            .map(PageAuth)
            .map_err(|_| LoginRedirect)
    }
}

/// Extract the session token from the `Cookie` header, if present.
fn session_token_from_cookies(parts: &Parts, cookie_name: &str) -> Option<String> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;

    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name).then(|| value.to_string())
    })
}
