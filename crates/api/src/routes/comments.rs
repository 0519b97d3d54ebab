//! Route definitions for the `/api/comments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/api/comments`.
///
/// ```text
/// GET  /  -> list
/// POST /  -> create (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(comments::list).post(comments::create))
}
