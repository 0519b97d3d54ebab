//! Route definitions for the `/api/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/api/posts`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (requires session)
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update (requires session)
/// DELETE /{id}  -> delete (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route(
            "/{id}",
            get(posts::get_by_id)
                .put(posts::update)
                .delete(posts::delete),
        )
}
