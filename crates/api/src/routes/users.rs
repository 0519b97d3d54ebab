//! Route definitions for the `/api/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/api/users`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create (register, establishes session)
/// POST   /login    -> login (establishes session)
/// POST   /logout   -> logout (requires session)
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update (requires session)
/// DELETE /{id}     -> delete (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list).post(users::create))
        .route("/login", post(users::login))
        .route("/logout", post(users::logout))
        .route(
            "/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::delete),
        )
}
