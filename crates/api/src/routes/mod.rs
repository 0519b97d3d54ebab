pub mod comments;
pub mod health;
pub mod pages;
pub mod posts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users                 list, register
/// /users/login           login (public)
/// /users/logout          logout (requires session)
/// /users/{id}            get, update, delete
///
/// /posts                 list, create
/// /posts/{id}            get, update, delete
///
/// /comments              list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/posts", posts::router())
        .nest("/comments", comments::router())
}
