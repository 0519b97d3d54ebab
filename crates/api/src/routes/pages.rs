//! Route definitions for the page-level views (mounted at the root).

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, pages};
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET /                    -> home (post feed)
/// GET /post/{id}           -> single_post
/// GET /login               -> login form (redirects home if logged in)
/// GET /signup              -> signup form (redirects home if logged in)
/// GET /dashboard           -> own posts (requires session, else redirect)
/// GET /dashboard/edit/{id} -> edit-post form (requires session)
/// GET /dashboard/edituser  -> edit-profile form (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/post/{id}", get(pages::single_post))
        .route("/login", get(pages::login_page))
        .route("/signup", get(pages::signup_page))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/edit/{id}", get(dashboard::edit_post))
        .route("/dashboard/edituser", get(dashboard::edit_user))
}
