//! HTTP-level integration tests for the page routes and the health check.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, get, get_with_cookie, post_json_with_cookie, register_user};
use sqlx::PgPool;

/// The home page carries the feed and reflects the session state in
/// `logged_in`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_home_page_logged_in_flag(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (cookie, _) = register_user(app, "alice", "alice@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Visible", "post_text": "on the home page" });
    let response = post_json_with_cookie(app, "/api/posts", body, &cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["logged_in"], false);
    assert_eq!(json["posts"][0]["title"], "Visible");

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/", &cookie).await;
    let json = body_json(response).await;
    assert_eq!(json["logged_in"], true);
}

/// The single-post page resolves the post with comments; a missing id is a
/// 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_single_post_page(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (cookie, _) = register_user(app, "bob", "bob@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Readable", "post_text": "content" });
    let response = post_json_with_cookie(app, "/api/posts", body, &cookie).await;
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/post/{post_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["post"]["title"], "Readable");
    assert_eq!(json["post"]["username"], "bob");
    assert_eq!(json["logged_in"], false);

    let app = common::build_test_app(pool);
    let response = get(app, "/post/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Anonymous visitors see the login and signup forms; logged-in visitors are
/// redirected home.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_auth_form_pages_redirect_when_logged_in(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/login").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["logged_in"], false);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/signup").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let (cookie, _) = register_user(app, "carol", "carol@test.com", "password").await;

    for uri in ["/login", "/signup"] {
        let app = common::build_test_app(pool.clone());
        let response = get_with_cookie(app, uri, &cookie).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
    }
}

/// Anonymous visitors to any dashboard page are redirected to /login.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_redirects_anonymous(pool: PgPool) {
    for uri in ["/dashboard", "/dashboard/edit/1", "/dashboard/edituser"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/login");
    }
}

/// The dashboard lists only the session user's own posts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_shows_own_posts_only(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (dave_cookie, _) = register_user(app, "dave", "dave@test.com", "password").await;
    let app = common::build_test_app(pool.clone());
    let (erin_cookie, _) = register_user(app, "erin", "erin@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Dave's", "post_text": "his" });
    let response = post_json_with_cookie(app, "/api/posts", body, &dave_cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Erin's", "post_text": "hers" });
    let response = post_json_with_cookie(app, "/api/posts", body, &erin_cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/dashboard", &dave_cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["logged_in"], true);
    let posts = json["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "Dave's");
}

/// The edit-post page resolves the post; the edit-profile page returns the
/// session user without any password field.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_edit_pages(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (cookie, user_id) = register_user(app, "frank", "frank@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Editable", "post_text": "draft" });
    let response = post_json_with_cookie(app, "/api/posts", body, &cookie).await;
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get_with_cookie(app, &format!("/dashboard/edit/{post_id}"), &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["post"]["title"], "Editable");

    let app = common::build_test_app(pool);
    let response = get_with_cookie(app, "/dashboard/edituser", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], user_id);
    assert_eq!(json["user"]["email"], "frank@test.com");
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("password_hash").is_none());
}

/// GET /health reports service status and database reachability.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_endpoint(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}
