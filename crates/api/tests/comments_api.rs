//! HTTP-level integration tests for the `/api/comments` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_json_with_cookie, register_user};
use sqlx::PgPool;

/// Creating a comment requires a session; the author comes from the session.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_comment(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (cookie, user_id) = register_user(app, "alice", "alice@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Thread", "post_text": "op" });
    let response = post_json_with_cookie(app, "/api/posts", body, &cookie).await;
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "comment_text": "reply", "post_id": post_id });
    let response = post_json_with_cookie(app, "/api/comments", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["comment_text"], "reply");
    assert_eq!(json["post_id"], post_id);
    assert_eq!(json["user_id"], user_id);
}

/// Creating a comment without a session is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_comment_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (cookie, _) = register_user(app, "bob", "bob@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Open", "post_text": "op" });
    let response = post_json_with_cookie(app, "/api/posts", body, &cookie).await;
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "comment_text": "anonymous", "post_id": post_id });
    let response = post_json(app, "/api/comments", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count, 0);
}

/// Commenting on a post that does not exist is a 404 on the post, and
/// nothing is persisted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_comment_on_missing_post(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (cookie, _) = register_user(app, "carol", "carol@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "comment_text": "into the void", "post_id": 999999 });
    let response = post_json_with_cookie(app, "/api/comments", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "No post found with this id");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count, 0);
}

/// GET /api/comments lists all comments in insertion order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_comments(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (cookie, _) = register_user(app, "dave", "dave@test.com", "password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "title": "Busy", "post_text": "op" });
    let response = post_json_with_cookie(app, "/api/posts", body, &cookie).await;
    let post_id = body_json(response).await["id"].as_i64().unwrap();

    for text in ["first", "second", "third"] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "comment_text": text, "post_id": post_id });
        let response = post_json_with_cookie(app, "/api/comments", body, &cookie).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/comments").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let comments = json.as_array().expect("body should be an array");
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0]["comment_text"], "first");
    assert_eq!(comments[2]["comment_text"], "third");
}
