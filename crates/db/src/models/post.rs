//! Post entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use thoughts_core::types::{DbId, Timestamp};

use crate::models::comment::CommentWithAuthor;

/// Full post row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub post_text: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Post row joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostWithAuthor {
    pub id: DbId,
    pub title: String,
    pub post_text: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub username: String,
}

/// A post with author and comments, shaped for the feed and single-post views.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: PostWithAuthor,
    pub comments: Vec<CommentWithAuthor>,
}

/// DTO for inserting a new post. `user_id` comes from the session identity,
/// never from the request body.
#[derive(Debug)]
pub struct CreatePost {
    pub title: String,
    pub post_text: String,
    pub user_id: DbId,
}

/// DTO for updating an existing post. All fields are optional.
#[derive(Debug, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub post_text: Option<String>,
}
