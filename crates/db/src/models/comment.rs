//! Comment entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use thoughts_core::types::{DbId, Timestamp};

/// Full comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub comment_text: String,
    pub post_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// Comment row joined with the commenter's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub comment_text: String,
    pub post_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub username: String,
}

/// Comment row joined with the title of the post it sits on, used in the
/// user-detail view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithPost {
    pub id: DbId,
    pub comment_text: String,
    pub post_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub post_title: String,
}

/// DTO for inserting a new comment. `user_id` comes from the session
/// identity, never from the request body.
#[derive(Debug)]
pub struct CreateComment {
    pub comment_text: String,
    pub post_id: DbId,
    pub user_id: DbId,
}
