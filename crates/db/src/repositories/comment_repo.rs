//! Repository for the `comments` table.

use sqlx::PgPool;
use thoughts_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CommentWithPost, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, comment_text, post_id, user_id, created_at";

/// Provides CRUD operations and join queries for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (comment_text, post_id, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.comment_text)
            .bind(input.post_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// List all comments in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY id");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// List the comments on a batch of posts, joined with commenter
    /// usernames, oldest first.
    pub async fn list_with_authors_for_posts(
        pool: &PgPool,
        post_ids: &[DbId],
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.comment_text, c.post_id, c.user_id, c.created_at, u.username
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.post_id = ANY($1)
             ORDER BY c.created_at",
        )
        .bind(post_ids)
        .fetch_all(pool)
        .await
    }

    /// List one user's comments, each joined with the title of the post it
    /// sits on, oldest first.
    pub async fn list_by_user_with_post(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CommentWithPost>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithPost>(
            "SELECT c.id, c.comment_text, c.post_id, c.user_id, c.created_at,
                    p.title AS post_title
             FROM comments c
             JOIN posts p ON p.id = c.post_id
             WHERE c.user_id = $1
             ORDER BY c.created_at",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
