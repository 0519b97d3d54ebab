//! Repository for the `posts` table, including the composed read shapes
//! used by the feed, single-post, and dashboard views.

use sqlx::PgPool;
use thoughts_core::types::DbId;

use crate::models::post::{CreatePost, Post, PostDetail, PostWithAuthor, UpdatePost};
use crate::repositories::CommentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, post_text, user_id, created_at, updated_at";

/// Columns for the author-joined shape; `p`/`u` alias posts and users.
const JOINED_COLUMNS: &str =
    "p.id, p.title, p.post_text, p.user_id, p.created_at, u.username";

/// Provides CRUD operations and composed read queries for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, post_text, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.post_text)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a post by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts belonging to one user, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($2, title),
                post_text = COALESCE($3, post_text),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.post_text)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The home feed: every post with its author and comments, ordered by
    /// creation time descending (newest first).
    pub async fn feed(pool: &PgPool) -> Result<Vec<PostDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM posts p
             JOIN users u ON u.id = p.user_id
             ORDER BY p.created_at DESC"
        );
        let posts = sqlx::query_as::<_, PostWithAuthor>(&query)
            .fetch_all(pool)
            .await?;
        Self::attach_comments(pool, posts).await
    }

    /// The dashboard feed: one user's posts with authors and comments,
    /// newest first.
    pub async fn feed_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PostDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM posts p
             JOIN users u ON u.id = p.user_id
             WHERE p.user_id = $1
             ORDER BY p.created_at DESC"
        );
        let posts = sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Self::attach_comments(pool, posts).await
    }

    /// One post with its author and comments, or `None` if absent.
    pub async fn detail(pool: &PgPool, id: DbId) -> Result<Option<PostDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM posts p
             JOIN users u ON u.id = p.user_id
             WHERE p.id = $1"
        );
        let post = sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match post {
            Some(post) => {
                let mut details = Self::attach_comments(pool, vec![post]).await?;
                Ok(details.pop())
            }
            None => Ok(None),
        }
    }

    /// Load the comments for a batch of posts in one query and zip them onto
    /// their parents, preserving post order.
    async fn attach_comments(
        pool: &PgPool,
        posts: Vec<PostWithAuthor>,
    ) -> Result<Vec<PostDetail>, sqlx::Error> {
        let post_ids: Vec<DbId> = posts.iter().map(|p| p.id).collect();
        let comments = CommentRepo::list_with_authors_for_posts(pool, &post_ids).await?;

        let mut details: Vec<PostDetail> = posts
            .into_iter()
            .map(|post| PostDetail {
                post,
                comments: Vec::new(),
            })
            .collect();

        for comment in comments {
            if let Some(detail) = details.iter_mut().find(|d| d.post.id == comment.post_id) {
                detail.comments.push(comment);
            }
        }

        Ok(details)
    }
}
