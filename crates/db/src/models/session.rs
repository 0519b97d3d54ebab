//! Server-side session model and DTOs.

use sqlx::FromRow;
use thoughts_core::types::{DbId, Timestamp};

/// A session row from the `user_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// An unexpired session joined with its user, as resolved by the auth guard.
#[derive(Debug, Clone, FromRow)]
pub struct ActiveSession {
    pub session_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub expires_at: Timestamp,
}
