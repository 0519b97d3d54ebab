//! Cookie-keyed server-side sessions.
//!
//! Session tokens are opaque random strings; only their SHA-256 hash is
//! stored server-side so a database leak does not compromise active
//! sessions. The plaintext token lives exclusively in an HttpOnly cookie.

use chrono::Utc;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use thoughts_core::types::DbId;
use thoughts_db::models::session::CreateSession;
use thoughts_db::repositories::SessionRepo;
use uuid::Uuid;

/// Configuration for the session cookie.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the session cookie (default: `session_token`).
    pub cookie_name: String,
    /// Session lifetime in minutes, fixed from establishment (default: 120).
    pub ttl_mins: i64,
}

/// Default session lifetime: 2 hours.
const DEFAULT_SESSION_TTL_MINS: i64 = 120;

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var               | Required | Default         |
    /// |-----------------------|----------|-----------------|
    /// | `SESSION_COOKIE_NAME` | no       | `session_token` |
    /// | `SESSION_TTL_MINS`    | no       | `120`           |
    pub fn from_env() -> Self {
        let cookie_name =
            std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "session_token".into());

        let ttl_mins: i64 = std::env::var("SESSION_TTL_MINS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_MINS.to_string())
            .parse()
            .expect("SESSION_TTL_MINS must be a valid i64");

        Self {
            cookie_name,
            ttl_mins,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "session_token".into(),
            ttl_mins: DEFAULT_SESSION_TTL_MINS,
        }
    }
}

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client in the cookie; only the hash is persisted server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming cookie token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Persist a new session for `user_id` and return the `Set-Cookie` header
/// value carrying the plaintext token.
///
/// The expiry is fixed at creation time (`ttl_mins` from now); there is no
/// sliding renewal.
pub async fn establish_session(
    pool: &PgPool,
    config: &SessionConfig,
    user_id: DbId,
) -> Result<String, sqlx::Error> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::minutes(config.ttl_mins);

    let input = CreateSession {
        user_id,
        token_hash,
        expires_at,
    };
    SessionRepo::create(pool, &input).await?;

    Ok(session_cookie(config, &token))
}

/// Build the `Set-Cookie` value for an established session.
pub fn session_cookie(config: &SessionConfig, token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name,
        token,
        config.ttl_mins * 60
    )
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        config.cookie_name
    )
}
