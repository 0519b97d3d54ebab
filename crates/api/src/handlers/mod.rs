//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource or page
//! group. Handlers delegate to the repositories in `thoughts_db` and map
//! errors via [`crate::error::AppError`].

pub mod comments;
pub mod dashboard;
pub mod pages;
pub mod posts;
pub mod users;
