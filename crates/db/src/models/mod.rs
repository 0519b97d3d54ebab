//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates
//! - Composed read shapes (joins) where a route needs them

pub mod comment;
pub mod post;
pub mod session;
pub mod user;
