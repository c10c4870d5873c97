//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the blog's vocabulary:
//! - Common error types and result aliases
//! - Storage error classification shared by every repository
//! - Typed numeric row identifiers
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the auth and blog crates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    #[cfg(feature = "sqlx")]
    pub mod store;
}
pub mod id;
