//! Domain Layer - Articles and their authors
//!
//! This layer contains:
//! - Domain entities (Article, ArticleWithOwner, NewArticle)
//! - Domain value objects (ArticleContent)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{Article, ArticleWithOwner, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::ArticleContent;
