//! Application Layer
//!
//! Article use cases.

pub mod create_article;
pub mod delete_article;
pub mod list_articles;
pub mod show_article;
pub mod update_article;

// Re-exports
pub use create_article::{ArticleInput, CreateArticleUseCase};
pub use delete_article::DeleteArticleUseCase;
pub use list_articles::ListArticlesUseCase;
pub use show_article::ShowArticleUseCase;
pub use update_article::UpdateArticleUseCase;
