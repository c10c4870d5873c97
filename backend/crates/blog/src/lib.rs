//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Article entity, content rules, repository trait
//! - `application/` - Article use cases
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTML handlers, flash cookie, router
//!
//! Articles are public to read as a list. Reading one in full, and writing,
//! requires a session; only the author may update or delete an article.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{Article, ArticleWithOwner};
pub use error::{BlogError, BlogResult};
pub use infra::sqlite::SqliteArticleRepository;
pub use presentation::router::{blog_router, blog_router_generic};
pub use presentation::view::{HtmlRenderer, PageRenderer};
