//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::error::store::StoreResult;

use crate::domain::entities::{Article, ArticleWithOwner, NewArticle};
use crate::domain::value_objects::{ArticleContent, ArticleId, UserId};

/// Article repository trait
///
/// Lists are ordered newest first (`date DESC`, then `id DESC`).
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// Every article
    async fn list_all(&self) -> StoreResult<Vec<Article>>;

    /// Articles written by `user_id`
    async fn list_by_owner(&self, user_id: UserId) -> StoreResult<Vec<Article>>;

    async fn find_by_id(&self, article_id: ArticleId) -> StoreResult<Option<Article>>;

    /// Article plus the author's name, email and phone number
    async fn find_with_owner(&self, article_id: ArticleId)
    -> StoreResult<Option<ArticleWithOwner>>;

    /// Insert and return the assigned id
    async fn insert(&self, article: &NewArticle) -> StoreResult<ArticleId>;

    /// Replace title, intro and text; returns false when no row matched
    async fn update_content(
        &self,
        article_id: ArticleId,
        content: &ArticleContent,
    ) -> StoreResult<bool>;

    /// Returns false when no row matched
    async fn delete(&self, article_id: ArticleId) -> StoreResult<bool>;
}
