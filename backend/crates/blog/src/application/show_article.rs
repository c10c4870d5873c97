//! Show Article Use Case
//!
//! Loads a single article for the detail page or the edit form.

use std::sync::Arc;

use auth::SessionUser;

use crate::domain::entities::{Article, ArticleWithOwner};
use crate::domain::repository::ArticleRepository;
use crate::domain::value_objects::ArticleId;
use crate::error::{BlogError, BlogResult};

pub struct ShowArticleUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> ShowArticleUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Article with its author's contact details
    pub async fn detail(&self, article_id: ArticleId) -> BlogResult<ArticleWithOwner> {
        self.repo
            .find_with_owner(article_id)
            .await?
            .ok_or(BlogError::ArticleNotFound)
    }

    /// Article as its author is about to edit it
    pub async fn for_edit(
        &self,
        article_id: ArticleId,
        editor: &impl SessionUser,
    ) -> BlogResult<Article> {
        let article = self
            .repo
            .find_by_id(article_id)
            .await?
            .ok_or(BlogError::ArticleNotFound)?;

        if !article.is_owned_by(editor) {
            return Err(BlogError::NotOwner);
        }

        Ok(article)
    }
}
