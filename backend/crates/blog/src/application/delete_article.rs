//! Delete Article Use Case

use std::sync::Arc;

use auth::SessionUser;

use crate::domain::repository::ArticleRepository;
use crate::domain::value_objects::ArticleId;
use crate::error::{BlogError, BlogResult, CommitAction};

pub struct DeleteArticleUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteArticleUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Delete an article owned by `editor`. A missing id changes nothing.
    pub async fn execute(&self, article_id: ArticleId, editor: &impl SessionUser) -> BlogResult<()> {
        let article = self
            .repo
            .find_by_id(article_id)
            .await?
            .ok_or(BlogError::ArticleNotFound)?;

        if !article.is_owned_by(editor) {
            return Err(BlogError::NotOwner);
        }

        let deleted = self
            .repo
            .delete(article_id)
            .await
            .map_err(|e| BlogError::commit(CommitAction::Delete, e))?;

        if !deleted {
            return Err(BlogError::ArticleNotFound);
        }

        tracing::info!(article_id = %article_id, user_id = %article.user_id, "Article deleted");

        Ok(())
    }
}
