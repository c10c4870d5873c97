//! Update Article Use Case

use std::sync::Arc;

use auth::SessionUser;

use crate::application::create_article::ArticleInput;
use crate::domain::entities::Article;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_objects::ArticleId;
use crate::error::{BlogError, BlogResult, CommitAction};

pub struct UpdateArticleUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateArticleUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Replace title, intro and text. Id, author and date are left untouched.
    ///
    /// Checks run in order: existence (404), ownership (403), content (400).
    pub async fn execute(
        &self,
        article_id: ArticleId,
        editor: &impl SessionUser,
        input: ArticleInput,
    ) -> BlogResult<Article> {
        let article = self
            .repo
            .find_by_id(article_id)
            .await?
            .ok_or(BlogError::ArticleNotFound)?;

        if !article.is_owned_by(editor) {
            return Err(BlogError::NotOwner);
        }

        let content = input.validate()?;

        let updated = self
            .repo
            .update_content(article_id, &content)
            .await
            .map_err(|e| BlogError::commit(CommitAction::Save, e))?;

        // Deleted between the read and the write
        if !updated {
            return Err(BlogError::ArticleNotFound);
        }

        tracing::info!(article_id = %article_id, user_id = %article.user_id, "Article updated");

        Ok(Article {
            title: content.title().to_string(),
            intro: content.intro().to_string(),
            text: content.text().to_string(),
            ..article
        })
    }
}
