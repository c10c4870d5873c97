//! Create Article Use Case

use std::sync::Arc;

use crate::domain::entities::{Article, NewArticle};
use crate::domain::repository::ArticleRepository;
use crate::domain::value_objects::{ArticleContent, UserId};
use crate::error::{BlogError, BlogResult, CommitAction};

/// Article fields as submitted by the create or update form
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: String,
    pub intro: String,
    pub text: String,
}

impl ArticleInput {
    pub(crate) fn validate(&self) -> BlogResult<ArticleContent> {
        ArticleContent::new(&self.title, &self.intro, &self.text)
    }
}

pub struct CreateArticleUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> CreateArticleUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Publish a new article owned by `owner`, dated now
    pub async fn execute(&self, owner: UserId, input: ArticleInput) -> BlogResult<Article> {
        let content = input.validate()?;
        let new_article = NewArticle::new(owner, content);

        let article_id = self
            .repo
            .insert(&new_article)
            .await
            .map_err(|e| BlogError::commit(CommitAction::Save, e))?;

        tracing::info!(article_id = %article_id, user_id = %owner, "Article created");

        Ok(new_article.into_article(article_id))
    }
}
