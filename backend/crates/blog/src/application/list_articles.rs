//! List Articles Use Case

use std::sync::Arc;

use crate::domain::entities::Article;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_objects::UserId;
use crate::error::BlogResult;

pub struct ListArticlesUseCase<R>
where
    R: ArticleRepository,
{
    repo: Arc<R>,
}

impl<R> ListArticlesUseCase<R>
where
    R: ArticleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every article, newest first
    pub async fn all(&self) -> BlogResult<Vec<Article>> {
        Ok(self.repo.list_all().await?)
    }

    /// Articles written by `user_id`, newest first
    pub async fn by_owner(&self, user_id: UserId) -> BlogResult<Vec<Article>> {
        Ok(self.repo.list_by_owner(user_id).await?)
    }
}
