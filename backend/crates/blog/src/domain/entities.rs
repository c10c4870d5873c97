//! Domain Entities

use auth::SessionUser;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ArticleContent, ArticleId, UserId};

/// A published article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub article_id: ArticleId,
    /// Author; never changes after creation
    pub user_id: UserId,
    pub title: String,
    pub intro: String,
    pub text: String,
    /// Publication time; never changes after creation
    pub date: DateTime<Utc>,
}

impl Article {
    /// True when `viewer` is signed in as the author
    pub fn is_owned_by(&self, viewer: &impl SessionUser) -> bool {
        viewer.session_user_id() == Some(self.user_id)
    }
}

/// Article joined with the author's contact details, for the detail page
#[derive(Debug, Clone)]
pub struct ArticleWithOwner {
    pub article: Article,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone_number: Option<String>,
}

/// An article that has not been inserted yet; the database assigns the id.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub user_id: UserId,
    pub content: ArticleContent,
    pub date: DateTime<Utc>,
}

impl NewArticle {
    /// Stamped with the current UTC time
    pub fn new(user_id: UserId, content: ArticleContent) -> Self {
        Self {
            user_id,
            content,
            date: Utc::now(),
        }
    }

    /// Attach the id assigned on insert
    pub fn into_article(self, article_id: ArticleId) -> Article {
        Article {
            article_id,
            user_id: self.user_id,
            title: self.content.title().to_string(),
            intro: self.content.intro().to_string(),
            text: self.content.text().to_string(),
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::Viewer;

    #[test]
    fn test_ownership_follows_session_user() {
        let content = ArticleContent::new("Hi", "intro", "body").unwrap();
        let article = NewArticle::new(UserId::from_i64(1), content).into_article(ArticleId::from_i64(9));

        assert!(!article.is_owned_by(&Viewer::Anonymous));
        assert_eq!(article.article_id, ArticleId::from_i64(9));
        assert_eq!(article.title, "Hi");
    }
}
