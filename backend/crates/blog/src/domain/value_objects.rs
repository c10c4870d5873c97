//! Domain Value Objects
//!
//! Immutable value types for the blog domain.

use crate::error::{BlogError, BlogResult};

pub use kernel::id::{ArticleId, UserId};

/// Column width of `article.title`
pub const TITLE_MAX_LENGTH: usize = 100;
/// Column width of `article.intro`
pub const INTRO_MAX_LENGTH: usize = 300;

/// Title, intro and body of an article, checked against the column limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    title: String,
    intro: String,
    text: String,
}

impl ArticleContent {
    /// Surrounding whitespace is trimmed from the title and intro; the body is kept as typed.
    pub fn new(title: &str, intro: &str, text: &str) -> BlogResult<Self> {
        let title = title.trim();
        let intro = intro.trim();

        if title.is_empty() || intro.is_empty() || text.trim().is_empty() {
            return Err(BlogError::Validation("Fill in all fields".to_string()));
        }

        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(BlogError::Validation(format!(
                "Title must be at most {} characters",
                TITLE_MAX_LENGTH
            )));
        }

        if intro.chars().count() > INTRO_MAX_LENGTH {
            return Err(BlogError::Validation(format!(
                "Intro must be at most {} characters",
                INTRO_MAX_LENGTH
            )));
        }

        Ok(Self {
            title: title.to_string(),
            intro: intro.to_string(),
            text: text.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
