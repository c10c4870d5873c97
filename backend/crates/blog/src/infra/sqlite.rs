//! SQLite Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::store::StoreResult;
use sqlx::SqlitePool;

use crate::domain::entities::{Article, ArticleWithOwner, NewArticle};
use crate::domain::repository::ArticleRepository;
use crate::domain::value_objects::{ArticleContent, ArticleId, UserId};

/// SQLite-backed article repository
#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ArticleRepository for SqliteArticleRepository {
    async fn list_all(&self) -> StoreResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, user_id, title, intro, text, date
            FROM article
            ORDER BY date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ArticleRow::into_article).collect())
    }

    async fn list_by_owner(&self, user_id: UserId) -> StoreResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, user_id, title, intro, text, date
            FROM article
            WHERE user_id = ?
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ArticleRow::into_article).collect())
    }

    async fn find_by_id(&self, article_id: ArticleId) -> StoreResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, user_id, title, intro, text, date
            FROM article
            WHERE id = ?
            "#,
        )
        .bind(article_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ArticleRow::into_article))
    }

    async fn find_with_owner(
        &self,
        article_id: ArticleId,
    ) -> StoreResult<Option<ArticleWithOwner>> {
        let row = sqlx::query_as::<_, ArticleWithOwnerRow>(
            r#"
            SELECT
                a.id,
                a.user_id,
                a.title,
                a.intro,
                a.text,
                a.date,
                u.name AS owner_name,
                u.email AS owner_email,
                u.phone_number AS owner_phone_number
            FROM article a
            JOIN users u ON u.id = a.user_id
            WHERE a.id = ?
            "#,
        )
        .bind(article_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ArticleWithOwnerRow::into_article_with_owner))
    }

    async fn insert(&self, article: &NewArticle) -> StoreResult<ArticleId> {
        let result = sqlx::query(
            r#"
            INSERT INTO article (user_id, title, intro, text, date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(article.user_id.as_i64())
        .bind(article.content.title())
        .bind(article.content.intro())
        .bind(article.content.text())
        .bind(article.date)
        .execute(&self.pool)
        .await?;

        Ok(ArticleId::from_i64(result.last_insert_rowid()))
    }

    async fn update_content(
        &self,
        article_id: ArticleId,
        content: &ArticleContent,
    ) -> StoreResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE article SET
                title = ?,
                intro = ?,
                text = ?
            WHERE id = ?
            "#,
        )
        .bind(content.title())
        .bind(content.intro())
        .bind(content.text())
        .bind(article_id.as_i64())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, article_id: ArticleId) -> StoreResult<bool> {
        let deleted = sqlx::query("DELETE FROM article WHERE id = ?")
            .bind(article_id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    user_id: i64,
    title: String,
    intro: String,
    text: String,
    date: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(self) -> Article {
        Article {
            article_id: ArticleId::from_i64(self.id),
            user_id: UserId::from_i64(self.user_id),
            title: self.title,
            intro: self.intro,
            text: self.text,
            date: self.date,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleWithOwnerRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    owner_name: String,
    owner_email: String,
    owner_phone_number: Option<String>,
}

impl ArticleWithOwnerRow {
    fn into_article_with_owner(self) -> ArticleWithOwner {
        ArticleWithOwner {
            article: self.article.into_article(),
            owner_name: self.owner_name,
            owner_email: self.owner_email,
            owner_phone_number: self.owner_phone_number,
        }
    }
}

/// Single-connection in-memory database with migrations applied
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .unwrap();
    pool
}
