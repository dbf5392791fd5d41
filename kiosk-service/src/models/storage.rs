use super::book::{Book, Category};
use super::catalog::{mock_books, mock_categories};
use crate::services::search::filter_catalog;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Connection error: {0}")]
    Connection(String),
}

#[async_trait]
pub trait CatalogBackend {
    /// Short name reported by the health route.
    fn name(&self) -> &'static str;
    /// Every book, in catalog order.
    async fn list_books(&self) -> Result<Vec<Book>, CatalogError>;
    /// Books whose title, author or genre contains `query` (case-insensitive),
    /// in catalog order, at most `limit` of them.
    async fn search_books(&self, query: &str, limit: usize) -> Result<Vec<Book>, CatalogError>;
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;
    async fn record_recommendation(&self, user_input: &str, books: &[Book]) -> Result<(), CatalogError>;
    async fn test_connection(&self) -> Result<(), CatalogError>;
}

/// In-memory catalog. Never fails.
pub struct MockBackend {
    books: Vec<Book>,
    categories: Vec<Category>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_catalog(mock_books(), mock_categories())
    }

    pub fn with_catalog(books: Vec<Book>, categories: Vec<Category>) -> Self {
        Self { books, categories }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_books(&self) -> Result<Vec<Book>, CatalogError> {
        Ok(self.books.clone())
    }

    async fn search_books(&self, query: &str, limit: usize) -> Result<Vec<Book>, CatalogError> {
        Ok(filter_catalog(&self.books, query, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }

    async fn record_recommendation(&self, user_input: &str, books: &[Book]) -> Result<(), CatalogError> {
        debug!(
            "Mock backend does not persist recommendations ({} books for {:?})",
            books.len(),
            user_input
        );
        Ok(())
    }

    async fn test_connection(&self) -> Result<(), CatalogError> {
        Ok(())
    }
}

pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    pub async fn new(database_url: &str) -> Result<Self, CatalogError> {
        let pool = PgPool::connect(database_url).await?;

        // Initialize tables
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id SERIAL PRIMARY KEY,
                title VARCHAR(255) NOT NULL,
                author VARCHAR(255) NOT NULL,
                category VARCHAR(100) NOT NULL,
                genre VARCHAR(100),
                description TEXT,
                isbn VARCHAR(20),
                publication_year INTEGER,
                language VARCHAR(10) DEFAULT 'tr',
                available_copies INTEGER DEFAULT 1,
                total_copies INTEGER DEFAULT 1,
                color_gradient VARCHAR(100) DEFAULT 'from-blue-600 to-blue-800',
                created_at TIMESTAMPTZ DEFAULT NOW(),
                updated_at TIMESTAMPTZ DEFAULT NOW()
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL UNIQUE,
                description TEXT,
                color_gradient VARCHAR(100) DEFAULT 'from-blue-600 to-blue-800'
            )
            "#,
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS book_recommendations (
                id SERIAL PRIMARY KEY,
                user_input TEXT NOT NULL,
                recommended_books JSONB NOT NULL,
                created_at TIMESTAMPTZ DEFAULT NOW()
            )
            "#,
        )
        .execute(&pool)
        .await?;

        let backend = Self { pool };
        backend.seed_if_empty().await?;

        Ok(backend)
    }

    async fn seed_if_empty(&self) -> Result<(), CatalogError> {
        let book_count = sqlx::query("SELECT COUNT(*) AS count FROM books")
            .fetch_one(&self.pool)
            .await?
            .try_get::<i64, _>("count")?;

        if book_count == 0 {
            let books = mock_books();
            for book in &books {
                sqlx::query(
                    r#"
                    INSERT INTO books (id, title, author, category, genre, description, available_copies, color_gradient)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    "#,
                )
                .bind(book.id as i32)
                .bind(&book.title)
                .bind(&book.author)
                .bind(&book.category)
                .bind(&book.genre)
                .bind(&book.description)
                .bind(book.available_copies as i32)
                .bind(&book.color_gradient)
                .execute(&self.pool)
                .await?;
            }
            sqlx::query("SELECT setval(pg_get_serial_sequence('books', 'id'), (SELECT MAX(id) FROM books))")
                .execute(&self.pool)
                .await?;
            info!("Seeded books table with {} entries", books.len());
        }

        let category_count = sqlx::query("SELECT COUNT(*) AS count FROM categories")
            .fetch_one(&self.pool)
            .await?
            .try_get::<i64, _>("count")?;

        if category_count == 0 {
            let categories = mock_categories();
            for category in &categories {
                sqlx::query(
                    "INSERT INTO categories (id, name, description, color_gradient) VALUES ($1, $2, $3, $4)",
                )
                .bind(category.id as i32)
                .bind(&category.name)
                .bind(&category.description)
                .bind(&category.color_gradient)
                .execute(&self.pool)
                .await?;
            }
            sqlx::query(
                "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
            )
            .execute(&self.pool)
            .await?;
            info!("Seeded categories table with {} entries", categories.len());
        }

        Ok(())
    }
}

const BOOK_COLUMNS: &str = "id, title, author, category, COALESCE(genre, category) AS genre, description, \
     COALESCE(available_copies, 0) AS available_copies, \
     COALESCE(color_gradient, 'from-blue-600 to-blue-800') AS color_gradient";

fn book_from_row(row: &PgRow) -> Result<Book, CatalogError> {
    Ok(Book {
        id: row.try_get::<i32, _>("id")? as u32,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        genre: row.try_get("genre")?,
        category: row.try_get("category")?,
        description: row.try_get("description")?,
        color_gradient: row.try_get("color_gradient")?,
        available_copies: row.try_get::<i32, _>("available_copies")?.max(0) as u32,
    })
}

/// Escapes `%`, `_` and `\` so user text is matched literally by `ILIKE`.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl CatalogBackend for PostgresBackend {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn list_books(&self) -> Result<Vec<Book>, CatalogError> {
        let rows = sqlx::query(&format!("SELECT {} FROM books ORDER BY id", BOOK_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(book_from_row).collect()
    }

    async fn search_books(&self, query: &str, limit: usize) -> Result<Vec<Book>, CatalogError> {
        let pattern = format!("%{}%", escape_like(query));
        let rows = sqlx::query(&format!(
            "SELECT {} FROM books \
             WHERE title ILIKE $1 OR author ILIKE $1 OR COALESCE(genre, category) ILIKE $1 \
             ORDER BY id LIMIT $2",
            BOOK_COLUMNS
        ))
        .bind(pattern)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(book_from_row).collect()
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let rows = sqlx::query(
            "SELECT id, name, description, COALESCE(color_gradient, 'from-blue-600 to-blue-800') AS color_gradient \
             FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<Category, CatalogError> {
                Ok(Category {
                    id: row.try_get::<i32, _>("id")? as u32,
                    name: row.try_get("name")?,
                    description: row.try_get("description")?,
                    color_gradient: row.try_get("color_gradient")?,
                })
            })
            .collect()
    }

    async fn record_recommendation(&self, user_input: &str, books: &[Book]) -> Result<(), CatalogError> {
        let recommended = serde_json::to_value(books)?;

        sqlx::query(
            "INSERT INTO book_recommendations (user_input, recommended_books, created_at) VALUES ($1, $2, $3)",
        )
        .bind(user_input)
        .bind(recommended)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn test_connection(&self) -> Result<(), CatalogError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

pub type Backend = Arc<dyn CatalogBackend + Send + Sync>;
