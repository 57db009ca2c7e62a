use async_trait::async_trait;
use std::borrow::Cow;
use uuid::Uuid;

use crate::{
    entities::category::{Category, CategoryChanges, CategoryWithCount},
    errors::AppError,
    repositories::sqlx_repo::SqlxCategoryRepo,
};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, AppError>;
    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError>;
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Category>, AppError>;
    async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError>;
    async fn create(&self, changes: &CategoryChanges) -> Result<Category, AppError>;
    async fn update(&self, id: &Uuid, changes: &CategoryChanges) -> Result<Category, AppError>;
    /// Detaches works referencing the category, then deletes it.
    async fn delete_detaching_works(&self, id: &Uuid) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

impl SqlxCategoryRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCategoryRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
            AppError::Conflict("Slug already exists".to_string())
        }
        _ => AppError::from(e),
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY sort_order ASC, slug ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError> {
        sqlx::query_as::<_, CategoryWithCount>(
            r#"
            SELECT c.*, COUNT(w.id) AS work_count
            FROM categories c
            LEFT JOIN works w ON w.category_id = c.id
            GROUP BY c.id
            ORDER BY c.sort_order ASC, c.slug ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Category>, AppError> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(exists)
    }

    async fn create(&self, changes: &CategoryChanges) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (slug, name_en, name_zh_tw, description_en, description_zh_tw, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&changes.slug)
        .bind(&changes.name_en)
        .bind(&changes.name_zh_tw)
        .bind(&changes.description_en)
        .bind(&changes.description_zh_tw)
        .bind(changes.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)
    }

    async fn update(&self, id: &Uuid, changes: &CategoryChanges) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET slug = $2,
                name_en = $3,
                name_zh_tw = $4,
                description_en = $5,
                description_zh_tw = $6,
                sort_order = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.slug)
        .bind(&changes.name_en)
        .bind(&changes.name_zh_tw)
        .bind(&changes.description_en)
        .bind(&changes.description_zh_tw)
        .bind(changes.sort_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slug_conflict)?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    async fn delete_detaching_works(&self, id: &Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        sqlx::query("UPDATE works SET category_id = NULL WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        tx.commit().await.map_err(AppError::from)?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }
}
