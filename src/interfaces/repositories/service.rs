use async_trait::async_trait;
use std::borrow::Cow;
use uuid::Uuid;

use crate::{
    entities::service::{Service, ServiceChanges},
    errors::AppError,
    repositories::sqlx_repo::SqlxServiceRepo,
};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self, active_only: bool) -> Result<Vec<Service>, AppError>;
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Service>, AppError>;
    async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError>;
    async fn create(&self, changes: &ServiceChanges) -> Result<Service, AppError>;
    async fn update(&self, id: &Uuid, changes: &ServiceChanges) -> Result<Service, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxServiceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxServiceRepo { pool }
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
impl ServiceRepository for SqlxServiceRepo {
    async fn list(&self, active_only: bool) -> Result<Vec<Service>, AppError> {
        sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE ($1 = FALSE OR active) ORDER BY sort_order ASC, slug ASC",
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Service>, AppError> {
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM services WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(exists)
    }

    async fn create(&self, changes: &ServiceChanges) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (
                slug, name_en, name_zh_tw, description_en, description_zh_tw,
                price, duration, icon, active, sort_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&changes.slug)
        .bind(&changes.name_en)
        .bind(&changes.name_zh_tw)
        .bind(&changes.description_en)
        .bind(&changes.description_zh_tw)
        .bind(&changes.price)
        .bind(&changes.duration)
        .bind(&changes.icon)
        .bind(changes.active)
        .bind(changes.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)
    }

    async fn update(&self, id: &Uuid, changes: &ServiceChanges) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET slug = $2,
                name_en = $3,
                name_zh_tw = $4,
                description_en = $5,
                description_zh_tw = $6,
                price = $7,
                duration = $8,
                icon = $9,
                active = $10,
                sort_order = $11,
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
        .bind(&changes.price)
        .bind(&changes.duration)
        .bind(&changes.icon)
        .bind(changes.active)
        .bind(changes.sort_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slug_conflict)?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        Ok(())
    }
}
