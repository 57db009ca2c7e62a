use async_trait::async_trait;
use std::borrow::Cow;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    entities::category::Category,
    entities::work::{Image, ImageInsert, Work, WorkChanges, WorkListFilter, WorkPatchRequest, WorkResponse},
    errors::AppError,
    repositories::sqlx_repo::SqlxWorkRepo,
};

#[async_trait]
pub trait WorkRepository: Send + Sync {
    async fn list(&self, filter: &WorkListFilter) -> Result<Vec<WorkResponse>, AppError>;
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<WorkResponse>, AppError>;
    async fn get_by_slug(&self, slug: &str, published_only: bool) -> Result<Option<WorkResponse>, AppError>;
    async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError>;
    async fn create(&self, changes: &WorkChanges, images: &[ImageInsert]) -> Result<WorkResponse, AppError>;
    /// `images: Some` replaces the stored gallery wholesale.
    async fn update(
        &self,
        id: &Uuid,
        changes: &WorkChanges,
        images: Option<Vec<ImageInsert>>,
    ) -> Result<WorkResponse, AppError>;
    async fn patch(&self, id: &Uuid, patch: &WorkPatchRequest) -> Result<WorkResponse, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

impl SqlxWorkRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxWorkRepo { pool }
    }

    /// Resolves categories and galleries for a page of works.
    async fn hydrate(&self, works: Vec<Work>) -> Result<Vec<WorkResponse>, AppError> {
        if works.is_empty() {
            return Ok(Vec::new());
        }

        let work_ids: Vec<Uuid> = works.iter().map(|w| w.id).collect();
        let category_ids: Vec<Uuid> = works.iter().filter_map(|w| w.category_id).collect();

        let categories: Vec<Category> = if category_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ANY($1)")
                .bind(&category_ids)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::from)?
        };

        let images = sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE work_id = ANY($1) ORDER BY sort_order ASC",
        )
        .bind(&work_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        let categories_by_id: HashMap<Uuid, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();

        let mut images_by_work: HashMap<Uuid, Vec<Image>> = HashMap::new();
        for image in images {
            images_by_work.entry(image.work_id).or_default().push(image);
        }

        Ok(works
            .into_iter()
            .map(|work| {
                let category = work.category_id.and_then(|id| categories_by_id.get(&id).cloned());
                let images = images_by_work.remove(&work.id).unwrap_or_default();
                WorkResponse { work, category, images }
            })
            .collect())
    }

    async fn hydrate_one(&self, work: Option<Work>) -> Result<Option<WorkResponse>, AppError> {
        match work {
            Some(work) => Ok(self.hydrate(vec![work]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    async fn replace_gallery(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        work_id: &Uuid,
        images: &[ImageInsert],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM images WHERE work_id = $1")
            .bind(work_id)
            .execute(&mut **tx)
            .await
            .map_err(AppError::from)?;

        for image in images {
            sqlx::query("INSERT INTO images (work_id, url, alt, sort_order) VALUES ($1, $2, $3, $4)")
                .bind(work_id)
                .bind(&image.url)
                .bind(&image.alt)
                .bind(image.sort_order)
                .execute(&mut **tx)
                .await
                .map_err(AppError::from)?;
        }

        Ok(())
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
impl WorkRepository for SqlxWorkRepo {
    async fn list(&self, filter: &WorkListFilter) -> Result<Vec<WorkResponse>, AppError> {
        let works = sqlx::query_as::<_, Work>(
            r#"
            SELECT w.*
            FROM works w
            LEFT JOIN categories c ON c.id = w.category_id
            WHERE ($1 = FALSE OR w.published)
              AND ($2 = FALSE OR w.featured)
              AND ($3::text IS NULL OR c.slug = $3)
            ORDER BY w.sort_order ASC, w.created_at DESC
            LIMIT $4
            "#,
        )
        .bind(filter.published_only)
        .bind(filter.featured_only)
        .bind(&filter.category_slug)
        .bind(filter.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        self.hydrate(works).await
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<WorkResponse>, AppError> {
        let work = sqlx::query_as::<_, Work>("SELECT * FROM works WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        self.hydrate_one(work).await
    }

    async fn get_by_slug(&self, slug: &str, published_only: bool) -> Result<Option<WorkResponse>, AppError> {
        let work = sqlx::query_as::<_, Work>(
            "SELECT * FROM works WHERE slug = $1 AND ($2 = FALSE OR published)",
        )
        .bind(slug)
        .bind(published_only)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        self.hydrate_one(work).await
    }

    async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM works WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(exists)
    }

    async fn create(&self, changes: &WorkChanges, images: &[ImageInsert]) -> Result<WorkResponse, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let work = sqlx::query_as::<_, Work>(
            r#"
            INSERT INTO works (
                slug, title_en, title_zh_tw, description_en, description_zh_tw,
                cover_image, category_id, shoot_date, location, client,
                featured, published, sort_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&changes.slug)
        .bind(&changes.title_en)
        .bind(&changes.title_zh_tw)
        .bind(&changes.description_en)
        .bind(&changes.description_zh_tw)
        .bind(&changes.cover_image)
        .bind(changes.category_id)
        .bind(changes.shoot_date)
        .bind(&changes.location)
        .bind(&changes.client)
        .bind(changes.featured)
        .bind(changes.published)
        .bind(changes.sort_order)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_slug_conflict)?;

        Self::replace_gallery(&mut tx, &work.id, images).await?;

        tx.commit().await.map_err(AppError::from)?;

        self.hydrate_one(Some(work))
            .await?
            .ok_or_else(|| AppError::InternalError("Created work vanished".to_string()))
    }

    async fn update(
        &self,
        id: &Uuid,
        changes: &WorkChanges,
        images: Option<Vec<ImageInsert>>,
    ) -> Result<WorkResponse, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        let work = sqlx::query_as::<_, Work>(
            r#"
            UPDATE works
            SET slug = $2,
                title_en = $3,
                title_zh_tw = $4,
                description_en = $5,
                description_zh_tw = $6,
                cover_image = $7,
                category_id = $8,
                shoot_date = $9,
                location = $10,
                client = $11,
                featured = $12,
                published = $13,
                sort_order = $14,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.slug)
        .bind(&changes.title_en)
        .bind(&changes.title_zh_tw)
        .bind(&changes.description_en)
        .bind(&changes.description_zh_tw)
        .bind(&changes.cover_image)
        .bind(changes.category_id)
        .bind(changes.shoot_date)
        .bind(&changes.location)
        .bind(&changes.client)
        .bind(changes.featured)
        .bind(changes.published)
        .bind(changes.sort_order)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_slug_conflict)?
        .ok_or_else(|| AppError::NotFound("Work not found".to_string()))?;

        if let Some(images) = images {
            Self::replace_gallery(&mut tx, &work.id, &images).await?;
        }

        tx.commit().await.map_err(AppError::from)?;

        self.hydrate_one(Some(work))
            .await?
            .ok_or_else(|| AppError::InternalError("Updated work vanished".to_string()))
    }

    async fn patch(&self, id: &Uuid, patch: &WorkPatchRequest) -> Result<WorkResponse, AppError> {
        let work = sqlx::query_as::<_, Work>(
            r#"
            UPDATE works
            SET featured = COALESCE($2, featured),
                published = COALESCE($3, published),
                sort_order = COALESCE($4, sort_order),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.featured)
        .bind(patch.published)
        .bind(patch.sort_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Work not found".to_string()))?;

        self.hydrate_one(Some(work))
            .await?
            .ok_or_else(|| AppError::InternalError("Patched work vanished".to_string()))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Work not found".to_string()));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM works")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }
}
