use slug::slugify;
use uuid::Uuid;
use validator::Validate;

use crate::entities::work::{
    NewWorkRequest, UpdateWorkRequest, WorkListFilter, WorkPatchRequest, WorkResponse,
};
use crate::errors::{AppError, FieldError};
use crate::repositories::work::WorkRepository;

pub struct WorkHandler<W>
where
    W: WorkRepository,
{
    pub work_repo: W,
}

impl<W> WorkHandler<W>
where
    W: WorkRepository,
{
    pub fn new(work_repo: W) -> Self {
        WorkHandler { work_repo }
    }

    pub async fn list_works(&self, filter: &WorkListFilter) -> Result<Vec<WorkResponse>, AppError> {
        self.work_repo.list(filter).await
    }

    pub async fn get_work(&self, id: &Uuid) -> Result<WorkResponse, AppError> {
        self.work_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Work not found".to_string()))
    }

    /// Public portfolio detail; drafts stay invisible here.
    pub async fn get_published_work(&self, slug: &str) -> Result<WorkResponse, AppError> {
        self.work_repo
            .get_by_slug(slug, true)
            .await?
            .ok_or_else(|| AppError::NotFound("Work not found".to_string()))
    }

    pub async fn create_work(&self, request: NewWorkRequest) -> Result<WorkResponse, AppError> {
        request.validate()?;

        let slug = match &request.slug {
            Some(slug) => slug.clone(),
            None => {
                let generated = slugify(&request.title_en);
                if generated.is_empty() {
                    return Err(AppError::ValidationError(vec![FieldError {
                        field: "slug".to_string(),
                        message: "A slug could not be derived from the English title".to_string(),
                    }]));
                }
                generated
            }
        };

        if self.work_repo.slug_exists(&slug, None).await? {
            return Err(AppError::Conflict("Slug already exists".to_string()));
        }

        let images = request.gallery();
        self.work_repo
            .create(&request.into_changes(slug), &images)
            .await
    }

    pub async fn update_work(
        &self,
        id: &Uuid,
        request: UpdateWorkRequest,
    ) -> Result<WorkResponse, AppError> {
        request.validate()?;

        let existing = self.get_work(id).await?;

        if let Some(slug) = &request.slug {
            if slug != &existing.work.slug && self.work_repo.slug_exists(slug, Some(*id)).await? {
                return Err(AppError::Conflict("Slug already exists".to_string()));
            }
        }

        let images = request.gallery();
        self.work_repo
            .update(id, &request.apply_to(&existing.work), images)
            .await
    }

    /// List-view toggles: featured, published, sort order.
    pub async fn patch_work(
        &self,
        id: &Uuid,
        patch: WorkPatchRequest,
    ) -> Result<WorkResponse, AppError> {
        if patch.is_empty() {
            return Err(AppError::ValidationError(vec![FieldError {
                field: "body".to_string(),
                message: "At least one of featured, published or sort_order is required"
                    .to_string(),
            }]));
        }

        self.work_repo.patch(id, &patch).await
    }

    pub async fn delete_work(&self, id: &Uuid) -> Result<(), AppError> {
        self.work_repo.delete(id).await
    }

    pub async fn count_works(&self) -> Result<i64, AppError> {
        self.work_repo.count().await
    }
}
