use uuid::Uuid;
use validator::Validate;

use crate::entities::category::{
    Category, CategoryWithCount, NewCategoryRequest, UpdateCategoryRequest,
};
use crate::entities::service::{NewServiceRequest, Service, UpdateServiceRequest};
use crate::errors::AppError;
use crate::repositories::category::CategoryRepository;
use crate::repositories::service::ServiceRepository;

/// Categories and services share one handler: both are small localized
/// lookup tables keyed by slug.
pub struct CatalogHandler<C, S>
where
    C: CategoryRepository,
    S: ServiceRepository,
{
    pub category_repo: C,
    pub service_repo: S,
}

impl<C, S> CatalogHandler<C, S>
where
    C: CategoryRepository,
    S: ServiceRepository,
{
    pub fn new(category_repo: C, service_repo: S) -> Self {
        CatalogHandler {
            category_repo,
            service_repo,
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repo.list().await
    }

    pub async fn list_categories_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError> {
        self.category_repo.list_with_counts().await
    }

    pub async fn get_category(&self, id: &Uuid) -> Result<Category, AppError> {
        self.category_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    pub async fn create_category(&self, request: NewCategoryRequest) -> Result<Category, AppError> {
        request.validate()?;

        if self.category_repo.slug_exists(&request.slug, None).await? {
            return Err(AppError::Conflict("Slug already exists".to_string()));
        }

        self.category_repo.create(&request.into_changes()).await
    }

    pub async fn update_category(
        &self,
        id: &Uuid,
        request: UpdateCategoryRequest,
    ) -> Result<Category, AppError> {
        request.validate()?;

        let existing = self
            .category_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        if let Some(slug) = &request.slug {
            if slug != &existing.slug && self.category_repo.slug_exists(slug, Some(*id)).await? {
                return Err(AppError::Conflict("Slug already exists".to_string()));
            }
        }

        self.category_repo
            .update(id, &request.apply_to(&existing))
            .await
    }

    /// Deleting a category leaves its works in place, uncategorized.
    pub async fn delete_category(&self, id: &Uuid) -> Result<(), AppError> {
        self.category_repo.delete_detaching_works(id).await
    }

    pub async fn list_services(&self, active_only: bool) -> Result<Vec<Service>, AppError> {
        self.service_repo.list(active_only).await
    }

    pub async fn get_service(&self, id: &Uuid) -> Result<Service, AppError> {
        self.service_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn create_service(&self, request: NewServiceRequest) -> Result<Service, AppError> {
        request.validate()?;

        if self.service_repo.slug_exists(&request.slug, None).await? {
            return Err(AppError::Conflict("Slug already exists".to_string()));
        }

        self.service_repo.create(&request.into_changes()).await
    }

    pub async fn update_service(
        &self,
        id: &Uuid,
        request: UpdateServiceRequest,
    ) -> Result<Service, AppError> {
        request.validate()?;

        let existing = self
            .service_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        if let Some(slug) = &request.slug {
            if slug != &existing.slug && self.service_repo.slug_exists(slug, Some(*id)).await? {
                return Err(AppError::Conflict("Slug already exists".to_string()));
            }
        }

        self.service_repo
            .update(id, &request.apply_to(&existing))
            .await
    }

    pub async fn delete_service(&self, id: &Uuid) -> Result<(), AppError> {
        self.service_repo.delete(id).await
    }
}
