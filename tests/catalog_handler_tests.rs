mod test_utils;

use mockall::{mock, predicate::*};
use uuid::Uuid;

use studio_backend::entities::category::{
    Category, CategoryChanges, CategoryWithCount, NewCategoryRequest, UpdateCategoryRequest,
};
use studio_backend::entities::service::{
    NewServiceRequest, Service, ServiceChanges, UpdateServiceRequest,
};
use studio_backend::errors::AppError;
use studio_backend::repositories::category::CategoryRepository;
use studio_backend::repositories::service::ServiceRepository;
use studio_backend::use_cases::catalog::CatalogHandler;
use test_utils::{sample_category, sample_service};

mock! {
    pub CategoryRepo {}

    #[async_trait::async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn list(&self) -> Result<Vec<Category>, AppError>;
        async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError>;
        async fn get_by_id(&self, id: &Uuid) -> Result<Option<Category>, AppError>;
        async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError>;
        async fn create(&self, changes: &CategoryChanges) -> Result<Category, AppError>;
        async fn update(&self, id: &Uuid, changes: &CategoryChanges) -> Result<Category, AppError>;
        async fn delete_detaching_works(&self, id: &Uuid) -> Result<(), AppError>;
        async fn count(&self) -> Result<i64, AppError>;
    }
}

mock! {
    pub ServiceRepo {}

    #[async_trait::async_trait]
    impl ServiceRepository for ServiceRepo {
        async fn list(&self, active_only: bool) -> Result<Vec<Service>, AppError>;
        async fn get_by_id(&self, id: &Uuid) -> Result<Option<Service>, AppError>;
        async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError>;
        async fn create(&self, changes: &ServiceChanges) -> Result<Service, AppError>;
        async fn update(&self, id: &Uuid, changes: &ServiceChanges) -> Result<Service, AppError>;
        async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn new_category_request(slug: &str) -> NewCategoryRequest {
    serde_json::from_value(serde_json::json!({
        "slug": slug,
        "name_en": "Wedding",
        "name_zh_tw": "婚禮"
    }))
    .unwrap()
}

#[tokio::test]
async fn create_category_rejects_duplicate_slug() {
    let mut categories = MockCategoryRepo::new();
    categories
        .expect_slug_exists()
        .with(eq("wedding"), eq(None::<Uuid>))
        .returning(|_, _| Ok(true));

    let handler = CatalogHandler::new(categories, MockServiceRepo::new());
    let result = handler.create_category(new_category_request("wedding")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn create_category_rejects_invalid_slug() {
    let handler = CatalogHandler::new(MockCategoryRepo::new(), MockServiceRepo::new());
    let result = handler
        .create_category(new_category_request("Not A Slug"))
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_category_passes_changes_through() {
    let mut categories = MockCategoryRepo::new();
    categories.expect_slug_exists().returning(|_, _| Ok(false));
    categories
        .expect_create()
        .withf(|changes: &CategoryChanges| {
            changes.slug == "wedding" && changes.name_zh_tw == "婚禮"
        })
        .returning(|changes| {
            let mut category = sample_category(&changes.slug);
            category.name_en = changes.name_en.clone();
            Ok(category)
        });

    let handler = CatalogHandler::new(categories, MockServiceRepo::new());
    let category = handler
        .create_category(new_category_request("wedding"))
        .await
        .unwrap();

    assert_eq!(category.slug, "wedding");
}

#[tokio::test]
async fn update_category_merges_over_existing() {
    let existing = sample_category("wedding");
    let id = existing.id;

    let mut categories = MockCategoryRepo::new();
    {
        let existing = existing.clone();
        categories
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
    }
    categories
        .expect_update()
        .withf(move |_, changes| {
            // Only sort_order was sent; the rest must survive untouched.
            changes.sort_order == 5 && changes.slug == "wedding" && changes.name_zh_tw == "婚禮"
        })
        .returning(|_, changes| Ok(sample_category(&changes.slug)));

    let request: UpdateCategoryRequest =
        serde_json::from_value(serde_json::json!({ "sort_order": 5 })).unwrap();

    let handler = CatalogHandler::new(categories, MockServiceRepo::new());
    assert!(handler.update_category(&id, request).await.is_ok());
}

#[tokio::test]
async fn update_category_clears_omitted_description() {
    let id = Uuid::new_v4();

    let mut categories = MockCategoryRepo::new();
    categories.expect_get_by_id().returning(move |_| {
        let mut existing = sample_category("wedding");
        existing.description_en = Some("Full day coverage".to_string());
        existing.description_zh_tw = Some("全天拍攝".to_string());
        Ok(Some(existing))
    });
    categories
        .expect_update()
        .withf(|_, changes| {
            changes.description_en.is_none()
                && changes.description_zh_tw.is_none()
                && changes.name_en == "Wedding"
        })
        .returning(|_, changes| Ok(sample_category(&changes.slug)));

    // Omitted and whitespace-only descriptions both end up as NULL.
    let request: UpdateCategoryRequest = serde_json::from_value(serde_json::json!({
        "name_en": "Wedding",
        "description_zh_tw": "  "
    }))
    .unwrap();

    let handler = CatalogHandler::new(categories, MockServiceRepo::new());
    assert!(handler.update_category(&id, request).await.is_ok());
}

#[tokio::test]
async fn update_category_unknown_id_is_not_found() {
    let mut categories = MockCategoryRepo::new();
    categories.expect_get_by_id().returning(|_| Ok(None));

    let handler = CatalogHandler::new(categories, MockServiceRepo::new());
    let result = handler
        .update_category(&Uuid::new_v4(), UpdateCategoryRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_category_detaches_works() {
    let id = Uuid::new_v4();

    let mut categories = MockCategoryRepo::new();
    categories
        .expect_delete_detaching_works()
        .with(eq(id))
        .times(1)
        .returning(|_| Ok(()));

    let handler = CatalogHandler::new(categories, MockServiceRepo::new());
    assert!(handler.delete_category(&id).await.is_ok());
}

#[tokio::test]
async fn create_service_rejects_duplicate_slug() {
    let mut services = MockServiceRepo::new();
    services.expect_slug_exists().returning(|_, _| Ok(true));

    let request: NewServiceRequest = serde_json::from_value(serde_json::json!({
        "slug": "wedding-photography",
        "name_en": "Wedding Photography",
        "name_zh_tw": "婚禮攝影"
    }))
    .unwrap();

    let handler = CatalogHandler::new(MockCategoryRepo::new(), services);
    let result = handler.create_service(request).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn update_service_keeps_slug_without_conflict_check() {
    let existing = sample_service("wedding-photography");
    let id = existing.id;

    let mut services = MockServiceRepo::new();
    {
        let existing = existing.clone();
        services
            .expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
    }
    // slug_exists must not be called when the slug is unchanged
    services.expect_slug_exists().times(0);
    services
        .expect_update()
        .returning(|_, changes| Ok(sample_service(&changes.slug)));

    let request: UpdateServiceRequest = serde_json::from_value(serde_json::json!({
        "slug": "wedding-photography",
        "active": false
    }))
    .unwrap();

    let handler = CatalogHandler::new(MockCategoryRepo::new(), services);
    assert!(handler.update_service(&id, request).await.is_ok());
}

#[tokio::test]
async fn update_service_clears_omitted_price_and_duration() {
    let existing = sample_service("wedding-photography");
    let id = existing.id;

    let mut services = MockServiceRepo::new();
    {
        let existing = existing.clone();
        services
            .expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
    }
    services
        .expect_update()
        .withf(|_, changes| {
            changes.price.is_none()
                && changes.duration.is_none()
                && changes.slug == "wedding-photography"
        })
        .returning(|_, changes| Ok(sample_service(&changes.slug)));

    let request: UpdateServiceRequest =
        serde_json::from_value(serde_json::json!({ "name_en": "Wedding Photography" })).unwrap();

    let handler = CatalogHandler::new(MockCategoryRepo::new(), services);
    assert!(handler.update_service(&id, request).await.is_ok());
}
