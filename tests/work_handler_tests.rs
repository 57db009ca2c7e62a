mod test_utils;

use mockall::{mock, predicate::*};
use uuid::Uuid;

use studio_backend::entities::work::{
    ImageInsert, NewWorkRequest, UpdateWorkRequest, WorkChanges, WorkListFilter,
    WorkPatchRequest, WorkResponse,
};
use studio_backend::errors::AppError;
use studio_backend::repositories::work::WorkRepository;
use studio_backend::use_cases::works::WorkHandler;
use test_utils::sample_work_response;

mock! {
    pub WorkRepo {}

    #[async_trait::async_trait]
    impl WorkRepository for WorkRepo {
        async fn list(&self, filter: &WorkListFilter) -> Result<Vec<WorkResponse>, AppError>;
        async fn get_by_id(&self, id: &Uuid) -> Result<Option<WorkResponse>, AppError>;
        async fn get_by_slug(&self, slug: &str, published_only: bool) -> Result<Option<WorkResponse>, AppError>;
        async fn slug_exists(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError>;
        async fn create(&self, changes: &WorkChanges, images: &[ImageInsert]) -> Result<WorkResponse, AppError>;
        async fn update(&self, id: &Uuid, changes: &WorkChanges, images: Option<Vec<ImageInsert>>) -> Result<WorkResponse, AppError>;
        async fn patch(&self, id: &Uuid, patch: &WorkPatchRequest) -> Result<WorkResponse, AppError>;
        async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
        async fn count(&self) -> Result<i64, AppError>;
    }
}

fn new_work_json(slug: Option<&str>) -> serde_json::Value {
    let mut value = serde_json::json!({
        "title_en": "Sunset Wedding",
        "title_zh_tw": "夕陽婚禮",
        "cover_image": "https://cdn.studio.com/covers/sunset.jpg",
        "images": [
            { "url": "https://cdn.studio.com/g/1.jpg", "alt": "first" },
            { "url": "https://cdn.studio.com/g/2.jpg" }
        ]
    });
    if let Some(slug) = slug {
        value["slug"] = serde_json::Value::String(slug.to_string());
    }
    value
}

#[tokio::test]
async fn create_work_generates_slug_from_english_title() {
    let mut repo = MockWorkRepo::new();
    repo.expect_slug_exists()
        .with(eq("sunset-wedding"), eq(None::<Uuid>))
        .returning(|_, _| Ok(false));
    repo.expect_create()
        .withf(|changes: &WorkChanges, images: &[ImageInsert]| {
            changes.slug == "sunset-wedding"
                && images.len() == 2
                && images[0].sort_order == 0
                && images[1].sort_order == 1
        })
        .returning(|changes, _| Ok(sample_work_response(&changes.slug)));

    let request: NewWorkRequest = serde_json::from_value(new_work_json(None)).unwrap();
    let work = WorkHandler::new(repo).create_work(request).await.unwrap();

    assert_eq!(work.work.slug, "sunset-wedding");
}

#[tokio::test]
async fn create_work_keeps_explicit_slug() {
    let mut repo = MockWorkRepo::new();
    repo.expect_slug_exists()
        .with(eq("golden-hour"), eq(None::<Uuid>))
        .returning(|_, _| Ok(false));
    repo.expect_create()
        .returning(|changes, _| Ok(sample_work_response(&changes.slug)));

    let request: NewWorkRequest =
        serde_json::from_value(new_work_json(Some("golden-hour"))).unwrap();
    let work = WorkHandler::new(repo).create_work(request).await.unwrap();

    assert_eq!(work.work.slug, "golden-hour");
}

#[tokio::test]
async fn create_work_rejects_duplicate_slug() {
    let mut repo = MockWorkRepo::new();
    repo.expect_slug_exists().returning(|_, _| Ok(true));

    let request: NewWorkRequest = serde_json::from_value(new_work_json(None)).unwrap();
    let result = WorkHandler::new(repo).create_work(request).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn create_work_rejects_bad_image_url() {
    let request: NewWorkRequest = serde_json::from_value(serde_json::json!({
        "title_en": "Sunset Wedding",
        "title_zh_tw": "夕陽婚禮",
        "cover_image": "https://cdn.studio.com/covers/sunset.jpg",
        "images": [{ "url": "ftp://cdn.studio.com/g/1.jpg" }]
    }))
    .unwrap();

    let result = WorkHandler::new(MockWorkRepo::new()).create_work(request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn update_work_without_images_keeps_gallery() {
    let existing = sample_work_response("sunset-wedding");
    let id = existing.work.id;

    let mut repo = MockWorkRepo::new();
    repo.expect_get_by_id()
        .returning(move |_| Ok(Some(sample_work_response("sunset-wedding"))));
    repo.expect_update()
        .withf(|_, changes, images| images.is_none() && changes.title_en == "Golden Hour")
        .returning(|_, changes, _| Ok(sample_work_response(&changes.slug)));

    let request: UpdateWorkRequest =
        serde_json::from_value(serde_json::json!({ "title_en": "Golden Hour" })).unwrap();

    assert!(WorkHandler::new(repo).update_work(&id, request).await.is_ok());
}

#[tokio::test]
async fn update_work_clears_omitted_optional_fields() {
    let id = Uuid::new_v4();
    let category_id = Uuid::new_v4();

    let mut repo = MockWorkRepo::new();
    repo.expect_get_by_id().returning(move |_| {
        let mut existing = sample_work_response("sunset-wedding");
        existing.work.location = Some("Taipei".to_string());
        existing.work.client = Some("The Lins".to_string());
        existing.work.category_id = Some(category_id);
        Ok(Some(existing))
    });
    repo.expect_update()
        .withf(|_, changes, _| {
            changes.location.is_none()
                && changes.client.is_none()
                && changes.category_id.is_none()
        })
        .returning(|_, changes, _| Ok(sample_work_response(&changes.slug)));

    // Full replacement: a null, an empty string, and an absent field all
    // clear the stored value.
    let request: UpdateWorkRequest = serde_json::from_value(serde_json::json!({
        "title_en": "Sunset Wedding",
        "location": null,
        "client": ""
    }))
    .unwrap();

    assert!(WorkHandler::new(repo).update_work(&id, request).await.is_ok());
}

#[tokio::test]
async fn patch_work_rejects_empty_body() {
    let result = WorkHandler::new(MockWorkRepo::new())
        .patch_work(&Uuid::new_v4(), WorkPatchRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn published_lookup_misses_drafts() {
    let mut repo = MockWorkRepo::new();
    repo.expect_get_by_slug()
        .with(eq("draft-shoot"), eq(true))
        .returning(|_, _| Ok(None));

    let result = WorkHandler::new(repo).get_published_work("draft-shoot").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
