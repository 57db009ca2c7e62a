mod test_utils;

use mockall::{mock, predicate::*};
use uuid::Uuid;

use studio_backend::entities::booking::{
    Booking, BookingInsert, BookingPatchRequest, BookingStatus, BookingWithService,
    NewBookingRequest,
};
use studio_backend::entities::service::{Service, ServiceChanges};
use studio_backend::errors::AppError;
use studio_backend::repositories::booking::BookingRepository;
use studio_backend::repositories::service::ServiceRepository;
use studio_backend::use_cases::bookings::BookingHandler;
use test_utils::{sample_booking, sample_service};

mock! {
    pub BookingRepo {}

    #[async_trait::async_trait]
    impl BookingRepository for BookingRepo {
        async fn create(&self, booking: &BookingInsert) -> Result<Booking, AppError>;
        async fn list(&self) -> Result<Vec<BookingWithService>, AppError>;
        async fn recent(&self, limit: i64) -> Result<Vec<BookingWithService>, AppError>;
        async fn get_by_id(&self, id: &Uuid) -> Result<Option<BookingWithService>, AppError>;
        async fn update_status_notes(&self, id: &Uuid, status: Option<BookingStatus>, notes: Option<String>) -> Result<Booking, AppError>;
        async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
        async fn count(&self) -> Result<i64, AppError>;
        async fn count_by_status(&self, status: BookingStatus) -> Result<i64, AppError>;
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

fn booking_request(service_id: Option<Uuid>) -> NewBookingRequest {
    let mut value = serde_json::json!({
        "name": "  Sarah Lin  ",
        "email": "sarah@example.com",
        "phone": "0912345678",
        "message": "We would like a summer session."
    });
    if let Some(id) = service_id {
        value["service_id"] = serde_json::Value::String(id.to_string());
    }
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn create_booking_trims_name_and_starts_as_new() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_create()
        .withf(|insert: &BookingInsert| {
            insert.name == "Sarah Lin" && insert.status == BookingStatus::New
        })
        .returning(|insert| {
            let mut booking = sample_booking(insert.service_id);
            booking.name = insert.name.clone();
            Ok(booking)
        });

    let handler = BookingHandler::new(bookings, MockServiceRepo::new());
    let (booking, _) = handler.create_booking(booking_request(None)).await.unwrap();

    assert_eq!(booking.name, "Sarah Lin");
    assert_eq!(booking.status, BookingStatus::New);
}

#[tokio::test]
async fn create_booking_notification_uses_chinese_service_name() {
    let service = sample_service("wedding-photography");
    let service_id = service.id;

    let mut services = MockServiceRepo::new();
    services
        .expect_get_by_id()
        .with(eq(service_id))
        .returning(move |_| Ok(Some(service.clone())));

    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_create()
        .returning(|insert| Ok(sample_booking(insert.service_id)));

    let handler = BookingHandler::new(bookings, services);
    let (_, notification) = handler
        .create_booking(booking_request(Some(service_id)))
        .await
        .unwrap();

    assert_eq!(notification.service_name.as_deref(), Some("婚禮攝影"));
}

#[tokio::test]
async fn create_booking_with_unknown_service_becomes_general_inquiry() {
    let mut services = MockServiceRepo::new();
    services.expect_get_by_id().returning(|_| Ok(None));

    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_create()
        .withf(|insert: &BookingInsert| insert.service_id.is_none())
        .returning(|insert| Ok(sample_booking(insert.service_id)));

    let handler = BookingHandler::new(bookings, services);
    let (booking, notification) = handler
        .create_booking(booking_request(Some(Uuid::new_v4())))
        .await
        .unwrap();

    assert!(booking.service_id.is_none());
    assert!(notification.service_name.is_none());
}

#[tokio::test]
async fn create_booking_rejects_short_message() {
    let request: NewBookingRequest = serde_json::from_value(serde_json::json!({
        "name": "Sarah Lin",
        "email": "sarah@example.com",
        "message": "hi"
    }))
    .unwrap();

    let handler = BookingHandler::new(MockBookingRepo::new(), MockServiceRepo::new());
    let result = handler.create_booking(request).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn patch_booking_rejects_empty_body() {
    let handler = BookingHandler::new(MockBookingRepo::new(), MockServiceRepo::new());
    let result = handler
        .patch_booking(&Uuid::new_v4(), BookingPatchRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn patch_booking_forwards_status_and_notes() {
    let id = Uuid::new_v4();

    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_update_status_notes()
        .withf(move |patch_id, status, notes| {
            *patch_id == id
                && *status == Some(BookingStatus::Contacted)
                && notes.as_deref() == Some("Called back on Monday")
        })
        .returning(|_, status, _| {
            let mut booking = sample_booking(None);
            booking.status = status.unwrap_or_default();
            Ok(booking)
        });

    let request: BookingPatchRequest = serde_json::from_value(serde_json::json!({
        "status": "contacted",
        "notes": "Called back on Monday"
    }))
    .unwrap();

    let handler = BookingHandler::new(bookings, MockServiceRepo::new());
    let booking = handler.patch_booking(&id, request).await.unwrap();

    assert_eq!(booking.status, BookingStatus::Contacted);
}

#[tokio::test]
async fn new_booking_count_filters_by_status() {
    let mut bookings = MockBookingRepo::new();
    bookings
        .expect_count_by_status()
        .with(eq(BookingStatus::New))
        .returning(|_| Ok(3));

    let handler = BookingHandler::new(bookings, MockServiceRepo::new());
    assert_eq!(handler.count_new_bookings().await.unwrap(), 3);
}
