use uuid::Uuid;
use validator::Validate;

use crate::entities::booking::{
    Booking, BookingNotification, BookingPatchRequest, BookingStatus, BookingWithService,
    NewBookingRequest,
};
use crate::errors::{AppError, FieldError};
use crate::repositories::booking::BookingRepository;
use crate::repositories::service::ServiceRepository;

pub struct BookingHandler<B, S>
where
    B: BookingRepository,
    S: ServiceRepository,
{
    pub booking_repo: B,
    pub service_repo: S,
}

impl<B, S> BookingHandler<B, S>
where
    B: BookingRepository,
    S: ServiceRepository,
{
    pub fn new(booking_repo: B, service_repo: S) -> Self {
        BookingHandler {
            booking_repo,
            service_repo,
        }
    }

    /// Stores the inquiry and prepares the notification payload. A
    /// service id that resolves to nothing is stored as a general
    /// inquiry rather than rejected.
    pub async fn create_booking(
        &self,
        request: NewBookingRequest,
    ) -> Result<(Booking, BookingNotification), AppError> {
        request.validate()?;

        let service = match request.service_id {
            Some(id) => self.service_repo.get_by_id(&id).await?,
            None => None,
        };

        let mut insert = request.prepare_for_insert();
        if service.is_none() {
            insert.service_id = None;
        }

        let booking = self.booking_repo.create(&insert).await?;

        let notification = BookingNotification {
            name: booking.name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            service_name: service.as_ref().map(|s| s.display_name().to_string()),
            preferred_date: booking.preferred_date,
            message: booking.message.clone(),
        };

        tracing::info!(booking_id = %booking.id, "Booking created");
        Ok((booking, notification))
    }

    pub async fn list_bookings(&self) -> Result<Vec<BookingWithService>, AppError> {
        self.booking_repo.list().await
    }

    pub async fn recent_bookings(&self, limit: i64) -> Result<Vec<BookingWithService>, AppError> {
        self.booking_repo.recent(limit).await
    }

    pub async fn get_booking(&self, id: &Uuid) -> Result<BookingWithService, AppError> {
        self.booking_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    pub async fn patch_booking(
        &self,
        id: &Uuid,
        patch: BookingPatchRequest,
    ) -> Result<Booking, AppError> {
        patch.validate()?;

        if patch.is_empty() {
            return Err(AppError::ValidationError(vec![FieldError {
                field: "body".to_string(),
                message: "At least one of status or notes is required".to_string(),
            }]));
        }

        self.booking_repo
            .update_status_notes(id, patch.status, patch.notes)
            .await
    }

    pub async fn delete_booking(&self, id: &Uuid) -> Result<(), AppError> {
        self.booking_repo.delete(id).await
    }

    pub async fn count_bookings(&self) -> Result<i64, AppError> {
        self.booking_repo.count().await
    }

    pub async fn count_new_bookings(&self) -> Result<i64, AppError> {
        self.booking_repo.count_by_status(BookingStatus::New).await
    }
}
