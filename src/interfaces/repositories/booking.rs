use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    entities::booking::{Booking, BookingInsert, BookingStatus, BookingWithService},
    entities::service::Service,
    errors::AppError,
    repositories::sqlx_repo::SqlxBookingRepo,
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &BookingInsert) -> Result<Booking, AppError>;
    async fn list(&self) -> Result<Vec<BookingWithService>, AppError>;
    async fn recent(&self, limit: i64) -> Result<Vec<BookingWithService>, AppError>;
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<BookingWithService>, AppError>;
    async fn update_status_notes(
        &self,
        id: &Uuid,
        status: Option<BookingStatus>,
        notes: Option<String>,
    ) -> Result<Booking, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn count_by_status(&self, status: BookingStatus) -> Result<i64, AppError>;
}

impl SqlxBookingRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxBookingRepo { pool }
    }

    async fn with_services(&self, bookings: Vec<Booking>) -> Result<Vec<BookingWithService>, AppError> {
        let service_ids: Vec<Uuid> = bookings.iter().filter_map(|b| b.service_id).collect();

        let services: Vec<Service> = if service_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = ANY($1)")
                .bind(&service_ids)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::from)?
        };

        let services_by_id: HashMap<Uuid, Service> =
            services.into_iter().map(|s| (s.id, s)).collect();

        Ok(bookings
            .into_iter()
            .map(|booking| {
                let service = booking.service_id.and_then(|id| services_by_id.get(&id).cloned());
                BookingWithService { booking, service }
            })
            .collect())
    }
}

#[async_trait]
impl BookingRepository for SqlxBookingRepo {
    async fn create(&self, booking: &BookingInsert) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (name, email, phone, service_id, preferred_date, message, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(booking.service_id)
        .bind(booking.preferred_date)
        .bind(&booking.message)
        .bind(booking.status)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list(&self) -> Result<Vec<BookingWithService>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        self.with_services(bookings).await
    }

    async fn recent(&self, limit: i64) -> Result<Vec<BookingWithService>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        self.with_services(bookings).await
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<BookingWithService>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        match booking {
            Some(booking) => Ok(self.with_services(vec![booking]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    async fn update_status_notes(
        &self,
        id: &Uuid,
        status: Option<BookingStatus>,
        notes: Option<String>,
    ) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = COALESCE($2, status),
                notes = COALESCE($3, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn count_by_status(&self, status: BookingStatus) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
    }
}
