use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::booking::{BookingPatchRequest, NewBookingRequest};
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

/// Public contact-form submission. The notification email goes out on
/// a background task; a mail failure never fails the booking.
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<AppState>,
    request: web::Json<NewBookingRequest>,
) -> impl Responder {
    let (booking, notification) = match state
        .booking_handler
        .create_booking(request.into_inner())
        .await
    {
        Ok(created) => created,
        Err(e) => return e.to_http_response(),
    };

    if let Some(mailer) = state.mailer.clone() {
        tokio::spawn(async move {
            if let Err(e) = mailer.send_booking_notification(&notification).await {
                tracing::warn!("Failed to send booking notification: {}", e);
            }
        });
    }

    HttpResponse::Created().json(booking)
}

#[get("/bookings")]
pub async fn admin_list_bookings(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.booking_handler.list_bookings().await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(e) => e.to_http_response(),
    }
}

#[get("/bookings/{id}")]
pub async fn admin_get_booking(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.booking_handler.get_booking(&id).await {
        Ok(booking) => HttpResponse::Ok().json(booking),
        Err(e) => e.to_http_response(),
    }
}

#[patch("/bookings/{id}")]
pub async fn patch_booking(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<BookingPatchRequest>,
) -> impl Responder {
    match state
        .booking_handler
        .patch_booking(&id, request.into_inner())
        .await
    {
        Ok(booking) => HttpResponse::Ok().json(booking),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/bookings/{id}")]
pub async fn delete_booking(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.booking_handler.delete_booking(&id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
