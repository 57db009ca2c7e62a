use actix_web::{error::ResponseError, get, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::setting::UpdateSettingsRequest;
use crate::errors::AuthError;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/settings")]
pub async fn get_settings(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.site_handler.site_settings_strict().await {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => e.to_http_response(),
    }
}

/// Saves the site settings and, when both password fields are present,
/// rotates the caller's password in the same request.
#[put("/settings")]
pub async fn update_settings(
    admin: AdminClaims,
    state: web::Data<AppState>,
    request: web::Json<UpdateSettingsRequest>,
) -> impl Responder {
    let caller_id = match Uuid::parse_str(&admin.0.sub) {
        Ok(id) => id,
        Err(_) => return AuthError::InvalidUserId.error_response(),
    };

    match state
        .site_handler
        .update_settings(&caller_id, request.into_inner())
        .await
    {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => e.to_http_response(),
    }
}
