use actix_web::{error::ResponseError, get, post, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::token::RefreshTokenRequest;
use crate::entities::user::{LoginUser, NewUser};
use crate::errors::AuthError;
use crate::use_cases::extractors::{AdminClaims, AuthClaims};
use crate::AppState;

/// Admin-only: the first account is seeded out of band, further
/// accounts are created by an existing admin.
#[post("/register")]
pub async fn register(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    user: web::Json<NewUser>
) -> impl Responder {
    match state.auth_handler.register(user.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => e.to_http_response(),
    }
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>
) -> impl Responder {
    match state.auth_handler.login(user.into_inner()).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => e.error_response(),
    }
}

#[post("/refresh-token")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> impl Responder {
    match state.auth_handler.refresh_token(&request.refresh_token).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => e.error_response(),
    }
}

#[get("/me")]
pub async fn me(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    let user_id = match Uuid::parse_str(&claims.0.sub) {
        Ok(id) => id,
        Err(_) => return AuthError::InvalidUserId.error_response(),
    };

    match state.auth_handler.me(&user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => e.to_http_response(),
    }
}
