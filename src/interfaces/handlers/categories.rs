use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::category::{NewCategoryRequest, UpdateCategoryRequest};
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

/// Public list, both languages included so the frontend can switch
/// without refetching.
#[get("/categories")]
pub async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    match state.catalog_handler.list_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => e.to_http_response(),
    }
}

#[get("/categories/{id}")]
pub async fn get_category(state: web::Data<AppState>, id: web::Path<Uuid>) -> impl Responder {
    match state.catalog_handler.get_category(&id).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(e) => e.to_http_response(),
    }
}

#[get("/categories")]
pub async fn admin_list_categories(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.catalog_handler.list_categories_with_counts().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => e.to_http_response(),
    }
}

#[get("/categories/{id}")]
pub async fn admin_get_category(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.catalog_handler.get_category(&id).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(e) => e.to_http_response(),
    }
}

#[post("/categories")]
pub async fn create_category(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    request: web::Json<NewCategoryRequest>,
) -> impl Responder {
    match state.catalog_handler.create_category(request.into_inner()).await {
        Ok(category) => HttpResponse::Created().json(category),
        Err(e) => e.to_http_response(),
    }
}

#[put("/categories/{id}")]
pub async fn update_category(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateCategoryRequest>,
) -> impl Responder {
    match state
        .catalog_handler
        .update_category(&id, request.into_inner())
        .await
    {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.catalog_handler.delete_category(&id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
