use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::entities::service::{NewServiceRequest, UpdateServiceRequest};
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/services")]
pub async fn list_services(state: web::Data<AppState>) -> impl Responder {
    match state.catalog_handler.list_services(true).await {
        Ok(services) => HttpResponse::Ok().json(services),
        Err(e) => e.to_http_response(),
    }
}

/// Admin list includes inactive services.
#[get("/services")]
pub async fn admin_list_services(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.catalog_handler.list_services(false).await {
        Ok(services) => HttpResponse::Ok().json(services),
        Err(e) => e.to_http_response(),
    }
}

#[get("/services/{id}")]
pub async fn admin_get_service(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.catalog_handler.get_service(&id).await {
        Ok(service) => HttpResponse::Ok().json(service),
        Err(e) => e.to_http_response(),
    }
}

#[post("/services")]
pub async fn create_service(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    request: web::Json<NewServiceRequest>,
) -> impl Responder {
    match state.catalog_handler.create_service(request.into_inner()).await {
        Ok(service) => HttpResponse::Created().json(service),
        Err(e) => e.to_http_response(),
    }
}

#[put("/services/{id}")]
pub async fn update_service(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateServiceRequest>,
) -> impl Responder {
    match state
        .catalog_handler
        .update_service(&id, request.into_inner())
        .await
    {
        Ok(service) => HttpResponse::Ok().json(service),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/services/{id}")]
pub async fn delete_service(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.catalog_handler.delete_service(&id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
