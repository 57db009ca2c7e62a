use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::work::{
    NewWorkRequest, UpdateWorkRequest, WorkListFilter, WorkPatchRequest,
};
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct WorksQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
}

impl WorksQuery {
    fn into_filter(self, published_only: bool) -> WorkListFilter {
        WorkListFilter {
            published_only,
            featured_only: self.featured.unwrap_or(false),
            category_slug: self.category,
            limit: self.limit,
        }
    }
}

/// Public portfolio listing; drafts never appear here.
#[get("/works")]
pub async fn list_works(
    state: web::Data<AppState>,
    query: web::Query<WorksQuery>,
) -> impl Responder {
    let filter = query.into_inner().into_filter(true);
    match state.work_handler.list_works(&filter).await {
        Ok(works) => HttpResponse::Ok().json(works),
        Err(e) => e.to_http_response(),
    }
}

#[get("/works/{slug}")]
pub async fn get_work_by_slug(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> impl Responder {
    match state.work_handler.get_published_work(&slug).await {
        Ok(work) => HttpResponse::Ok().json(work),
        Err(e) => e.to_http_response(),
    }
}

#[get("/works")]
pub async fn admin_list_works(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<WorksQuery>,
) -> impl Responder {
    let filter = query.into_inner().into_filter(false);
    match state.work_handler.list_works(&filter).await {
        Ok(works) => HttpResponse::Ok().json(works),
        Err(e) => e.to_http_response(),
    }
}

#[get("/works/{id}")]
pub async fn admin_get_work(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.work_handler.get_work(&id).await {
        Ok(work) => HttpResponse::Ok().json(work),
        Err(e) => e.to_http_response(),
    }
}

#[post("/works")]
pub async fn create_work(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    request: web::Json<NewWorkRequest>,
) -> impl Responder {
    match state.work_handler.create_work(request.into_inner()).await {
        Ok(work) => HttpResponse::Created().json(work),
        Err(e) => e.to_http_response(),
    }
}

#[put("/works/{id}")]
pub async fn update_work(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<UpdateWorkRequest>,
) -> impl Responder {
    match state
        .work_handler
        .update_work(&id, request.into_inner())
        .await
    {
        Ok(work) => HttpResponse::Ok().json(work),
        Err(e) => e.to_http_response(),
    }
}

/// Quick toggles from the admin list view.
#[patch("/works/{id}")]
pub async fn patch_work(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<WorkPatchRequest>,
) -> impl Responder {
    match state.work_handler.patch_work(&id, request.into_inner()).await {
        Ok(work) => HttpResponse::Ok().json(work),
        Err(e) => e.to_http_response(),
    }
}

#[delete("/works/{id}")]
pub async fn delete_work(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.work_handler.delete_work(&id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.to_http_response(),
    }
}
