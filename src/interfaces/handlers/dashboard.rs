use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::entities::booking::BookingWithService;
use crate::errors::AppError;
use crate::repositories::category::CategoryRepository;
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

const RECENT_BOOKINGS: i64 = 5;

#[derive(Serialize)]
struct DashboardCounts {
    works: i64,
    categories: i64,
    bookings: i64,
    new_bookings: i64,
}

#[derive(Serialize)]
struct DashboardResponse {
    counts: DashboardCounts,
    recent_bookings: Vec<BookingWithService>,
}

async fn build_dashboard(state: &web::Data<AppState>) -> Result<DashboardResponse, AppError> {
    let counts = DashboardCounts {
        works: state.work_handler.count_works().await?,
        categories: state.catalog_handler.category_repo.count().await?,
        bookings: state.booking_handler.count_bookings().await?,
        new_bookings: state.booking_handler.count_new_bookings().await?,
    };

    let recent_bookings = state.booking_handler.recent_bookings(RECENT_BOOKINGS).await?;

    Ok(DashboardResponse {
        counts,
        recent_bookings,
    })
}

#[get("/dashboard")]
pub async fn admin_dashboard(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> impl Responder {
    match build_dashboard(&state).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}
