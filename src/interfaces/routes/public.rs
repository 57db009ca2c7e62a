use actix_web::web;

use crate::handlers::{bookings, categories, services, works};

/// Visitor-facing JSON endpoints outside the page payloads.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::list_categories)
        .service(categories::get_category)
        .service(services::list_services)
        .service(works::list_works)
        .service(works::get_work_by_slug)
        .service(bookings::create_booking);
}
