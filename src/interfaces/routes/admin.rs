use actix_web::web;

use crate::handlers::{bookings, categories, dashboard, services, settings, works};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(dashboard::admin_dashboard)
            .service(works::admin_list_works)
            .service(works::admin_get_work)
            .service(works::create_work)
            .service(works::update_work)
            .service(works::patch_work)
            .service(works::delete_work)
            .service(categories::admin_list_categories)
            .service(categories::admin_get_category)
            .service(categories::create_category)
            .service(categories::update_category)
            .service(categories::delete_category)
            .service(services::admin_list_services)
            .service(services::admin_get_service)
            .service(services::create_service)
            .service(services::update_service)
            .service(services::delete_service)
            .service(bookings::admin_list_bookings)
            .service(bookings::admin_get_booking)
            .service(bookings::patch_booking)
            .service(bookings::delete_booking)
            .service(settings::get_settings)
            .service(settings::update_settings)
    );
}
