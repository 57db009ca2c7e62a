use actix_web::web;

use crate::handlers::pages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pages")
            .service(pages::home_page)
            .service(pages::portfolio_page)
            .service(pages::portfolio_detail_page)
            .service(pages::services_page)
            .service(pages::about_page)
            .service(pages::contact_page)
    );
}
