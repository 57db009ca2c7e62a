use actix_web::web;

use crate::handlers::{home::home, json_error, system::health_check};

mod admin;
mod auth;
mod pages;
mod public;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(pages::config_routes)
            .configure(public::config_routes)
            .configure(auth::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
