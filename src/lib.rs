mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod i18n;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, password, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, mail};

use auth::jwt::JwtService;
use mail::Mailer;
use repositories::sqlx_repo::{
    SqlxBookingRepo, SqlxCategoryRepo, SqlxServiceRepo, SqlxSettingRepo, SqlxUserRepo,
    SqlxWorkRepo,
};
use use_cases::auth::AuthHandler;
use use_cases::bookings::BookingHandler;
use use_cases::catalog::CatalogHandler;
use use_cases::site::SiteHandler;
use use_cases::works::WorkHandler;

/// Cookie the admin frontend stores the access token in; checked when
/// no Authorization header is present.
pub const TOKEN_COOKIE: &str = "studio_token";

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;
pub type AppCatalogHandler = CatalogHandler<SqlxCategoryRepo, SqlxServiceRepo>;
pub type AppWorkHandler = WorkHandler<SqlxWorkRepo>;
pub type AppBookingHandler = BookingHandler<SqlxBookingRepo, SqlxServiceRepo>;
pub type AppSiteHandler = SiteHandler<SqlxSettingRepo, SqlxUserRepo>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub catalog_handler: AppCatalogHandler,
    pub work_handler: AppWorkHandler,
    pub booking_handler: AppBookingHandler,
    pub site_handler: AppSiteHandler,
    pub mailer: Option<Mailer>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let auth_handler = AuthHandler::new(SqlxUserRepo::new(pool.clone()), jwt_service);
        let catalog_handler = CatalogHandler::new(
            SqlxCategoryRepo::new(pool.clone()),
            SqlxServiceRepo::new(pool.clone()),
        );
        let work_handler = WorkHandler::new(SqlxWorkRepo::new(pool.clone()));
        let booking_handler = BookingHandler::new(
            SqlxBookingRepo::new(pool.clone()),
            SqlxServiceRepo::new(pool.clone()),
        );
        let site_handler = SiteHandler::new(
            SqlxSettingRepo::new(pool.clone()),
            SqlxUserRepo::new(pool),
        );

        let mailer = match Mailer::from_config(config) {
            Some(Ok(mailer)) => Some(mailer),
            Some(Err(e)) => {
                tracing::error!("Mailer configuration error, notifications disabled: {}", e);
                None
            }
            None => {
                tracing::info!("SMTP not configured, booking notifications disabled");
                None
            }
        };

        AppState {
            auth_handler,
            catalog_handler,
            work_handler,
            booking_handler,
            site_handler,
            mailer,
        }
    }
}
