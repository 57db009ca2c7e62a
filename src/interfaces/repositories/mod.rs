pub mod booking;
pub mod category;
pub mod service;
pub mod setting;
pub mod sqlx_repo;
pub mod token;
pub mod user;
pub mod work;
