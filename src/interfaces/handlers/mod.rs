pub mod auth;
pub mod bookings;
pub mod categories;
pub mod dashboard;
pub mod home;
pub mod json_error;
pub mod pages;
pub mod services;
pub mod settings;
pub mod system;
pub mod works;
