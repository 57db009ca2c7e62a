pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod extractors;
pub mod site;
pub mod works;
