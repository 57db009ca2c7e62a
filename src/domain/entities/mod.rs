pub mod booking;
pub mod category;
pub mod service;
pub mod setting;
pub mod token;
pub mod user;
pub mod work;

/// Optional text columns store NULL, never empty strings.
pub(crate) fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
