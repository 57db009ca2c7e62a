use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::password::validate_password_strength;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

pub const SITE_NAME: &str = "site_name";
pub const SITE_EMAIL: &str = "site_email";
pub const SITE_PHONE: &str = "site_phone";
pub const SITE_ADDRESS: &str = "site_address";
pub const INSTAGRAM: &str = "instagram";
pub const FACEBOOK: &str = "facebook";

/// Site-wide configuration shown on public pages. Every field has a
/// default used when the row is missing or the read fails.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_email: String,
    pub site_phone: String,
    pub site_address: String,
    pub instagram: String,
    pub facebook: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_name: "Studio".to_string(),
            site_email: "contact@studio.com".to_string(),
            site_phone: "+886 912 345 678".to_string(),
            site_address: "台北市信義區".to_string(),
            instagram: String::new(),
            facebook: String::new(),
        }
    }
}

impl SiteSettings {
    /// Merges stored key/value rows over the defaults. Unknown keys are
    /// ignored; empty values fall back to the default.
    pub fn from_rows(rows: &[Setting]) -> Self {
        let mut settings = SiteSettings::default();

        for row in rows {
            let value = row.value.trim();
            if value.is_empty() && row.key != INSTAGRAM && row.key != FACEBOOK {
                continue;
            }
            match row.key.as_str() {
                SITE_NAME => settings.site_name = row.value.clone(),
                SITE_EMAIL => settings.site_email = row.value.clone(),
                SITE_PHONE => settings.site_phone = row.value.clone(),
                SITE_ADDRESS => settings.site_address = row.value.clone(),
                INSTAGRAM => settings.instagram = row.value.clone(),
                FACEBOOK => settings.facebook = row.value.clone(),
                _ => {}
            }
        }

        settings
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 100))]
    pub site_name: String,

    #[validate(email)]
    pub site_email: String,

    #[validate(length(max = 50))]
    pub site_phone: String,

    #[validate(length(max = 200))]
    pub site_address: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub instagram: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub facebook: String,

    pub current_password: Option<String>,

    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: Option<String>,
}

impl UpdateSettingsRequest {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            (SITE_NAME.to_string(), self.site_name.clone()),
            (SITE_EMAIL.to_string(), self.site_email.clone()),
            (SITE_PHONE.to_string(), self.site_phone.clone()),
            (SITE_ADDRESS.to_string(), self.site_address.clone()),
            (INSTAGRAM.to_string(), self.instagram.clone()),
            (FACEBOOK.to_string(), self.facebook.clone()),
        ]
    }

    pub fn wants_password_change(&self) -> bool {
        self.new_password.is_some() && self.current_password.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: &str) -> Setting {
        Setting {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn defaults_when_no_rows() {
        let settings = SiteSettings::from_rows(&[]);
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn stored_rows_override_defaults() {
        let rows = vec![
            row(SITE_NAME, "Lumen Studio"),
            row(INSTAGRAM, "https://instagram.com/lumen"),
        ];
        let settings = SiteSettings::from_rows(&rows);
        assert_eq!(settings.site_name, "Lumen Studio");
        assert_eq!(settings.instagram, "https://instagram.com/lumen");
        assert_eq!(settings.site_email, SiteSettings::default().site_email);
    }

    #[test]
    fn empty_values_keep_defaults_except_socials() {
        let rows = vec![row(SITE_NAME, "  "), row(INSTAGRAM, "")];
        let settings = SiteSettings::from_rows(&rows);
        assert_eq!(settings.site_name, "Studio");
        assert_eq!(settings.instagram, "");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let rows = vec![row("theme", "dark")];
        assert_eq!(SiteSettings::from_rows(&rows), SiteSettings::default());
    }
}
