use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::validate_slug;
use crate::entities::none_if_blank;
use crate::i18n::{pick, pick_opt, Locale};

const MAX_SLUG_LENGTH: u64 = 80;
const MAX_NAME_LENGTH: u64 = 100;
const MAX_DESCRIPTION_LENGTH: u64 = 1000;
const MAX_LABEL_LENGTH: u64 = 50;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: Uuid,
    pub slug: String,
    pub name_en: String,
    pub name_zh_tw: String,
    pub description_en: Option<String>,
    pub description_zh_tw: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub icon: Option<String>,
    pub active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// Display name for notification emails: zh-TW first, like the
    /// studio's own correspondence.
    pub fn display_name(&self) -> &str {
        pick(Locale::ZhTw, &self.name_en, &self.name_zh_tw)
    }

    pub fn localize(&self, locale: Locale) -> LocalizedService {
        LocalizedService {
            id: self.id,
            slug: self.slug.clone(),
            name: pick(locale, &self.name_en, &self.name_zh_tw).to_string(),
            description: pick_opt(
                locale,
                self.description_en.as_deref(),
                self.description_zh_tw.as_deref(),
            ),
            price: self.price.clone(),
            duration: self.duration.clone(),
            icon: self.icon.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceChanges {
    pub slug: String,
    pub name_en: String,
    pub name_zh_tw: String,
    pub description_en: Option<String>,
    pub description_zh_tw: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub icon: Option<String>,
    pub active: bool,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewServiceRequest {
    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name_en: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name_zh_tw: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_en: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_zh_tw: Option<String>,

    #[validate(length(max = MAX_LABEL_LENGTH))]
    pub price: Option<String>,

    #[validate(length(max = MAX_LABEL_LENGTH))]
    pub duration: Option<String>,

    #[validate(length(max = MAX_LABEL_LENGTH))]
    pub icon: Option<String>,

    #[serde(default = "default_true")]
    pub active: bool,

    #[serde(default)]
    pub sort_order: i32,
}

fn default_true() -> bool {
    true
}

impl NewServiceRequest {
    pub fn into_changes(self) -> ServiceChanges {
        ServiceChanges {
            slug: self.slug,
            name_en: self.name_en,
            name_zh_tw: self.name_zh_tw,
            description_en: self.description_en,
            description_zh_tw: self.description_zh_tw,
            price: self.price,
            duration: self.duration,
            icon: self.icon,
            active: self.active,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateServiceRequest {
    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name_en: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name_zh_tw: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_en: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_zh_tw: Option<String>,

    #[validate(length(max = MAX_LABEL_LENGTH))]
    pub price: Option<String>,

    #[validate(length(max = MAX_LABEL_LENGTH))]
    pub duration: Option<String>,

    #[validate(length(max = MAX_LABEL_LENGTH))]
    pub icon: Option<String>,

    pub active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl UpdateServiceRequest {
    /// Names fall back to the stored values when omitted; the optional
    /// fields are replaced outright, so an omitted or blank value
    /// clears them.
    pub fn apply_to(self, existing: &Service) -> ServiceChanges {
        ServiceChanges {
            slug: self.slug.unwrap_or_else(|| existing.slug.clone()),
            name_en: self.name_en.unwrap_or_else(|| existing.name_en.clone()),
            name_zh_tw: self.name_zh_tw.unwrap_or_else(|| existing.name_zh_tw.clone()),
            description_en: none_if_blank(self.description_en),
            description_zh_tw: none_if_blank(self.description_zh_tw),
            price: none_if_blank(self.price),
            duration: none_if_blank(self.duration),
            icon: none_if_blank(self.icon),
            active: self.active.unwrap_or(existing.active),
            sort_order: self.sort_order.unwrap_or(existing.sort_order),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocalizedService {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub icon: Option<String>,
}
