use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::validate_slug;
use crate::entities::none_if_blank;
use crate::i18n::{pick, pick_opt, Locale};

const MIN_SLUG_LENGTH: u64 = 1;
const MAX_SLUG_LENGTH: u64 = 80;
const MAX_NAME_LENGTH: u64 = 100;
const MAX_DESCRIPTION_LENGTH: u64 = 1000;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name_en: String,
    pub name_zh_tw: String,
    pub description_en: Option<String>,
    pub description_zh_tw: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin list row: category plus how many works reference it.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CategoryWithCount {
    pub id: Uuid,
    pub slug: String,
    pub name_en: String,
    pub name_zh_tw: String,
    pub description_en: Option<String>,
    pub description_zh_tw: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub work_count: i64,
}

/// Field set shared by create and full update.
#[derive(Debug, Clone)]
pub struct CategoryChanges {
    pub slug: String,
    pub name_en: String,
    pub name_zh_tw: String,
    pub description_en: Option<String>,
    pub description_zh_tw: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewCategoryRequest {
    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH),
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

    #[serde(default)]
    pub sort_order: i32,
}

impl NewCategoryRequest {
    pub fn into_changes(self) -> CategoryChanges {
        CategoryChanges {
            slug: self.slug,
            name_en: self.name_en,
            name_zh_tw: self.name_zh_tw,
            description_en: self.description_en,
            description_zh_tw: self.description_zh_tw,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateCategoryRequest {
    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH),
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

    pub sort_order: Option<i32>,
}

impl UpdateCategoryRequest {
    /// Names fall back to the stored values when omitted; descriptions
    /// are replaced outright, so an omitted or blank value clears them.
    pub fn apply_to(self, existing: &Category) -> CategoryChanges {
        CategoryChanges {
            slug: self.slug.unwrap_or_else(|| existing.slug.clone()),
            name_en: self.name_en.unwrap_or_else(|| existing.name_en.clone()),
            name_zh_tw: self.name_zh_tw.unwrap_or_else(|| existing.name_zh_tw.clone()),
            description_en: none_if_blank(self.description_en),
            description_zh_tw: none_if_blank(self.description_zh_tw),
            sort_order: self.sort_order.unwrap_or(existing.sort_order),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocalizedCategory {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn localize(&self, locale: Locale) -> LocalizedCategory {
        LocalizedCategory {
            id: self.id,
            slug: self.slug.clone(),
            name: pick(locale, &self.name_en, &self.name_zh_tw).to_string(),
            description: pick_opt(
                locale,
                self.description_en.as_deref(),
                self.description_zh_tw.as_deref(),
            ),
        }
    }
}
