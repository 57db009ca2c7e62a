use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::{validate_slug, validate_url};
use crate::entities::category::{Category, LocalizedCategory};
use crate::entities::none_if_blank;
use crate::i18n::{pick, pick_opt, Locale};

const MAX_SLUG_LENGTH: u64 = 80;
const MAX_TITLE_LENGTH: u64 = 150;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;
const MAX_TEXT_LENGTH: u64 = 150;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Work {
    pub id: Uuid,
    pub slug: String,
    pub title_en: String,
    pub title_zh_tw: String,
    pub description_en: Option<String>,
    pub description_zh_tw: Option<String>,
    pub cover_image: String,
    pub category_id: Option<Uuid>,
    pub shoot_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub client: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Image {
    pub id: Uuid,
    pub work_id: Uuid,
    pub url: String,
    pub alt: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ImageInsert {
    pub url: String,
    pub alt: Option<String>,
    pub sort_order: i32,
}

/// Portfolio entry with its category and gallery resolved.
#[derive(Debug, Serialize)]
pub struct WorkResponse {
    #[serde(flatten)]
    pub work: Work,
    pub category: Option<Category>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone)]
pub struct WorkChanges {
    pub slug: String,
    pub title_en: String,
    pub title_zh_tw: String,
    pub description_en: Option<String>,
    pub description_zh_tw: Option<String>,
    pub cover_image: String,
    pub category_id: Option<Uuid>,
    pub shoot_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub client: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewImageRequest {
    #[validate(custom(function = "validate_url"))]
    pub url: String,

    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewWorkRequest {
    /// Generated from the English title when omitted.
    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title_en: String,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title_zh_tw: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_en: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_zh_tw: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub cover_image: String,

    pub category_id: Option<Uuid>,
    pub shoot_date: Option<NaiveDate>,

    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub location: Option<String>,

    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub client: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default = "default_true")]
    pub published: bool,

    #[serde(default)]
    pub sort_order: i32,

    #[validate(nested)]
    pub images: Option<Vec<NewImageRequest>>,
}

fn default_true() -> bool {
    true
}

impl NewWorkRequest {
    pub fn gallery(&self) -> Vec<ImageInsert> {
        self.images
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, img)| ImageInsert {
                url: img.url.clone(),
                alt: img.alt.clone(),
                sort_order: index as i32,
            })
            .collect()
    }

    pub fn into_changes(self, slug: String) -> WorkChanges {
        WorkChanges {
            slug,
            title_en: self.title_en,
            title_zh_tw: self.title_zh_tw,
            description_en: self.description_en,
            description_zh_tw: self.description_zh_tw,
            cover_image: self.cover_image,
            category_id: self.category_id,
            shoot_date: self.shoot_date,
            location: self.location,
            client: self.client,
            featured: self.featured,
            published: self.published,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateWorkRequest {
    #[validate(
        length(min = 1, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title_en: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title_zh_tw: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_en: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description_zh_tw: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub cover_image: Option<String>,

    pub category_id: Option<Uuid>,
    pub shoot_date: Option<NaiveDate>,

    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub location: Option<String>,

    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub client: Option<String>,

    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,

    /// When present, replaces the stored gallery wholesale.
    #[validate(nested)]
    pub images: Option<Vec<NewImageRequest>>,
}

impl UpdateWorkRequest {
    pub fn gallery(&self) -> Option<Vec<ImageInsert>> {
        self.images.as_ref().map(|images| {
            images
                .iter()
                .enumerate()
                .map(|(index, img)| ImageInsert {
                    url: img.url.clone(),
                    alt: img.alt.clone(),
                    sort_order: index as i32,
                })
                .collect()
        })
    }

    /// Required fields fall back to the stored values when omitted;
    /// optional fields are replaced outright, so an omitted or blank
    /// value clears the column.
    pub fn apply_to(&self, existing: &Work) -> WorkChanges {
        WorkChanges {
            slug: self.slug.clone().unwrap_or_else(|| existing.slug.clone()),
            title_en: self.title_en.clone().unwrap_or_else(|| existing.title_en.clone()),
            title_zh_tw: self.title_zh_tw.clone().unwrap_or_else(|| existing.title_zh_tw.clone()),
            description_en: none_if_blank(self.description_en.clone()),
            description_zh_tw: none_if_blank(self.description_zh_tw.clone()),
            cover_image: self.cover_image.clone().unwrap_or_else(|| existing.cover_image.clone()),
            category_id: self.category_id,
            shoot_date: self.shoot_date,
            location: none_if_blank(self.location.clone()),
            client: none_if_blank(self.client.clone()),
            featured: self.featured.unwrap_or(existing.featured),
            published: self.published.unwrap_or(existing.published),
            sort_order: self.sort_order.unwrap_or(existing.sort_order),
        }
    }
}

/// Partial update for the admin list toggles.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct WorkPatchRequest {
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl WorkPatchRequest {
    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.published.is_none() && self.sort_order.is_none()
    }
}

/// Filters for work listings.
#[derive(Debug, Clone, Default)]
pub struct WorkListFilter {
    pub published_only: bool,
    pub featured_only: bool,
    pub category_slug: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LocalizedWorkCard {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: String,
    pub category: Option<LocalizedCategory>,
    pub shoot_date: Option<NaiveDate>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocalizedWorkDetail {
    #[serde(flatten)]
    pub card: LocalizedWorkCard,
    pub client: Option<String>,
    pub images: Vec<Image>,
}

impl WorkResponse {
    pub fn localize_card(&self, locale: Locale) -> LocalizedWorkCard {
        LocalizedWorkCard {
            id: self.work.id,
            slug: self.work.slug.clone(),
            title: pick(locale, &self.work.title_en, &self.work.title_zh_tw).to_string(),
            description: pick_opt(
                locale,
                self.work.description_en.as_deref(),
                self.work.description_zh_tw.as_deref(),
            ),
            cover_image: self.work.cover_image.clone(),
            category: self.category.as_ref().map(|c| c.localize(locale)),
            shoot_date: self.work.shoot_date,
            location: self.work.location.clone(),
        }
    }

    pub fn localize_detail(&self, locale: Locale) -> LocalizedWorkDetail {
        LocalizedWorkDetail {
            card: self.localize_card(locale),
            client: self.work.client.clone(),
            images: self.images.clone(),
        }
    }
}
