use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::entities::service::LocalizedService;
use crate::entities::work::{LocalizedWorkCard, WorkListFilter};
use crate::i18n::Locale;
use crate::AppState;

const FEATURED_LIMIT: i64 = 4;

/// List reads on public pages degrade to empty sections instead of
/// failing the whole page.
async fn localized_works(
    state: &web::Data<AppState>,
    locale: Locale,
    filter: &WorkListFilter,
) -> Vec<LocalizedWorkCard> {
    state
        .work_handler
        .list_works(filter)
        .await
        .map(|works| works.iter().map(|w| w.localize_card(locale)).collect())
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load works for page: {}", e);
            Vec::new()
        })
}

async fn localized_services(state: &web::Data<AppState>, locale: Locale) -> Vec<LocalizedService> {
    state
        .catalog_handler
        .list_services(true)
        .await
        .map(|services| services.iter().map(|s| s.localize(locale)).collect())
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load services for page: {}", e);
            Vec::new()
        })
}

fn unknown_locale() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Unsupported locale"
    }))
}

#[get("/{locale}")]
pub async fn home_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some(locale) = Locale::from_tag(&path) else {
        return unknown_locale();
    };

    let featured = WorkListFilter {
        published_only: true,
        featured_only: true,
        limit: Some(FEATURED_LIMIT),
        ..Default::default()
    };

    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale,
        "settings": state.site_handler.site_settings().await,
        "featured_works": localized_works(&state, locale, &featured).await,
        "services": localized_services(&state, locale).await,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
}

#[get("/{locale}/portfolio")]
pub async fn portfolio_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PortfolioQuery>,
) -> impl Responder {
    let Some(locale) = Locale::from_tag(&path) else {
        return unknown_locale();
    };

    let filter = WorkListFilter {
        published_only: true,
        category_slug: query.into_inner().category,
        ..Default::default()
    };

    let categories = state
        .catalog_handler
        .list_categories()
        .await
        .map(|categories| {
            categories
                .iter()
                .map(|c| c.localize(locale))
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load categories for page: {}", e);
            Vec::new()
        });

    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale,
        "categories": categories,
        "active_category": filter.category_slug,
        "works": localized_works(&state, locale, &filter).await,
    }))
}

/// Unlike the listing pages, a missing work is a real 404.
#[get("/{locale}/portfolio/{slug}")]
pub async fn portfolio_detail_page(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (locale_tag, slug) = path.into_inner();
    let Some(locale) = Locale::from_tag(&locale_tag) else {
        return unknown_locale();
    };

    match state.work_handler.get_published_work(&slug).await {
        Ok(work) => HttpResponse::Ok().json(serde_json::json!({
            "locale": locale,
            "work": work.localize_detail(locale),
        })),
        Err(e) => e.to_http_response(),
    }
}

#[get("/{locale}/services")]
pub async fn services_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some(locale) = Locale::from_tag(&path) else {
        return unknown_locale();
    };

    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale,
        "settings": state.site_handler.site_settings().await,
        "services": localized_services(&state, locale).await,
    }))
}

#[get("/{locale}/about")]
pub async fn about_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some(locale) = Locale::from_tag(&path) else {
        return unknown_locale();
    };

    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale,
        "settings": state.site_handler.site_settings().await,
    }))
}

/// Contact page carries the booking-form inputs: the service list and
/// the studio's own contact details.
#[get("/{locale}/contact")]
pub async fn contact_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some(locale) = Locale::from_tag(&path) else {
        return unknown_locale();
    };

    HttpResponse::Ok().json(serde_json::json!({
        "locale": locale,
        "settings": state.site_handler.site_settings().await,
        "services": localized_services(&state, locale).await,
    }))
}
