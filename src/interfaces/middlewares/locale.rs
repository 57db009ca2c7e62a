use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    Error, HttpResponse,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::i18n::{self, Locale, LOCALE_COOKIE};

const PAGES_PREFIX: &str = "/api/v1/pages";

/// Redirects page requests missing a locale segment to their
/// negotiated locale, e.g. `/api/v1/pages/home` to
/// `/api/v1/pages/zh-TW/home`.
pub struct LocaleMiddleware;

impl<S> Transform<S, ServiceRequest> for LocaleMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = LocaleMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(LocaleMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct LocaleMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for LocaleMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if req.method() != Method::GET {
                return service.call(req).await;
            }

            let path = req.path().to_string();
            let Some(rest) = strip_pages_prefix(&path) else {
                return service.call(req).await;
            };

            if first_segment_is_locale(rest) {
                return service.call(req).await;
            }

            let cookie = req.cookie(LOCALE_COOKIE).map(|c| c.value().to_string());
            let accept_language = req
                .headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|h| h.to_str().ok())
                .map(str::to_string);

            let locale = i18n::negotiate(cookie.as_deref(), accept_language.as_deref());
            let location = redirect_target(rest, locale, req.query_string());

            tracing::debug!("Redirecting {} to {}", path, location);
            let response = HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, location))
                .finish();
            Ok(req.into_response(response))
        })
    }
}

fn strip_pages_prefix(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(PAGES_PREFIX)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

fn first_segment_is_locale(rest: &str) -> bool {
    let segment = rest.trim_start_matches('/').split('/').next().unwrap_or("");
    Locale::from_tag(segment).is_some()
}

fn redirect_target(rest: &str, locale: Locale, query: &str) -> String {
    let rest = rest.trim_end_matches('/');
    let mut target = format!("{}/{}{}", PAGES_PREFIX, locale, rest);
    if !query.is_empty() {
        target.push('?');
        target.push_str(query);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matching_is_segment_aware() {
        assert_eq!(strip_pages_prefix("/api/v1/pages"), Some(""));
        assert_eq!(strip_pages_prefix("/api/v1/pages/home"), Some("/home"));
        assert_eq!(strip_pages_prefix("/api/v1/pagesx"), None);
        assert_eq!(strip_pages_prefix("/api/v1/works"), None);
    }

    #[test]
    fn locale_segments_pass_through() {
        assert!(first_segment_is_locale("/en/home"));
        assert!(first_segment_is_locale("/zh-TW"));
        assert!(!first_segment_is_locale("/home"));
        assert!(!first_segment_is_locale(""));
    }

    #[test]
    fn redirect_preserves_path_and_query() {
        assert_eq!(
            redirect_target("/portfolio", Locale::En, "category=wedding"),
            "/api/v1/pages/en/portfolio?category=wedding"
        );
        assert_eq!(
            redirect_target("", Locale::ZhTw, ""),
            "/api/v1/pages/zh-TW"
        );
    }
}
