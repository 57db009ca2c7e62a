use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Lowercase alphanumerics separated by single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        let mut error = ValidationError::new("slug_format");
        error.message = Some("Slug must be lowercase letters, digits, and hyphens".into());
        Err(error)
    }
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        let mut error = ValidationError::new("url_format");
        error.message = Some("Must be an http(s) URL".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        for slug in ["wedding", "wedding-photography", "a1-b2-c3"] {
            assert!(validate_slug(slug).is_ok(), "{slug} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        for slug in ["", "Wedding", "double--hyphen", "-leading", "trailing-", "spa ce", "中文"] {
            assert!(validate_slug(slug).is_err(), "{slug} should be rejected");
        }
    }

    #[test]
    fn url_must_have_http_scheme() {
        assert!(validate_url("https://images.example.com/a.jpg").is_ok());
        assert!(validate_url("ftp://images.example.com/a.jpg").is_err());
        assert!(validate_url("images/a.jpg").is_err());
    }
}
