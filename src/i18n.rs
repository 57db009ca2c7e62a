use std::fmt;

use serde::{Deserialize, Serialize};

/// Cookie consulted before `Accept-Language` when negotiating a locale.
pub const LOCALE_COOKIE: &str = "locale";

/// UI languages served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::ZhTw];
pub const DEFAULT_LOCALE: Locale = Locale::ZhTw;

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhTw => "zh-TW",
        }
    }

    /// Exact tag match only ("en", "zh-TW").
    pub fn from_tag(tag: &str) -> Option<Self> {
        SUPPORTED_LOCALES.iter().copied().find(|l| l.as_str() == tag)
    }

    /// Matches a language tag exactly, or by its primary subtag
    /// ("en-US" -> en, "zh" -> zh-TW).
    pub fn matching(tag: &str) -> Option<Self> {
        if let Some(locale) = Self::from_tag(tag) {
            return Some(locale);
        }
        let primary = tag.split('-').next()?.to_ascii_lowercase();
        SUPPORTED_LOCALES
            .iter()
            .copied()
            .find(|l| l.as_str().split('-').next() == Some(primary.as_str()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the locale for a request with no locale path segment:
/// cookie first, then `Accept-Language`, then the site default.
pub fn negotiate(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = cookie.and_then(Locale::from_tag) {
        return locale;
    }

    if let Some(header) = accept_language {
        let preferred = header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .find_map(Locale::matching);

        if let Some(locale) = preferred {
            return locale;
        }
    }

    DEFAULT_LOCALE
}

/// Picks the text for `locale`, falling back to the other language
/// when the requested one is empty.
pub fn pick<'a>(locale: Locale, en: &'a str, zh_tw: &'a str) -> &'a str {
    let (primary, fallback) = match locale {
        Locale::En => (en, zh_tw),
        Locale::ZhTw => (zh_tw, en),
    };
    if primary.trim().is_empty() { fallback } else { primary }
}

/// `pick` over optional columns. Returns `None` only when both sides are absent.
pub fn pick_opt(locale: Locale, en: Option<&str>, zh_tw: Option<&str>) -> Option<String> {
    let (primary, fallback) = match locale {
        Locale::En => (en, zh_tw),
        Locale::ZhTw => (zh_tw, en),
    };
    primary
        .filter(|s| !s.trim().is_empty())
        .or(fallback.filter(|s| !s.trim().is_empty()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_tags_parse() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh-TW"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag("zh"), None);
    }

    #[test]
    fn primary_subtag_matches() {
        assert_eq!(Locale::matching("en-US"), Some(Locale::En));
        assert_eq!(Locale::matching("zh"), Some(Locale::ZhTw));
        assert_eq!(Locale::matching("zh-HK"), Some(Locale::ZhTw));
        assert_eq!(Locale::matching("ja"), None);
    }

    #[test]
    fn cookie_wins_over_header() {
        let locale = negotiate(Some("en"), Some("zh-TW,zh;q=0.9"));
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn invalid_cookie_falls_through_to_header() {
        let locale = negotiate(Some("de"), Some("en-GB,en;q=0.8"));
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn header_quality_values_are_stripped() {
        let locale = negotiate(None, Some("fr-FR,fr;q=0.9,zh-TW;q=0.8"));
        assert_eq!(locale, Locale::ZhTw);
    }

    #[test]
    fn default_when_nothing_matches() {
        assert_eq!(negotiate(None, None), Locale::ZhTw);
        assert_eq!(negotiate(Some("xx"), Some("fr,de")), Locale::ZhTw);
    }

    #[test]
    fn pick_falls_back_on_empty_text() {
        assert_eq!(pick(Locale::En, "Wedding", "婚禮"), "Wedding");
        assert_eq!(pick(Locale::ZhTw, "Wedding", "婚禮"), "婚禮");
        assert_eq!(pick(Locale::ZhTw, "Wedding", ""), "Wedding");
        assert_eq!(pick(Locale::En, "  ", "婚禮"), "婚禮");
    }

    #[test]
    fn pick_opt_prefers_requested_language() {
        assert_eq!(
            pick_opt(Locale::ZhTw, Some("desc"), Some("描述")),
            Some("描述".to_string())
        );
        assert_eq!(
            pick_opt(Locale::ZhTw, Some("desc"), None),
            Some("desc".to_string())
        );
        assert_eq!(pick_opt(Locale::En, None, None), None);
    }
}
