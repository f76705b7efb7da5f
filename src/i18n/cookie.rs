//! Culture cookie codec.
//!
//! The cookie stores both halves of a culture choice as `c=fr|uic=fr`,
//! percent-encoded on the wire. A bare identifier (`fr`) is also accepted
//! when reading.

use chrono::{DateTime, Duration, Utc};

const CULTURE_PREFIX: &str = "c=";
const UI_CULTURE_PREFIX: &str = "uic=";
const SEPARATOR: char = '|';

/// How long a persisted culture choice lives.
pub const COOKIE_LIFETIME_DAYS: i64 = 365;

/// Culture and UI culture as read from a cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieCultures {
    pub culture: String,
    pub ui_culture: String,
}

/// Build the (unencoded) cookie value.
pub fn make_cookie_value(culture: &str, ui_culture: &str) -> String {
    format!(
        "{}{}{}{}{}",
        CULTURE_PREFIX, culture, SEPARATOR, UI_CULTURE_PREFIX, ui_culture
    )
}

/// Parse a raw cookie value (as found in the `Cookie` header).
///
/// # Returns
/// * `Some(CookieCultures)`; a half missing from the value copies the other
/// * `None` if the value is empty or carries nothing usable
pub fn parse_cookie_value(raw: &str) -> Option<CookieCultures> {
    let decoded = urlencoding::decode(raw.trim()).ok()?;
    let value = decoded.trim();
    if value.is_empty() {
        return None;
    }

    if !value.contains('=') {
        return Some(CookieCultures {
            culture: value.to_string(),
            ui_culture: value.to_string(),
        });
    }

    let mut culture = None;
    let mut ui_culture = None;
    for part in value.split(SEPARATOR) {
        let part = part.trim();
        if let Some(v) = part.strip_prefix(CULTURE_PREFIX) {
            culture = Some(v.trim().to_string()).filter(|s| !s.is_empty());
        } else if let Some(v) = part.strip_prefix(UI_CULTURE_PREFIX) {
            ui_culture = Some(v.trim().to_string()).filter(|s| !s.is_empty());
        }
    }

    let (culture, ui_culture) = match (culture, ui_culture) {
        (None, None) => return None,
        (Some(c), None) => (c.clone(), c),
        (None, Some(u)) => (u.clone(), u),
        (Some(c), Some(u)) => (c, u),
    };

    Some(CookieCultures {
        culture,
        ui_culture,
    })
}

/// Find a cookie's value in a `Cookie` request header.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Build a `Set-Cookie` header value persisting the given culture.
pub fn set_cookie_header(name: &str, culture: &str, ui_culture: &str, now: DateTime<Utc>) -> String {
    let expires = now + Duration::days(COOKIE_LIFETIME_DAYS);
    format!(
        "{}={}; Path=/; Expires={}; SameSite=Lax",
        name,
        urlencoding::encode(&make_cookie_value(culture, ui_culture)),
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_make_cookie_value() {
        assert_eq!(make_cookie_value("fr", "ar"), "c=fr|uic=ar");
    }

    #[test]
    fn test_parse_encoded_value() {
        let parsed = parse_cookie_value("c%3Dpt-br%7Cuic%3Dpt-br").expect("Should parse");
        assert_eq!(parsed.culture, "pt-br");
        assert_eq!(parsed.ui_culture, "pt-br");
    }

    #[test]
    fn test_parse_distinct_halves() {
        let parsed = parse_cookie_value("c=fr|uic=ar").unwrap();
        assert_eq!(parsed.culture, "fr");
        assert_eq!(parsed.ui_culture, "ar");
    }

    #[test]
    fn test_parse_one_half_fills_the_other() {
        let parsed = parse_cookie_value("uic=de").unwrap();
        assert_eq!(parsed.culture, "de");
        assert_eq!(parsed.ui_culture, "de");

        let parsed = parse_cookie_value("c=it|uic=").unwrap();
        assert_eq!(parsed.ui_culture, "it");
    }

    #[test]
    fn test_parse_bare_value() {
        let parsed = parse_cookie_value("fr").unwrap();
        assert_eq!(parsed.culture, "fr");
        assert_eq!(parsed.ui_culture, "fr");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_cookie_value("").is_none());
        assert!(parse_cookie_value("x=1|y=2").is_none());
        assert!(parse_cookie_value("c=|uic=").is_none());
    }

    #[test]
    fn test_find_cookie() {
        let header = "session=abc; .AspNetCore.Culture=c%3Dfr%7Cuic%3Dfr; theme=dark";
        assert_eq!(
            find_cookie(header, ".AspNetCore.Culture"),
            Some("c%3Dfr%7Cuic%3Dfr")
        );
        assert_eq!(find_cookie(header, "theme"), Some("dark"));
        assert_eq!(find_cookie(header, "missing"), None);
    }

    #[test]
    fn test_set_cookie_header() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let header = set_cookie_header(".AspNetCore.Culture", "tr", "tr", now);
        assert_eq!(
            header,
            ".AspNetCore.Culture=c%3Dtr%7Cuic%3Dtr; Path=/; Expires=Tue, 14 Jan 2025 12:00:00 GMT; SameSite=Lax"
        );
    }

    #[test]
    fn test_written_value_reads_back() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let header = set_cookie_header("lang", "pt-br", "pt-br", now);
        let pair = header.split(';').next().unwrap();
        let value = find_cookie(pair, "lang").unwrap();
        let parsed = parse_cookie_value(value).unwrap();
        assert_eq!(parsed.culture, "pt-br");
    }
}
