//! Reading and writing the persisted locale cookie.

use crate::config::CookieSettings;
use crate::i18n::Locale;
use axum::http::{header, HeaderMap};

/// Parse a specific cookie from a Cookie header string.
pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        (key.trim() == name).then(|| value.trim().trim_matches('"'))
    })
}

/// Read a cookie across every Cookie header of a request.
///
/// An empty value counts as absent.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|raw| parse_cookie(raw, name))
        .filter(|value| !value.is_empty())
}

/// Build the Set-Cookie header value persisting `locale`.
///
/// Not HttpOnly: client code reads it to drive UI locale switches.
pub fn locale_cookie(settings: &CookieSettings, locale: &Locale) -> String {
    let secure = if settings.secure { "; Secure" } else { "" };
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax{}",
        settings.name, locale, settings.max_age, secure
    )
}
