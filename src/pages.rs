//! Handlers that consume the negotiated locale.

use crate::config::NegotiationConfig;
use crate::i18n::{Locale, ResolutionReason};
use crate::negotiation::CurrentLocale;
use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use std::sync::Arc;

/// Landing page rendered in the negotiated locale.
pub async fn index(
    State(config): State<Arc<NegotiationConfig>>,
    current: CurrentLocale,
) -> Html<String> {
    let strings = current.strings();

    let switcher = config
        .locales
        .iter()
        .map(|locale| {
            format!(
                r#"<a href="/?{}={}" hreflang="{}">{}</a>"#,
                config.query_param, locale, locale, locale
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="{locale}">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<h1>{greeting}</h1>
<p>{current}</p>
<p>{reason}</p>
<nav>{switch_label} {switcher}</nav>
</body>
</html>"#,
        locale = current.locale(),
        title = strings.page_title,
        greeting = strings.greeting,
        current = strings
            .current_locale
            .replace("{locale}", current.locale().as_str()),
        reason = strings.reason(current.reason()),
        switch_label = strings.switch_locale,
        switcher = switcher,
    ))
}

#[derive(Debug, Serialize)]
pub struct LocaleInfo {
    pub locale: Locale,
    pub reason: ResolutionReason,
    pub supported: Vec<Locale>,
}

/// JSON view of the negotiated locale.
pub async fn locale_info(
    State(config): State<Arc<NegotiationConfig>>,
    current: CurrentLocale,
) -> Json<LocaleInfo> {
    Json(LocaleInfo {
        locale: current.locale().clone(),
        reason: current.reason(),
        supported: config.locales.iter().cloned().collect(),
    })
}

pub async fn robots() -> &'static str {
    "User-agent: *\nAllow: /\n"
}

pub async fn health() -> &'static str {
    "OK"
}
