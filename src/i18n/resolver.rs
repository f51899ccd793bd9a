//! Locale resolution: merges the per-request signals into one locale.
//!
//! Precedence, highest first:
//! 1. the reserved query parameter
//! 2. the persisted locale cookie
//! 3. the Accept-Language header
//! 4. the configured default
//!
//! A signal that is missing or names an unsupported locale is skipped, so
//! resolution always succeeds.

use crate::i18n::accept_language::{self, LanguageRanges};
use crate::i18n::{Locale, SupportedLocales};
use serde::Serialize;
use std::fmt;

/// The raw, untrusted inputs to a single resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSignals<'a> {
    /// Value of the reserved query parameter
    pub query_locale: Option<&'a str>,
    /// Value of the reserved locale cookie
    pub cookie_locale: Option<&'a str>,
    /// Raw Accept-Language header text
    pub accept_language: Option<&'a str>,
}

/// Which signal decided the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionReason {
    Query,
    Cookie,
    AcceptLanguage,
    Default,
}

impl ResolutionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionReason::Query => "query",
            ResolutionReason::Cookie => "cookie",
            ResolutionReason::AcceptLanguage => "accept-language",
            ResolutionReason::Default => "default",
        }
    }
}

impl fmt::Display for ResolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The negotiated locale and the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    locale: Locale,
    reason: ResolutionReason,
}

impl Resolution {
    pub fn new(locale: Locale, reason: ResolutionReason) -> Self {
        Self { locale, reason }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn reason(&self) -> ResolutionReason {
        self.reason
    }
}

/// Resolve the locale for one request.
///
/// Pure and deterministic: the same signals and supported set always produce
/// the same resolution.
///
/// # Example
/// ```
/// use locale_negotiator::i18n::{resolve, RawSignals, ResolutionReason, SupportedLocales};
///
/// let locales = SupportedLocales::new(["en", "fr"], "en").unwrap();
/// let signals = RawSignals {
///     accept_language: Some("fr;q=0.2, en-US;q=0.9"),
///     ..Default::default()
/// };
///
/// let resolution = resolve(&signals, &locales);
/// assert_eq!(resolution.locale().as_str(), "fr");
/// assert_eq!(resolution.reason(), ResolutionReason::AcceptLanguage);
/// ```
pub fn resolve(signals: &RawSignals<'_>, supported: &SupportedLocales) -> Resolution {
    if let Some(locale) = signals.query_locale.and_then(|code| supported.find(code)) {
        return Resolution::new(locale.clone(), ResolutionReason::Query);
    }

    if let Some(locale) = signals.cookie_locale.and_then(|code| supported.find(code)) {
        return Resolution::new(locale.clone(), ResolutionReason::Cookie);
    }

    let ranges = accept_language::parse(signals.accept_language);
    if let Some(locale) = match_language_ranges(&ranges, supported) {
        return Resolution::new(locale.clone(), ResolutionReason::AcceptLanguage);
    }

    Resolution::new(supported.default_locale().clone(), ResolutionReason::Default)
}

/// Find the best supported locale for ranked language ranges.
///
/// Exact tag matches are tried across the whole list before primary-subtag
/// matches, so `fr;q=0.2` beats `en-US;q=0.9` when only `en` and `fr` are
/// supported. A wildcard selects the default locale, and only after every
/// concrete range has failed to match. Ranges with zero quality never match.
pub fn match_language_ranges<'s>(
    ranges: &LanguageRanges,
    supported: &'s SupportedLocales,
) -> Option<&'s Locale> {
    let acceptable = || {
        ranges
            .iter()
            .filter(|range| range.quality() > 0.0 && !range.is_wildcard())
    };

    acceptable()
        .find_map(|range| supported.find(range.tag()))
        .or_else(|| acceptable().find_map(|range| supported.find(range.primary_subtag())))
        .or_else(|| {
            ranges
                .iter()
                .any(|range| range.is_wildcard() && range.quality() > 0.0)
                .then(|| supported.default_locale())
        })
}
