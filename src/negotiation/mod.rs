//! Per-request locale negotiation.
//!
//! The decision itself (`negotiate`) is a pure function from the request's
//! raw signals to a `Negotiation`: the resolved locale, the response action
//! and the cookie to write, if any. The axum middleware in `middleware` only
//! extracts the signals and applies the outcome.
//!
//! Side effects by resolution reason:
//! - `query`: redirect to the same URL without the reserved parameter and
//!   persist the locale on the redirect response
//! - `accept-language` with no incoming cookie: pass through and persist once
//! - anything else: pass through untouched

mod cookie;
mod middleware;
mod query;
mod scope;

pub use cookie::{cookie_value, locale_cookie, parse_cookie};
pub use middleware::{negotiate_locale, CurrentLocale};
pub use query::{redirect_location, split_query, QuerySplit};
pub use scope::{RouteScope, DEFAULT_EXCLUDED_PATHS};

use crate::config::NegotiationConfig;
use crate::i18n::{resolve, Locale, RawSignals, Resolution, ResolutionReason};

/// The raw inputs the middleware pulls out of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSignals<'a> {
    /// Request path, e.g. `/page`
    pub path: &'a str,
    /// Raw query string without the leading `?`
    pub query: Option<&'a str>,
    /// Value of the reserved locale cookie
    pub cookie_locale: Option<&'a str>,
    /// Raw Accept-Language header
    pub accept_language: Option<&'a str>,
}

/// What the middleware should do with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseAction {
    /// Hand the request to the downstream handler
    PassThrough,
    /// Answer with a redirect to `location`
    Redirect { location: String },
}

/// The outcome of negotiating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiation {
    pub resolution: Resolution,
    pub action: ResponseAction,
    /// Locale to persist in the cookie on the response
    pub set_cookie: Option<Locale>,
}

/// Decide the locale, response action and cookie write for one request.
///
/// # Example
/// ```
/// use locale_negotiator::config::NegotiationConfig;
/// use locale_negotiator::i18n::SupportedLocales;
/// use locale_negotiator::negotiation::{negotiate, RequestSignals, ResponseAction};
///
/// let config = NegotiationConfig::new(SupportedLocales::new(["en", "fr"], "en").unwrap());
/// let outcome = negotiate(
///     &RequestSignals { path: "/page", query: Some("lang=fr"), ..Default::default() },
///     &config,
/// );
///
/// assert_eq!(outcome.action, ResponseAction::Redirect { location: "/page".to_string() });
/// assert_eq!(outcome.set_cookie.unwrap().as_str(), "fr");
/// ```
pub fn negotiate(request: &RequestSignals<'_>, config: &NegotiationConfig) -> Negotiation {
    let query = split_query(request.query, &config.query_param);
    let cookie_locale = request.cookie_locale.filter(|value| !value.is_empty());

    let signals = RawSignals {
        query_locale: query.value.as_deref(),
        cookie_locale,
        accept_language: request.accept_language,
    };
    let resolution = resolve(&signals, &config.locales);

    let (action, set_cookie) = match resolution.reason() {
        ResolutionReason::Query => (
            ResponseAction::Redirect {
                location: redirect_location(request.path, query.remaining.as_deref()),
            },
            Some(resolution.locale().clone()),
        ),
        ResolutionReason::AcceptLanguage if cookie_locale.is_none() => (
            ResponseAction::PassThrough,
            Some(resolution.locale().clone()),
        ),
        ResolutionReason::AcceptLanguage | ResolutionReason::Cookie | ResolutionReason::Default => {
            (ResponseAction::PassThrough, None)
        }
    };

    Negotiation {
        resolution,
        action,
        set_cookie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SupportedLocales;

    fn config() -> NegotiationConfig {
        NegotiationConfig::new(SupportedLocales::new(["en", "fr"], "en").unwrap())
    }

    fn request<'a>(
        query: Option<&'a str>,
        cookie: Option<&'a str>,
        header: Option<&'a str>,
    ) -> RequestSignals<'a> {
        RequestSignals {
            path: "/page",
            query,
            cookie_locale: cookie,
            accept_language: header,
        }
    }

    fn cookie_code(outcome: &Negotiation) -> Option<&str> {
        outcome.set_cookie.as_ref().map(Locale::as_str)
    }

    // ==================== Query Override Tests ====================

    #[test]
    fn test_query_redirects_and_persists() {
        let outcome = negotiate(&request(Some("lang=fr"), Some("en"), None), &config());

        assert_eq!(outcome.resolution.reason(), ResolutionReason::Query);
        assert_eq!(
            outcome.action,
            ResponseAction::Redirect {
                location: "/page".to_string()
            }
        );
        assert_eq!(cookie_code(&outcome), Some("fr"));
    }

    #[test]
    fn test_query_redirect_keeps_other_params() {
        let outcome = negotiate(&request(Some("a=1&lang=FR&b=2"), None, None), &config());

        assert_eq!(
            outcome.action,
            ResponseAction::Redirect {
                location: "/page?a=1&b=2".to_string()
            }
        );
        assert_eq!(cookie_code(&outcome), Some("fr"));
    }

    #[test]
    fn test_unsupported_query_is_ignored() {
        let outcome = negotiate(&request(Some("lang=de"), None, None), &config());

        assert_eq!(outcome.resolution.reason(), ResolutionReason::Default);
        assert_eq!(outcome.action, ResponseAction::PassThrough);
        assert_eq!(outcome.set_cookie, None);
    }

    #[test]
    fn test_custom_query_param() {
        let config = config().with_query_param("hl");
        let outcome = negotiate(&request(Some("lang=fr&hl=fr"), None, None), &config);

        assert_eq!(
            outcome.action,
            ResponseAction::Redirect {
                location: "/page?lang=fr".to_string()
            }
        );
    }

    // ==================== Header Persistence Tests ====================

    #[test]
    fn test_header_match_without_cookie_persists() {
        let outcome = negotiate(&request(None, None, Some("fr, en;q=0.8")), &config());

        assert_eq!(outcome.resolution.locale().as_str(), "fr");
        assert_eq!(outcome.resolution.reason(), ResolutionReason::AcceptLanguage);
        assert_eq!(outcome.action, ResponseAction::PassThrough);
        assert_eq!(cookie_code(&outcome), Some("fr"));
    }

    #[test]
    fn test_header_match_with_stale_cookie_does_not_persist() {
        let outcome = negotiate(&request(None, Some("de"), Some("fr")), &config());

        assert_eq!(outcome.resolution.reason(), ResolutionReason::AcceptLanguage);
        assert_eq!(outcome.set_cookie, None);
    }

    #[test]
    fn test_empty_cookie_counts_as_absent() {
        let outcome = negotiate(&request(None, Some(""), Some("fr")), &config());
        assert_eq!(cookie_code(&outcome), Some("fr"));
    }

    // ==================== Pass-Through Tests ====================

    #[test]
    fn test_cookie_precedence_no_mutation() {
        let outcome = negotiate(&request(None, Some("en"), Some("fr;q=1.0")), &config());

        assert_eq!(outcome.resolution.locale().as_str(), "en");
        assert_eq!(outcome.resolution.reason(), ResolutionReason::Cookie);
        assert_eq!(outcome.action, ResponseAction::PassThrough);
        assert_eq!(outcome.set_cookie, None);
    }

    #[test]
    fn test_default_no_mutation() {
        let outcome = negotiate(&request(None, None, None), &config());

        assert_eq!(outcome.resolution.reason(), ResolutionReason::Default);
        assert_eq!(outcome.action, ResponseAction::PassThrough);
        assert_eq!(outcome.set_cookie, None);
    }

    #[test]
    fn test_persisted_cookie_is_never_rewritten() {
        for header in [None, Some("fr"), Some("en"), Some("*"), Some("de")] {
            let outcome = negotiate(&request(None, Some("fr"), header), &config());
            assert_eq!(outcome.set_cookie, None, "header {:?}", header);
            assert_eq!(outcome.resolution.reason(), ResolutionReason::Cookie);
        }
    }
}
