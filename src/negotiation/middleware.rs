use crate::config::NegotiationConfig;
use crate::i18n::{Locale, LocaleStrings, Resolution, ResolutionReason};
use crate::negotiation::{
    cookie_value, locale_cookie, negotiate, Negotiation, RequestSignals, ResponseAction,
};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, warn};

/// Axum middleware that negotiates the locale before any handler runs.
///
/// Install with `axum::middleware::from_fn_with_state`. Pass-through requests
/// carry the `Resolution` in their extensions for `CurrentLocale`.
pub async fn negotiate_locale(
    State(config): State<Arc<NegotiationConfig>>,
    mut request: Request,
    next: Next,
) -> Response {
    if config.scope.is_excluded(request.uri().path()) {
        return next.run(request).await;
    }

    let negotiation = {
        let headers = request.headers();
        let signals = RequestSignals {
            path: request.uri().path(),
            query: request.uri().query(),
            cookie_locale: cookie_value(headers, &config.cookie.name),
            accept_language: headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok()),
        };
        negotiate(&signals, &config)
    };

    let Negotiation {
        resolution,
        action,
        set_cookie,
    } = negotiation;

    debug!(
        "Resolved locale '{}' via {} for {}",
        resolution.locale(),
        resolution.reason(),
        request.uri().path()
    );

    let mut response = match action {
        ResponseAction::Redirect { location } => {
            debug!("Redirecting to {} to drop the locale override", location);
            // Built from the request's already-parsed path and query
            Redirect::temporary(&location).into_response()
        }
        ResponseAction::PassThrough => {
            request.extensions_mut().insert(resolution);
            next.run(request).await
        }
    };

    if let Some(locale) = set_cookie {
        match HeaderValue::from_str(&locale_cookie(&config.cookie, &locale)) {
            Ok(value) => {
                debug!("Persisting locale cookie '{}'", locale);
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Could not encode locale cookie: {}", e),
        }
    }

    response
}

/// Read accessor for the locale negotiated for the current request.
///
/// Requests that bypassed negotiation get the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLocale(pub Resolution);

impl CurrentLocale {
    pub fn locale(&self) -> &Locale {
        self.0.locale()
    }

    pub fn reason(&self) -> ResolutionReason {
        self.0.reason()
    }

    /// Localized copy for the current locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        LocaleStrings::for_locale(self.0.locale())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentLocale
where
    S: Send + Sync,
    Arc<NegotiationConfig>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(resolution) = parts.extensions.get::<Resolution>() {
            return Ok(CurrentLocale(resolution.clone()));
        }

        let config = Arc::<NegotiationConfig>::from_ref(state);
        Ok(CurrentLocale(Resolution::new(
            config.locales.default_locale().clone(),
            ResolutionReason::Default,
        )))
    }
}
