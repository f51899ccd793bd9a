use crate::error::LocaleError;
use crate::i18n::SupportedLocales;
use crate::negotiation::RouteScope;
use anyhow::{Context, Result};

/// One year, in seconds
pub const DEFAULT_COOKIE_MAX_AGE: u64 = 31_536_000;

pub const DEFAULT_QUERY_PARAM: &str = "lang";
pub const DEFAULT_COOKIE_NAME: &str = "locale";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Locale negotiation
    pub negotiation: NegotiationConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let supported = std::env::var("SUPPORTED_LOCALES").unwrap_or_else(|_| "en,fr".to_string());
        let default_locale = std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());
        let locales = SupportedLocales::new(split_list(&supported), &default_locale)
            .context("Invalid SUPPORTED_LOCALES / DEFAULT_LOCALE")?;

        let mut negotiation = NegotiationConfig::new(locales);

        if let Ok(param) = std::env::var("LOCALE_QUERY_PARAM") {
            negotiation = negotiation.with_query_param(param);
        }
        if let Ok(name) = std::env::var("LOCALE_COOKIE_NAME") {
            negotiation = negotiation.with_cookie_name(name);
        }
        if let Ok(secure) = std::env::var("LOCALE_COOKIE_SECURE") {
            let secure = secure
                .trim()
                .parse::<bool>()
                .context("LOCALE_COOKIE_SECURE must be 'true' or 'false'")?;
            negotiation = negotiation.with_secure_cookie(secure);
        }
        if let Ok(max_age) = std::env::var("LOCALE_COOKIE_MAX_AGE") {
            let max_age = max_age
                .trim()
                .parse::<u64>()
                .context("LOCALE_COOKIE_MAX_AGE must be a number of seconds")?;
            negotiation = negotiation.with_cookie_max_age(max_age);
        }
        if let Ok(paths) = std::env::var("LOCALE_EXCLUDED_PATHS") {
            negotiation = negotiation.with_route_scope(RouteScope::new(split_list(&paths)));
        }

        negotiation
            .validate()
            .context("Invalid locale negotiation settings")?;

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            negotiation,
        })
    }
}

/// Attributes of the persisted locale cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    /// Reserved cookie name
    pub name: String,
    /// Lifetime in seconds
    pub max_age: u64,
    /// Whether to add the `Secure` attribute
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            max_age: DEFAULT_COOKIE_MAX_AGE,
            // Plain-HTTP local development cannot store Secure cookies
            secure: !cfg!(debug_assertions),
        }
    }
}

/// Immutable settings shared by the resolver and the middleware.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct NegotiationConfig {
    /// Supported locales, including the default
    pub locales: SupportedLocales,
    /// Reserved query parameter carrying a locale override
    pub query_param: String,
    /// Persisted locale cookie
    pub cookie: CookieSettings,
    /// Paths that bypass negotiation
    pub scope: RouteScope,
}

impl NegotiationConfig {
    /// Create a configuration with the default parameter/cookie names and scope
    pub fn new(locales: SupportedLocales) -> Self {
        Self {
            locales,
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            cookie: CookieSettings::default(),
            scope: RouteScope::default(),
        }
    }

    /// Set the reserved query parameter name
    pub fn with_query_param(mut self, param: impl Into<String>) -> Self {
        self.query_param = param.into();
        self
    }

    /// Set the reserved cookie name
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie.name = name.into();
        self
    }

    /// Set whether the cookie carries the `Secure` attribute
    pub fn with_secure_cookie(mut self, secure: bool) -> Self {
        self.cookie.secure = secure;
        self
    }

    /// Set the cookie lifetime in seconds
    pub fn with_cookie_max_age(mut self, max_age: u64) -> Self {
        self.cookie.max_age = max_age;
        self
    }

    /// Set the paths that bypass negotiation
    pub fn with_route_scope(mut self, scope: RouteScope) -> Self {
        self.scope = scope;
        self
    }

    /// Check the reserved names are usable in a URL and a Set-Cookie header.
    pub fn validate(&self) -> Result<(), LocaleError> {
        if self.query_param.trim().is_empty() {
            return Err(LocaleError::EmptyQueryParam);
        }
        if !is_cookie_token(&self.cookie.name) {
            return Err(LocaleError::InvalidCookieName(self.cookie.name.clone()));
        }
        Ok(())
    }
}

/// RFC 6265 cookie-name token check.
fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

/// Split a comma-separated environment value, dropping blanks.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
