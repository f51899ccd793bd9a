//! Configuration-time errors.
//!
//! Request-time negotiation never fails; these errors only surface while
//! building the immutable negotiation configuration at startup.

use thiserror::Error;

/// Errors raised while validating locale and negotiation settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("supported locale set is empty")]
    EmptyLocaleSet,

    #[error("invalid locale identifier: '{0}'")]
    InvalidLocale(String),

    #[error("default locale '{0}' is not in the supported locale set")]
    DefaultNotSupported(String),

    #[error("invalid cookie name: '{0}'")]
    InvalidCookieName(String),

    #[error("locale query parameter name must not be empty")]
    EmptyQueryParam,
}
