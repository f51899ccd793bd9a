//! Internationalization (i18n) module: locale negotiation and copy.
//!
//! # Architecture
//!
//! - `locale`: validated `Locale` identifiers and the `SupportedLocales` set
//! - `accept_language`: Accept-Language header parsing into ranked ranges
//! - `resolver`: merges query, cookie and header signals into a `Resolution`
//! - `strings`: localized page copy keyed by locale
//!
//! # Example
//!
//! ```rust
//! use locale_negotiator::i18n::{resolve, RawSignals, ResolutionReason, SupportedLocales};
//!
//! let locales = SupportedLocales::new(["en", "fr"], "en").unwrap();
//! let signals = RawSignals {
//!     cookie_locale: Some("en"),
//!     accept_language: Some("fr"),
//!     ..Default::default()
//! };
//!
//! let resolution = resolve(&signals, &locales);
//! assert_eq!(resolution.locale().as_str(), "en");
//! assert_eq!(resolution.reason(), ResolutionReason::Cookie);
//! ```

pub mod accept_language;
mod locale;
mod resolver;
mod strings;

pub use accept_language::{LanguageRange, LanguageRanges};
pub use locale::{Locale, SupportedLocales};
pub use resolver::{match_language_ranges, resolve, RawSignals, Resolution, ResolutionReason};
pub use strings::LocaleStrings;
