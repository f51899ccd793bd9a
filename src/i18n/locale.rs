//! Locale identifiers and the fixed set of locales the site is served in.
//!
//! A `SupportedLocales` value is built once at startup and never changes for
//! the lifetime of the process. Every locale the negotiation returns is a
//! member of that set.

use crate::error::LocaleError;
use serde::Serialize;
use std::fmt;

/// A validated, lowercase locale identifier (e.g. "en", "fr", "pt-br").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Parse a locale identifier.
    ///
    /// Identifiers are ASCII letters, digits and inner hyphens. They are
    /// normalised to lowercase so comparisons downstream are case-insensitive.
    ///
    /// # Returns
    /// * `Ok(Locale)` for a well-formed identifier
    /// * `Err(LocaleError::InvalidLocale)` otherwise
    pub fn parse(code: &str) -> Result<Locale, LocaleError> {
        let code = code.trim();
        let well_formed = !code.is_empty()
            && !code.starts_with('-')
            && !code.ends_with('-')
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

        if !well_formed {
            return Err(LocaleError::InvalidLocale(code.to_string()));
        }

        Ok(Locale(code.to_ascii_lowercase()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, non-empty set of supported locales with a designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
    locales: Vec<Locale>,
    /// Index of the default locale in `locales`
    default: usize,
}

impl SupportedLocales {
    /// Build the supported set from locale codes and the default code.
    ///
    /// Order is preserved and later duplicates are dropped.
    ///
    /// # Example
    /// ```
    /// use locale_negotiator::i18n::SupportedLocales;
    ///
    /// let locales = SupportedLocales::new(["en", "fr"], "en").unwrap();
    /// assert_eq!(locales.default_locale().as_str(), "en");
    /// assert!(locales.contains("FR"));
    /// ```
    pub fn new<I, S>(codes: I, default: &str) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locales: Vec<Locale> = Vec::new();
        for code in codes {
            let locale = Locale::parse(code.as_ref())?;
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }

        if locales.is_empty() {
            return Err(LocaleError::EmptyLocaleSet);
        }

        let default_locale = Locale::parse(default)?;
        let default = locales
            .iter()
            .position(|locale| *locale == default_locale)
            .ok_or_else(|| LocaleError::DefaultNotSupported(default_locale.to_string()))?;

        Ok(Self { locales, default })
    }

    /// The configured default locale.
    pub fn default_locale(&self) -> &Locale {
        &self.locales[self.default]
    }

    /// Look up a supported locale by code, ignoring ASCII case.
    ///
    /// Returns the canonical member so callers never hand out the raw input.
    pub fn find(&self, code: &str) -> Option<&Locale> {
        let code = code.trim();
        self.locales
            .iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(code))
    }

    /// Check whether `code` names a supported locale.
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Iterate over the supported locales in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Always false; the set is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Locale Tests ====================

    #[test]
    fn test_locale_parse_lowercases() {
        let locale = Locale::parse("EN-us").expect("Should parse");
        assert_eq!(locale.as_str(), "en-us");
    }

    #[test]
    fn test_locale_parse_trims() {
        let locale = Locale::parse("  fr ").expect("Should parse");
        assert_eq!(locale.as_str(), "fr");
    }

    #[test]
    fn test_locale_parse_rejects_malformed() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("*").is_err());
        assert!(Locale::parse("en_US").is_err());
        assert!(Locale::parse("-en").is_err());
        assert!(Locale::parse("en;q=1").is_err());
    }

    #[test]
    fn test_locale_display() {
        let locale = Locale::parse("fr").unwrap();
        assert_eq!(format!("{}", locale), "fr");
    }

    #[test]
    fn test_locale_serializes_as_string() {
        let locale = Locale::parse("fr").unwrap();
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"fr\"");
    }

    // ==================== SupportedLocales Tests ====================

    #[test]
    fn test_supported_locales_default() {
        let locales = SupportedLocales::new(["en", "fr"], "fr").unwrap();
        assert_eq!(locales.default_locale().as_str(), "fr");
        assert_eq!(locales.len(), 2);
    }

    #[test]
    fn test_supported_locales_empty() {
        let result = SupportedLocales::new(Vec::<&str>::new(), "en");
        assert_eq!(result.unwrap_err(), LocaleError::EmptyLocaleSet);
    }

    #[test]
    fn test_supported_locales_default_must_be_member() {
        let result = SupportedLocales::new(["en", "fr"], "de");
        assert_eq!(
            result.unwrap_err(),
            LocaleError::DefaultNotSupported("de".to_string())
        );
    }

    #[test]
    fn test_supported_locales_drops_duplicates() {
        let locales = SupportedLocales::new(["en", "fr", "EN"], "en").unwrap();
        let codes: Vec<&str> = locales.iter().map(Locale::as_str).collect();
        assert_eq!(codes, vec!["en", "fr"]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let locales = SupportedLocales::new(["en", "fr"], "en").unwrap();
        assert_eq!(locales.find("FR").map(Locale::as_str), Some("fr"));
        assert!(locales.find("de").is_none());
        assert!(!locales.contains(""));
    }
}
