use crate::i18n::{Locale, ResolutionReason};

/// All localized user-facing strings for a locale
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Page Chrome ====================
    /// Document title of the landing page
    pub page_title: &'static str,

    /// Main heading of the landing page
    pub greeting: &'static str,

    /// Line describing the active locale
    /// Placeholders: {locale}
    pub current_locale: &'static str,

    /// Label introducing the locale switcher links
    pub switch_locale: &'static str,

    // ==================== Resolution Reasons ====================
    /// Shown when the locale came from the query parameter
    pub reason_query: &'static str,

    /// Shown when the locale came from the saved cookie
    pub reason_cookie: &'static str,

    /// Shown when the locale was negotiated from browser preferences
    pub reason_accept_language: &'static str,

    /// Shown when nothing matched and the default was used
    pub reason_default: &'static str,
}

impl LocaleStrings {
    /// Get the strings for a locale, falling back to English.
    ///
    /// Regional variants fall back to their primary language first, so
    /// `fr-ca` uses the French dictionary.
    pub fn for_locale(locale: &Locale) -> &'static LocaleStrings {
        let primary = locale.as_str().split('-').next().unwrap_or_default();
        match primary {
            "fr" => &FRENCH_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }

    /// Human-readable explanation of why a locale was chosen.
    pub fn reason(&self, reason: ResolutionReason) -> &'static str {
        match reason {
            ResolutionReason::Query => self.reason_query,
            ResolutionReason::Cookie => self.reason_cookie,
            ResolutionReason::AcceptLanguage => self.reason_accept_language,
            ResolutionReason::Default => self.reason_default,
        }
    }
}

// ==================== English Strings ====================

/// English language strings (fallback)
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    page_title: "Welcome",
    greeting: "Hello and welcome!",
    current_locale: "You are browsing in: {locale}",
    switch_locale: "Switch language:",

    reason_query: "Selected from the link you followed.",
    reason_cookie: "Remembered from your last visit.",
    reason_accept_language: "Matched to your browser's language preferences.",
    reason_default: "Using the site's default language.",
};

// ==================== French Strings ====================

/// French language strings
pub const FRENCH_STRINGS: LocaleStrings = LocaleStrings {
    page_title: "Bienvenue",
    greeting: "Bonjour et bienvenue !",
    current_locale: "Vous naviguez en : {locale}",
    switch_locale: "Changer de langue :",

    reason_query: "Choisie depuis le lien que vous avez suivi.",
    reason_cookie: "Mémorisée depuis votre dernière visite.",
    reason_accept_language: "Choisie selon les préférences de langue de votre navigateur.",
    reason_default: "Langue par défaut du site.",
};
