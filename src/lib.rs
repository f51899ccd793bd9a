//! Per-request locale negotiation for a multilingual site.
//!
//! Chooses the locale from a query override, a persisted cookie or the
//! Accept-Language header, and keeps the choice stable with a long-lived
//! cookie.

pub mod config;
pub mod error;
pub mod i18n;
pub mod negotiation;
pub mod pages;
pub mod server;
