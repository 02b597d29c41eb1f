//! Internationalization (i18n) module for locale handling.
//!
//! All locale-related logic lives here: which locales the site publishes,
//! how raw locale tags map onto them, and the fixed strings shown when a page
//! has to fall back to the base locale.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Raw tag normalization and the validated `Locale` type
//! - `strings`: Fixed per-locale strings (fallback notices, language labels)
//!
//! # Example
//!
//! ```rust
//! use site_content::i18n::{normalize_locale, Locale, LocaleRegistry};
//!
//! assert_eq!(normalize_locale(Some("zh-hk")).as_deref(), Some("zh-TW"));
//! assert_eq!(Locale::resolve(Some("nl")), Locale::fallback());
//! assert_eq!(LocaleRegistry::get().fallback().tag, "en-GB");
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::{normalize_locale, Locale};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::LocaleStrings;
