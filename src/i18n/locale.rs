//! Locale type and locale tag normalization.
//!
//! Raw tags arrive from routing, cookies or headers in any shape (`"zh"`,
//! `"zh_hk"`, `"EN-us"`). [`normalize_locale`] maps them onto the canonical
//! tags the content store is keyed by, and [`Locale`] is a tag that has been
//! validated against the [`LocaleRegistry`].

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};

/// Alias table from lower-cased, hyphenated tags to canonical tags.
const LOCALE_ALIASES: &[(&str, &str)] = &[
    ("en", "en-GB"),
    ("en-gb", "en-GB"),
    ("en-uk", "en-GB"),
    ("en-us", "en-GB"),
    ("zh", "zh-CN"),
    ("zh-cn", "zh-CN"),
    ("zh-sg", "zh-CN"),
    ("zh-hans", "zh-CN"),
    ("zh-hans-cn", "zh-CN"),
    ("zh-tw", "zh-TW"),
    ("zh-hk", "zh-TW"),
    ("zh-mo", "zh-TW"),
    ("zh-hant", "zh-TW"),
    ("zh-hant-tw", "zh-TW"),
    ("zh-hant-hk", "zh-TW"),
    ("fr", "fr-FR"),
    ("fr-fr", "fr-FR"),
    ("es", "es-ES"),
    ("es-es", "es-ES"),
];

/// Normalize a raw locale tag to its canonical form.
///
/// Returns `None` when the input is missing or blank, meaning "use the
/// caller's default". Known aliases are matched case-insensitively with `_`
/// treated as `-`. Anything else is returned trimmed but otherwise unchanged,
/// so an already-canonical tag that has no alias entry still passes through.
///
/// # Example
/// ```
/// use site_content::i18n::normalize_locale;
///
/// assert_eq!(normalize_locale(Some(" zh_hk ")).as_deref(), Some("zh-TW"));
/// assert_eq!(normalize_locale(Some("pt-BR")).as_deref(), Some("pt-BR"));
/// assert_eq!(normalize_locale(Some("   ")), None);
/// ```
pub fn normalize_locale(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let key = trimmed.to_lowercase().replace('_', "-");
    let canonical = LOCALE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(trimmed);

    Some(canonical.to_string())
}

/// A validated canonical locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: &'static str,
}

impl Locale {
    /// The base locale every page is authored in.
    pub const EN_GB: Locale = Locale { tag: "en-GB" };

    /// Create a Locale from a canonical tag.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the tag is registered and enabled
    /// * `Err` if the tag is unknown or disabled
    pub fn from_tag(tag: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_tag(tag) {
            Some(config) if config.enabled => Ok(Locale { tag: config.tag }),
            Some(_) => bail!("Locale '{}' is not enabled", tag),
            None => bail!("Unknown locale tag: '{}'", tag),
        }
    }

    /// Normalize a raw tag and validate it, degrading to the fallback locale.
    ///
    /// This never fails: blank, unknown and disabled tags all resolve to
    /// [`Locale::fallback`].
    pub fn resolve(raw: Option<&str>) -> Locale {
        normalize_locale(raw)
            .and_then(|tag| Locale::from_tag(&tag).ok())
            .unwrap_or_else(Locale::fallback)
    }

    /// Get the fallback locale.
    pub fn fallback() -> Locale {
        Locale {
            tag: LocaleRegistry::get().fallback().tag,
        }
    }

    /// Get the canonical tag (e.g., "zh-TW").
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Get the full locale configuration from the registry.
    pub fn config(&self) -> Option<&'static LocaleConfig> {
        LocaleRegistry::get().get_by_tag(self.tag)
    }

    /// Get the English name of the locale.
    pub fn name(&self) -> &'static str {
        self.config().map(|config| config.name).unwrap_or(self.tag)
    }

    /// Get the native name of the locale.
    pub fn native_name(&self) -> &'static str {
        self.config()
            .map(|config| config.native_name)
            .unwrap_or(self.tag)
    }

    /// Check if this is the fallback locale.
    pub fn is_fallback(&self) -> bool {
        self.config().map(|config| config.is_fallback).unwrap_or(false)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag)
    }
}
