//! Locale registry: Single source of truth for all locales the site has content for.
//!
//! The registry is a process-wide singleton initialised with `OnceLock` on first
//! access and immutable thereafter, so it can be read from any number of
//! concurrent page renders without synchronization.

use std::sync::OnceLock;

/// Configuration for a supported (canonical) locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Canonical BCP 47 style tag (e.g., "en-GB", "zh-TW")
    pub tag: &'static str,

    /// English name of the locale (e.g., "English (UK)")
    pub name: &'static str,

    /// Native name of the locale (e.g., "繁體中文")
    pub native_name: &'static str,

    /// Whether this is the fallback locale served when a translation is missing
    /// (exactly one should be true)
    pub is_fallback: bool,

    /// Whether pages are published for this locale
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its canonical tag.
    ///
    /// Matching is exact: callers are expected to run raw input through
    /// [`normalize_locale`](crate::i18n::normalize_locale) first.
    pub fn get_by_tag(&self, tag: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.tag == tag)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the fallback locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one fallback locale
    /// (this indicates a configuration error in `default_locales`).
    pub fn fallback(&self) -> &LocaleConfig {
        let fallbacks: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_fallback)
            .collect();

        match fallbacks.len() {
            0 => panic!("No fallback locale found in registry"),
            1 => fallbacks[0],
            _ => panic!("Multiple fallback locales found in registry"),
        }
    }

    /// Check if a canonical tag is supported and enabled.
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.get_by_tag(tag)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// British English is the base locale every page is authored in first.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            tag: "en-GB",
            name: "English (UK)",
            native_name: "English",
            is_fallback: true,
            enabled: true,
        },
        LocaleConfig {
            tag: "zh-TW",
            name: "Chinese (Traditional)",
            native_name: "繁體中文",
            is_fallback: false,
            enabled: true,
        },
        LocaleConfig {
            tag: "zh-CN",
            name: "Chinese (Simplified)",
            native_name: "简体中文",
            is_fallback: false,
            enabled: true,
        },
        LocaleConfig {
            tag: "fr-FR",
            name: "French",
            native_name: "Français",
            is_fallback: false,
            enabled: true,
        },
        LocaleConfig {
            tag: "es-ES",
            name: "Spanish",
            native_name: "Español",
            is_fallback: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_tag_fallback_locale() {
        let config = LocaleRegistry::get()
            .get_by_tag("en-GB")
            .expect("en-GB should be registered");

        assert_eq!(config.tag, "en-GB");
        assert_eq!(config.native_name, "English");
        assert!(config.is_fallback);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_tag_traditional_chinese() {
        let config = LocaleRegistry::get()
            .get_by_tag("zh-TW")
            .expect("zh-TW should be registered");

        assert_eq!(config.native_name, "繁體中文");
        assert!(!config.is_fallback);
    }

    #[test]
    fn test_get_by_tag_is_case_sensitive() {
        assert!(LocaleRegistry::get().get_by_tag("en-gb").is_none());
    }

    #[test]
    fn test_get_by_tag_nonexistent() {
        assert!(LocaleRegistry::get().get_by_tag("de-DE").is_none());
    }

    #[test]
    fn test_list_enabled_starts_with_fallback() {
        let enabled = LocaleRegistry::get().list_enabled();

        assert_eq!(enabled.len(), 5);
        assert_eq!(enabled[0].tag, "en-GB");
        assert!(enabled.iter().any(|locale| locale.tag == "zh-CN"));
    }

    #[test]
    fn test_list_all_matches_enabled_when_nothing_disabled() {
        let registry = LocaleRegistry::get();
        assert_eq!(registry.list_all().len(), registry.list_enabled().len());
    }

    #[test]
    fn test_fallback_is_british_english() {
        let fallback = LocaleRegistry::get().fallback();

        assert_eq!(fallback.tag, "en-GB");
        assert!(fallback.is_fallback);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("fr-FR"));
        assert!(!registry.is_enabled("fr"));
    }
}
