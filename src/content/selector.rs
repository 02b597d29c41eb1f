//! Content selection with locale fallback.

use crate::content::ContentStore;
use crate::i18n::{normalize_locale, LocaleStrings};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// The bundle chosen for one page request.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected bundle, `None` only if even the fallback locale lacks the page
    pub content: Option<Arc<Value>>,

    /// Canonical locale whose bundle family was used
    pub used_locale: String,

    /// Whether the served locale differs from the (normalized) requested one
    pub is_fallback: bool,
}

impl Selection {
    /// The notice to display for a fallback, if any.
    ///
    /// Prefers the content's own `fallbackNotice`, otherwise the fixed notice
    /// for the requested locale so the reader sees it in their own language.
    pub fn notice(&self, requested_locale: Option<&str>) -> Option<String> {
        if !self.is_fallback {
            return None;
        }

        let from_content = self
            .content
            .as_deref()
            .and_then(|content| content.get("fallbackNotice"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|notice| !notice.is_empty());

        let notice = match from_content {
            Some(notice) => notice,
            None => {
                let requested = normalize_locale(requested_locale).unwrap_or_default();
                LocaleStrings::for_tag(&requested).fallback_notice
            }
        };
        Some(notice.to_string())
    }
}

/// Picks the bundle to serve for a page and requested locale.
pub struct ContentSelector<S> {
    store: S,
    fallback_locale: String,
}

impl<S: ContentStore> ContentSelector<S> {
    pub fn new(store: S, fallback_locale: impl Into<String>) -> Self {
        Self {
            store,
            fallback_locale: fallback_locale.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Select the bundle for `page_key` in the requested locale.
    ///
    /// The normalized locale is used when the store has it, otherwise the
    /// fallback locale. A page missing from an otherwise present locale is
    /// served from the fallback locale without flagging a fallback. Never
    /// fails for a bad locale; store read errors are returned as-is.
    pub fn select(&self, page_key: &str, requested: Option<&str>) -> Result<Selection> {
        let normalized = normalize_locale(requested);

        let canonical = match normalized.as_deref() {
            Some(tag) if self.store.has_locale(tag)? => tag.to_string(),
            _ => self.fallback_locale.clone(),
        };

        let content = match self.store.get(page_key, &canonical)? {
            Some(content) => Some(content),
            None if canonical != self.fallback_locale => {
                debug!(
                    "Page '{}' missing for {}, using {} bundle",
                    page_key, canonical, self.fallback_locale
                );
                self.store.get(page_key, &self.fallback_locale)?
            }
            None => None,
        };

        let effective = normalized.as_deref().unwrap_or(&self.fallback_locale);
        let is_fallback = canonical != effective;

        if is_fallback {
            info!(
                "Serving '{}' in {} (requested {})",
                page_key, canonical, effective
            );
        } else {
            debug!("Serving '{}' in {}", page_key, canonical);
        }

        Ok(Selection {
            content,
            used_locale: canonical,
            is_fallback,
        })
    }
}
