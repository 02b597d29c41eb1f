//! Locale-aware content for the coaching website.
//!
//! Page content is authored as one JSON bundle per page and locale. This
//! crate picks the bundle to serve for a requested locale (falling back to
//! British English), validates it against the page's schema, and puts it in
//! the order the site presents it.
//!
//! ```rust
//! use serde_json::json;
//! use site_content::content::{resolve_page, ContentSelector, MemoryStore};
//!
//! let store = MemoryStore::new().insert(
//!     "en-GB",
//!     "home",
//!     json!({
//!         "hero": {"title": "Lead with clarity"},
//!         "sections": [{"type": "cta", "cta": {"label": "Book", "href": "/contact"}}]
//!     }),
//! );
//! let selector = ContentSelector::new(store, "en-GB");
//!
//! let page = resolve_page(&selector, "home", Some("fr")).unwrap();
//! assert!(page.is_fallback);
//! assert_eq!(page.used_locale, "en-GB");
//! ```

pub mod config;
pub mod content;
pub mod i18n;
