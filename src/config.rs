use crate::content::PageKind;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Content store
    pub content_dir: PathBuf,
    pub preload_content: bool,

    // Locales
    pub fallback_locale: Locale,

    // Pages checked by the content build step
    pub pages: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let fallback_locale = match std::env::var("FALLBACK_LOCALE") {
            Ok(tag) => Locale::from_tag(tag.trim()).context("FALLBACK_LOCALE is not a supported locale")?,
            Err(_) => Locale::fallback(),
        };

        let pages = match std::env::var("CONTENT_PAGES") {
            Ok(raw) => parse_pages(&raw)?,
            Err(_) => PageKind::ALL.iter().map(|page| page.key().to_string()).collect(),
        };

        Ok(Self {
            content_dir: std::env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content")),
            preload_content: std::env::var("PRELOAD_CONTENT")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            fallback_locale,
            pages,
        })
    }
}

/// Parse a comma-separated page list, rejecting unknown page keys.
fn parse_pages(raw: &str) -> Result<Vec<String>> {
    raw.split(',')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .map(|page| {
            PageKind::from_key(page)
                .map(|_| page.to_string())
                .with_context(|| format!("CONTENT_PAGES contains unknown page '{}'", page))
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
