//! End-to-end page resolution: select, validate, order, dedupe.

use crate::content::dedupe::dedupe_by;
use crate::content::ordering::order_sections;
use crate::content::schema::{validate_page, PageKind, Section, ValidatedContent};
use crate::content::{ContentError, ContentSelector, ContentStore};
use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

/// A page ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub page: PageKind,
    pub used_locale: String,
    pub is_fallback: bool,
    /// Notice to show when `is_fallback` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub content: ValidatedContent,
}

/// Resolve one page for a raw requested locale.
///
/// # Errors
/// * [`ContentError::UnknownPage`] for an unknown page key
/// * [`ContentError::MissingContent`] if neither the served nor the fallback
///   locale has the page
/// * [`ContentError::Validation`] if the selected bundle is malformed
/// * any error raised by the store, unchanged
pub fn resolve_page<S: ContentStore>(
    selector: &ContentSelector<S>,
    page_key: &str,
    requested: Option<&str>,
) -> Result<ResolvedPage> {
    let page = PageKind::from_key(page_key).ok_or_else(|| ContentError::UnknownPage {
        page: page_key.to_string(),
    })?;

    let selection = selector.select(page_key, requested)?;
    let Some(raw) = selection.content.as_deref() else {
        return Err(ContentError::MissingContent {
            page: page_key.to_string(),
            locale: selection.used_locale.clone(),
        }
        .into());
    };

    let mut content =
        validate_page(page, raw, &selection.used_locale).map_err(ContentError::from)?;
    content.sections = order_sections(content.sections)
        .into_iter()
        .map(dedupe_accordion)
        .collect();

    debug!(
        "Resolved '{}' for {} ({} sections)",
        page_key,
        selection.used_locale,
        content.sections.len()
    );

    Ok(ResolvedPage {
        page,
        notice: selection.notice(requested),
        used_locale: selection.used_locale,
        is_fallback: selection.is_fallback,
        content,
    })
}

/// Drop repeated FAQ entries (same question, ignoring case and surrounding
/// whitespace) from merged accordion lists.
fn dedupe_accordion(section: Section) -> Section {
    match section {
        Section::Accordion { header, items } => {
            let before = items.len();
            let items = dedupe_by(items, |item, _| item.question.trim().to_lowercase());
            if items.len() < before {
                debug!("Dropped {} duplicate FAQ items", before - items.len());
            }
            Section::Accordion { header, items }
        }
        other => other,
    }
}

/// Outcome of checking many page × locale combinations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentReport {
    /// Number of combinations checked
    pub checked: usize,

    /// Pages that failed to resolve (one entry per page × locale)
    pub errors: Vec<String>,

    /// Pages served from the fallback locale
    pub warnings: Vec<String>,
}

impl ContentReport {
    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Resolve every page in every locale, collecting failures instead of
/// stopping at the first one.
pub fn check_all<S: ContentStore>(
    selector: &ContentSelector<S>,
    pages: &[&str],
    locales: &[&str],
) -> ContentReport {
    let mut report = ContentReport::default();

    for locale in locales {
        for page in pages {
            report.checked += 1;
            match resolve_page(selector, page, Some(*locale)) {
                Ok(resolved) if resolved.is_fallback => {
                    report.warnings.push(format!(
                        "{} [{}]: served from {}",
                        page, locale, resolved.used_locale
                    ));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("{} [{}] failed: {}", page, locale, e);
                    report.errors.push(format!("{} [{}]: {:#}", page, locale, e));
                }
            }
        }
    }

    report
}
