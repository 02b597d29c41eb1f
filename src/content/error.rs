//! Error types for the content pipeline.

use std::fmt;

/// A single violated field in a content bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted field path with array indices (e.g., `sections[2].tools[0].summary`)
    pub path: String,

    /// What is wrong with the field
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every structural problem found in one content bundle.
///
/// Renders as one message per line under an `Invalid <domain> content for
/// <locale>:` header, so build output points at all broken fields at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {domain} content for {locale}:{}", render_issues(.issues))]
pub struct ValidationError {
    /// Content family that was validated (e.g., "home", "resources")
    pub domain: String,

    /// Locale the bundle was served for
    pub locale: String,

    /// Violations in document order (never empty)
    pub issues: Vec<Issue>,
}

impl ValidationError {
    /// Check whether any issue was reported at exactly `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

/// One issue per line, each preceded by a newline.
fn render_issues(issues: &[Issue]) -> String {
    issues.iter().map(|issue| format!("\n{}", issue)).collect()
}

/// Errors raised by the content core itself.
///
/// Storage failures are not represented here: they surface from the
/// [`ContentStore`](crate::content::ContentStore) as `anyhow::Error` and are
/// propagated untouched.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown page key: '{page}'")]
    UnknownPage { page: String },

    #[error("No content for page '{page}' in locale '{locale}' or the fallback locale")]
    MissingContent { page: String, locale: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> ValidationError {
        ValidationError {
            domain: "home".to_string(),
            locale: "en-GB".to_string(),
            issues: vec![
                Issue {
                    path: "hero.title".to_string(),
                    message: "hero title is required".to_string(),
                },
                Issue {
                    path: "sections".to_string(),
                    message: "sections must contain at least 1 item".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_validation_error_display_lists_every_issue() {
        let rendered = sample_error().to_string();
        assert_eq!(
            rendered,
            "Invalid home content for en-GB:\n\
             hero.title: hero title is required\n\
             sections: sections must contain at least 1 item"
        );
    }

    #[test]
    fn test_validation_error_is_a_std_error() {
        let error = sample_error();
        let as_std: &dyn std::error::Error = &error;
        assert!(as_std.source().is_none());
        assert_eq!(as_std.to_string().lines().count(), 3);
    }

    #[test]
    fn test_has_issue_at() {
        let error = sample_error();
        assert!(error.has_issue_at("hero.title"));
        assert!(!error.has_issue_at("hero"));
    }

    #[test]
    fn test_content_error_is_transparent_over_validation() {
        let error: ContentError = sample_error().into();
        assert!(error.to_string().starts_with("Invalid home content for en-GB:"));
    }

    #[test]
    fn test_missing_content_message() {
        let error = ContentError::MissingContent {
            page: "blog".to_string(),
            locale: "fr-FR".to_string(),
        };
        assert!(error.to_string().contains("'blog'"));
        assert!(error.to_string().contains("'fr-FR'"));
    }
}
