//! Structural validation of page content bundles.
//!
//! Each page family has its own schema: a hero with a required title, an
//! optional SEO block, an optional `fallbackNotice`, and a non-empty
//! `sections` array whose entries are tagged by `type` (and, for `services`
//! sections, by `style`). Validation walks the whole bundle and reports every
//! violated field, not just the first.

mod check;
mod sections;
mod types;

pub use types::{
    FaqItem, Hero, Image, Link, PageKind, Persona, Section, SectionHeader, SectionType,
    ServiceCard, ServicesBody, Seo, Step, ToolEntry, Topic, ValidatedContent,
};

use crate::content::{ContentError, ValidationError};
use check::Checker;
use serde_json::{Map, Value};
use tracing::warn;

/// Top-level keys consumed by the schema; everything else lands in `extra`.
const KNOWN_KEYS: &[&str] = &["hero", "sections", "seo", "fallbackNotice"];

/// Validate a raw bundle for `page_key` served in `locale`.
///
/// # Errors
/// * [`ContentError::UnknownPage`] if `page_key` names no page family
/// * [`ContentError::Validation`] listing every violated field otherwise
pub fn validate(page_key: &str, raw: &Value, locale: &str) -> Result<ValidatedContent, ContentError> {
    let page = PageKind::from_key(page_key).ok_or_else(|| ContentError::UnknownPage {
        page: page_key.to_string(),
    })?;

    validate_page(page, raw, locale).map_err(ContentError::from)
}

/// Validate a raw bundle against a known page family.
pub fn validate_page(
    page: PageKind,
    raw: &Value,
    locale: &str,
) -> Result<ValidatedContent, ValidationError> {
    let mut checker = Checker::new();

    let content = match checker.object(Some(raw), "content", "content") {
        Some(root) => Some(parse_root(&mut checker, page, root)),
        None => None,
    };

    let issues = checker.into_issues();
    match content {
        Some(content) if issues.is_empty() => Ok(content),
        _ => {
            warn!(
                "Rejected {} content for {} ({} issues)",
                page.key(),
                locale,
                issues.len()
            );
            Err(ValidationError {
                domain: page.key().to_string(),
                locale: locale.to_string(),
                issues,
            })
        }
    }
}

fn parse_root(checker: &mut Checker, page: PageKind, root: &Map<String, Value>) -> ValidatedContent {
    let hero = match checker.object(root.get("hero"), "hero", "hero") {
        Some(hero) => sections::parse_hero(checker, hero, "hero"),
        None => {
            // Keep the message consumers match on even when the whole hero is missing.
            checker.issue("hero.title", "hero title is required");
            Hero {
                eyebrow: None,
                title: String::new(),
                lead: None,
                highlights: Vec::new(),
                primary_cta: None,
                secondary_cta: None,
            }
        }
    };

    let seo = checker
        .optional_object(root, "", "seo")
        .map(|seo| sections::parse_seo(checker, seo, "seo"));

    let fallback_notice = checker.optional_str(root, "", "fallbackNotice");
    let sections = sections::parse_sections(checker, page, root);

    let extra = root
        .iter()
        .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    ValidatedContent {
        page,
        hero,
        sections,
        seo,
        fallback_notice,
        extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_home() -> Value {
        json!({
            "seo": {"title": "Coaching", "description": "Coaching for leaders"},
            "hero": {
                "eyebrow": "Leadership coaching",
                "title": "Lead with clarity",
                "lead": "One-to-one coaching for new managers.",
                "highlights": ["Remote sessions", "Bilingual"],
                "primaryCta": {"label": "Book a call", "href": "/contact"}
            },
            "sections": [
                {
                    "type": "personas",
                    "title": "Who it's for",
                    "items": [{"title": "New managers", "points": ["First team"]}]
                },
                {
                    "type": "topics",
                    "title": "What we work on",
                    "items": [{"title": "Delegation"}, {"title": "Feedback", "summary": "Hard talks"}]
                },
                {
                    "type": "split",
                    "intro": "How sessions run",
                    "body": ["Sessions are 60 minutes."],
                    "image": {"src": "/img/session.jpg", "alt": "A coaching session"}
                },
                {
                    "type": "cta",
                    "title": "Ready?",
                    "cta": {"label": "Get in touch", "href": "/contact"}
                }
            ],
            "buildId": "2024-05"
        })
    }

    fn valid_resources() -> Value {
        json!({
            "hero": {"title": "Resources"},
            "sections": [
                {
                    "type": "tools",
                    "title": "Tools",
                    "tools": [{"name": "Values card sort", "summary": "Find what matters"}]
                },
                {
                    "type": "services",
                    "style": "steps",
                    "steps": [{"title": "Book"}, {"title": "Meet"}]
                },
                {
                    "type": "services",
                    "style": "cta",
                    "cta": {"label": "Start", "href": "/services"}
                }
            ]
        })
    }

    fn expect_invalid(page: &str, content: &Value) -> ValidationError {
        match validate(page, content, "en-GB") {
            Err(ContentError::Validation(error)) => error,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    // ==================== Success Tests ====================

    #[test]
    fn test_valid_home_content() {
        let content = validate("home", &valid_home(), "en-GB").expect("valid");

        assert_eq!(content.page, PageKind::Home);
        assert_eq!(content.hero.title, "Lead with clarity");
        assert_eq!(content.hero.highlights.len(), 2);
        assert_eq!(content.sections.len(), 4);
        assert_eq!(content.sections[2].header().intro.as_deref(), Some("How sessions run"));
        assert_eq!(content.seo.unwrap().title, "Coaching");
    }

    #[test]
    fn test_legacy_index_key_is_home() {
        let content = validate("index", &valid_home(), "zh-TW").expect("valid");
        assert_eq!(content.page, PageKind::Home);
    }

    #[test]
    fn test_unknown_top_level_keys_pass_through() {
        let content = validate("home", &valid_home(), "en-GB").expect("valid");
        assert_eq!(content.extra.get("buildId"), Some(&json!("2024-05")));
        assert!(!content.extra.contains_key("hero"));
    }

    #[test]
    fn test_valid_resources_with_service_styles() {
        let content = validate("resources", &valid_resources(), "en-GB").expect("valid");

        assert!(matches!(
            &content.sections[1],
            Section::Services { body: ServicesBody::Steps { steps }, .. } if steps.len() == 2
        ));
        assert!(matches!(
            &content.sections[2],
            Section::Services { body: ServicesBody::Cta { .. }, .. }
        ));
    }

    // ==================== Rejection Tests ====================

    #[test]
    fn test_rejects_empty_hero_title() {
        let mut content = valid_home();
        content["hero"]["title"] = json!("");

        let error = expect_invalid("home", &content);
        assert!(error.to_string().contains("hero title is required"));
        assert!(error.has_issue_at("hero.title"));
    }

    #[test]
    fn test_rejects_whitespace_hero_title() {
        let mut content = valid_home();
        content["hero"]["title"] = json!("   ");
        assert!(expect_invalid("home", &content).has_issue_at("hero.title"));
    }

    #[test]
    fn test_missing_hero_still_mentions_hero_title() {
        let mut content = valid_home();
        content.as_object_mut().unwrap().remove("hero");

        let error = expect_invalid("home", &content);
        assert!(error.to_string().contains("hero title is required"));
    }

    #[test]
    fn test_rejects_unknown_section_type() {
        let mut content = valid_home();
        content["sections"][1]["type"] = json!("unknown");

        let error = expect_invalid("home", &content);
        let message = error.to_string();
        assert!(message.starts_with("Invalid home content for en-GB:"));
        assert!(message.contains("sections[1].type: unrecognized section type \"unknown\""));
    }

    #[test]
    fn test_rejects_section_type_not_allowed_on_page() {
        let mut content = valid_home();
        content["sections"][0] = json!({"type": "tools", "tools": [{"name": "x", "summary": "y"}]});

        let error = expect_invalid("home", &content);
        assert!(error.has_issue_at("sections[0].type"));
    }

    #[test]
    fn test_rejects_missing_section_type() {
        let mut content = valid_home();
        content["sections"][0].as_object_mut().unwrap().remove("type");

        let error = expect_invalid("home", &content);
        assert!(error.to_string().contains("section type is required"));
    }

    #[test]
    fn test_rejects_empty_tools_array() {
        let mut content = valid_resources();
        content["sections"][0]["tools"] = json!([]);

        let error = expect_invalid("resources", &content);
        assert!(error
            .to_string()
            .contains("sections[0].tools: tools must contain at least 1 item"));
    }

    #[test]
    fn test_rejects_empty_tool_summary() {
        let mut content = valid_resources();
        content["sections"][0]["tools"][0]["summary"] = json!("");

        let error = expect_invalid("resources", &content);
        assert!(error.has_issue_at("sections[0].tools[0].summary"));
    }

    #[test]
    fn test_rejects_unknown_services_style() {
        let mut content = valid_resources();
        content["sections"][1]["style"] = json!("carousel");

        let error = expect_invalid("resources", &content);
        assert!(error
            .to_string()
            .contains("unrecognized services style \"carousel\""));
    }

    #[test]
    fn test_rejects_empty_sections() {
        let mut content = valid_home();
        content["sections"] = json!([]);

        let error = expect_invalid("home", &content);
        assert!(error.has_issue_at("sections"));
    }

    #[test]
    fn test_collects_every_issue() {
        let mut content = valid_home();
        content["hero"]["title"] = json!("");
        content["sections"][1]["type"] = json!("unknown");
        content["sections"][3]["cta"] = json!({"label": "Go"});

        let error = expect_invalid("home", &content);
        assert_eq!(error.issues.len(), 3);
        assert!(error.has_issue_at("hero.title"));
        assert!(error.has_issue_at("sections[1].type"));
        assert!(error.has_issue_at("sections[3].cta.href"));
    }

    #[test]
    fn test_rejects_non_object_content() {
        let error = expect_invalid("home", &json!(["not", "an", "object"]));
        assert!(error.to_string().contains("expected an object"));
    }

    #[test]
    fn test_rejects_incomplete_seo() {
        let mut content = valid_home();
        content["seo"] = json!({"title": "Only a title"});

        let error = expect_invalid("home", &content);
        assert!(error.has_issue_at("seo.description"));
    }

    #[test]
    fn test_unknown_page_key() {
        let err = validate("pricing", &valid_home(), "en-GB").unwrap_err();
        assert!(matches!(err, ContentError::UnknownPage { ref page } if page == "pricing"));
    }

    #[test]
    fn test_error_uses_served_locale() {
        let mut content = valid_home();
        content["hero"]["title"] = json!("");

        let error = match validate("home", &content, "zh-TW") {
            Err(ContentError::Validation(error)) => error,
            other => panic!("unexpected {:?}", other),
        };
        assert!(error.to_string().starts_with("Invalid home content for zh-TW:"));
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_serializes_with_discriminators() {
        let content = validate("resources", &valid_resources(), "en-GB").expect("valid");
        let json = serde_json::to_value(&content).expect("serialize");

        assert_eq!(json["sections"][0]["type"], "tools");
        assert_eq!(json["sections"][1]["type"], "services");
        assert_eq!(json["sections"][1]["style"], "steps");
        assert!(json.get("page").is_none());
    }
}
