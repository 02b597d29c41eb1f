//! Parsing of the shared building blocks and the `sections` array.

use super::check::{field_path, Checker, Object};
use super::types::{
    FaqItem, Hero, Image, Link, PageKind, Persona, Section, SectionHeader, SectionType,
    ServiceCard, ServicesBody, Step, Seo, ToolEntry, Topic,
};
use serde_json::Value;

const SERVICE_STYLES: &[&str] = &["cards", "prose", "steps", "cta"];

pub(super) fn parse_hero(checker: &mut Checker, obj: &Object, path: &str) -> Hero {
    Hero {
        eyebrow: checker.optional_str(obj, path, "eyebrow"),
        title: checker.required_str(obj, path, "title", "hero title"),
        lead: checker.optional_str_any(obj, path, &["lead", "subtitle"]),
        highlights: checker.string_list(obj, path, "highlights", 0),
        primary_cta: optional_link(checker, obj, path, "primaryCta"),
        secondary_cta: optional_link(checker, obj, path, "secondaryCta"),
    }
}

pub(super) fn parse_seo(checker: &mut Checker, obj: &Object, path: &str) -> Seo {
    Seo {
        title: checker.required_str(obj, path, "title", "SEO title"),
        description: checker.required_str(obj, path, "description", "SEO description"),
    }
}

fn parse_link(checker: &mut Checker, obj: &Object, path: &str) -> Link {
    Link {
        label: checker.required_str(obj, path, "label", "link label"),
        href: checker.required_str(obj, path, "href", "link href"),
    }
}

fn optional_link(checker: &mut Checker, obj: &Object, parent: &str, key: &str) -> Option<Link> {
    let inner = checker.optional_object(obj, parent, key)?;
    Some(parse_link(checker, inner, &field_path(parent, key)))
}

fn required_link(checker: &mut Checker, obj: &Object, parent: &str, key: &str) -> Link {
    let path = field_path(parent, key);
    match checker.object(obj.get(key), &path, key) {
        Some(inner) => parse_link(checker, inner, &path),
        None => Link {
            label: String::new(),
            href: String::new(),
        },
    }
}

fn parse_header(checker: &mut Checker, obj: &Object, path: &str) -> SectionHeader {
    SectionHeader {
        id: checker.optional_str(obj, path, "id"),
        eyebrow: checker.optional_str(obj, path, "eyebrow"),
        title: checker.optional_str(obj, path, "title"),
        heading: checker.optional_str(obj, path, "heading"),
        label: checker.optional_str(obj, path, "label"),
        lead: checker.optional_str(obj, path, "lead"),
        summary: checker.optional_str(obj, path, "summary"),
        intro: checker.optional_str(obj, path, "intro"),
    }
}

/// Parse the `sections` array of a page (at least one section).
pub(super) fn parse_sections(checker: &mut Checker, page: PageKind, obj: &Object) -> Vec<Section> {
    let mut sections = Vec::new();
    for (path, item) in checker.array(obj, "", "sections", 1) {
        let Value::Object(section) = item else {
            checker.issue(path, "expected an object");
            continue;
        };
        if let Some(parsed) = parse_section(checker, page, section, &path) {
            sections.push(parsed);
        }
    }
    sections
}

/// Dispatch on the `type` discriminator.
///
/// Returns `None` when the discriminator itself is invalid; issues for the
/// section's fields are still recorded for recognised types.
fn parse_section(
    checker: &mut Checker,
    page: PageKind,
    obj: &Object,
    path: &str,
) -> Option<Section> {
    let type_path = field_path(path, "type");
    let allowed = page.allowed_sections();

    let Some(tag) = obj.get("type").and_then(Value::as_str) else {
        checker.issue(type_path, "section type is required");
        return None;
    };

    let section_type = match SectionType::parse(tag) {
        Some(section_type) if allowed.contains(&section_type) => section_type,
        _ => {
            let expected: Vec<&str> = allowed.iter().map(SectionType::as_str).collect();
            checker.issue(
                type_path,
                format!(
                    "unrecognized section type \"{}\" (expected one of: {})",
                    tag,
                    expected.join(", ")
                ),
            );
            return None;
        }
    };

    let header = parse_header(checker, obj, path);

    let section = match section_type {
        SectionType::Personas => Section::Personas {
            header,
            items: checker.object_list(obj, path, "items", 1, |c, item, p| Persona {
                title: c.required_str(item, p, "title", "persona title"),
                description: c.optional_str(item, p, "description"),
                points: c.string_list(item, p, "points", 0),
            }),
        },
        SectionType::Topics => Section::Topics {
            header,
            items: checker.object_list(obj, path, "items", 1, |c, item, p| Topic {
                title: c.required_str(item, p, "title", "topic title"),
                summary: c.optional_str(item, p, "summary"),
                href: c.optional_str(item, p, "href"),
            }),
        },
        SectionType::Split => Section::Split {
            header,
            body: checker.string_list(obj, path, "body", 1),
            bullets: checker.string_list(obj, path, "bullets", 0),
            image: checker
                .optional_object(obj, path, "image")
                .map(|image| {
                    let image_path = field_path(path, "image");
                    Image {
                        src: checker.required_str(image, &image_path, "src", "image src"),
                        alt: checker.required_str(image, &image_path, "alt", "image alt text"),
                    }
                }),
        },
        SectionType::Services => Section::Services {
            header,
            body: parse_services_body(checker, obj, path)?,
        },
        SectionType::Tools => Section::Tools {
            header,
            tools: checker.object_list(obj, path, "tools", 1, |c, item, p| ToolEntry {
                name: c.required_str(item, p, "name", "tool name"),
                summary: c.required_str(item, p, "summary", "tool summary"),
                href: c.optional_str(item, p, "href"),
                tags: c.string_list(item, p, "tags", 0),
            }),
        },
        SectionType::Cta => Section::Cta {
            header,
            body: checker.optional_str(obj, path, "body"),
            cta: required_link(checker, obj, path, "cta"),
            secondary_cta: optional_link(checker, obj, path, "secondaryCta"),
        },
        SectionType::Accordion => Section::Accordion {
            header,
            items: checker.object_list(obj, path, "items", 1, |c, item, p| FaqItem {
                question: c.required_str(item, p, "question", "question"),
                answer: c.required_str(item, p, "answer", "answer"),
            }),
        },
    };

    Some(section)
}

/// `services` sections change shape with their `style` sub-discriminator.
fn parse_services_body(checker: &mut Checker, obj: &Object, path: &str) -> Option<ServicesBody> {
    let style_path = field_path(path, "style");

    let Some(style) = obj.get("style").and_then(Value::as_str) else {
        checker.issue(style_path, "services style is required");
        return None;
    };

    let body = match style {
        "cards" => ServicesBody::Cards {
            items: checker.object_list(obj, path, "items", 1, |c, item, p| ServiceCard {
                title: c.required_str(item, p, "title", "service title"),
                description: c.required_str(item, p, "description", "service description"),
                price: c.optional_str(item, p, "price"),
                href: c.optional_str(item, p, "href"),
            }),
        },
        "prose" => ServicesBody::Prose {
            paragraphs: checker.string_list(obj, path, "paragraphs", 1),
        },
        "steps" => ServicesBody::Steps {
            steps: checker.object_list(obj, path, "steps", 1, |c, item, p| Step {
                title: c.required_str(item, p, "title", "step title"),
                description: c.optional_str(item, p, "description"),
            }),
        },
        "cta" => ServicesBody::Cta {
            body: checker.optional_str(obj, path, "body"),
            cta: required_link(checker, obj, path, "cta"),
        },
        other => {
            checker.issue(
                style_path,
                format!(
                    "unrecognized services style \"{}\" (expected one of: {})",
                    other,
                    SERVICE_STYLES.join(", ")
                ),
            );
            return None;
        }
    };

    Some(body)
}
