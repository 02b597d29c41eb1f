//! Typed, validated content model handed to the renderer.
//!
//! Values of these types only come out of [`validate`](super::validate), so
//! every required string is non-empty and every required list has its
//! minimum length.

use crate::content::ordering::SectionText;
use serde::Serialize;
use serde_json::{Map, Value};

/// Page families, each with its own schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    About,
    Services,
    Resources,
    Contact,
    Blog,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Home,
        PageKind::About,
        PageKind::Services,
        PageKind::Resources,
        PageKind::Contact,
        PageKind::Blog,
    ];

    /// Resolve a page key; `index` and `story` are the legacy keys of the
    /// home and about families.
    pub fn from_key(key: &str) -> Option<PageKind> {
        match key.trim() {
            "home" | "index" => Some(PageKind::Home),
            "about" | "story" => Some(PageKind::About),
            "services" => Some(PageKind::Services),
            "resources" => Some(PageKind::Resources),
            "contact" => Some(PageKind::Contact),
            "blog" => Some(PageKind::Blog),
            _ => None,
        }
    }

    /// Canonical key, also used as the domain name in validation errors.
    pub fn key(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::About => "about",
            PageKind::Services => "services",
            PageKind::Resources => "resources",
            PageKind::Contact => "contact",
            PageKind::Blog => "blog",
        }
    }

    /// Section types this page family may contain.
    pub fn allowed_sections(&self) -> &'static [SectionType] {
        use SectionType::*;
        match self {
            PageKind::Home => &[Personas, Topics, Split, Services, Cta, Accordion],
            PageKind::About => &[Split, Topics, Personas, Cta],
            PageKind::Services => &[Services, Split, Personas, Accordion, Cta],
            PageKind::Resources => &[Tools, Services, Topics, Accordion, Cta],
            PageKind::Contact => &[Split, Accordion, Cta],
            PageKind::Blog => &[Topics, Split, Cta],
        }
    }
}

/// Discriminator values of the `type` field of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    Personas,
    Topics,
    Split,
    Services,
    Tools,
    Cta,
    Accordion,
}

impl SectionType {
    pub fn parse(tag: &str) -> Option<SectionType> {
        match tag {
            "personas" => Some(SectionType::Personas),
            "topics" => Some(SectionType::Topics),
            "split" => Some(SectionType::Split),
            "services" => Some(SectionType::Services),
            "tools" => Some(SectionType::Tools),
            "cta" => Some(SectionType::Cta),
            "accordion" => Some(SectionType::Accordion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Personas => "personas",
            SectionType::Topics => "topics",
            SectionType::Split => "split",
            SectionType::Services => "services",
            SectionType::Tools => "tools",
            SectionType::Cta => "cta",
            SectionType::Accordion => "accordion",
        }
    }
}

/// A fully validated page bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedContent {
    #[serde(skip)]
    pub page: PageKind,
    pub hero: Hero,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
    /// Unknown top-level keys, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<Link>,
}

/// A call-to-action or plain link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Fields every section variant may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Shown under the title; never considered when ordering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Personas {
        #[serde(flatten)]
        header: SectionHeader,
        items: Vec<Persona>,
    },
    Topics {
        #[serde(flatten)]
        header: SectionHeader,
        items: Vec<Topic>,
    },
    Split {
        #[serde(flatten)]
        header: SectionHeader,
        body: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        bullets: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<Image>,
    },
    Services {
        #[serde(flatten)]
        header: SectionHeader,
        #[serde(flatten)]
        body: ServicesBody,
    },
    Tools {
        #[serde(flatten)]
        header: SectionHeader,
        tools: Vec<ToolEntry>,
    },
    Cta {
        #[serde(flatten)]
        header: SectionHeader,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<String>,
        cta: Link,
        #[serde(rename = "secondaryCta", skip_serializing_if = "Option::is_none")]
        secondary_cta: Option<Link>,
    },
    Accordion {
        #[serde(flatten)]
        header: SectionHeader,
        items: Vec<FaqItem>,
    },
}

impl Section {
    pub fn section_type(&self) -> SectionType {
        match self {
            Section::Personas { .. } => SectionType::Personas,
            Section::Topics { .. } => SectionType::Topics,
            Section::Split { .. } => SectionType::Split,
            Section::Services { .. } => SectionType::Services,
            Section::Tools { .. } => SectionType::Tools,
            Section::Cta { .. } => SectionType::Cta,
            Section::Accordion { .. } => SectionType::Accordion,
        }
    }

    pub fn header(&self) -> &SectionHeader {
        match self {
            Section::Personas { header, .. }
            | Section::Topics { header, .. }
            | Section::Split { header, .. }
            | Section::Services { header, .. }
            | Section::Tools { header, .. }
            | Section::Cta { header, .. }
            | Section::Accordion { header, .. } => header,
        }
    }
}

impl SectionText for Section {
    fn title_text(&self) -> Option<&str> {
        let header = self.header();
        header
            .title
            .as_deref()
            .or(header.heading.as_deref())
            .or(header.label.as_deref())
    }

    fn lead_text(&self) -> Option<&str> {
        let header = self.header();
        header.lead.as_deref().or(header.summary.as_deref())
    }
}

/// Shape of a `services` section, selected by its `style` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum ServicesBody {
    Cards { items: Vec<ServiceCard> },
    Prose { paragraphs: Vec<String> },
    Steps { steps: Vec<Step> },
    Cta {
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<String>,
        cta: Link,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}
