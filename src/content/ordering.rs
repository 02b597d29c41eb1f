//! Section ordering: surface "example-like" sections first.
//!
//! A section is example-like when its title or lead talks about examples,
//! use cases, scenarios, who the offer is for, or before/after stories. Such
//! sections are moved to the front of the page while every other section
//! keeps its authored order.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Terms that mark a section as example-like, matched case-insensitively as
/// plain substrings (no word boundaries, so CJK terms match inside sentences).
pub const EXAMPLE_PATTERNS: &[&str] = &[
    r"examples?",
    r"use[\s-]?cases?",
    r"scenarios?",
    r"who(?:\s+it['’]?s)?\s+for",
    r"before\s*/\s*after",
    "範例",
    "案例",
    "情境",
    "使用情境",
    "先看例子",
    "適合誰",
    "誰適合",
];

// Compiled once from EXAMPLE_PATTERNS
static EXAMPLE_REGEX: OnceLock<Regex> = OnceLock::new();

fn example_regex() -> &'static Regex {
    EXAMPLE_REGEX.get_or_init(|| {
        let pattern = format!("(?i)(?:{})", EXAMPLE_PATTERNS.join("|"));
        Regex::new(&pattern).expect("EXAMPLE_PATTERNS must compile")
    })
}

/// Text a section exposes to the example-like heuristic.
pub trait SectionText {
    /// Effective title of the section, if any.
    fn title_text(&self) -> Option<&str>;

    /// Effective lead/summary of the section, if any.
    fn lead_text(&self) -> Option<&str>;
}

impl SectionText for Value {
    fn title_text(&self) -> Option<&str> {
        ["title", "heading", "label"]
            .iter()
            .find_map(|key| self.get(key).and_then(Value::as_str))
    }

    fn lead_text(&self) -> Option<&str> {
        ["lead", "summary"]
            .iter()
            .find_map(|key| self.get(key).and_then(Value::as_str))
    }
}

/// Check whether text matches the example-like heuristic.
pub fn is_example_text(text: &str) -> bool {
    example_regex().is_match(text)
}

/// Check whether a section is example-like.
///
/// Sections with neither a title nor a lead are never example-like.
pub fn is_example_like<T: SectionText + ?Sized>(section: &T) -> bool {
    let title = section.title_text().unwrap_or("");
    let lead = section.lead_text().unwrap_or("");
    is_example_text(title) || is_example_text(lead)
}

/// Move example-like sections to the front, preserving relative order
/// within both groups.
///
/// This is a stable two-bucket partition, so applying it twice gives the
/// same result as applying it once.
pub fn order_sections<T: SectionText>(sections: Vec<T>) -> Vec<T> {
    let (mut ordered, rest): (Vec<T>, Vec<T>) = sections
        .into_iter()
        .partition(|section| is_example_like(section));
    ordered.extend(rest);
    ordered
}

/// [`order_sections`] over a raw JSON value; anything but an array is empty.
pub fn order_section_values(sections: &Value) -> Vec<Value> {
    match sections {
        Value::Array(items) => order_sections(items.clone()),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn ids(sections: &[Value]) -> Vec<&str> {
        sections
            .iter()
            .map(|section| section["id"].as_str().unwrap_or(""))
            .collect()
    }

    // ==================== Heuristic Tests ====================

    #[test]
    fn test_english_terms_match() {
        for text in [
            "Example: a first session",
            "Real EXAMPLES",
            "Use cases",
            "use-case library",
            "Three scenarios",
            "Who it's for",
            "Who its for",
            "Before / After",
            "before/after",
        ] {
            assert!(is_example_text(text), "{} should match", text);
        }
    }

    #[test]
    fn test_who_for_requires_adjacent_words() {
        assert!(!is_example_text("Who this is for"));
    }

    #[test]
    fn test_chinese_terms_match() {
        for text in ["範例", "案例分享", "三種情境", "使用情境", "先看例子再決定", "適合誰？", "誰適合這個課程"] {
            assert!(is_example_text(text), "{} should match", text);
        }
    }

    #[test]
    fn test_unrelated_text_does_not_match() {
        assert!(!is_example_text("Our approach"));
        assert!(!is_example_text("服務內容"));
        assert!(!is_example_text(""));
    }

    #[test]
    fn test_substring_matches_are_kept() {
        // No word boundaries: "counterexample" still counts.
        assert!(is_example_text("A counterexample"));
    }

    #[test]
    fn test_value_title_fallback_chain() {
        assert!(is_example_like(&json!({"heading": "Examples"})));
        assert!(is_example_like(&json!({"label": "Scenarios"})));
        assert!(is_example_like(&json!({"title": "Plans", "summary": "see examples"})));
        assert!(!is_example_like(&json!({"title": "Plans", "heading": "Examples"})));
        assert!(!is_example_like(&json!({"type": "cta"})));
        assert!(!is_example_like(&json!({"title": 42})));
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_order_is_stable_partition() {
        let sections = vec![
            json!({"id": "A", "title": "Approach"}),
            json!({"id": "B", "title": "Example: X"}),
            json!({"id": "C", "title": "Pricing"}),
            json!({"id": "D", "title": "案例分享"}),
        ];

        let ordered = order_sections(sections);
        assert_eq!(ids(&ordered), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_order_matches_on_lead() {
        let sections = vec![
            json!({"id": "A", "title": "Approach"}),
            json!({"id": "B", "title": "Sessions", "lead": "Common scenarios we work on"}),
        ];

        assert_eq!(ids(&order_sections(sections)), vec!["B", "A"]);
    }

    #[test]
    fn test_order_empty() {
        assert!(order_sections(Vec::<Value>::new()).is_empty());
    }

    #[test]
    fn test_order_section_values_non_array_is_empty() {
        assert!(order_section_values(&Value::Null).is_empty());
        assert!(order_section_values(&json!({"title": "Example"})).is_empty());
    }

    #[test]
    fn test_order_section_values_array() {
        let sections = json!([{"id": "A"}, {"id": "B", "title": "Use case"}]);
        assert_eq!(ids(&order_section_values(&sections)), vec!["B", "A"]);
    }

    proptest! {
        #[test]
        fn prop_order_is_idempotent(flags in proptest::collection::vec(any::<bool>(), 0..20)) {
            let sections: Vec<Value> = flags
                .iter()
                .enumerate()
                .map(|(i, example)| {
                    let title = if *example { format!("Example {}", i) } else { format!("Part {}", i) };
                    json!({"id": i.to_string(), "title": title})
                })
                .collect();

            let once = order_sections(sections);
            let twice = order_sections(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_order_keeps_every_section(count in 0usize..20) {
            let sections: Vec<Value> = (0..count)
                .map(|i| json!({"id": i.to_string(), "title": if i % 3 == 0 { "Case: scenario" } else { "Info" }}))
                .collect();

            let ordered = order_sections(sections.clone());
            prop_assert_eq!(ordered.len(), sections.len());
            for section in &sections {
                prop_assert!(ordered.contains(section));
            }
        }
    }
}
