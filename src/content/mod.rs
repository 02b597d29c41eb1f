//! Content resolution and validation core.
//!
//! Everything between "raw locale string from the router" and "typed page
//! content for the renderer":
//!
//! - `store`: read-only lookup of JSON bundles by locale and page key
//! - `selector`: locale normalization plus fallback selection
//! - `schema`: per-page structural validation into typed content
//! - `ordering`: example-like sections first
//! - `dedupe`: order-preserving deduplication of merged lists
//! - `resolve`: the full pipeline for one page, and a whole-site check
//!
//! All operations are synchronous and work on immutable snapshots, so they
//! can be called from any number of concurrent renders.

mod dedupe;
mod error;
mod ordering;
mod resolve;
pub mod schema;
mod selector;
mod store;

pub use dedupe::{dedupe, dedupe_by, dedupe_values};
pub use error::{ContentError, Issue, ValidationError};
pub use ordering::{
    is_example_like, is_example_text, order_section_values, order_sections, SectionText,
    EXAMPLE_PATTERNS,
};
pub use resolve::{check_all, resolve_page, ContentReport, ResolvedPage};
pub use schema::{validate, PageKind, Section, ValidatedContent};
pub use selector::{ContentSelector, Selection};
pub use store::{ContentStore, DirectoryStore, MemoryStore};
