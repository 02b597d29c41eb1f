//! Preview binary - resolves one page for one locale and prints the result
//!
//! Usage:
//!   cargo run --bin preview -- home zh-hk            # Resolved page as JSON
//!   cargo run --bin preview -- resources fr --raw    # Selected bundle before validation
//!
//! Optional environment variables:
//! - CONTENT_DIR (defaults to content)
//! - FALLBACK_LOCALE (defaults to en-GB)

use anyhow::{Context, Result};
use site_content::config::Config;
use site_content::content::{resolve_page, ContentSelector, DirectoryStore};
use tracing::info;

fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_content=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let raw = args.iter().any(|arg| arg == "--raw");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));
    let page = positional
        .next()
        .context("Usage: preview <page> [locale] [--raw]")?;
    let locale = positional.next().map(String::as_str);

    let config = Config::from_env()?;
    let selector = ContentSelector::new(
        DirectoryStore::new(config.content_dir.clone()),
        config.fallback_locale.tag(),
    );

    let output = if raw {
        let selection = selector.select(page, locale)?;
        info!(
            "Selected {} (fallback: {})",
            selection.used_locale, selection.is_fallback
        );
        let content = selection
            .content
            .with_context(|| format!("No content for page '{}'", page))?;
        serde_json::to_string_pretty(&*content)?
    } else {
        let resolved = resolve_page(&selector, page, locale)?;
        info!(
            "Resolved '{}' in {} (fallback: {})",
            page, resolved.used_locale, resolved.is_fallback
        );
        serde_json::to_string_pretty(&resolved)?
    };

    println!("{}", output);
    Ok(())
}
