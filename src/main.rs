use anyhow::{bail, Result};
use site_content::config::Config;
use site_content::content::{check_all, ContentSelector, ContentStore, DirectoryStore, MemoryStore};
use site_content::i18n::LocaleRegistry;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_content=info".parse()?),
        )
        .init();

    info!("Starting content check");

    // Load configuration from environment
    let config = Config::from_env()?;

    let store: Box<dyn ContentStore> = if config.preload_content {
        Box::new(MemoryStore::from_dir(&config.content_dir)?)
    } else {
        info!("Reading content on demand from {}", config.content_dir.display());
        Box::new(DirectoryStore::new(config.content_dir.clone()))
    };
    let selector = ContentSelector::new(store, config.fallback_locale.tag());

    let locales: Vec<&str> = LocaleRegistry::get()
        .list_enabled()
        .iter()
        .map(|locale| locale.tag)
        .collect();
    let pages: Vec<&str> = config.pages.iter().map(String::as_str).collect();

    info!(
        "Resolving {} pages in {} locales (fallback {})",
        pages.len(),
        locales.len(),
        config.fallback_locale
    );
    let report = check_all(&selector, &pages, &locales);

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for failure in &report.errors {
        error!("{}", failure);
    }

    if report.has_errors() {
        bail!(
            "{} of {} pages failed to resolve",
            report.errors.len(),
            report.checked
        );
    }

    info!(
        "All {} pages resolved ({} served from the fallback locale)",
        report.checked,
        report.warnings.len()
    );
    Ok(())
}
