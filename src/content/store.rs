//! Read-only content stores keyed by canonical locale and page key.
//!
//! Content lives on disk as `<root>/<locale>/<page>.json`. [`MemoryStore`]
//! loads the whole tree once up front; [`DirectoryStore`] reads a file per
//! lookup and reports read/parse failures to the caller.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lookup of content bundles by canonical locale and page key.
pub trait ContentStore: Send + Sync {
    /// Whether the store has any content for this locale.
    ///
    /// `Err` means the store could not tell, and must not be read as "absent".
    fn has_locale(&self, locale: &str) -> Result<bool>;

    /// Fetch the bundle for `page_key` in `locale`.
    ///
    /// `Ok(None)` means the bundle does not exist. `Err` means it could not be
    /// read, and must be propagated rather than treated as missing.
    fn get(&self, page_key: &str, locale: &str) -> Result<Option<Arc<Value>>>;
}

impl<S: ContentStore + ?Sized> ContentStore for Box<S> {
    fn has_locale(&self, locale: &str) -> Result<bool> {
        (**self).has_locale(locale)
    }

    fn get(&self, page_key: &str, locale: &str) -> Result<Option<Arc<Value>>> {
        (**self).get(page_key, locale)
    }
}

/// In-memory store built once and never mutated afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    bundles: HashMap<String, HashMap<String, Arc<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle (builder style).
    pub fn insert(mut self, locale: &str, page_key: &str, content: Value) -> Self {
        self.bundles
            .entry(locale.to_string())
            .or_default()
            .insert(page_key.to_string(), Arc::new(content));
        self
    }

    /// Load every `<locale>/<page>.json` file under `root`.
    ///
    /// Non-JSON files are ignored. Any unreadable or malformed JSON file fails
    /// the whole load.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut store = Self::new();

        let entries = fs::read_dir(root)
            .with_context(|| format!("Failed to read content directory {}", root.display()))?;

        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read entry in {}", root.display()))?;
            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
            if !file_type.is_dir() {
                continue;
            }
            let dir = entry.path();
            let Some(locale) = entry.file_name().to_str().map(str::to_string) else {
                warn!("Skipping non UTF-8 locale directory {}", dir.display());
                continue;
            };

            let files = fs::read_dir(&dir)
                .with_context(|| format!("Failed to read locale directory {}", dir.display()))?;
            for file in files {
                let path = file
                    .with_context(|| format!("Failed to read entry in {}", dir.display()))?
                    .path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                    continue;
                }
                let Some(page_key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                let content = read_json(&path)?;
                debug!("Loaded {}/{}", locale, page_key);
                store = store.insert(&locale, page_key, content);
            }
        }

        info!(
            "Loaded {} bundles for {} locales from {}",
            store.bundles.values().map(HashMap::len).sum::<usize>(),
            store.bundles.len(),
            root.display()
        );
        Ok(store)
    }

    /// Locales present in the store, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

impl ContentStore for MemoryStore {
    fn has_locale(&self, locale: &str) -> Result<bool> {
        Ok(self.bundles.contains_key(locale))
    }

    fn get(&self, page_key: &str, locale: &str) -> Result<Option<Arc<Value>>> {
        Ok(self
            .bundles
            .get(locale)
            .and_then(|pages| pages.get(page_key))
            .cloned())
    }
}

/// Store that reads bundles from disk on every lookup.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn bundle_path(&self, page_key: &str, locale: &str) -> PathBuf {
        self.root.join(locale).join(format!("{}.json", page_key))
    }
}

impl ContentStore for DirectoryStore {
    fn has_locale(&self, locale: &str) -> Result<bool> {
        if locale.is_empty() || locale.contains(['/', '\\', '.']) {
            return Ok(false);
        }

        let dir = self.root.join(locale);
        match fs::metadata(&dir) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to stat {}", dir.display())),
        }
    }

    fn get(&self, page_key: &str, locale: &str) -> Result<Option<Arc<Value>>> {
        if page_key.contains(['/', '\\', '.']) || !self.has_locale(locale)? {
            return Ok(None);
        }

        let path = self.bundle_path(page_key, locale);
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let content = serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                Ok(Some(Arc::new(content)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
