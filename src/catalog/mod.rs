//! Read-only icon catalog
//!
//! The catalog maps a lowercase identifier to an [`Icon`]. It is built once
//! (from a JSON dataset or the bundled sample set) and never mutated
//! afterwards, so it can be shared freely between threads.

pub mod icon;

pub use icon::{Icon, GLYPH_VIEWBOX};

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::GridError;

/// Maximum number of results returned by [`IconCatalog::search`] by default
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Sample dataset compiled into the binary
const BUILTIN_ICONS: &str = include_str!("../../data/icons.json");

/// Errors that can occur when loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read icon catalog: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Accepted top-level shapes of a catalog file
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Icon>),
    Wrapped { icons: Vec<Icon> },
}

impl CatalogFile {
    fn into_icons(self) -> Vec<Icon> {
        match self {
            CatalogFile::List(icons) | CatalogFile::Wrapped { icons } => icons,
        }
    }
}

/// Immutable identifier -> icon lookup
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    /// Icons in dataset order (search results follow this order)
    icons: Vec<Icon>,
    /// Lowercase slug -> index into `icons`
    index: HashMap<String, usize>,
}

impl IconCatalog {
    /// Build a catalog from a list of icons
    ///
    /// Slugs are lowercased for lookup. When a slug appears twice the first
    /// occurrence wins.
    pub fn new(icons: Vec<Icon>) -> Self {
        let mut kept = Vec::with_capacity(icons.len());
        let mut index = HashMap::with_capacity(icons.len());
        for icon in icons {
            let key = icon.slug.to_lowercase();
            if index.contains_key(&key) {
                debug!(slug = %icon.slug, "skipping duplicate icon slug");
                continue;
            }
            index.insert(key, kept.len());
            kept.push(icon);
        }
        Self { icons: kept, index }
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a catalog from a JSON string
    ///
    /// Accepts either a bare array of icons or an object with an `icons` array.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::new(parsed.into_icons()))
    }

    /// The bundled sample catalog, built on first use
    pub fn builtin() -> &'static IconCatalog {
        static BUILTIN: OnceLock<IconCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            IconCatalog::from_json(BUILTIN_ICONS).unwrap_or_else(|e| {
                warn!(error = %e, "bundled icon catalog is corrupt, serving no icons");
                IconCatalog::default()
            })
        })
    }

    /// Number of icons in the catalog
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if the catalog holds no icons
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Iterate over icons in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter()
    }

    /// Look up an icon by identifier (trimmed, case-insensitive)
    pub fn get(&self, slug: &str) -> Option<&Icon> {
        let key = slug.trim().to_lowercase();
        self.index.get(&key).map(|&i| &self.icons[i])
    }

    /// Resolve an ordered list of identifiers
    ///
    /// Unknown identifiers are dropped; order and duplicates of the matched
    /// ones are kept.
    pub fn resolve<S: AsRef<str>>(&self, identifiers: &[S]) -> Result<Vec<&Icon>, GridError> {
        if identifiers.is_empty() {
            return Err(GridError::MissingInput);
        }

        let mut resolved = Vec::with_capacity(identifiers.len());
        for id in identifiers {
            let id: &str = id.as_ref();
            match self.get(id) {
                Some(icon) => resolved.push(icon),
                None => debug!(identifier = id, "dropping unknown icon"),
            }
        }

        if resolved.is_empty() {
            return Err(GridError::NoValidIcons);
        }
        Ok(resolved)
    }

    /// Case-insensitive substring search over titles and slugs
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Icon> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }
        self.icons
            .iter()
            .filter(|icon| {
                icon.title.to_lowercase().contains(&query)
                    || icon.slug.to_lowercase().contains(&query)
            })
            .take(limit)
            .collect()
    }
}

impl FromIterator<Icon> for IconCatalog {
    fn from_iter<T: IntoIterator<Item = Icon>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
