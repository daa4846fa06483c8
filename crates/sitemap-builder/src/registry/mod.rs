//! Insertion-ordered registry of sitemap entries keyed by `loc`.

pub mod types;

use crate::config::SitemapConfig;
use crate::error::{Result, SitemapError};
use std::collections::HashMap;
use tracing::{debug, warn};
use types::{Alternate, Image, UrlEntry};

/// An in-memory sitemap: URL entries in insertion order, addressable by `loc`.
///
/// Re-adding an existing `loc` replaces the entry in place, so it keeps its
/// original position in the output.
#[derive(Debug, Clone, Default)]
pub struct Sitemap {
    config: SitemapConfig,
    entries: Vec<UrlEntry>,
    index: HashMap<String, usize>,
}

impl Sitemap {
    /// Create an empty, lenient sitemap with default output settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sitemap using `config`.
    pub fn with_config(config: SitemapConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The settings this sitemap was created with.
    pub fn config(&self) -> &SitemapConfig {
        &self.config
    }

    /// Register a bare entry for `loc`, replacing any existing one.
    pub fn add_url(&mut self, loc: impl Into<String>) -> Result<()> {
        self.insert(UrlEntry::new(loc))
    }

    /// Register `entry`, replacing any existing entry with the same `loc`
    /// (including its alternates and images).
    pub fn insert(&mut self, entry: UrlEntry) -> Result<()> {
        if entry.loc.is_empty() {
            return Err(SitemapError::InvalidArgument(
                "sitemap entry loc must not be empty".to_string(),
            ));
        }

        match self.index.get(&entry.loc).copied() {
            Some(pos) => {
                debug!("replacing sitemap entry {}", entry.loc);
                self.entries[pos] = entry;
            }
            None => {
                self.index.insert(entry.loc.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
        Ok(())
    }

    /// Append an hreflang alternate to the entry for `loc`.
    pub fn add_alternate(
        &mut self,
        loc: &str,
        hreflang: impl Into<String>,
        href: impl Into<String>,
    ) -> Result<()> {
        if let Some(entry) = self.entry_for_append(loc, "alternate")? {
            entry.alternates.push(Alternate::new(hreflang, href));
        }
        Ok(())
    }

    /// Append an image to the entry for `loc`.
    pub fn add_image(&mut self, loc: &str, image_loc: impl Into<String>) -> Result<()> {
        self.add_image_entry(loc, Image::new(image_loc))
    }

    /// Append an image with optional title/caption to the entry for `loc`.
    pub fn add_image_entry(&mut self, loc: &str, image: Image) -> Result<()> {
        if let Some(entry) = self.entry_for_append(loc, "image")? {
            entry.images.push(image);
        }
        Ok(())
    }

    // Strict mode turns an unknown loc into an error; otherwise the append is dropped.
    fn entry_for_append(&mut self, loc: &str, kind: &str) -> Result<Option<&mut UrlEntry>> {
        match self.index.get(loc).copied() {
            Some(pos) => Ok(Some(&mut self.entries[pos])),
            None if self.config.strict => Err(SitemapError::NotFound {
                loc: loc.to_string(),
            }),
            None => {
                warn!("ignoring {kind} for unregistered sitemap loc {loc}");
                Ok(None)
            }
        }
    }

    /// Look up the entry registered for `loc`.
    pub fn get(&self, loc: &str) -> Option<&UrlEntry> {
        self.index.get(loc).map(|&pos| &self.entries[pos])
    }

    /// Whether an entry is registered for `loc`.
    pub fn contains(&self, loc: &str) -> bool {
        self.index.contains_key(loc)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, UrlEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Sitemap {
    type Item = &'a UrlEntry;
    type IntoIter = std::slice::Iter<'a, UrlEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
