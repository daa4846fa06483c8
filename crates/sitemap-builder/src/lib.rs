//! Sitemap registry and XML serializer for the sitemaps.org 0.9 protocol.
//!
//! Callers register URL entries (with optional `lastmod`, `changefreq`,
//! `priority`, hreflang alternates and images) in a [`Sitemap`], then ask it
//! for a single XML document covering every entry:
//!
//! ```
//! use sitemap_builder::{ChangeFreq, Sitemap, UrlEntry};
//!
//! let mut sitemap = Sitemap::new();
//! sitemap
//!     .insert(
//!         UrlEntry::new("https://example.com/")
//!             .lastmod("2024-01-01")
//!             .changefreq(ChangeFreq::Daily)
//!             .priority("0.8"),
//!     )
//!     .unwrap();
//! sitemap
//!     .add_alternate("https://example.com/", "fr", "https://example.com/fr/")
//!     .unwrap();
//! sitemap
//!     .add_image("https://example.com/", "https://example.com/logo.png")
//!     .unwrap();
//!
//! let xml = sitemap.generate_xml().unwrap();
//! assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
//! assert!(xml.contains("<loc>https://example.com/</loc>"));
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod serializer;

pub use config::SitemapConfig;
pub use error::{Result, SitemapError};
pub use registry::types::{Alternate, ChangeFreq, Image, UrlEntry};
pub use registry::Sitemap;
pub use serializer::{CONTENT_TYPE, IMAGE_NS, MAX_URLS, SITEMAP_NS, XHTML_NS};
