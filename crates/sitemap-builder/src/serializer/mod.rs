//! XML serialization of a [`Sitemap`] into a sitemaps.org `<urlset>` document.
//!
//! Entries are written in registry order. Optional fields are written only
//! when set; alternates become `<xhtml:link rel="alternate">` elements and
//! images become `<image:image>` blocks, both in append order.

mod writer;

use crate::error::Result;
use crate::registry::Sitemap;
use std::io::Write;
use tracing::{debug, warn};
use writer::{check_entry, SitemapWriter};

/// Default namespace of the `<urlset>` root.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
/// Namespace bound to the `xhtml` prefix (hreflang alternates).
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
/// Namespace bound to the `image` prefix (Google image extension).
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";
/// Content type for serving a generated sitemap over HTTP.
pub const CONTENT_TYPE: &str = "application/xml";
/// Maximum number of `<url>` entries a single sitemap file may hold.
pub const MAX_URLS: usize = 50_000;

impl Sitemap {
    /// Stream the sitemap document into `sink`.
    ///
    /// Every entry is checked before the first byte is written, so a value
    /// that cannot appear in well-formed XML fails the call without leaving a
    /// partial document in `sink`.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<W> {
        if self.len() > MAX_URLS {
            warn!(
                "sitemap has {} entries, more than the protocol limit of {MAX_URLS}",
                self.len()
            );
        }

        for entry in self.iter() {
            check_entry(entry)?;
        }

        let config = self.config();
        let mut out = SitemapWriter::new(sink, config.indent);
        if config.xml_declaration {
            out.declaration()?;
        }
        out.open_urlset()?;
        for entry in self.iter() {
            out.url(entry)?;
        }
        out.close_urlset()?;
        Ok(out.into_inner())
    }

    /// Serialize the whole sitemap to a UTF-8 XML string.
    pub fn generate_xml(&self) -> Result<String> {
        let buf = self.write_to(Vec::new())?;
        let xml = String::from_utf8(buf)?;
        debug!(
            "generated sitemap with {} entries ({} bytes)",
            self.len(),
            xml.len()
        );
        Ok(xml)
    }
}
