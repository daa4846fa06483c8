//! Element-level emission for sitemap documents.

use crate::error::{Result, SitemapError};
use crate::registry::types::{Alternate, Image, UrlEntry};
use crate::serializer::{IMAGE_NS, SITEMAP_NS, XHTML_NS};
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Reject entries that would produce a document that is not well-formed XML:
/// an empty `loc`, or any value holding a character outside the XML 1.0 `Char`
/// production (most C0 controls, U+FFFE, U+FFFF).
pub(crate) fn check_entry(entry: &UrlEntry) -> Result<()> {
    if entry.loc.is_empty() {
        return Err(SitemapError::InvalidArgument(
            "cannot serialize a sitemap entry without loc".to_string(),
        ));
    }

    check_chars(entry, "loc", &entry.loc)?;
    let optional = [
        ("lastmod", &entry.lastmod),
        ("changefreq", &entry.changefreq),
        ("priority", &entry.priority),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            check_chars(entry, field, value)?;
        }
    }
    for alternate in &entry.alternates {
        check_chars(entry, "hreflang", &alternate.hreflang)?;
        check_chars(entry, "href", &alternate.href)?;
    }
    for image in &entry.images {
        check_chars(entry, "image loc", &image.loc)?;
        if let Some(title) = &image.title {
            check_chars(entry, "image title", title)?;
        }
        if let Some(caption) = &image.caption {
            check_chars(entry, "image caption", caption)?;
        }
    }
    Ok(())
}

fn check_chars(entry: &UrlEntry, field: &str, value: &str) -> Result<()> {
    match value.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(SitemapError::InvalidArgument(format!(
            "{field} of sitemap entry {:?} contains U+{:04X}, which XML 1.0 does not allow",
            entry.loc, c as u32
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Streams a `<urlset>` document into `W`.
///
/// Every text node and attribute value goes through XML escaping.
pub(crate) struct SitemapWriter<W: Write> {
    xml: Writer<W>,
    indented: bool,
}

impl<W: Write> SitemapWriter<W> {
    pub fn new(sink: W, indent: Option<usize>) -> Self {
        let xml = match indent {
            Some(size) => Writer::new_with_indent(sink, b' ', size),
            None => Writer::new(sink),
        };
        Self {
            xml,
            indented: indent.is_some(),
        }
    }

    pub fn declaration(&mut self) -> Result<()> {
        self.xml
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        // The indenting writer breaks the line itself before the next element.
        if !self.indented {
            self.xml.get_mut().write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn open_urlset(&mut self) -> Result<()> {
        let root = BytesStart::new("urlset").with_attributes([
            ("xmlns", SITEMAP_NS),
            ("xmlns:xhtml", XHTML_NS),
            ("xmlns:image", IMAGE_NS),
        ]);
        self.xml.write_event(Event::Start(root))?;
        Ok(())
    }

    pub fn close_urlset(&mut self) -> Result<()> {
        self.xml.write_event(Event::End(BytesEnd::new("urlset")))?;
        self.xml.get_mut().write_all(b"\n")?;
        Ok(())
    }

    /// Write one `<url>` block. The entry must already have passed [`check_entry`].
    pub fn url(&mut self, entry: &UrlEntry) -> Result<()> {
        self.xml.write_event(Event::Start(BytesStart::new("url")))?;
        self.text_element("loc", &entry.loc)?;
        if let Some(lastmod) = &entry.lastmod {
            self.text_element("lastmod", lastmod)?;
        }
        if let Some(changefreq) = &entry.changefreq {
            self.text_element("changefreq", changefreq)?;
        }
        if let Some(priority) = &entry.priority {
            self.text_element("priority", priority)?;
        }
        for alternate in &entry.alternates {
            self.alternate(alternate)?;
        }
        for image in &entry.images {
            self.image(image)?;
        }
        self.xml.write_event(Event::End(BytesEnd::new("url")))?;
        Ok(())
    }

    fn alternate(&mut self, alternate: &Alternate) -> Result<()> {
        let link = BytesStart::new("xhtml:link").with_attributes([
            ("rel", "alternate"),
            ("hreflang", alternate.hreflang.as_str()),
            ("href", alternate.href.as_str()),
        ]);
        self.xml.write_event(Event::Empty(link))?;
        Ok(())
    }

    fn image(&mut self, image: &Image) -> Result<()> {
        self.xml
            .write_event(Event::Start(BytesStart::new("image:image")))?;
        self.text_element("image:loc", &image.loc)?;
        if let Some(title) = &image.title {
            self.text_element("image:title", title)?;
        }
        if let Some(caption) = &image.caption {
            self.text_element("image:caption", caption)?;
        }
        self.xml.write_event(Event::End(BytesEnd::new("image:image")))?;
        Ok(())
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.xml.write_event(Event::Start(BytesStart::new(name)))?;
        self.xml
            .write_event(Event::Text(BytesText::from_escaped(escape(text))))?;
        self.xml.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.xml.into_inner()
    }
}
