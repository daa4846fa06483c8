//! Sitemap behaviour settings.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Options controlling registry strictness and output layout.
///
/// Every field has a default, so a partial JSON object such as
/// `{"strict": true}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Fail appends that target an unregistered `loc` instead of ignoring them.
    pub strict: bool,
    /// Indent nested elements by this many spaces. `None` writes compact output.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root element.
    pub xml_declaration: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            strict: false,
            indent: None,
            xml_declaration: true,
        }
    }
}

impl SitemapConfig {
    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set whether appends to an unregistered `loc` fail.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the indent width, or `None` for compact output.
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether the XML declaration is written.
    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }
}
