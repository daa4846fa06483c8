//! Sitemap entry data structures.

use crate::error::SitemapError;
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One `<url>` block of a sitemap.
///
/// Optional fields are stored verbatim; the registry does not validate dates,
/// change frequencies or priorities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub alternates: Vec<Alternate>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl UrlEntry {
    /// Create an entry with only `loc` set.
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
            alternates: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Set `lastmod`, written verbatim.
    pub fn lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    /// Set `lastmod` to a W3C date (`YYYY-MM-DD`).
    pub fn lastmod_date(self, date: NaiveDate) -> Self {
        self.lastmod(date.format("%Y-%m-%d").to_string())
    }

    /// Set `lastmod` to a W3C datetime with second precision, e.g.
    /// `2024-01-01T12:00:00+02:00` (or `Z` for UTC).
    pub fn lastmod_datetime<Tz>(self, datetime: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.lastmod(datetime.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Set `changefreq`; accepts a [`ChangeFreq`] or any string.
    pub fn changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }

    /// Set `priority`, written verbatim (`"0.0"` is kept).
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Append an hreflang alternate.
    pub fn alternate(mut self, hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        self.alternates.push(Alternate::new(hreflang, href));
        self
    }

    /// Append an image, given as an [`Image`] or its location.
    pub fn image(mut self, image: impl Into<Image>) -> Self {
        self.images.push(image.into());
        self
    }
}

/// A localized variant of a page, written as `<xhtml:link rel="alternate">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

impl Alternate {
    /// Create an alternate for language `hreflang` at `href`.
    pub fn new(hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            hreflang: hreflang.into(),
            href: href.into(),
        }
    }
}

/// An image attached to a page (Google image sitemap extension).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub loc: String,
    pub title: Option<String>,
    pub caption: Option<String>,
}

impl Image {
    /// Create an image with only its location set.
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            title: None,
            caption: None,
        }
    }

    /// Set the `image:title`.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the `image:caption`.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl From<&str> for Image {
    fn from(loc: &str) -> Self {
        Image::new(loc)
    }
}

impl From<String> for Image {
    fn from(loc: String) -> Self {
        Image::new(loc)
    }
}

/// The `changefreq` values defined by the sitemaps.org protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// The protocol spelling, e.g. `"daily"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ChangeFreq::Always),
            "hourly" => Ok(ChangeFreq::Hourly),
            "daily" => Ok(ChangeFreq::Daily),
            "weekly" => Ok(ChangeFreq::Weekly),
            "monthly" => Ok(ChangeFreq::Monthly),
            "yearly" => Ok(ChangeFreq::Yearly),
            "never" => Ok(ChangeFreq::Never),
            other => Err(SitemapError::InvalidArgument(format!(
                "unknown changefreq `{other}`"
            ))),
        }
    }
}

impl From<ChangeFreq> for String {
    fn from(freq: ChangeFreq) -> Self {
        freq.as_str().to_string()
    }
}
