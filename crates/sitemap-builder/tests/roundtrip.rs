//! Parse generated sitemaps back with a namespace-aware reader.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use sitemap_builder::{
    Alternate, ChangeFreq, Image, Sitemap, SitemapConfig, SitemapError, UrlEntry, IMAGE_NS,
    SITEMAP_NS, XHTML_NS,
};
use std::io::Read;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("sitemap_builder=debug"))
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Copy, PartialEq)]
enum Ns {
    Sitemap,
    Xhtml,
    Image,
    Other,
}

fn ns_of(resolved: &ResolveResult) -> Ns {
    match resolved {
        ResolveResult::Bound(ns) => {
            let ns = ns.as_ref();
            if ns == SITEMAP_NS.as_bytes() {
                Ns::Sitemap
            } else if ns == XHTML_NS.as_bytes() {
                Ns::Xhtml
            } else if ns == IMAGE_NS.as_bytes() {
                Ns::Image
            } else {
                Ns::Other
            }
        }
        _ => Ns::Other,
    }
}

fn attr(e: &BytesStart, key: &str) -> String {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key.as_bytes())
        .map(|a| a.unescape_value().unwrap().to_string())
        .unwrap_or_default()
}

/// Rebuild the registry contents from a serialized sitemap.
fn parse_sitemap(xml: &str) -> Vec<UrlEntry> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current: Option<UrlEntry> = None;
    let mut field: Option<(Ns, String)> = None;
    let mut saw_root = false;

    loop {
        let (resolved, event) = reader.read_resolved_event().unwrap();
        let ns = ns_of(&resolved);
        match event {
            Event::Start(e) => {
                let local = String::from_utf8(e.local_name().as_ref().to_vec()).unwrap();
                match (ns, local.as_str()) {
                    (Ns::Sitemap, "urlset") => saw_root = true,
                    (Ns::Sitemap, "url") => current = Some(UrlEntry::new(String::new())),
                    (Ns::Image, "image") => {
                        if let Some(entry) = current.as_mut() {
                            entry.images.push(Image::new(String::new()));
                        }
                    }
                    _ => field = Some((ns, local)),
                }
            }
            Event::Empty(e) => {
                let local = e.local_name();
                if ns == Ns::Xhtml && local.as_ref() == b"link" {
                    assert_eq!(attr(&e, "rel"), "alternate");
                    if let Some(entry) = current.as_mut() {
                        entry
                            .alternates
                            .push(Alternate::new(attr(&e, "hreflang"), attr(&e, "href")));
                    }
                }
            }
            Event::Text(t) => {
                let text = t.unescape().unwrap().to_string();
                let entry = current.as_mut().expect("text outside <url>");
                match field.as_ref().map(|(ns, name)| (*ns, name.as_str())) {
                    Some((Ns::Sitemap, "loc")) => entry.loc = text,
                    Some((Ns::Sitemap, "lastmod")) => entry.lastmod = Some(text),
                    Some((Ns::Sitemap, "changefreq")) => entry.changefreq = Some(text),
                    Some((Ns::Sitemap, "priority")) => entry.priority = Some(text),
                    Some((Ns::Image, "loc")) => entry.images.last_mut().unwrap().loc = text,
                    Some((Ns::Image, "title")) => entry.images.last_mut().unwrap().title = Some(text),
                    Some((Ns::Image, "caption")) => {
                        entry.images.last_mut().unwrap().caption = Some(text)
                    }
                    other => panic!("unexpected text in {:?}", other.map(|(_, n)| n)),
                }
            }
            Event::End(e) => {
                if ns == Ns::Sitemap && e.local_name().as_ref() == b"url" {
                    entries.push(current.take().unwrap());
                }
                field = None;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(saw_root, "missing <urlset> in the sitemap namespace");
    entries
}

fn sample_sitemap(config: SitemapConfig) -> Sitemap {
    let mut sitemap = Sitemap::with_config(config);
    sitemap
        .insert(
            UrlEntry::new("https://example.com/")
                .lastmod("2024-01-01")
                .changefreq(ChangeFreq::Daily)
                .priority("1.0"),
        )
        .unwrap();
    sitemap
        .insert(
            UrlEntry::new("https://example.com/search?q=a&page=2")
                .lastmod("2024-02-03T10:00:00+01:00")
                .priority("0.0"),
        )
        .unwrap();
    sitemap.add_url("https://example.com/about").unwrap();

    sitemap
        .add_alternate("https://example.com/", "fr", "https://example.com/fr/")
        .unwrap();
    sitemap
        .add_alternate("https://example.com/", "x-default", "https://example.com/?lang=&x=<1>")
        .unwrap();
    sitemap
        .add_image("https://example.com/", "https://example.com/hero.png")
        .unwrap();
    sitemap
        .add_image_entry(
            "https://example.com/about",
            Image::new("https://example.com/team.jpg")
                .title("Team \"photo\"")
                .caption("Tom's & Ann's team"),
        )
        .unwrap();
    sitemap
}

#[test]
fn test_roundtrip_compact() {
    init_tracing();
    let sitemap = sample_sitemap(SitemapConfig::default());
    let xml = sitemap.generate_xml().unwrap();

    let parsed = parse_sitemap(&xml);
    let expected: Vec<UrlEntry> = sitemap.iter().cloned().collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_roundtrip_indented() {
    init_tracing();
    let sitemap = sample_sitemap(SitemapConfig::default().with_indent(Some(2)));
    let xml = sitemap.generate_xml().unwrap();

    let parsed = parse_sitemap(&xml);
    let expected: Vec<UrlEntry> = sitemap.iter().cloned().collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_replaced_entry_roundtrip() {
    init_tracing();
    let mut sitemap = Sitemap::new();
    sitemap
        .insert(UrlEntry::new("http://x.com").priority("0.5").image("http://x.com/a.png"))
        .unwrap();
    sitemap
        .insert(UrlEntry::new("http://x.com").changefreq("weekly"))
        .unwrap();

    let parsed = parse_sitemap(&sitemap.generate_xml().unwrap());
    assert_eq!(
        parsed,
        vec![UrlEntry::new("http://x.com").changefreq("weekly")]
    );
}

#[test]
fn test_strict_mode_leaves_output_unchanged() {
    init_tracing();
    let mut sitemap = Sitemap::with_config(SitemapConfig::from_json(r#"{"strict": true}"#).unwrap());
    sitemap.add_url("http://x.com").unwrap();
    let before = sitemap.generate_xml().unwrap();

    let err = sitemap
        .add_image("http://y.com", "http://y.com/a.png")
        .unwrap_err();
    assert!(matches!(err, SitemapError::NotFound { .. }));
    assert_eq!(sitemap.generate_xml().unwrap(), before);
}

#[test]
fn test_write_to_file() {
    init_tracing();
    let sitemap = sample_sitemap(SitemapConfig::default());
    let mut file = tempfile::NamedTempFile::new().unwrap();
    sitemap.write_to(&mut file).unwrap();

    let mut written = String::new();
    file.reopen().unwrap().read_to_string(&mut written).unwrap();
    assert_eq!(written, sitemap.generate_xml().unwrap());
}
