//! The fixed catalog of checks the audit backend reports on.
//!
//! The catalog is the client's own knowledge, independent of any server
//! response: keys the server sends that are not listed here are ignored, and
//! listed keys the server omits are simply not shown.

/// One SEO criterion. The order of [`CheckKey::ALL`] is the display order
/// everywhere: the results grid, the failed-checks panel and the exported
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKey {
    TitleTag,
    MetaDescription,
    H1Tag,
    HeaderHierarchy,
    ContentLength,
    KeywordDensity,
    AltText,
    CanonicalUrl,
    MetaRobots,
    XmlSitemap,
    SchemaMarkup,
    BrokenLinks,
}

impl CheckKey {
    pub const ALL: [CheckKey; 12] = [
        CheckKey::TitleTag,
        CheckKey::MetaDescription,
        CheckKey::H1Tag,
        CheckKey::HeaderHierarchy,
        CheckKey::ContentLength,
        CheckKey::KeywordDensity,
        CheckKey::AltText,
        CheckKey::CanonicalUrl,
        CheckKey::MetaRobots,
        CheckKey::XmlSitemap,
        CheckKey::SchemaMarkup,
        CheckKey::BrokenLinks,
    ];

    /// The identifier used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKey::TitleTag => "title_tag",
            CheckKey::MetaDescription => "meta_description",
            CheckKey::H1Tag => "h1_tag",
            CheckKey::HeaderHierarchy => "header_hierarchy",
            CheckKey::ContentLength => "content_length",
            CheckKey::KeywordDensity => "keyword_density",
            CheckKey::AltText => "alt_text",
            CheckKey::CanonicalUrl => "canonical_url",
            CheckKey::MetaRobots => "meta_robots",
            CheckKey::XmlSitemap => "xml_sitemap",
            CheckKey::SchemaMarkup => "schema_markup",
            CheckKey::BrokenLinks => "broken_links",
        }
    }

    /// Wire identifier to catalog entry; unrecognized keys get `None`.
    pub fn from_key(key: &str) -> Option<CheckKey> {
        CheckKey::ALL.into_iter().find(|c| c.as_str() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            CheckKey::TitleTag => "Title Tag",
            CheckKey::MetaDescription => "Meta Description",
            CheckKey::H1Tag => "H1 Tag",
            CheckKey::HeaderHierarchy => "Header Hierarchy",
            CheckKey::ContentLength => "Content Length",
            CheckKey::KeywordDensity => "Keyword Density",
            CheckKey::AltText => "Image Alt Text",
            CheckKey::CanonicalUrl => "Canonical URL",
            CheckKey::MetaRobots => "Meta Robots",
            CheckKey::XmlSitemap => "XML Sitemap",
            CheckKey::SchemaMarkup => "Schema Markup",
            CheckKey::BrokenLinks => "Broken Links",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CheckKey::TitleTag => "Check if page has a proper title tag with optimal length",
            CheckKey::MetaDescription => "Verify presence and length of meta description",
            CheckKey::H1Tag => "Check for presence and uniqueness of H1 tag",
            CheckKey::HeaderHierarchy => "Analyze proper H1-H6 header structure",
            CheckKey::ContentLength => "Evaluate content length and readability",
            CheckKey::KeywordDensity => "Analyze keyword distribution and density",
            CheckKey::AltText => "Check if images have proper alt attributes",
            CheckKey::CanonicalUrl => "Verify presence of canonical link tag",
            CheckKey::MetaRobots => "Check for meta robots tag configuration",
            CheckKey::XmlSitemap => "Look for XML sitemap reference",
            CheckKey::SchemaMarkup => "Detect structured data markup",
            CheckKey::BrokenLinks => "Check for broken internal and external links",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_round_trips_every_entry() {
        for key in CheckKey::ALL {
            assert_eq!(CheckKey::from_key(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_from_key_rejects_unknown() {
        assert_eq!(CheckKey::from_key("page_speed"), None);
        assert_eq!(CheckKey::from_key(""), None);
    }

    #[test]
    fn test_display_order_is_stable() {
        assert_eq!(CheckKey::ALL[0], CheckKey::TitleTag);
        assert_eq!(CheckKey::ALL[11], CheckKey::BrokenLinks);
        assert_eq!(CheckKey::ALL.len(), 12);
    }
}
