use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace prefixes that mark a page as administrative rather than
/// encyclopedic. Matching is case-sensitive, as in MediaWiki itself.
const NON_MAINSPACE: [&str; 16] = [
    "File:",
    "File talk:",
    "Wikipedia:",
    "Wikipedia talk:",
    "Project:",
    "Project talk:",
    "Portal:",
    "Portal talk:",
    "Special:",
    "Help:",
    "Help talk:",
    "Template:",
    "Template talk:",
    "Talk:",
    "Category:",
    "Category talk:",
];

/// A normalized Wikipedia article name: spaces rather than underscores,
/// percent-decoded, with any named-anchor fragment removed.
///
/// Equality on the normalized string is the identity used for loop
/// detection and end-page comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageTitle(String);

impl PageTitle {
    /// Wrap an already human-readable title (CLI arguments, API results).
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Build a title from the path remainder of an internal wikilink,
    /// i.e. whatever follows the `/wiki/` prefix in an href.
    ///
    /// The raw value is percent-decoded, stripped of a trailing
    /// `#fragment`, and has underscores mapped back to spaces.
    pub fn from_link(raw: &str) -> Self {
        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        let decoded = match decoded.find('#') {
            Some(pos) => &decoded[..pos],
            None => &decoded[..],
        };
        Self(decoded.replace('_', " "))
    }

    /// Whether this title names an encyclopedic (mainspace) article
    /// rather than an administrative or meta page.
    pub fn is_mainspace(&self) -> bool {
        NON_MAINSPACE.iter().all(|prefix| !self.0.starts_with(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_every_non_mainspace_prefix() {
        for prefix in NON_MAINSPACE {
            let title = PageTitle::new(format!("{}Something", prefix));
            assert!(!title.is_mainspace(), "{} should be rejected", prefix);
        }
    }

    #[test]
    fn test_accepts_plain_titles() {
        assert!(PageTitle::new("Philosophy").is_mainspace());
        assert!(PageTitle::new("Sandwich").is_mainspace());
        // A colon alone does not make a namespace
        assert!(PageTitle::new("Dr. Strangelove: How I Learned").is_mainspace());
        // Prefix match is case-sensitive
        assert!(PageTitle::new("file:Not a real namespace").is_mainspace());
    }

    #[test]
    fn test_from_link_maps_underscores() {
        let title = PageTitle::from_link("Multicellular_organism");
        assert_eq!(title.as_str(), "Multicellular organism");
    }

    #[test]
    fn test_from_link_strips_fragment() {
        let title = PageTitle::from_link("Sandwich#History");
        assert_eq!(title.as_str(), "Sandwich");
        let title = PageTitle::from_link("Dough#Leavened_dough");
        assert_eq!(title.as_str(), "Dough");
    }

    #[test]
    fn test_from_link_percent_decodes() {
        let title = PageTitle::from_link("Caf%C3%A9");
        assert_eq!(title.as_str(), "Café");
        let title = PageTitle::from_link("Python_%28programming_language%29");
        assert_eq!(title.as_str(), "Python (programming language)");
    }

    #[test]
    fn test_from_link_normalizes_before_validation() {
        // hrefs spell namespaces with underscores; normalization must
        // happen first or the prefix check would miss them
        let title = PageTitle::from_link("Template_talk:Infobox");
        assert!(!title.is_mainspace());
        let title = PageTitle::from_link("Category:Condiments");
        assert!(!title.is_mainspace());
    }

    #[test]
    fn test_equality_is_normalized() {
        assert_eq!(
            PageTitle::from_link("Multicellular_organism"),
            PageTitle::new("Multicellular organism")
        );
    }
}
