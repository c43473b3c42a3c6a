use crate::title::PageTitle;
use scraper::{Html, Selector};

/// Everything visually or semantically set apart from the article's
/// main prose: citation markers, inline spans, infobox-style division
/// containers, thumbnails, tables, red links, italics and the
/// coordinates widget. None of these may contribute a candidate link.
const NON_PROSE_SELECTOR: &str = ".reference, span, div, .thumb, table, a.new, i, #coordinates";

/// The path prefix every internal article link starts with.
const WIKILINK_PREFIX: &str = "/wiki/";

/// Removes non-prose subtrees from rendered article markup and returns
/// the filtered markup, ready for parenthetical masking.
///
/// Removal is tree subtraction, so the relative order of matches is
/// irrelevant and overlapping matches are simply dropped once. The
/// outermost container survives (MediaWiki wraps the whole article text
/// in a single top-level div); only nested matches are detached.
pub fn strip_non_prose(html: &str) -> String {
    let mut doc = Html::parse_fragment(html);
    let selector = Selector::parse(NON_PROSE_SELECTOR).unwrap();

    let root_id = doc.root_element().id();
    let doomed: Vec<_> = doc
        .select(&selector)
        .filter(|element| element.parent().map(|p| p.id()) != Some(root_id))
        .map(|element| element.id())
        .collect();

    ::log::debug!("Dropping {} non-prose subtrees", doomed.len());

    for id in doomed {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    doc.root_element().inner_html()
}

/// Walks the hyperlinks of masked markup in document order and returns
/// the first one that resolves to an internal mainspace article.
///
/// Only `href` attributes count as navigation targets. A candidate must
/// carry the `/wiki/` prefix and its normalized title must pass the
/// mainspace check; everything else is skipped. Returns `None` when no
/// link qualifies.
pub fn select_first_link(masked: &str) -> Option<PageTitle> {
    let doc = Html::parse_fragment(masked);
    let link_selector = Selector::parse("a").unwrap();

    for element in doc.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(target) = href.strip_prefix(WIKILINK_PREFIX) else {
            continue;
        };

        let title = PageTitle::from_link(target);
        if !title.is_mainspace() {
            ::log::debug!("Skipping non-mainspace link: {}", title);
            continue;
        }

        return Some(title);
    }

    None
}
