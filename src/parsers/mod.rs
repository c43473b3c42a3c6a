pub mod html;


use crate::mask::mask_parentheses;
use crate::title::PageTitle;

/// Runs the whole link-decision pipeline over one page's rendered
/// markup: drop non-prose subtrees, blank out parenthesized prose, then
/// pick the first qualifying internal link in document order.
///
/// Returns `None` when the markup carries no qualifying link at all;
/// the caller decides whether that means whole-page escalation or a
/// dead end.
pub fn first_link(html: &str) -> Option<PageTitle> {
    let filtered = html::strip_non_prose(html);
    let masked = mask_parentheses(&filtered);
    html::select_first_link(&masked)
}
