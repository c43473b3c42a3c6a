/// Blanks out parenthesized spans in the visible text of serialized
/// markup while leaving anything between `<` and `>` untouched.
///
/// Works on the serialized form rather than the parsed tree so it can
/// see raw tag boundaries: a link whose label or surrounding prose is
/// parenthetical gets wiped out along with its markup, but parentheses
/// inside an attribute value (an href pointing at
/// `Foo_(disambiguation)`, say) survive byte for byte.
///
/// Every masked character becomes a single space, so the output always
/// has the same character count as the input and unmasked offsets are
/// preserved.
///
/// The two counters exclude each other: tag boundaries are only tracked
/// outside parentheses, and parentheses are only tracked outside tags.
/// An unmatched `<` therefore leaves the scanner in tag state for the
/// rest of the input, and everything after it passes through unmasked.
pub fn mask_parentheses(input: &str) -> String {
    let mut tag_depth: i32 = 0;
    let mut paren_depth: i32 = 0;
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        // Outside parentheses: watch for tag boundaries
        if paren_depth < 1 {
            if c == '<' {
                tag_depth += 1;
            }
            if c == '>' {
                tag_depth -= 1;
            }
        }

        if tag_depth < 1 {
            // Visible text: track parentheses and blank their contents
            if c == '(' {
                paren_depth += 1;
            }
            if paren_depth > 0 {
                result.push(' ');
            } else {
                result.push(c);
            }
            if c == ')' {
                paren_depth -= 1;
            }
        } else {
            // Inside a tag: pass through untouched
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blanks(s: &str) -> String {
        " ".repeat(s.chars().count())
    }

    #[test]
    fn test_identity_without_parens_or_tags() {
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(mask_parentheses(text), text);
    }

    #[test]
    fn test_masks_parenthesized_text() {
        let masked = mask_parentheses("Hello (world)!");
        assert_eq!(masked, format!("Hello {}!", blanks("(world)")));
        assert_eq!(masked.chars().count(), "Hello (world)!".chars().count());
    }

    #[test]
    fn test_masks_nested_parentheses() {
        let input = "looks pretty (((good))).";
        let masked = mask_parentheses(input);
        assert_eq!(masked, format!("looks pretty {}.", blanks("(((good)))")));
        assert_eq!(masked.chars().count(), input.chars().count());
    }

    #[test]
    fn test_leading_parenthetical() {
        assert_eq!(
            mask_parentheses("(hello) there"),
            format!("{} there", blanks("(hello)"))
        );
    }

    #[test]
    fn test_entirely_parenthesized_string() {
        let input = "(an entire string contained within parentheses)";
        assert_eq!(mask_parentheses(input), blanks(input));
    }

    #[test]
    fn test_href_parentheses_survive() {
        let input = concat!(
            "The <a href=\"/wiki/Encyclopedia_(disambiguation)\">encyclopedia</a> ",
            "looks pretty (((good)))."
        );
        let masked = mask_parentheses(input);
        assert_eq!(
            masked,
            format!(
                "The <a href=\"/wiki/Encyclopedia_(disambiguation)\">encyclopedia</a> \
                 looks pretty {}.",
                blanks("(((good)))")
            )
        );
        // The attribute value is byte-identical after masking
        assert!(masked.contains("/wiki/Encyclopedia_(disambiguation)"));
    }

    #[test]
    fn test_parenthesized_link_markup_is_wiped() {
        // Inside parentheses tag boundaries are not tracked, so the
        // anchor's own markup gets blanked along with its label
        let input = "France (<a href=\"/wiki/French_language\">French</a> republic) is";
        let masked = mask_parentheses(input);
        assert!(!masked.contains("href"));
        assert!(!masked.contains("French"));
        assert!(masked.starts_with("France "));
        assert!(masked.ends_with(" is"));
        assert_eq!(masked.chars().count(), input.chars().count());
    }

    #[test]
    fn test_unmatched_open_tag_disables_masking() {
        // The unmatched '<' leaves the scanner permanently in tag state
        assert_eq!(mask_parentheses("< (hello)"), "< (hello)");
        assert_eq!(mask_parentheses("< (goodbye) >"), "< (goodbye) >");
        assert_eq!(
            mask_parentheses("<a b(rules are for everyone)"),
            "<a b(rules are for everyone)"
        );
        assert_eq!(
            mask_parentheses("<a <b (doesn't matter <who you are>> everyone)"),
            "<a <b (doesn't matter <who you are>> everyone)"
        );
    }

    #[test]
    fn test_unmatched_open_paren_masks_remainder() {
        let masked = mask_parentheses("There ((you are), my friend.");
        assert_eq!(masked, format!("There {}", blanks("((you are), my friend.")));
    }

    #[test]
    fn test_unbalanced_close_paren_passes_through() {
        let input = "This isn't (my)) fault, okay?";
        let masked = mask_parentheses(input);
        assert_eq!(masked, format!("This isn't {}) fault, okay?", blanks("(my)")));
    }

    #[test]
    fn test_tags_before_and_after_parens() {
        let input = "(sometimes) <(things) get> <complicated (do they?)";
        let masked = mask_parentheses(input);
        assert_eq!(
            masked,
            format!(
                "{} <(things) get> <complicated (do they?)",
                blanks("(sometimes)")
            )
        );
    }

    #[test]
    fn test_mixed_nesting() {
        let input = "<a<coach goes (over there)> (and)> (he seems to <find>) <(nothing)";
        let masked = mask_parentheses(input);
        assert_eq!(
            masked,
            format!(
                "<a<coach goes (over there)> (and)> {} <(nothing)",
                blanks("(he seems to <find>)")
            )
        );
    }
}
