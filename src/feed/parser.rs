//! Tag extraction over raw feed text, without an XML parser.
//!
//! RSS in the wild is frequently malformed: unescaped ampersands, stray
//! markup, truncated documents. A strict XML parser rejects such feeds
//! outright, so the pipeline never uses one. The functions here scan for the
//! handful of tags the item mapping needs and degrade per field: a missing or
//! unclosed tag yields an empty string, never an error.
//!
//! Accepted limitations of the lightweight approach:
//!
//! - only bare `<tag>` openers match; attributed openers (`<tag attr="…">`)
//!   do not
//! - nested same-named tags are not understood; matching is non-greedy and
//!   the first occurrence wins
//! - nested CDATA sections are not supported; the first `]]>` ends a block

use std::borrow::Cow;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Literal delimiter that starts each feed item.
const ITEM_DELIMITER: &str = "<item>";

/// Extracts the content of the first `<tag>…</tag>` element in `xml`.
///
/// Two passes, in a fixed fallback order:
///
/// 1. CDATA: the first occurrence of `<tag><![CDATA[…]]></tag>` (whitespace
///    tolerated around the CDATA markers) returns the wrapped content
///    verbatim. CDATA content is not entity-decoded.
/// 2. Plain: the first `<tag>` with a `</tag>` anywhere after it returns the
///    content between them.
///
/// The CDATA pass runs over the whole input first, so a CDATA-wrapped
/// occurrence wins even when a plain occurrence precedes it. Either way the
/// returned content is trimmed. No match returns `""`; extraction never
/// fails an item.
pub fn extract_tag<'a>(xml: &'a str, tag: &str) -> &'a str {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    for (at, _) in xml.match_indices(&open) {
        let rest = &xml[at + open.len()..];
        let Some(body) = rest.trim_start().strip_prefix(CDATA_OPEN) else {
            continue;
        };
        let Some(end) = body.find(CDATA_CLOSE) else {
            continue;
        };
        if body[end + CDATA_CLOSE.len()..]
            .trim_start()
            .starts_with(&close)
        {
            return body[..end].trim();
        }
    }

    if let Some(start) = xml.find(&open) {
        let rest = &xml[start + open.len()..];
        if let Some(end) = rest.find(&close) {
            return rest[..end].trim();
        }
    }

    ""
}

/// Splits a feed document into item fragments.
///
/// The split is on the literal `<item>` delimiter: the first fragment is the
/// channel preamble and is discarded, and each remaining fragment runs to the
/// next delimiter (exclusive). Closing `</item>` tags are not consulted, so a
/// fragment carries whatever trails its item (including channel-level content
/// after the last item); [`extract_tag`] tolerates that.
///
/// A document with no delimiters yields an empty iterator, not an error.
pub fn split_items(xml: &str) -> impl Iterator<Item = &str> {
    xml.split(ITEM_DELIMITER).skip(1)
}

/// Removes markup spans and decodes the fixed entity set.
///
/// Tag removal drops every `<…>` span, non-greedy to the first `>`. A `<`
/// with no `>` after it is not a tag and stays in the output. Entity decoding
/// then replaces exactly `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&#39;`, in that
/// order. `&amp;` must come first: each pass runs on the output of the one
/// before it, so `&amp;lt;` decodes all the way to `<`. This is the whole
/// decoder; any other entity passes through verbatim. Not a general HTML
/// sanitizer.
///
/// Returns `Cow::Borrowed` when the input contains neither `<` nor `&`
/// (common for plain-text feed titles).
pub fn strip_html(text: &str) -> Cow<'_, str> {
    if !text.contains('<') && !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(lt) = rest.find('<') {
        match rest[lt..].find('>') {
            Some(gt) => {
                out.push_str(&rest[..lt]);
                rest = &rest[lt + gt + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);

    let decoded = out
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    Cow::Owned(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // ========================================================================
    // extract_tag
    // ========================================================================

    #[test]
    fn test_extract_plain_tag() {
        assert_eq!(extract_tag("<title>Hello</title>", "title"), "Hello");
    }

    #[test]
    fn test_extract_trims_content() {
        assert_eq!(
            extract_tag("<title>\n  padded  \n</title>", "title"),
            "padded"
        );
    }

    #[test]
    fn test_extract_first_occurrence_wins() {
        let xml = "<title>First</title><title>Second</title>";
        assert_eq!(extract_tag(xml, "title"), "First");
    }

    #[test]
    fn test_extract_cdata_content_verbatim() {
        // CDATA is unwrapped but never entity-decoded
        let xml = "<title><![CDATA[Hello & Bye]]></title>";
        assert_eq!(extract_tag(xml, "title"), "Hello & Bye");
    }

    #[test]
    fn test_extract_cdata_whitespace_around_markers() {
        let xml = "<title>\n  <![CDATA[Spaced]]>\n</title>";
        assert_eq!(extract_tag(xml, "title"), "Spaced");
    }

    #[test]
    fn test_cdata_occurrence_beats_earlier_plain() {
        // The CDATA pass covers the whole input before the plain pass starts
        let xml = "<title>Plain</title><title><![CDATA[Wrapped]]></title>";
        assert_eq!(extract_tag(xml, "title"), "Wrapped");
    }

    #[test]
    fn test_extract_missing_tag_is_empty() {
        assert_eq!(extract_tag("<link>x</link>", "title"), "");
    }

    #[test]
    fn test_extract_unclosed_tag_is_empty() {
        assert_eq!(extract_tag("<title>never closed", "title"), "");
    }

    #[test]
    fn test_extract_closer_before_opener_is_empty() {
        assert_eq!(extract_tag("</title>backwards<title>", "title"), "");
    }

    #[test]
    fn test_extract_skips_attributed_opener() {
        let xml = r#"<link href="https://a.example/">alt</link><link>https://b.example/</link>"#;
        assert_eq!(extract_tag(xml, "link"), "https://b.example/");
    }

    #[test]
    fn test_extract_inner_markup_passes_through() {
        // Non-greedy to the first closer; nested structure is not understood
        let xml = "<description><p>One</p></description>";
        assert_eq!(extract_tag(xml, "description"), "<p>One</p>");
    }

    #[test]
    fn test_unterminated_cdata_falls_back_to_plain() {
        // "<![CDATA[broken" never closes, so the plain pass sees the raw span
        let xml = "<title><![CDATA[broken</title>";
        assert_eq!(extract_tag(xml, "title"), "<![CDATA[broken");
    }

    // ========================================================================
    // strip_html
    // ========================================================================

    #[test]
    fn test_strip_tags_and_entities() {
        assert_eq!(strip_html("<b>Tom &amp; Jerry</b>"), "Tom & Jerry");
    }

    #[test]
    fn test_strip_clean_text_returns_borrowed() {
        let result = strip_html("plain headline text");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "plain headline text");
    }

    #[test]
    fn test_strip_tag_with_attributes() {
        assert_eq!(
            strip_html(r#"<a href="https://example.com">link</a> text"#),
            "link text"
        );
    }

    #[test]
    fn test_strip_keeps_unmatched_angle_bracket() {
        // '<' without a closing '>' is not a tag
        assert_eq!(strip_html("5 < 6"), "5 < 6");
    }

    #[test]
    fn test_strip_full_entity_set() {
        assert_eq!(
            strip_html("&lt;tag&gt; &quot;quoted&quot; it&#39;s"),
            "<tag> \"quoted\" it's"
        );
    }

    #[test]
    fn test_decoded_markup_is_not_restripped() {
        // Tags are removed before entities decode, so decoded brackets stay
        assert_eq!(strip_html("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn test_sequential_decode_order() {
        // Each replacement pass runs on the previous pass's output
        assert_eq!(strip_html("&amp;lt;"), "<");
        assert_eq!(strip_html("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_strip_empty_string() {
        let result = strip_html("");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "");
    }

    // ========================================================================
    // split_items
    // ========================================================================

    #[test]
    fn test_split_discards_channel_preamble() {
        let xml = "<channel><title>Feed</title><item>A</item></channel>";
        let items: Vec<&str> = split_items(xml).collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].starts_with("A"));
    }

    #[test]
    fn test_split_counts_every_item() {
        let xml = "pre<item>A</item><item>B</item><item>C</item>post";
        assert_eq!(split_items(xml).count(), 3);
    }

    #[test]
    fn test_split_no_items_yields_nothing() {
        assert_eq!(split_items("<channel><title>Empty</title></channel>").count(), 0);
        assert_eq!(split_items("").count(), 0);
    }

    #[test]
    fn test_split_fragment_extends_to_next_delimiter() {
        let xml = "pre<item>A</item>between<item>B</item>post";
        let items: Vec<&str> = split_items(xml).collect();
        assert_eq!(items, vec!["A</item>between", "B</item>post"]);
    }

    #[test]
    fn test_split_ignores_attributed_item_tag() {
        // Only the literal delimiter splits; <item attr=…> does not
        let xml = r#"<item rdf:about="x">A</item><item>B</item>"#;
        assert_eq!(split_items(xml).count(), 1);
    }

    // ========================================================================
    // Properties
    // ========================================================================

    proptest! {
        #[test]
        fn prop_extract_never_panics(s in ".*", tag in "[a-zA-Z]{1,12}") {
            let extracted = extract_tag(&s, &tag);
            prop_assert!(extracted.len() <= s.len());
        }

        #[test]
        fn prop_strip_never_panics(s in ".*") {
            let stripped = strip_html(&s);
            prop_assert!(stripped.len() <= s.len());
        }

        #[test]
        fn prop_item_count_matches_delimiters(s in "[a-z<>/item]*") {
            let delimiters = s.matches("<item>").count();
            prop_assert_eq!(split_items(&s).count(), delimiters);
        }
    }
}
