// crates/neoload-report-core/src/core/markup.rs
// ============================================================================
// Module: Report Markup Helpers
// Description: First-match substring and attribute extraction for report files.
// Purpose: Keep string surgery on HTML and CSS small, explicit, and testable.
// Dependencies: none
// ============================================================================

//! ## Overview
//! NeoLoad frameset reports have one menu frame and one stylesheet link, so
//! every helper here acts on the first structural match only. Reports with
//! several `id="menu"` elements or several stylesheet links are not fully
//! patched; that is a known limitation of the layout assumption.

// ============================================================================
// SECTION: Style Fragments
// ============================================================================

/// Attribute inserted after frame identifiers in the main report page.
pub const OVERFLOW_STYLE_ATTRIBUTE: &str = " style='overflow-x: hidden;' ";

/// Declaration inserted at the top of the first `body` rule.
pub const OVERFLOW_BODY_DECLARATION: &str = "\noverflow-x: hidden;";

/// Opening of the CSS rule that receives the overflow declaration.
pub const BODY_RULE_OPEN: &str = "body {";

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Inserts `insertion` right after the first occurrence of `needle`.
///
/// Returns false and leaves `content` untouched when `needle` is absent.
pub fn insert_after_first(content: &mut String, needle: &str, insertion: &str) -> bool {
    match content.find(needle) {
        Some(start) => {
            content.insert_str(start + needle.len(), insertion);
            true
        }
        None => false,
    }
}

/// Returns the text between the first `prefix` and the next `"`.
///
/// `prefix` is expected to end with the opening quote, e.g. `src="`.
#[must_use]
pub fn first_quoted_value<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let start = content.find(prefix)? + prefix.len();
    let rest = content.get(start..)?;
    let end = rest.find('"')?;
    rest.get(..end)
}

/// Returns the first tag opened by `open` (e.g. `<link`), without its closing
/// `>`.
#[must_use]
pub fn first_tag<'a>(content: &'a str, open: &str) -> Option<&'a str> {
    let start = content.find(open)?;
    let rest = content.get(start..)?;
    let end = rest.find('>')?;
    rest.get(..end)
}

/// Returns the value of attribute `name` inside a tag body.
///
/// Accepts single-quoted, double-quoted, and bare values. The attribute name
/// must be preceded by whitespace so `data-href` never matches `href`.
#[must_use]
pub fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let mut offset = 0;
    while let Some(found) = tag.get(offset..)?.find(name) {
        let start = offset + found;
        let after = start + name.len();
        let preceded_by_space = tag
            .get(..start)
            .and_then(|head| head.chars().next_back())
            .is_some_and(char::is_whitespace);
        let rest = tag.get(after..)?.trim_start();
        if preceded_by_space && let Some(value) = rest.strip_prefix('=') {
            return unquote(value.trim_start());
        }
        offset = after;
    }
    None
}

/// Reads a quoted or bare attribute value from the start of `value`.
fn unquote(value: &str) -> Option<&str> {
    match value.chars().next()? {
        quote @ ('"' | '\'') => {
            let inner = value.get(1..)?;
            let end = inner.find(quote)?;
            inner.get(..end)
        }
        _ => {
            let end = value.find(char::is_whitespace).unwrap_or(value.len());
            value.get(..end).map(|bare| bare.trim_end_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_after_first_only_touches_first_match() {
        let mut content = String::from("<div id=\"menu\"></div><div id=\"menu\"></div>");
        assert!(insert_after_first(&mut content, "id=\"menu\"", OVERFLOW_STYLE_ATTRIBUTE));
        assert_eq!(
            content,
            "<div id=\"menu\" style='overflow-x: hidden;' ></div><div id=\"menu\"></div>"
        );
    }

    #[test]
    fn insert_after_first_without_match_is_noop() {
        let mut content = String::from("p { color: red; }");
        assert!(!insert_after_first(&mut content, BODY_RULE_OPEN, OVERFLOW_BODY_DECLARATION));
        assert_eq!(content, "p { color: red; }");
    }

    #[test]
    fn first_quoted_value_reads_frame_source() {
        let content = "<frame name=\"m\" src=\"menu.html\"><frame src=\"summary.html\">";
        assert_eq!(first_quoted_value(content, "src=\""), Some("menu.html"));
        assert_eq!(first_quoted_value("no frames", "src=\""), None);
        assert_eq!(first_quoted_value("src=\"unterminated", "src=\""), None);
    }

    #[test]
    fn first_tag_stops_before_closing_bracket() {
        let content = "<head><link rel=\"stylesheet\" href=\"style.css\"><link href=\"b.css\"></head>";
        assert_eq!(first_tag(content, "<link"), Some("<link rel=\"stylesheet\" href=\"style.css\""));
    }

    #[test]
    fn attribute_value_handles_quotes_and_prefixed_names() {
        assert_eq!(attribute_value("<link href=\"style.css\"", "href"), Some("style.css"));
        assert_eq!(attribute_value("<link href='style.css'", "href"), Some("style.css"));
        assert_eq!(attribute_value("<link href = style.css", "href"), Some("style.css"));
        assert_eq!(
            attribute_value("<link data-href=\"x.css\" href=\"style.css\"", "href"),
            Some("style.css")
        );
        assert_eq!(attribute_value("<link rel=\"stylesheet\"", "href"), None);
    }
}
