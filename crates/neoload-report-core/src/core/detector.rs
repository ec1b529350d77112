// crates/neoload-report-core/src/core/detector.rs
// ============================================================================
// Module: NeoLoad Report Detector
// Description: Content predicates that recognize NeoLoad HTML reports.
// Purpose: Separate report recognition from scanning and file access.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Newer NeoLoad reports embed an explicit generator tag. Older frameset
//! reports carry no tag and are recognized by their shape: a known report
//! title, a leading `<html`, a frameset, and references to the menu and
//! summary frames. Only the English and French legacy titles are known.

// ============================================================================
// SECTION: Markers
// ============================================================================

/// Tag embedded by NeoLoad in generated HTML reports.
pub const TAG_HTML_GENERATED_BY_NEOLOAD: &str = "#HTML Report Generated by NeoLoad#";

/// Marker appended to patched HTML files.
pub const COMMENT_APPLIED_STYLE: &str = "<!-- NeoLoad Jenkins plugin applied style -->";

/// Marker appended to patched stylesheets.
pub const COMMENT_CSS_APPLIED_STYLE: &str = "/* NeoLoad Jenkins plugin applied style */";

/// Report titles used by legacy frameset reports.
const LEGACY_TITLES: [&str; 2] =
    ["<title>Rapport de test de performance</title>", "<title>Performance Testing Report</title>"];

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Returns true when the artifact name looks like an HTML file.
///
/// Matches names longer than four characters whose last four characters are
/// `html` in any case.
#[must_use]
pub fn is_html_file_name(file_name: &str) -> bool {
    let bytes = file_name.as_bytes();
    bytes.len() > 4
        && bytes.get(bytes.len() - 4..).is_some_and(|suffix| suffix.eq_ignore_ascii_case(b"html"))
}

/// Returns true when `content` is the main page of a NeoLoad HTML report.
#[must_use]
pub fn is_neoload_report(content: &str) -> bool {
    if content.contains(TAG_HTML_GENERATED_BY_NEOLOAD) {
        return true;
    }
    is_legacy_frameset_report(content)
}

/// Recognizes a pre-tag NeoLoad frameset report by its structure.
fn is_legacy_frameset_report(content: &str) -> bool {
    LEGACY_TITLES.iter().any(|title| content.contains(title))
        && content.starts_with("<html")
        && content.contains("<frameset")
        && content.contains("/menu.html")
        && content.contains("/summary.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_suffix_is_case_insensitive() {
        assert!(is_html_file_name("report.html"));
        assert!(is_html_file_name("REPORT.HTML"));
        assert!(!is_html_file_name("report.htm"));
        assert!(!is_html_file_name("html"));
        assert!(!is_html_file_name("summary.css"));
    }

    #[test]
    fn legacy_layout_is_recognized() {
        let content = "<html><head><title>Performance Testing Report</title></head>\
                       <frameset><frame src=\"r/menu.html\"><frame src=\"r/summary.html\">\
                       </frameset></html>";
        assert!(is_neoload_report(content));
    }

    #[test]
    fn legacy_layout_requires_leading_html() {
        let content = " <html><title>Rapport de test de performance</title><frameset>\
                       /menu.html /summary.html";
        assert!(!is_neoload_report(content));
    }
}
