use super::interface::FragmentExtractor;

pub const RESULT_START_MARKER: &str = "<div class='result-container'>";
pub const RESULT_END_MARKER: &str = "</div>";

/// Substring scan between two fixed markers.
///
/// First match only, no nesting, no entity decoding or trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerExtractor;

impl FragmentExtractor for MarkerExtractor {
    fn extract_fragment<'a>(&self, html: &'a str) -> Option<&'a str> {
        extract_fragment(html)
    }
}

pub fn extract_fragment(html: &str) -> Option<&str> {
    let start = html.find(RESULT_START_MARKER)? + RESULT_START_MARKER.len();
    let len = html[start..].find(RESULT_END_MARKER)?;
    Some(&html[start..start + len])
}
