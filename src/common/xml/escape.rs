use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "'"]).expect("Failed to build XML escaper")
});

/// Escape XML special characters for use in text and attribute values.
///
/// Sheet names come straight from the input file name, so anything a file
/// system allows can end up inside `workbook.xml`.
///
/// # Examples
///
/// ```
/// use pixelsheet::common::xml::escape_xml;
/// assert_eq!(escape_xml("cat & dog"), "cat &amp; dog");
/// assert_eq!(escape_xml("<'a'>"), "&lt;&apos;a&apos;&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}
