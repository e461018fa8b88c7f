use crate::parsing::scan::TextScanner;

/// Blockquote block type with owned delimiter constant.
///
/// Only one level is recognised; a second `>` stays in the quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Quoted text with the prefix and surrounding padding removed, if `trimmed` is a quote.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::PREFIX).map(TextScanner::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
        assert_eq!(BlockQuote::strip_prefix(">hello "), Some("hello"));
    }

    #[test]
    fn nested_marker_is_kept() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
    }

    #[test]
    fn empty_quote() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }
}
