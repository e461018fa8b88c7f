use crate::parsing::scan::TextScanner;

/// ATX heading (`# Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Level and text of a heading line. `#title` with no space is still a heading.
    pub fn parse(trimmed: &str) -> Option<(usize, &str)> {
        if !trimmed.starts_with(Self::MARKER) {
            return None;
        }
        let level = TextScanner::heading_level(trimmed);
        // `#` is one byte, so the level doubles as a byte offset.
        Some((level, TextScanner::trim(&trimmed[level..])))
    }
}
