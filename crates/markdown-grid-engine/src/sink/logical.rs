use std::fmt;

/// Border edges of a code-block frame cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameMask(u8);

impl FrameMask {
    pub const NONE: Self = Self(0);
    pub const TOP: Self = Self(1);
    pub const BOTTOM: Self = Self(2);
    pub const LEFT: Self = Self(4);
    pub const RIGHT: Self = Self(8);

    pub const fn from_edges(top: bool, bottom: bool, left: bool, right: bool) -> Self {
        Self(top as u8 | (bottom as u8) << 1 | (left as u8) << 2 | (right as u8) << 3)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, edge: FrameMask) -> bool {
        self.0 & edge.0 == edge.0
    }

    /// All 15 non-empty masks.
    pub fn all() -> impl Iterator<Item = FrameMask> {
        (1..16).map(FrameMask)
    }
}

impl fmt::Display for FrameMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (edge, letter) in [
            (Self::TOP, 'T'),
            (Self::BOTTOM, 'B'),
            (Self::LEFT, 'L'),
            (Self::RIGHT, 'R'),
        ] {
            if self.contains(edge) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// The named formatting intents the layout engine refers to.
///
/// The engine only names them; a [`StyleContext`](super::style::StyleContext)
/// turns each into fonts, fills and borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalStyle {
    Heading1,
    Heading2,
    Heading3,
    /// Level 4 and deeper.
    Heading4,
    Normal,
    Bullet,
    ListItem,
    CodeBlock,
    CodeFrame(FrameMask),
    HorizontalRule,
    TableHeader,
    TableBody,
    TableBodyLastRow,
    QuoteLeft,
    QuoteBody,
}

impl LogicalStyle {
    pub fn heading(level: usize) -> Self {
        match level {
            0 | 1 => LogicalStyle::Heading1,
            2 => LogicalStyle::Heading2,
            3 => LogicalStyle::Heading3,
            _ => LogicalStyle::Heading4,
        }
    }

    /// Frame style for a code cell; an interior cell is plain `CodeBlock`.
    pub fn code_frame(mask: FrameMask) -> Self {
        if mask.is_empty() {
            LogicalStyle::CodeBlock
        } else {
            LogicalStyle::CodeFrame(mask)
        }
    }

    pub fn is_code(self) -> bool {
        matches!(self, LogicalStyle::CodeBlock | LogicalStyle::CodeFrame(_))
    }

    /// Every style, frames included.
    pub fn all() -> impl Iterator<Item = LogicalStyle> {
        [
            LogicalStyle::Heading1,
            LogicalStyle::Heading2,
            LogicalStyle::Heading3,
            LogicalStyle::Heading4,
            LogicalStyle::Normal,
            LogicalStyle::Bullet,
            LogicalStyle::ListItem,
            LogicalStyle::CodeBlock,
            LogicalStyle::HorizontalRule,
            LogicalStyle::TableHeader,
            LogicalStyle::TableBody,
            LogicalStyle::TableBodyLastRow,
            LogicalStyle::QuoteLeft,
            LogicalStyle::QuoteBody,
        ]
        .into_iter()
        .chain(FrameMask::all().map(LogicalStyle::CodeFrame))
    }
}

impl fmt::Display for LogicalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogicalStyle::Heading1 => "heading1",
            LogicalStyle::Heading2 => "heading2",
            LogicalStyle::Heading3 => "heading3",
            LogicalStyle::Heading4 => "heading4",
            LogicalStyle::Normal => "normal",
            LogicalStyle::Bullet => "bullet",
            LogicalStyle::ListItem => "listItem",
            LogicalStyle::CodeBlock => "codeBlock",
            LogicalStyle::CodeFrame(mask) => return write!(f, "codeFrame({mask})"),
            LogicalStyle::HorizontalRule => "horizontalRule",
            LogicalStyle::TableHeader => "tableHeader",
            LogicalStyle::TableBody => "tableBody",
            LogicalStyle::TableBodyLastRow => "tableBodyLastRow",
            LogicalStyle::QuoteLeft => "quoteLeft",
            LogicalStyle::QuoteBody => "quoteBody",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn mask_from_edges() {
        assert_eq!(FrameMask::from_edges(true, false, true, false).bits(), 5);
        assert_eq!(FrameMask::from_edges(false, true, false, true).bits(), 10);
        assert!(FrameMask::from_edges(false, false, false, false).is_empty());
    }

    #[test]
    fn mask_display_lists_edges() {
        assert_eq!(FrameMask::from_edges(true, true, true, true).to_string(), "TBLR");
        assert_eq!((FrameMask::LEFT).to_string(), "L");
    }

    #[test]
    fn empty_frame_is_plain_code_block() {
        assert_eq!(LogicalStyle::code_frame(FrameMask::NONE), LogicalStyle::CodeBlock);
        assert_eq!(
            LogicalStyle::code_frame(FrameMask::TOP),
            LogicalStyle::CodeFrame(FrameMask::TOP)
        );
    }

    #[rstest]
    #[case(1, LogicalStyle::Heading1)]
    #[case(2, LogicalStyle::Heading2)]
    #[case(3, LogicalStyle::Heading3)]
    #[case(4, LogicalStyle::Heading4)]
    #[case(9, LogicalStyle::Heading4)]
    fn heading_levels(#[case] level: usize, #[case] expected: LogicalStyle) {
        assert_eq!(LogicalStyle::heading(level), expected);
    }

    #[test]
    fn all_styles_cover_fifteen_frames() {
        assert_eq!(LogicalStyle::all().count(), 14 + 15);
    }
}
