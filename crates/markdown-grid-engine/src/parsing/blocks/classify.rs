use crate::parsing::scan::TextScanner;

use super::{
    boundary::BoundaryPolicy,
    kinds::{BlockQuote, BulletItem, CodeFence, Heading, HorizontalRule, NumberItem, TableLine},
};

/// The eleven line kinds, with the derived text each kind needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    CodeFence,
    CodeLine,
    Blank,
    HorizontalRule,
    BlockQuote { text: String },
    TableSeparator,
    TableRow,
    Heading { level: usize, text: String },
    /// `text` already carries the bullet glyph.
    BulletItem { text: String },
    NumberItem,
    Normal,
}

impl LineKind {
    pub fn is_table_like(&self) -> bool {
        matches!(self, LineKind::TableSeparator | LineKind::TableRow)
    }

    /// Boundary actions to run before this kind is handled.
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        match self {
            LineKind::CodeFence => BoundaryPolicy::CODE_FENCE,
            LineKind::CodeLine => BoundaryPolicy::NONE,
            LineKind::Blank => BoundaryPolicy::MARKDOWN_BLANK,
            LineKind::HorizontalRule => BoundaryPolicy::HORIZONTAL_RULE,
            LineKind::BlockQuote { .. } => BoundaryPolicy::NONE,
            LineKind::TableSeparator | LineKind::TableRow => BoundaryPolicy::TABLE_LINE,
            LineKind::Heading { .. } => BoundaryPolicy::HEADING,
            LineKind::BulletItem { .. } => BoundaryPolicy::BULLET_ITEM,
            LineKind::NumberItem => BoundaryPolicy::NUMBER_ITEM,
            LineKind::Normal => BoundaryPolicy::NONE,
        }
    }
}

/// One classified input line. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub raw: String,
    pub trimmed: String,
    /// Leading indentation of `raw`, tabs counted as four.
    pub indent: usize,
    pub kind: LineKind,
}

/// Classifies raw lines into [`Line`]s.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies `raw`, first match wins.
    ///
    /// Two precedence rules matter: a fence is recognised even inside a code
    /// block (it closes it), and a `>` line is a quote even when it looks like
    /// a table row.
    pub fn classify(&self, raw: &str, in_code_block: bool) -> Line {
        let trimmed = TextScanner::trim(raw);
        let kind = Self::kind_of(raw, trimmed, in_code_block);
        log::trace!("classified {kind:?}: {raw:?}");

        Line {
            raw: raw.to_string(),
            trimmed: trimmed.to_string(),
            indent: TextScanner::leading_indent(raw),
            kind,
        }
    }

    fn kind_of(raw: &str, trimmed: &str, in_code_block: bool) -> LineKind {
        if CodeFence::is_fence(trimmed) {
            return LineKind::CodeFence;
        }
        if in_code_block {
            return LineKind::CodeLine;
        }
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if HorizontalRule::matches(trimmed) {
            return LineKind::HorizontalRule;
        }
        if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            return LineKind::BlockQuote {
                text: text.to_string(),
            };
        }
        if TableLine::is_table_line(raw) {
            return if TableLine::is_separator(trimmed) {
                LineKind::TableSeparator
            } else {
                LineKind::TableRow
            };
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineKind::Heading {
                level,
                text: text.to_string(),
            };
        }
        if let Some(text) = BulletItem::parse(trimmed) {
            return LineKind::BulletItem { text };
        }
        if NumberItem::matches(trimmed) {
            return LineKind::NumberItem;
        }
        LineKind::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kind(raw: &str) -> LineKind {
        LineClassifier.classify(raw, false).kind
    }

    #[rstest]
    #[case("```", LineKind::CodeFence)]
    #[case("   ```rust", LineKind::CodeFence)]
    #[case("", LineKind::Blank)]
    #[case(" \t ", LineKind::Blank)]
    #[case("---", LineKind::HorizontalRule)]
    #[case("|---|---|", LineKind::TableSeparator)]
    #[case("| a | b |", LineKind::TableRow)]
    #[case("1. first", LineKind::NumberItem)]
    #[case("plain text", LineKind::Normal)]
    #[case("- dash item", LineKind::Normal)]
    #[case("**bold** start", LineKind::Normal)]
    fn classifies_simple_kinds(#[case] raw: &str, #[case] expected: LineKind) {
        assert_eq!(kind(raw), expected);
    }

    #[test]
    fn quote_wins_over_table() {
        assert_eq!(
            kind("> | a | b |"),
            LineKind::BlockQuote {
                text: "| a | b |".into()
            }
        );
    }

    #[test]
    fn heading_carries_level_and_text() {
        assert_eq!(
            kind("## Section  "),
            LineKind::Heading {
                level: 2,
                text: "Section".into()
            }
        );
    }

    #[test]
    fn bullet_carries_glyph_text() {
        assert_eq!(
            kind("  * item"),
            LineKind::BulletItem {
                text: "・ item".into()
            }
        );
    }

    #[test]
    fn inside_code_block_everything_is_code_except_fence() {
        let c = LineClassifier;
        assert_eq!(c.classify("# not heading", true).kind, LineKind::CodeLine);
        assert_eq!(c.classify("", true).kind, LineKind::CodeLine);
        assert_eq!(c.classify("```", true).kind, LineKind::CodeFence);
    }

    #[test]
    fn line_keeps_raw_trimmed_and_indent() {
        let line = LineClassifier.classify("\t  text ", false);
        assert_eq!(line.raw, "\t  text ");
        assert_eq!(line.trimmed, "text");
        assert_eq!(line.indent, 6);
    }

    #[test]
    fn table_kinds_are_table_like() {
        assert!(LineKind::TableRow.is_table_like());
        assert!(LineKind::TableSeparator.is_table_like());
        assert!(!LineKind::Normal.is_table_like());
    }
}
