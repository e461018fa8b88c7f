use crate::parsing::scan::TextScanner;

/// Unordered list item introduced by `* `.
pub struct BulletItem;

impl BulletItem {
    pub const PREFIX: &'static str = "* ";
    /// Glyph written in place of the `*` marker.
    pub const GLYPH: &'static str = "・ ";

    /// The display text (glyph plus item text) of a bullet line.
    pub fn parse(trimmed: &str) -> Option<String> {
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        Some(format!("{}{}", Self::GLYPH, TextScanner::trim(rest)))
    }
}

/// Ordered list item (`1. text`). The number is kept in the written text.
pub struct NumberItem;

impl NumberItem {
    pub fn matches(trimmed: &str) -> bool {
        TextScanner::is_numbered_list_line(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_gets_glyph() {
        assert_eq!(BulletItem::parse("* item  ").as_deref(), Some("・ item"));
        assert_eq!(BulletItem::parse("*   spaced").as_deref(), Some("・ spaced"));
    }

    #[test]
    fn dash_and_bare_star_are_not_bullets() {
        assert_eq!(BulletItem::parse("- item"), None);
        assert_eq!(BulletItem::parse("*item"), None);
        assert_eq!(BulletItem::parse("**bold**"), None);
    }

    #[test]
    fn number_item() {
        assert!(NumberItem::matches("1. first"));
        assert!(!NumberItem::matches("1) first"));
    }
}
