/// Thematic break. Only the exact three-dash form is recognised.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKER: &'static str = "---";

    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_three_dashes() {
        assert!(HorizontalRule::matches("---"));
        assert!(!HorizontalRule::matches("----"));
        assert!(!HorizontalRule::matches("***"));
        assert!(!HorizontalRule::matches("- - -"));
    }
}
