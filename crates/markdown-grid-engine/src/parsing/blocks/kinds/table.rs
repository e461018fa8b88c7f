use crate::parsing::{
    inline::{join_breaks_as_space, kinds::CodeSpan},
    scan::TextScanner,
};

/// Pipe table lines: detection, separator rows, and cell splitting.
pub struct TableLine;

impl TableLine {
    pub const PIPE: char = '|';
    pub const ESCAPE: char = '\\';

    /// Starts with `|` and has at least one more `|`.
    pub fn is_table_line(raw: &str) -> bool {
        let trimmed = TextScanner::trim(raw);
        trimmed.starts_with(Self::PIPE) && trimmed.matches(Self::PIPE).count() >= 2
    }

    /// An alignment row such as `|---|:--:|`.
    pub fn is_separator(trimmed: &str) -> bool {
        trimmed.contains(Self::PIPE)
            && trimmed
                .chars()
                .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
    }

    /// Splits a row into display-ready cell texts.
    ///
    /// The outer pipes are dropped. A pipe separates cells unless it sits in
    /// inline code or is escaped by an odd run of backslashes. Each cell is
    /// unescaped, has its `<br>` tags turned into spaces and its whitespace
    /// collapsed, so no cell ever carries a literal break.
    pub fn split_row(raw: &str) -> Vec<String> {
        let trimmed = TextScanner::trim(raw);
        let Some(inner) = trimmed.strip_prefix(Self::PIPE) else {
            return vec![];
        };
        let inner = inner.strip_suffix(Self::PIPE).unwrap_or(inner);
        let chars: Vec<char> = inner.chars().collect();

        let mut cells = vec![];
        let mut start = 0;
        let mut in_code = false;
        for i in 0..=chars.len() {
            if i < chars.len() && chars[i] == CodeSpan::TICK {
                in_code = !in_code;
                continue;
            }
            let at_separator =
                i < chars.len() && chars[i] == Self::PIPE && !in_code && !Self::is_escaped(&chars, i);
            if i == chars.len() || at_separator {
                let cell: String = chars[start..i].iter().collect();
                cells.push(Self::clean_cell(&cell));
                start = i + 1;
            }
        }
        cells
    }

    fn is_escaped(chars: &[char], pos: usize) -> bool {
        let backslashes = chars[..pos]
            .iter()
            .rev()
            .take_while(|&&c| c == Self::ESCAPE)
            .count();
        backslashes % 2 == 1
    }

    fn clean_cell(cell: &str) -> String {
        let unescaped = TextScanner::trim(cell).replace("\\|", "|");
        let spaced = TextScanner::replace_br_outside_code(&unescaped, " ");
        join_breaks_as_space(&TextScanner::collapse_whitespace(&spaced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("| a | b |", true)]
    #[case("  |a|", true)]
    #[case("|", false)]
    #[case("a | b |", false)]
    #[case("> | a | b |", false)]
    fn table_line_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TableLine::is_table_line(line), expected);
    }

    #[rstest]
    #[case("|---|---|", true)]
    #[case("| :-- | --: |", true)]
    #[case("| a |---|", false)]
    #[case("---", false)]
    fn separator_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TableLine::is_separator(line), expected);
    }

    #[test]
    fn splits_simple_row() {
        assert_eq!(TableLine::split_row("| A | B |"), vec!["A", "B"]);
    }

    #[test]
    fn keeps_empty_cells() {
        assert_eq!(TableLine::split_row("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn escaped_pipe_is_content() {
        assert_eq!(TableLine::split_row(r"| a \| b | c |"), vec!["a | b", "c"]);
    }

    #[test]
    fn double_backslash_does_not_escape() {
        assert_eq!(TableLine::split_row(r"| a \\| b |"), vec![r"a \\", "b"]);
    }

    #[test]
    fn pipe_inside_code_is_content() {
        assert_eq!(
            TableLine::split_row("| `a|b` | c |"),
            vec!["`a|b`", "c"]
        );
    }

    #[test]
    fn breaks_become_single_spaces() {
        assert_eq!(
            TableLine::split_row("| one<br>two | x  <br/>  y | `k<br>v` |"),
            vec!["one two", "x y", "`k<br>v`"]
        );
    }

    #[test]
    fn missing_trailing_pipe_keeps_last_cell() {
        assert_eq!(TableLine::split_row("| a | b"), vec!["a", "b"]);
    }
}
