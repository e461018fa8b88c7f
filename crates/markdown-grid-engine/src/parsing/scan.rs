//! Character-level scanning shared by the line classifier, the inline parser
//! and the table splitter.
//!
//! Everything here works on `char`s rather than bytes: the grid is expected to
//! carry wide-script text and every position is a character position.

/// Columns a tab contributes to a line's indentation.
pub const TAB_WIDTH: usize = 4;

/// Stateless scanning helpers.
pub struct TextScanner;

impl TextScanner {
    /// Leading indentation of a raw line: a space counts 1, a tab counts [`TAB_WIDTH`].
    pub fn leading_indent(s: &str) -> usize {
        let mut n = 0;
        for c in s.chars() {
            match c {
                ' ' => n += 1,
                '\t' => n += TAB_WIDTH,
                _ => break,
            }
        }
        n
    }

    /// Trims control characters and ASCII space from both ends.
    ///
    /// Wide-script spaces (U+3000) are content, not padding, so `str::trim` is too eager.
    pub fn trim(s: &str) -> &str {
        s.trim_matches(|c: char| c <= ' ')
    }

    /// Length of the leading `#` run.
    pub fn heading_level(trimmed: &str) -> usize {
        trimmed.chars().take_while(|&c| c == '#').count()
    }

    /// `digits` `.` `whitespace`, e.g. `1. ` or `12.\t`. Nothing is required after the whitespace.
    pub fn is_numbered_list_line(trimmed: &str) -> bool {
        let mut chars = trimmed.chars().peekable();
        let mut digits = 0;
        while chars.next_if(char::is_ascii_digit).is_some() {
            digits += 1;
        }
        digits > 0 && chars.next() == Some('.') && chars.next().is_some_and(char::is_whitespace)
    }

    /// Printable ASCII, the range set in a monospace Latin font inside code.
    pub fn is_ascii_like(c: char) -> bool {
        matches!(c, '\u{20}'..='\u{7e}')
    }

    /// Length in chars of a `<br>` tag starting at `i`, or 0.
    ///
    /// Accepts any letter case, whitespace after `br`, and an optional
    /// self-closing slash: `<br>`, `<BR/>`, `<br />`.
    pub fn br_tag_len(s: &[char], i: usize) -> usize {
        let n = s.len();
        if i + 3 >= n || s[i] != '<' {
            return 0;
        }
        if !s[i + 1].eq_ignore_ascii_case(&'b') || !s[i + 2].eq_ignore_ascii_case(&'r') {
            return 0;
        }

        let mut j = i + 3;
        while j < n && s[j].is_whitespace() {
            j += 1;
        }
        if j < n && s[j] == '/' {
            j += 1;
            while j < n && s[j].is_whitespace() {
                j += 1;
            }
        }

        if j < n && s[j] == '>' { j - i + 1 } else { 0 }
    }

    /// Replaces every `<br>` tag outside inline code with `replacement`.
    pub fn replace_br_outside_code(s: &str, replacement: &str) -> String {
        let chars: Vec<char> = s.chars().collect();
        let mut out = String::with_capacity(s.len());
        let mut in_code = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c == '`' {
                in_code = !in_code;
                out.push(c);
                i += 1;
                continue;
            }
            if !in_code {
                let len = Self::br_tag_len(&chars, i);
                if len > 0 {
                    out.push_str(replacement);
                    i += len;
                    continue;
                }
            }
            out.push(c);
            i += 1;
        }
        out
    }

    /// Collapses every whitespace run to one space, then trims.
    pub fn collapse_whitespace(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut prev_space = false;
        for c in s.chars() {
            if c.is_whitespace() {
                if !prev_space {
                    out.push(' ');
                }
                prev_space = true;
            } else {
                out.push(c);
                prev_space = false;
            }
        }
        out.trim_matches(' ').to_string()
    }

    /// Splits `s` into maximal runs that are all ASCII-like or all wide.
    pub fn script_runs(s: &str) -> ScriptRuns<'_> {
        ScriptRuns { rest: s }
    }
}

/// Iterator over `(run, is_ascii_like)` pairs. See [`TextScanner::script_runs`].
pub struct ScriptRuns<'a> {
    rest: &'a str,
}

impl<'a> Iterator for ScriptRuns<'a> {
    type Item = (&'a str, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let ascii = TextScanner::is_ascii_like(first);
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| TextScanner::is_ascii_like(c) != ascii)
            .map_or(self.rest.len(), |(i, _)| i);
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some((run, ascii))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[rstest]
    #[case("text", 0)]
    #[case("  text", 2)]
    #[case("\ttext", 4)]
    #[case(" \t text", 6)]
    #[case("    ", 4)]
    fn leading_indent_counts_tabs_as_four(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(TextScanner::leading_indent(line), expected);
    }

    #[test]
    fn trim_keeps_ideographic_space() {
        assert_eq!(TextScanner::trim("  \u{3000}x\t"), "\u{3000}x");
    }

    #[rstest]
    #[case("# a", 1)]
    #[case("### a", 3)]
    #[case("#####", 5)]
    #[case("a#", 0)]
    fn heading_level_counts_leading_hashes(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(TextScanner::heading_level(line), expected);
    }

    #[rstest]
    #[case("1. item", true)]
    #[case("12.\titem", true)]
    #[case("3. ", true)]
    #[case("1.item", false)]
    #[case("1.", false)]
    #[case(". item", false)]
    #[case("a1. item", false)]
    #[case("", false)]
    fn numbered_list_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TextScanner::is_numbered_list_line(line), expected);
    }

    #[rstest]
    #[case("<br>", 0, 4)]
    #[case("<BR/>", 0, 5)]
    #[case("<br />", 0, 6)]
    #[case("a<bR  >b", 1, 6)]
    #[case("<br", 0, 0)]
    #[case("<bx>", 0, 0)]
    #[case("<br x>", 0, 0)]
    fn br_tag_len_variants(#[case] s: &str, #[case] at: usize, #[case] expected: usize) {
        assert_eq!(TextScanner::br_tag_len(&chars(s), at), expected);
    }

    #[test]
    fn replace_br_leaves_code_untouched() {
        assert_eq!(
            TextScanner::replace_br_outside_code("a<br>b `c<br>d` e<br/>", " "),
            "a b `c<br>d` e "
        );
    }

    #[test]
    fn collapse_whitespace_squeezes_and_trims() {
        assert_eq!(TextScanner::collapse_whitespace("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn script_runs_alternate_between_ascii_and_wide() {
        let runs: Vec<_> = TextScanner::script_runs("let 値 = 1;").collect();
        assert_eq!(runs, vec![("let ", true), ("値", false), (" = 1;", true)]);
    }

    #[test]
    fn script_runs_of_empty_string() {
        assert_eq!(TextScanner::script_runs("").count(), 0);
    }
}
