/// A maximal stretch of text sharing one bold/code state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRun {
    pub text: String,
    pub bold: bool,
    pub code: bool,
}

impl FormattedRun {
    pub fn new(text: impl Into<String>, bold: bool, code: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            code,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, true, false)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, false, true)
    }
}

/// One unit of text split on explicit `<br>` tags.
///
/// `lines` are trimmed and never empty. When a bold run was open at the final
/// break, `carry_prefix` holds the marker that reopens it on the next input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBreakSplit {
    pub lines: Vec<String>,
    /// The text ended with a break, so the next input line continues this block.
    pub ends_with_break: bool,
    pub carry_prefix: String,
}

impl LineBreakSplit {
    /// A break occurred anywhere: trailing, or between two output lines.
    pub fn has_break(&self) -> bool {
        self.ends_with_break || self.lines.len() >= 2
    }

    /// The first output line, or `""` when the text was empty.
    pub fn first(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }

    /// Output lines after the first.
    pub fn rest(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// Lines joined with single spaces, the rendering used for table cells.
    pub fn join_as_space(&self) -> String {
        self.lines.join(" ")
    }
}
