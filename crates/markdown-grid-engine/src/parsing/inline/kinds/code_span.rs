/// Inline code span with owned delimiter constant.
///
/// A backtick always toggles code, inside bold or not. Inside code, `**` and
/// `<br>` are literal text.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}
