use crate::parsing::inline::cursor::Cursor;

/// Bold emphasis with owned delimiter and disambiguation rule.
pub struct BoldMarker;

impl BoldMarker {
    /// The bold delimiter.
    pub const DELIM: &'static str = "**";

    /// Whether the cursor sits on a `**` pair.
    pub fn at(cur: &Cursor<'_>) -> bool {
        cur.starts_with(Self::DELIM)
    }

    /// Whether the `**` under the cursor toggles bold or is literal text.
    ///
    /// Inside bold every `**` closes. Outside bold, `**` is literal when it
    /// trails an uppercase letter and is not followed by a letter or digit
    /// (`TE**`, `CE**,`), or when nothing follows it at all.
    pub fn is_real(cur: &Cursor<'_>, in_bold: bool) -> bool {
        if in_bold {
            return true;
        }

        let next = cur.peek_at(Self::DELIM.len());
        if let Some(prev) = cur.prev()
            && prev.is_uppercase()
            && next.is_none_or(|c| !c.is_alphanumeric())
        {
            return false;
        }

        next.is_some()
    }
}
