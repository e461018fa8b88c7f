use crate::parsing::scan::TextScanner;

use super::{
    cursor::Cursor,
    kinds::{BoldMarker, CodeSpan},
    types::LineBreakSplit,
};

/// Text of one output line as it is being collected.
///
/// The synthetic reopen marker is tracked apart from the body so that a line
/// holding nothing but carried markers can be dropped.
#[derive(Default)]
struct PendingLine {
    reopened: bool,
    body: String,
}

impl PendingLine {
    fn reopened(bold: bool) -> Self {
        Self {
            reopened: bold,
            body: String::new(),
        }
    }

    /// Closes the line, appending a synthetic `**` while bold is open.
    fn finish_into(self, out: &mut Vec<String>, bold_open: bool) {
        if TextScanner::trim(&self.body).is_empty() {
            return;
        }
        let mut line = String::with_capacity(self.body.len() + 4);
        if self.reopened {
            line.push_str(BoldMarker::DELIM);
        }
        line.push_str(&self.body);
        if bold_open {
            line.push_str(BoldMarker::DELIM);
        }
        out.push(TextScanner::trim(&line).to_string());
    }
}

/// Splits text on `<br>` tags outside inline code, keeping the markers.
///
/// Bold that is open at a break is closed on the finished line and reopened on
/// the next one. A trailing break sets `ends_with_break` and leaves the reopen
/// marker in `carry_prefix` for the following input line.
pub fn split_on_line_breaks(text: &str) -> LineBreakSplit {
    let chars: Vec<char> = text.chars().collect();
    let mut cur = Cursor::new(&chars);
    let mut lines = vec![];
    let mut line = PendingLine::default();
    let mut bold = false;
    let mut code = false;
    let mut reopen = false;
    let mut last_was_break = false;

    while let Some(c) = cur.peek() {
        if !code && BoldMarker::at(&cur) {
            line.body.push_str(BoldMarker::DELIM);
            // A literal `**` leaves a preceding break trailing.
            if BoldMarker::is_real(&cur, bold) {
                bold = !bold;
                last_was_break = false;
            }
            cur.bump_n(BoldMarker::DELIM.len());
            continue;
        }

        if c == CodeSpan::TICK {
            line.body.push(c);
            code = !code;
            cur.bump();
            last_was_break = false;
            continue;
        }

        if !code {
            let len = TextScanner::br_tag_len(cur.s, cur.i);
            if len > 0 {
                let finished = std::mem::replace(&mut line, PendingLine::reopened(bold));
                finished.finish_into(&mut lines, bold);
                reopen = bold;
                cur.bump_n(len);
                last_was_break = true;
                continue;
            }
        }

        line.body.push(c);
        cur.bump();
        last_was_break = false;
    }

    line.finish_into(&mut lines, bold);

    if last_was_break && matches!(lines.last().map(String::as_str), Some("**" | "`" | "")) {
        lines.pop();
    }

    LineBreakSplit {
        lines,
        ends_with_break: last_was_break,
        carry_prefix: if last_was_break && reopen {
            BoldMarker::DELIM.to_string()
        } else {
            String::new()
        },
    }
}

/// Whether `text` contains a `<br>` outside inline code.
pub fn has_line_break(text: &str) -> bool {
    split_on_line_breaks(text).has_break()
}

/// Replaces each `<br>` outside code with a single space, keeping bold balanced.
pub fn join_breaks_as_space(text: &str) -> String {
    split_on_line_breaks(text).join_as_space()
}
