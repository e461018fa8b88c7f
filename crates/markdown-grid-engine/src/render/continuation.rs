//! Lines that continue a trailing `<br>`.
//!
//! Only a plain line may continue a heading, list item or plain paragraph; a
//! quote also accepts the next quote line. Any other kind drops the pending
//! break and is handled normally.

use crate::{
    parsing::{Line, LineKind, split_on_line_breaks},
    sink::{CellRef, GridSink, LogicalStyle},
};

use super::{MarkdownRenderer, pending::PendingBreak, state::Transition};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    /// Hands `line` to the armed continuation; false if there is none or it does not apply.
    pub(super) fn try_continue_break(&mut self, line: &Line) -> bool {
        let Some(pending) = self.state.pending.take() else {
            return false;
        };

        match (pending, &line.kind) {
            (PendingBreak::Heading { level, carry }, LineKind::Normal) => {
                self.continue_heading(level, &carry, &line.trimmed);
            }
            (
                PendingBreak::List {
                    col,
                    cell,
                    style,
                    carry,
                },
                LineKind::Normal,
            ) => self.continue_list(col, cell, style, &carry, &line.trimmed),
            (PendingBreak::Quote { col, carry }, LineKind::BlockQuote { text }) => {
                self.continue_quote(col, &carry, text);
            }
            (PendingBreak::Quote { col, carry }, LineKind::Normal) => {
                self.continue_quote(col, &carry, &line.trimmed);
            }
            (PendingBreak::SameColumn { col, style, carry }, LineKind::Normal) => {
                self.continue_same_column(col, style, &carry, &line.trimmed);
            }
            (dropped, kind) => {
                log::debug!("{} continuation ended by {kind:?}", dropped.name());
                return false;
            }
        }
        true
    }

    fn continue_heading(&mut self, level: usize, carry: &str, text: &str) {
        let split = split_on_line_breaks(&format!("{carry}{text}"));
        for line in &split.lines {
            let row = self.new_row();
            self.write_heading_line(row, level, line);
        }
        if split.ends_with_break {
            self.state.pending = Some(PendingBreak::Heading {
                level,
                carry: split.carry_prefix,
            });
        }
    }

    /// The first line joins the detail cell, if there is one yet; the rest go below.
    ///
    /// The continuation stays armed until a blank line or another block.
    fn continue_list(
        &mut self,
        col: usize,
        mut cell: Option<CellRef>,
        style: LogicalStyle,
        carry: &str,
        text: &str,
    ) {
        let split = split_on_line_breaks(&format!("{carry}{text}"));
        let mut lines = split.lines.iter();

        match cell {
            Some(at) => {
                if let Some(first) = lines.next() {
                    self.append_markdown(at, first, style);
                }
            }
            None => {
                let row = self.new_row();
                let first = lines.next().map_or("", String::as_str);
                cell = Some(self.write_markdown(row, col, first, style));
            }
        }
        for line in lines {
            let row = self.new_row();
            cell = Some(self.write_markdown(row, col, line, style));
        }

        self.state.pending = Some(PendingBreak::List {
            col,
            cell,
            style,
            carry: split.carry_prefix,
        });
    }

    fn continue_quote(&mut self, col: usize, carry: &str, text: &str) {
        let split = split_on_line_breaks(&format!("{carry}{text}"));
        for line in &split.lines {
            let row = self.new_row();
            self.write_quote_line(row, col, line);
        }
        if split.ends_with_break {
            self.state.pending = Some(PendingBreak::Quote {
                col,
                carry: split.carry_prefix,
            });
        }
    }

    fn continue_same_column(&mut self, col: usize, style: LogicalStyle, carry: &str, text: &str) {
        let split = split_on_line_breaks(&format!("{carry}{text}"));
        for line in &split.lines {
            let row = self.new_row();
            let at = self.write_markdown(row, col, line, style);
            self.state.apply(Transition::NormalText {
                at,
                indent: 0,
                list_note: false,
            });
        }
        if split.ends_with_break {
            self.state.pending = Some(PendingBreak::SameColumn {
                col,
                style,
                carry: split.carry_prefix,
            });
        }
    }
}
