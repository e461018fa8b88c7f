use crate::{
    parsing::{has_line_break, split_on_line_breaks},
    render::{
        MarkdownRenderer,
        pending::PendingBreak,
        state::{ContentType, RowType, Transition},
    },
    sink::{CellRef, GridSink, LogicalStyle},
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    /// Plain text either extends an earlier cell or starts its own.
    pub(crate) fn handle_normal(&mut self, indent: usize, text: &str) {
        if !has_line_break(text)
            && let Some(cell) = self.open_quote_cell()
        {
            self.append_markdown(cell, text, LogicalStyle::Normal);
            self.state.apply(Transition::NormalIntoOpenQuote { at: cell });
            return;
        }

        self.auto_blank_after_heading();

        if let Some((at, style)) = self.append_target(indent) {
            self.append_with_breaks(at, text, style, indent);
            return;
        }

        let placement = self.state.placement_for_normal(indent);
        let row = if placement.reuse_blank {
            self.reuse_last_blank_row()
        } else {
            self.new_row()
        };

        let split = split_on_line_breaks(text);
        let at = self.write_markdown(row, placement.col, split.first(), LogicalStyle::Normal);
        self.state.apply(Transition::NormalText {
            at,
            indent,
            list_note: placement.list_note,
        });
        for rest in split.rest() {
            let row = self.new_row();
            let at = self.write_markdown(row, placement.col, rest, LogicalStyle::Normal);
            self.state.apply(Transition::NormalText {
                at,
                indent,
                list_note: false,
            });
        }

        if split.ends_with_break {
            self.state.pending = Some(PendingBreak::SameColumn {
                col: placement.col,
                style: LogicalStyle::Normal,
                carry: split.carry_prefix,
            });
        }
    }

    /// The cell directly above that this line continues, with the style to keep.
    fn append_target(&self, indent: usize) -> Option<(CellRef, LogicalStyle)> {
        let st = &self.state;
        let right_after_row = |row: usize| row + 1 == st.row_index;
        let written_directly_above = st.last_row_type == RowType::Other && !st.last_blank_from_markdown;

        if let Some(bullet) = st.bullet_detail
            && indent > 0
            && right_after_row(bullet.row)
        {
            return Some((bullet, LogicalStyle::Bullet));
        }

        if let Some(number) = st.nested_number
            && st.row_index > 0
            && st.last_content == ContentType::Number
            && indent > number.indent
            && written_directly_above
        {
            return Some((
                CellRef::new(st.row_index - 1, number.col),
                LogicalStyle::ListItem,
            ));
        }

        if let Some(anchor) = st.last_normal
            && st.last_content == ContentType::Normal
            && anchor.indent == indent
            && written_directly_above
            && right_after_row(anchor.row)
        {
            return Some((
                CellRef::new(anchor.row, st.last_content_col),
                LogicalStyle::Normal,
            ));
        }

        None
    }

    /// Appends the first line to `at`; further lines go below it in the same column.
    fn append_with_breaks(&mut self, at: CellRef, text: &str, style: LogicalStyle, indent: usize) {
        let split = split_on_line_breaks(text);
        if !split.lines.is_empty() {
            self.append_markdown(at, split.first(), style);
            self.state.apply(Transition::NormalAppend { at, indent });
        }
        for rest in split.rest() {
            let row = self.new_row();
            let written = self.write_markdown(row, at.col, rest, style);
            self.state.apply(Transition::NormalText {
                at: written,
                indent,
                list_note: false,
            });
        }

        if split.ends_with_break {
            self.state.reset_on_block_boundary();
            self.state.pending = Some(PendingBreak::SameColumn {
                col: at.col,
                style,
                carry: split.carry_prefix,
            });
        }
    }
}
