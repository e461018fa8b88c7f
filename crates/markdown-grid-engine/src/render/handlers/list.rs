use crate::{
    parsing::{
        blocks::list_depth::update_depth,
        split_on_line_breaks,
    },
    render::{
        MarkdownRenderer,
        pending::PendingBreak,
        state::{RowReuse, Transition},
    },
    sink::{CellRef, GridSink, LogicalStyle},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Numbered,
}

impl<S: GridSink> MarkdownRenderer<'_, S> {
    pub(crate) fn handle_bullet_item(&mut self, indent: usize, text: &str) {
        self.write_list_item(indent, text, ListKind::Bullet);
    }

    /// Numbered items keep their number as written.
    pub(crate) fn handle_number_item(&mut self, indent: usize, text: &str) {
        self.write_list_item(indent, text, ListKind::Numbered);
    }

    /// Writes the item at `1 + depth`; text after a `<br>` goes one column right.
    fn write_list_item(&mut self, indent: usize, text: &str, kind: ListKind) {
        let ordered = kind == ListKind::Numbered;
        let (style, reuse) = match kind {
            ListKind::Bullet => (LogicalStyle::Bullet, RowReuse::BulletItem),
            ListKind::Numbered => (LogicalStyle::ListItem, RowReuse::NumberItem),
        };

        let depth = update_depth(&mut self.state.list_stack, indent, ordered);
        let col = self.state.clamp_col(1 + depth);
        let row = self.row_reusing_blank(reuse);

        let split = split_on_line_breaks(text);
        let at = self.write_markdown(row, col, split.first(), style);
        self.state.apply(match kind {
            ListKind::Bullet => Transition::BulletItem { at },
            ListKind::Numbered => Transition::NumberedItem { indent, col },
        });

        let detail_col = self.state.clamp_col(col + 1);
        let mut last_row = row;
        for rest in split.rest() {
            last_row = self.new_row();
            let at = self.write_markdown(last_row, detail_col, rest, style);
            self.state.apply(Transition::NormalText {
                at,
                indent: 0,
                list_note: false,
            });
        }

        if split.has_break() {
            let cell = (split.lines.len() >= 2).then_some(CellRef::new(last_row, detail_col));
            log::debug!("list item at row {row} continues in column {detail_col}");
            self.state.pending = Some(PendingBreak::List {
                col: detail_col,
                cell,
                style,
                carry: split.carry_prefix,
            });
            match kind {
                ListKind::Bullet => self.state.bullet_detail = None,
                ListKind::Numbered => self.state.nested_number = None,
            }
        }
    }
}
