use crate::{
    parsing::{
        Line,
        blocks::{kinds::TableLine, list_depth::depth_for_indent},
    },
    render::{
        MarkdownRenderer,
        state::{RowReuse, Transition},
    },
    sink::{GridSink, LogicalStyle},
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    pub(crate) fn handle_table_separator(&mut self) {
        self.state.apply(Transition::TableSeparator);
    }

    /// The first row of a table is its header and fixes the start column.
    pub(crate) fn handle_table_row(&mut self, line: &Line) {
        let is_header = self.state.table.header_row.is_none();
        if is_header {
            self.state.table.start_col = self
                .state
                .clamp_col(1 + depth_for_indent(&self.state.list_stack, line.indent));
        }
        let start_col = self.state.table.start_col;
        let style = if is_header {
            LogicalStyle::TableHeader
        } else {
            LogicalStyle::TableBody
        };

        let row = self.row_reusing_blank(RowReuse::TableRow);
        let cells = TableLine::split_row(&line.raw);
        for (i, text) in cells.iter().enumerate() {
            let col = start_col + i;
            if text.is_empty() {
                self.style_cell(row, col, style);
            } else {
                self.write_markdown(row, col, text, style);
            }
        }

        let last_col = cells.len().checked_sub(1).map(|n| start_col + n);
        self.state.table.record_row(row, last_col);
        self.state.apply(Transition::TableRow { col: start_col });
    }

    /// Removes the bottom rule from the last body row.
    pub(crate) fn close_table_if_open(&mut self) {
        if !self.state.last_line_was_table {
            return;
        }
        let table = std::mem::take(&mut self.state.table);
        self.state.last_line_was_table = false;

        if let (Some((_, last)), Some(end)) = (table.body_rows, table.end_col)
            && end >= table.start_col
            && self.sink.has_row(last)
        {
            log::debug!("closing table, last body row {last}");
            for col in table.start_col..=end {
                self.style_cell(last, col, LogicalStyle::TableBodyLastRow);
            }
        }
    }
}
