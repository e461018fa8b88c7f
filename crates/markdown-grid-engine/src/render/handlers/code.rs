use crate::{
    parsing::{FormattedRun, Line, blocks::list_depth::depth_for_indent},
    render::{
        MarkdownRenderer,
        state::{RowReuse, Transition, strip_indent},
    },
    sink::{FrameMask, GridSink, LogicalStyle},
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    pub(crate) fn handle_code_fence(&mut self, indent: usize) {
        if self.state.in_code_block {
            self.frame_code_block();
        } else {
            self.auto_blank_after_block_quote();
        }
        self.state.toggle_code_block(indent);
    }

    /// Code lines keep their text verbatim, less the block's common indent.
    pub(crate) fn handle_code_line(&mut self, line: &Line) {
        let row = self.row_reusing_blank(RowReuse::CodeLine);
        let depth = depth_for_indent(&self.state.list_stack, self.state.code_block.fence_indent);
        let col = self.state.clamp_col(1 + depth);

        let trim = self.state.code_trim_width(line.indent);
        let text = strip_indent(&line.raw, trim);
        let runs = if text.is_empty() {
            vec![]
        } else {
            vec![FormattedRun::plain(text)]
        };

        let cell = self.sink.create_or_get_cell(row, col);
        self.sink.set_formatted_text(cell, runs, LogicalStyle::CodeBlock);
        self.state.record_code_line(row, col);
        self.state.apply(Transition::CodeLine { col });
    }

    /// Draws a thin frame around the block, out to the last merged column.
    pub(crate) fn frame_code_block(&mut self) {
        let Some((first, last)) = self.state.code_block.rows else {
            return;
        };
        let left = self.state.code_block.col;
        let right = left.max(self.state.last_col_index());
        log::debug!("framing code block rows {first}..={last}, cols {left}..={right}");

        for row in first..=last {
            if !self.sink.has_row(row) {
                continue;
            }
            for col in left..=right {
                let mask =
                    FrameMask::from_edges(row == first, row == last, col == left, col == right);
                self.style_cell(row, col, LogicalStyle::code_frame(mask));
            }
        }
    }
}
