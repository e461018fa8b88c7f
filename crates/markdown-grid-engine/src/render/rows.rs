//! Row allocation.
//!
//! Rows are only ever created at `row_index`, so they appear in order. The one
//! exception is reusing the literal blank row directly above.

use crate::sink::GridSink;

use super::{
    MarkdownRenderer,
    state::{ContentType, RowReuse, RowType, Transition},
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    pub(super) fn new_row(&mut self) -> usize {
        let row = self.state.row_index;
        self.state.row_index += 1;
        self.sink.row_handle_for(row);
        row
    }

    /// The blank row above if `kind` may take it over, else a new row.
    pub(super) fn row_reusing_blank(&mut self, kind: RowReuse) -> usize {
        match self.state.reusable_blank_row(kind) {
            Some(row) => {
                self.sink.row_handle_for(row);
                row
            }
            None => self.new_row(),
        }
    }

    pub(super) fn reuse_last_blank_row(&mut self) -> usize {
        match self.state.last_blank_row {
            Some(row) => {
                self.sink.row_handle_for(row);
                row
            }
            None => self.new_row(),
        }
    }

    fn write_auto_blank(&mut self) {
        let row = self.new_row();
        log::trace!("automatic blank row {row}");
        self.state.apply(Transition::AutoBlank);
    }

    pub(super) fn auto_blank_before_heading(&mut self) {
        if self.state.row_index > 0 && self.state.last_row_type != RowType::Blank {
            self.write_auto_blank();
        }
    }

    pub(super) fn auto_blank_after_heading(&mut self) {
        if self.state.last_row_type == RowType::Heading {
            self.write_auto_blank();
        }
    }

    pub(super) fn auto_blank_after_block_quote(&mut self) {
        if self.state.last_was_block_quote && self.state.last_row_type == RowType::Other {
            self.write_auto_blank();
        }
    }

    pub(super) fn auto_blank_after_code_block(&mut self) {
        if self.state.last_content == ContentType::Code && self.state.last_row_type == RowType::Other
        {
            self.write_auto_blank();
        }
    }
}
