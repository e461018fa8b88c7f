use crate::{
    parsing::{blocks::list_depth::depth_for_indent, split_on_line_breaks},
    render::{
        MarkdownRenderer,
        pending::PendingBreak,
        state::{RowReuse, RowType, Transition},
    },
    sink::{CellRef, GridSink, LogicalStyle},
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    pub(crate) fn handle_block_quote(&mut self, indent: usize, text: &str) {
        self.auto_blank_after_code_block();

        let split = split_on_line_breaks(text);
        if !split.has_break()
            && let Some(cell) = self.open_quote_cell()
        {
            self.append_markdown(cell, text, LogicalStyle::Normal);
            self.state.apply(Transition::BlockQuoteAppend);
            return;
        }

        let col = self
            .state
            .clamp_col(1 + depth_for_indent(&self.state.list_stack, indent));
        let first = self.row_reusing_blank(RowReuse::BlockQuote);
        self.write_quote_line(first, col, split.first());
        for rest in split.rest() {
            let row = self.new_row();
            self.write_quote_line(row, col, rest);
        }

        if split.ends_with_break {
            self.state.pending = Some(PendingBreak::Quote {
                col,
                carry: split.carry_prefix,
            });
        }
    }

    pub(crate) fn write_quote_line(&mut self, row: usize, col: usize, text: &str) {
        let at = self.write_markdown(row, col, text, LogicalStyle::Normal);
        self.state.apply(Transition::BlockQuoteLine { at });
    }

    /// The open quote cell, while nothing but quote text has followed it.
    pub(crate) fn open_quote_cell(&self) -> Option<CellRef> {
        let quote = self.state.quote?;
        (self.state.last_row_type == RowType::Other && !self.state.last_blank_from_markdown)
            .then_some(quote.cell)
    }

    /// Paints the quote bar on its column and fills the rest of each row.
    pub(crate) fn close_block_quote_if_open(&mut self) {
        let Some(quote) = self.state.quote.take() else {
            return;
        };
        let right = quote.col.max(self.state.last_col_index());
        log::debug!(
            "closing block quote rows {}..={}, cols {}..={right}",
            quote.first_row,
            quote.last_row,
            quote.col
        );

        for row in quote.first_row..=quote.last_row {
            if !self.sink.has_row(row) {
                continue;
            }
            for col in quote.col..=right {
                let style = if col == quote.col {
                    LogicalStyle::QuoteLeft
                } else {
                    LogicalStyle::QuoteBody
                };
                self.style_cell(row, col, style);
            }
        }
    }
}
