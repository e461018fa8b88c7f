use crate::{
    render::{
        MarkdownRenderer,
        state::{RowReuse, Transition},
    },
    sink::{GridSink, LogicalStyle},
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    pub(crate) fn handle_horizontal_rule(&mut self) {
        let row = self.row_reusing_blank(RowReuse::HorizontalRule);
        for col in 0..self.state.merge_cols {
            self.style_cell(row, col, LogicalStyle::HorizontalRule);
        }
        self.state.apply(Transition::HorizontalRule);
    }
}
