use crate::{
    render::{MarkdownRenderer, state::Transition},
    sink::GridSink,
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    /// A run of blank lines, or a blank right after a rule, yields one row at most.
    pub(crate) fn handle_blank(&mut self) {
        if self.state.blank_line_adds_no_row() {
            self.state.apply(Transition::MarkdownBlankNoRow);
            return;
        }
        let row = self.new_row();
        self.state.apply(Transition::MarkdownBlank { row });
    }
}
