use crate::{
    parsing::split_on_line_breaks,
    render::{MarkdownRenderer, pending::PendingBreak, state::Transition},
    sink::{GridSink, LogicalStyle},
};

impl<S: GridSink> MarkdownRenderer<'_, S> {
    /// Headings always start a new row at column 0, after a blank row.
    pub(crate) fn handle_heading(&mut self, level: usize, text: &str) {
        self.auto_blank_before_heading();

        let split = split_on_line_breaks(text);
        let row = self.new_row();
        self.write_heading_line(row, level, split.first());
        for rest in split.rest() {
            let row = self.new_row();
            self.write_heading_line(row, level, rest);
        }

        if split.ends_with_break {
            self.state.pending = Some(PendingBreak::Heading {
                level,
                carry: split.carry_prefix,
            });
        }
    }

    pub(crate) fn write_heading_line(&mut self, row: usize, level: usize, text: &str) {
        self.write_markdown(row, 0, text, LogicalStyle::heading(level));
        self.state.apply(Transition::Heading);
    }
}
