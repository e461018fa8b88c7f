//! # Rendering
//!
//! Turns a stream of Markdown-like lines into rows and cells of a
//! [`GridSink`]. One [`MarkdownRenderer`] renders one document: each line is
//! classified, boundary actions run, an armed `<br>` continuation gets the
//! first chance at the line, and otherwise the handler for its kind writes it.
//!
//! ## Modules
//!
//! - **`state`**: Everything carried between lines, updated through transitions
//! - **`pending`**: The one `<br>` continuation that may be armed
//! - **`rows`**: Row allocation, blank-row reuse and automatic blank rows
//! - **`continuation`**: Lines that continue a trailing `<br>`
//! - **`handlers`**: One handler per line kind, plus block closure
//! - **`error`**: Errors from the line source

mod continuation;
pub mod error;
mod handlers;
pub mod pending;
mod rows;
pub mod state;

pub use error::RenderError;
pub use state::RenderState;

use crate::{
    parsing::{
        Line, LineClassifier, LineKind,
        blocks::{BoundaryTarget, boundary},
        segment_runs,
    },
    sink::{CellRef, GridSink, LogicalStyle},
};

/// Totals for a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub lines: usize,
    pub rows: usize,
}

/// Renders one document into a sink, line by line.
pub struct MarkdownRenderer<'s, S: GridSink> {
    sink: &'s mut S,
    classifier: LineClassifier,
    state: RenderState,
    lines: usize,
}

impl<'s, S: GridSink> MarkdownRenderer<'s, S> {
    /// `merge_cols` is the number of columns one visual line spans; below 1 it is treated as 1.
    pub fn new(sink: &'s mut S, merge_cols: usize) -> Self {
        Self {
            sink,
            classifier: LineClassifier,
            state: RenderState::new(merge_cols),
            lines: 0,
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn push_line(&mut self, raw: &str) {
        let line = self.classifier.classify(raw, self.state.in_code_block);
        self.lines += 1;

        boundary::close_table_if_leaving(line.kind.is_table_like(), self);
        boundary::apply(line.kind.boundary_policy(), self);

        if self.try_continue_break(&line) {
            return;
        }
        self.dispatch(&line);
    }

    /// Closes whatever is still open and reports totals.
    pub fn finish(mut self) -> RenderSummary {
        if self.state.in_code_block {
            log::warn!(
                "code fence still open at end of input, closing it after row {}",
                self.state.row_index
            );
            self.frame_code_block();
            self.state.toggle_code_block(0);
        }
        if self.state.last_line_was_table {
            self.close_table_if_open();
        }
        self.close_block_quote_if_open();

        RenderSummary {
            lines: self.lines,
            rows: self.state.row_index,
        }
    }

    fn dispatch(&mut self, line: &Line) {
        match &line.kind {
            LineKind::CodeFence => self.handle_code_fence(line.indent),
            LineKind::CodeLine => self.handle_code_line(line),
            LineKind::Blank => self.handle_blank(),
            LineKind::HorizontalRule => self.handle_horizontal_rule(),
            LineKind::BlockQuote { text } => self.handle_block_quote(line.indent, text),
            LineKind::TableSeparator => self.handle_table_separator(),
            LineKind::TableRow => self.handle_table_row(line),
            LineKind::Heading { level, text } => self.handle_heading(*level, text),
            LineKind::BulletItem { text } => self.handle_bullet_item(line.indent, text),
            LineKind::NumberItem => self.handle_number_item(line.indent, &line.trimmed),
            LineKind::Normal => self.handle_normal(line.indent, &line.trimmed),
        }
    }

    /// Writes inline-formatted `text` into a cell, replacing what was there.
    fn write_markdown(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        style: LogicalStyle,
    ) -> CellRef {
        let cell = self.sink.create_or_get_cell(row, col);
        self.sink.set_formatted_text(cell, segment_runs(text), style);
        cell
    }

    /// Appends inline-formatted `text` to a cell after one space.
    fn append_markdown(&mut self, at: CellRef, text: &str, style: LogicalStyle) {
        if text.is_empty() {
            return;
        }
        let cell = self.sink.create_or_get_cell(at.row, at.col);
        self.sink.append_formatted_text(cell, segment_runs(text), style, true);
    }

    fn style_cell(&mut self, row: usize, col: usize, style: LogicalStyle) {
        let cell = self.sink.create_or_get_cell(row, col);
        self.sink.apply_style(cell, style);
    }
}

impl<S: GridSink> BoundaryTarget for MarkdownRenderer<'_, S> {
    fn in_table(&self) -> bool {
        self.state.last_line_was_table
    }

    fn close_table(&mut self) {
        self.close_table_if_open();
    }

    fn close_block_quote(&mut self) {
        self.close_block_quote_if_open();
    }

    fn auto_blank_if_prev_heading(&mut self) {
        self.auto_blank_after_heading();
    }

    fn reset_paragraph(&mut self) {
        self.state.reset_on_block_boundary();
    }

    fn clear_list_context(&mut self) {
        self.state.clear_list_context();
    }
}

/// Renders a line source into `sink`, stopping at the first read error.
pub fn render_lines<S, I>(
    lines: I,
    sink: &mut S,
    merge_cols: usize,
) -> Result<RenderSummary, RenderError>
where
    S: GridSink,
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut renderer = MarkdownRenderer::new(sink, merge_cols);
    for (i, line) in lines.into_iter().enumerate() {
        let line = line.map_err(|source| RenderError::ReadLine {
            line: i + 1,
            source,
        })?;
        renderer.push_line(&line);
    }
    Ok(renderer.finish())
}

/// Renders an in-memory document.
pub fn render_str<S: GridSink>(text: &str, sink: &mut S, merge_cols: usize) -> RenderSummary {
    let mut renderer = MarkdownRenderer::new(sink, merge_cols);
    for line in text.lines() {
        renderer.push_line(line);
    }
    renderer.finish()
}
