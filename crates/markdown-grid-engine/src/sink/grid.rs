use std::collections::BTreeMap;

use crate::parsing::FormattedRun;

use super::{
    GridSink,
    cell::{CellRef, RowRef},
    logical::LogicalStyle,
    style::{FontSpan, StyleContext},
};

/// One stored cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub runs: Vec<FormattedRun>,
    pub style: Option<LogicalStyle>,
}

impl Cell {
    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// In-memory grid: sparse rows of sparse cells.
#[derive(Debug, Default)]
pub struct Grid {
    rows: BTreeMap<usize, BTreeMap<usize, Cell>>,
    styles: StyleContext,
}

impl Grid {
    pub fn new(styles: StyleContext) -> Self {
        Self {
            rows: BTreeMap::new(),
            styles,
        }
    }

    pub fn styles(&self) -> &StyleContext {
        &self.styles
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(&row)?.get(&col)
    }

    /// Materialised rows in order, each with its cells in column order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &BTreeMap<usize, Cell>)> {
        self.rows.iter().map(|(r, cells)| (*r, cells))
    }

    /// One past the highest materialised row.
    pub fn row_count(&self) -> usize {
        self.rows.keys().next_back().map_or(0, |r| r + 1)
    }

    /// Text of the cell with the font each piece is shown in.
    pub fn font_spans(&self, row: usize, col: usize) -> Vec<FontSpan> {
        match self.cell(row, col) {
            Some(cell) => self
                .styles
                .font_spans(cell.style.unwrap_or(LogicalStyle::Normal), &cell.runs),
            None => vec![],
        }
    }

    fn cell_mut(&mut self, at: CellRef) -> &mut Cell {
        self.rows.entry(at.row).or_default().entry(at.col).or_default()
    }
}

impl GridSink for Grid {
    fn create_or_get_cell(&mut self, row: usize, col: usize) -> CellRef {
        let at = CellRef::new(row, col);
        self.cell_mut(at);
        at
    }

    fn set_formatted_text(&mut self, cell: CellRef, runs: Vec<FormattedRun>, style: LogicalStyle) {
        let target = self.cell_mut(cell);
        target.runs = runs;
        target.style = Some(style);
    }

    fn append_formatted_text(
        &mut self,
        cell: CellRef,
        runs: Vec<FormattedRun>,
        style: LogicalStyle,
        with_leading_space: bool,
    ) {
        let target = self.cell_mut(cell);
        let mut combined = target.runs.clone();
        if with_leading_space && !target.is_blank() {
            combined.push(FormattedRun::plain(" "));
        }
        combined.extend(runs);
        target.runs = combined;
        target.style = Some(style);
    }

    fn apply_style(&mut self, cell: CellRef, style: LogicalStyle) {
        self.cell_mut(cell).style = Some(style);
    }

    fn row_handle_for(&mut self, row: usize) -> RowRef {
        self.rows.entry(row).or_default();
        RowRef(row)
    }

    fn has_row(&self, row: usize) -> bool {
        self.rows.contains_key(&row)
    }
}
