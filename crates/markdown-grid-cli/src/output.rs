//! Text renditions of a rendered grid.

use markdown_grid_engine::{Grid, snapshot};

/// One line per row, cells joined by tabs up to the row's last cell.
///
/// Bold and code markers are dropped. Tabs inside cell text become spaces so
/// columns stay aligned.
pub fn to_tsv(grid: &Grid) -> String {
    let mut out = String::new();
    let mut next_row = 0;
    for (row, cells) in grid.rows() {
        // Rows missing from the grid still take a line.
        for _ in next_row..row {
            out.push('\n');
        }
        if let Some(&last_col) = cells.keys().next_back() {
            let fields: Vec<String> = (0..=last_col)
                .map(|col| {
                    cells
                        .get(&col)
                        .map(|cell| cell.text().replace('\t', " "))
                        .unwrap_or_default()
                })
                .collect();
            out.push_str(&fields.join("\t"));
        }
        out.push('\n');
        next_row = row + 1;
    }
    out
}

/// Cell-by-cell listing with styles, for inspecting a layout.
pub fn to_cells(grid: &Grid) -> String {
    snapshot::normalize(grid).to_string()
}
