use std::fmt;

use crate::{
    parsing::FormattedRun,
    sink::{Cell, CellRef, Grid},
};

pub struct Snap {
    pub rows: Vec<RowSnap>,
}

pub struct RowSnap {
    pub row: usize,
    pub cells: Vec<CellSnap>,
}

/// A cell, or a run of adjacent empty cells sharing one style.
pub struct CellSnap {
    pub range: String,
    pub style: String,
    pub text: String,
}

pub fn normalize(grid: &Grid) -> Snap {
    let rows = grid
        .rows()
        .map(|(row, cells)| {
            let mut snaps: Vec<(usize, usize, CellSnap)> = vec![];
            for (&col, cell) in cells {
                let style = cell.style.map_or("-".to_string(), |s| s.to_string());
                let text = marked_text(cell);

                if text.is_empty()
                    && let Some((_, last_col, prev)) = snaps.last_mut()
                    && prev.text.is_empty()
                    && prev.style == style
                    && *last_col + 1 == col
                {
                    *last_col = col;
                    continue;
                }
                snaps.push((
                    col,
                    col,
                    CellSnap {
                        range: String::new(),
                        style,
                        text,
                    },
                ));
            }

            let cells = snaps
                .into_iter()
                .map(|(first, last, mut snap)| {
                    snap.range = if first == last {
                        CellRef::new(row, first).to_a1()
                    } else {
                        format!(
                            "{}:{}",
                            CellRef::new(row, first).to_a1(),
                            CellRef::new(row, last).to_a1()
                        )
                    };
                    snap
                })
                .collect();
            RowSnap { row, cells }
        })
        .collect();
    Snap { rows }
}

/// Cell text with bold and code re-marked.
fn marked_text(cell: &Cell) -> String {
    cell.runs.iter().map(marked_run).collect()
}

fn marked_run(run: &FormattedRun) -> String {
    match (run.bold, run.code) {
        (false, false) => run.text.clone(),
        (true, false) => format!("**{}**", run.text),
        (false, true) => format!("`{}`", run.text),
        (true, true) => format!("**`{}`**", run.text),
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            write!(f, "{}:", row.row)?;
            for (i, cell) in row.cells.iter().enumerate() {
                let sep = if i == 0 { " " } else { " | " };
                write!(f, "{sep}{}[{}]", cell.range, cell.style)?;
                if !cell.text.is_empty() {
                    write!(f, " {}", cell.text)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
