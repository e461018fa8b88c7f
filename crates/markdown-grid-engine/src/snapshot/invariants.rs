use crate::{
    parsing::TextScanner,
    sink::{Grid, LogicalStyle},
};

pub fn check(grid: &Grid, merge_cols: usize) {
    let rows: Vec<usize> = grid.rows().map(|(r, _)| r).collect();
    let expected: Vec<usize> = (0..rows.len()).collect();
    assert_eq!(rows, expected, "rows must be materialised without gaps");

    for (row, cells) in grid.rows() {
        for (&col, cell) in cells {
            let style = cell.style.unwrap_or(LogicalStyle::Normal);
            let is_table = matches!(
                style,
                LogicalStyle::TableHeader | LogicalStyle::TableBody | LogicalStyle::TableBodyLastRow
            );
            assert!(
                is_table || col < merge_cols.max(1),
                "cell ({row}, {col}) outside merge width {merge_cols}"
            );

            if style.is_code() {
                continue;
            }
            for run in cell.runs.iter().filter(|r| !r.code) {
                let chars: Vec<char> = run.text.chars().collect();
                assert!(
                    (0..chars.len()).all(|i| TextScanner::br_tag_len(&chars, i) == 0),
                    "literal <br> left in cell ({row}, {col}): {:?}",
                    run.text
                );
            }
        }
    }
}
