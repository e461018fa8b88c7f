use std::path::Path;

use markdown_grid_engine::{Grid, read_lines, render_lines, render_str, snapshot};

fn render_fixture(name: &str, merge_cols: usize) -> String {
    let path = format!("{}/tests/fixtures/{name}.md", env!("CARGO_MANIFEST_DIR"));
    let lines = read_lines(Path::new(&path)).unwrap();

    let mut grid = Grid::default();
    render_lines(lines, &mut grid, merge_cols).unwrap();
    snapshot::invariants(&grid, merge_cols);

    snapshot::normalize(&grid).to_string()
}

#[test]
fn fixture_heading_paragraphs() {
    insta::assert_snapshot!(render_fixture("heading_paragraphs", 4), @r"
    0: A1[heading1] Title
    1:
    2: A3[normal] Body text
    3: A4[normal] Body2
    ");
}

#[test]
fn fixture_bullet_break() {
    insta::assert_snapshot!(render_fixture("bullet_break", 4), @r"
    0: B1[bullet] ・ item one
    1: C2[bullet] detail line
    ");
}

#[test]
fn fixture_simple_table() {
    insta::assert_snapshot!(render_fixture("simple_table", 4), @r"
    0: B1[tableHeader] A | C1[tableHeader] B
    1: B2[tableBodyLastRow] 1 | C2[tableBodyLastRow] 2
    ");
}

#[test]
fn fixture_code_block() {
    insta::assert_snapshot!(render_fixture("code_block", 4), @r"
    0: A1[normal] Intro
    1: B2[codeFrame(TL)] let x = 1; | C2[codeFrame(T)] | D2[codeFrame(TR)]
    2: B3[codeFrame(BL)]   nested | C3[codeFrame(B)] | D3[codeFrame(BR)]
    3: A4[normal] After
    ");
}

#[test]
fn fixture_block_quote() {
    insta::assert_snapshot!(render_fixture("block_quote", 3), @r"
    0: B1[quoteLeft] first second plain after | C1[quoteBody]
    1: B2[quoteLeft] new | C2[quoteBody]
    2: B3[quoteLeft] line | C3[quoteBody]
    3: A4[normal] next
    ");
}

#[test]
fn fixture_nested_lists() {
    insta::assert_snapshot!(render_fixture("nested_lists", 5), @r"
    0: B1[bullet] ・ one
    1: C2[bullet] ・ two more detail
    2: B3[listItem] 1. first indented note
    3: C4[normal] child para
    4: A5[normal] back
    ");
}

#[test]
fn fixture_heading_breaks() {
    insta::assert_snapshot!(render_fixture("heading_breaks", 4), @r"
    0: A1[heading1] Head
    1: A2[heading1] Second
    2:
    3: A4[heading2] Sub
    4:
    5: A6[normal] text
    6: A7[normal] more - not bullet
    ");
}

#[test]
fn fixture_horizontal_rule() {
    insta::assert_snapshot!(render_fixture("horizontal_rule", 3), @r"
    0: A1[normal] above
    1: A2:C2[horizontalRule]
    2: A3[normal] below
    ");
}

#[test]
fn fixture_table_after_list() {
    insta::assert_snapshot!(render_fixture("table_after_list", 4), @r"
    0: B1[bullet] ・ item
    1: B2[tableHeader] a | C2[tableHeader] b | c
    2: B3[tableBody] `x|y` | C3[tableBody]
    3: B4[tableBodyLastRow] 3 | C4[tableBodyLastRow]
    4: A5[normal] after
    ");
}

#[test]
fn fixture_list_continuation() {
    insta::assert_snapshot!(render_fixture("list_continuation", 4), @r"
    0: B1[bullet] ・ a
    1: C2[bullet] b
    2: C3[bullet] c d
    3: A4[normal] next
    ");
}

#[test]
fn fixture_quote_bold_break() {
    insta::assert_snapshot!(render_fixture("quote_bold_break", 3), @r"
    0: B1[quoteLeft] **note** | C1[quoteBody]
    1: B2[quoteLeft] **still** here | C2[quoteBody]
    ");
}

#[test]
fn uppercase_bold_is_still_bold() {
    let mut grid = Grid::default();
    render_str("**TE**", &mut grid, 4);
    insta::assert_snapshot!(snapshot::normalize(&grid).to_string(), @"0: A1[normal] **TE**");
}

#[test]
fn unterminated_fence_is_framed_at_end() {
    let mut grid = Grid::default();
    let summary = render_str("```\ncode", &mut grid, 2);
    assert_eq!(summary.rows, 1);
    insta::assert_snapshot!(snapshot::normalize(&grid).to_string(), @"0: B1[codeFrame(TBLR)] code");
}

#[test]
fn read_error_stops_the_render() {
    let lines = vec![
        Ok("# ok".to_string()),
        Err(std::io::Error::other("disk gone")),
        Ok("never".to_string()),
    ];
    let mut grid = Grid::default();
    let err = render_lines(lines, &mut grid, 4).unwrap_err();
    assert_eq!(err.to_string(), "Failed to read input line 2: disk gone");
    assert!(grid.cell(0, 0).is_some());
}

#[test]
fn every_cell_stays_inside_a_single_column_grid() {
    let doc = "# H\n* a\n  * b\n    * c\n> q\n```\nx\n```\n---\ntext";
    let mut grid = Grid::default();
    render_str(doc, &mut grid, 1);
    snapshot::invariants(&grid, 1);
}
