use super::{
    cursor::Cursor,
    kinds::{BoldMarker, CodeSpan},
    types::FormattedRun,
};

/// Splits one line of text into bold/code runs, removing the markers.
///
/// A backtick toggles code in any state. `**` toggles bold outside code unless
/// [`BoldMarker::is_real`] judges it literal, in which case it stays in the text.
/// Every other character lands in the current run, so the run texts
/// concatenated give back the input minus its markers.
pub fn segment_runs(text: &str) -> Vec<FormattedRun> {
    let chars: Vec<char> = text.chars().collect();
    let mut cur = Cursor::new(&chars);
    let mut out = vec![];
    let mut acc = String::new();
    let mut bold = false;
    let mut code = false;

    fn flush(out: &mut Vec<FormattedRun>, acc: &mut String, bold: bool, code: bool) {
        if !acc.is_empty() {
            out.push(FormattedRun::new(std::mem::take(acc), bold, code));
        }
    }

    while let Some(c) = cur.peek() {
        if !code && BoldMarker::at(&cur) {
            if BoldMarker::is_real(&cur, bold) {
                flush(&mut out, &mut acc, bold, code);
                bold = !bold;
            } else {
                acc.push_str(BoldMarker::DELIM);
            }
            cur.bump_n(BoldMarker::DELIM.len());
            continue;
        }

        if c == CodeSpan::TICK {
            flush(&mut out, &mut acc, bold, code);
            code = !code;
            cur.bump();
            continue;
        }

        acc.push(c);
        cur.bump();
    }

    flush(&mut out, &mut acc, bold, code);
    out
}
