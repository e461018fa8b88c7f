pub mod blocks;
pub mod inline;
pub mod scan;

pub use blocks::{Line, LineClassifier, LineKind};
pub use inline::{FormattedRun, LineBreakSplit, has_line_break, segment_runs, split_on_line_breaks};
pub use scan::TextScanner;
