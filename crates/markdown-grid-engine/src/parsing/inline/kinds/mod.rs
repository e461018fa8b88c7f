pub mod bold;
pub mod code_span;

pub use bold::BoldMarker;
pub use code_span::CodeSpan;
