pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{BulletItem, NumberItem};
pub use rule::HorizontalRule;
pub use table::TableLine;
