//! One handler per line kind, each next to the closure of the block it opens.

mod blank;
mod code;
mod heading;
mod list;
mod normal;
mod quote;
mod rule;
mod table;
