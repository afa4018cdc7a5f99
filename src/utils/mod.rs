pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{format_delta, format_percent, format_score};
