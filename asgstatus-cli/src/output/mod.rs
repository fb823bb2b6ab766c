//! Output formatting.

mod json;

pub use json::print_pretty;
