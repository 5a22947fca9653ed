//! Rendering of ranked medal tables
//!
//! Each generator takes the rows of a ranked view, already sorted and truncated, along
//! with the sort key that produced them:
//! - **Console**: aligned table with the sorted column marked (and highlighted when
//!   colors are enabled)
//! - **JSON**: machine-readable document with the sort key and ranked rows

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
