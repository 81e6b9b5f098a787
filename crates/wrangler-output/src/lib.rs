//! Output generation for normalized event tables.
//!
//! Each table is written as line-delimited JSON (`<name>.jsonl`), one object
//! per row, keys in the table's column order.

mod error;
mod jsonl;

pub use error::{OutputError, Result};
pub use jsonl::{WrittenTable, to_jsonl_string, write_jsonl, write_table, write_tables};
