//! Event-log ingestion.
//!
//! Reads the flat event CSV into a Polars `DataFrame` and converts it into
//! typed [`EventRecord`](wrangler_model::EventRecord)s for the engine.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wrangler_ingest::{events_from_frame, read_events_csv};
//!
//! let df = read_events_csv(Path::new("events.csv"))?;
//! let events = events_from_frame(&df)?;
//! ```

mod csv;
mod error;
mod frame;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{load_events, read_events_csv};

// === Record Conversion ===
pub use frame::{events_from_frame, require_columns};

// === Value Helpers ===
pub use values::{any_to_bool, any_to_i64, any_to_string, parse_bool, parse_i64};
