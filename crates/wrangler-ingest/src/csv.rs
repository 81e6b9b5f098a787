//! CSV loading for the event log.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;
use wrangler_model::EventRecord;

use crate::error::{IngestError, Result};
use crate::frame::events_from_frame;

/// Reads the event CSV into a Polars DataFrame.
///
/// The first line is the header. Column types are inferred from the first
/// 100 rows and converted strictly later by [`events_from_frame`].
pub fn read_events_csv(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read event csv"
    );
    Ok(df)
}

/// Reads and converts the event CSV in one step.
pub fn load_events(path: &Path) -> Result<Vec<EventRecord>> {
    let df = read_events_csv(path)?;
    events_from_frame(&df)
}
