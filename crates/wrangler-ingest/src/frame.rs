//! DataFrame to [`EventRecord`] conversion.

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;
use wrangler_model::{EVENT_COLUMNS, EventRecord};

use crate::error::{IngestError, Result};
use crate::values::{any_to_bool, any_to_i64, any_to_string};

/// Fails on the first event column (in [`EVENT_COLUMNS`] order) missing from `df`.
pub fn require_columns(df: &DataFrame) -> Result<()> {
    for column in EVENT_COLUMNS {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

struct EventColumns<'a> {
    match_id: &'a Column,
    match_name: &'a Column,
    team_id: &'a Column,
    team_name: &'a Column,
    player_id: &'a Column,
    player_name: &'a Column,
    is_home: &'a Column,
    goals_scored: &'a Column,
    minutes_played: &'a Column,
}

impl<'a> EventColumns<'a> {
    fn bind(df: &'a DataFrame) -> Result<Self> {
        require_columns(df)?;
        Ok(Self {
            match_id: df.column("match_id")?,
            match_name: df.column("match_name")?,
            team_id: df.column("team_id")?,
            team_name: df.column("team_name")?,
            player_id: df.column("player_id")?,
            player_name: df.column("player_name")?,
            is_home: df.column("is_home")?,
            goals_scored: df.column("goals_scored")?,
            minutes_played: df.column("minutes_played")?,
        })
    }

    fn record(&self, row: usize) -> Result<EventRecord> {
        Ok(EventRecord {
            match_id: int_cell(self.match_id, row)?,
            match_name: string_cell(self.match_name, row)?,
            team_id: int_cell(self.team_id, row)?,
            team_name: string_cell(self.team_name, row)?,
            player_id: int_cell(self.player_id, row)?,
            player_name: string_cell(self.player_name, row)?,
            is_home: bool_cell(self.is_home, row)?,
            goals_scored: int_cell(self.goals_scored, row)?,
            minutes_played: int_cell(self.minutes_played, row)?,
        })
    }
}

fn invalid(column: &Column, row: usize, value: AnyValue<'_>) -> IngestError {
    IngestError::InvalidValue {
        column: column.name().to_string(),
        row,
        value: any_to_string(value),
    }
}

fn int_cell(column: &Column, row: usize) -> Result<i64> {
    let value = column.get(row)?;
    any_to_i64(value.clone()).ok_or_else(|| invalid(column, row, value))
}

fn bool_cell(column: &Column, row: usize) -> Result<bool> {
    let value = column.get(row)?;
    any_to_bool(value.clone()).ok_or_else(|| invalid(column, row, value))
}

fn string_cell(column: &Column, row: usize) -> Result<String> {
    match column.get(row)? {
        AnyValue::Null => Err(invalid(column, row, AnyValue::Null)),
        value => Ok(any_to_string(value)),
    }
}

/// Converts an event-log DataFrame into typed records, in row order.
///
/// Every column in [`EVENT_COLUMNS`] must be present; extra columns are
/// ignored. A missing column or an unconvertible cell is a fatal error.
pub fn events_from_frame(df: &DataFrame) -> Result<Vec<EventRecord>> {
    let columns = EventColumns::bind(df)?;
    let events = (0..df.height())
        .map(|row| columns.record(row))
        .collect::<Result<Vec<_>>>()?;
    debug!(events = events.len(), "converted event rows");
    Ok(events)
}
