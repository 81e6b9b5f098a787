//! Data model for event-log normalization.
//!
//! The flat input row ([`EventRecord`]), the four normalized output records,
//! engine options and the dependency-check report types.

pub mod issues;
pub mod options;
pub mod records;

pub use issues::{DependencyIssue, DependencyIssueKind, DependencyReport};
pub use options::{DEFAULT_FULL_MATCH_MINUTES, EngineOptions};
pub use records::{
    EVENT_COLUMNS, EventRecord, MatchRecord, PlayerRecord, Side, StatRecord, Table, TeamRecord,
};
