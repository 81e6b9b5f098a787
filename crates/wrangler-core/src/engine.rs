//! The normalization engine and its per-table caches.

use std::sync::OnceLock;

use tracing::{debug, warn};
use wrangler_model::{
    DependencyReport, EngineOptions, EventRecord, MatchRecord, PlayerRecord, StatRecord, Table,
    TeamRecord,
};

use crate::dependencies::check_dependencies;
use crate::entities::{build_players, build_teams};
use crate::error::{EngineError, Result};
use crate::matches::build_matches;
use crate::stats::build_stats;

/// Derives the normalized tables from one immutable event log.
///
/// Every table is built on its first request and cached; later calls return
/// the same slice. The caches are [`OnceLock`]s, so a shared engine builds
/// each table exactly once even when several threads ask at the same time.
#[derive(Debug)]
pub struct NormalizationEngine {
    events: Vec<EventRecord>,
    options: EngineOptions,
    matches: OnceLock<Vec<MatchRecord>>,
    teams: OnceLock<Vec<TeamRecord>>,
    players: OnceLock<Vec<PlayerRecord>>,
    stats: OnceLock<Vec<StatRecord>>,
}

impl NormalizationEngine {
    /// Create an engine with default options.
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self::build(events, EngineOptions::default())
    }

    /// Create an engine with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOptions`] if `full_match_minutes` is zero.
    pub fn with_options(events: Vec<EventRecord>, options: EngineOptions) -> Result<Self> {
        if options.full_match_minutes == 0 {
            return Err(EngineError::InvalidOptions {
                reason: "full_match_minutes must be greater than zero".to_string(),
            });
        }
        Ok(Self::build(events, options))
    }

    fn build(events: Vec<EventRecord>, options: EngineOptions) -> Self {
        debug!(events = events.len(), "created normalization engine");
        Self {
            events,
            options,
            matches: OnceLock::new(),
            teams: OnceLock::new(),
            players: OnceLock::new(),
            stats: OnceLock::new(),
        }
    }

    pub fn matches(&self) -> &[MatchRecord] {
        cached(&self.matches, || build_matches(&self.events))
    }

    pub fn teams(&self) -> &[TeamRecord] {
        cached(&self.teams, || build_teams(&self.events))
    }

    pub fn players(&self) -> &[PlayerRecord] {
        cached(&self.players, || build_players(&self.events))
    }

    pub fn stats(&self) -> &[StatRecord] {
        cached(&self.stats, || {
            build_stats(&self.events, self.options.full_match_minutes)
        })
    }

    /// Check the single-valued assumptions behind the tables and log each
    /// violation as a warning.
    ///
    /// The report is informational; it does not alter any table.
    pub fn check_dependencies(&self) -> DependencyReport {
        let report = check_dependencies(&self.events);
        for issue in &report.issues {
            warn!(
                kind = issue.kind.as_str(),
                key = %issue.key,
                "{}",
                issue.message()
            );
        }
        if report.is_clean() {
            debug!("event log satisfies all functional dependencies");
        }
        report
    }
}

fn cached<'a, T: Table>(cell: &'a OnceLock<Vec<T>>, build: impl FnOnce() -> Vec<T>) -> &'a [T] {
    cell.get_or_init(|| {
        let rows = build();
        debug!(table = T::NAME, rows = rows.len(), "computed table");
        rows
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_shareable() {
        assert_send_sync::<NormalizationEngine>();
    }

    #[test]
    fn zero_minute_match_is_rejected() {
        let options = EngineOptions::default().with_full_match_minutes(0);
        let err = NormalizationEngine::with_options(Vec::new(), options).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOptions { .. }));
    }

    #[test]
    fn empty_log_yields_empty_tables() {
        let engine = NormalizationEngine::new(Vec::new());
        assert!(engine.matches().is_empty());
        assert!(engine.teams().is_empty());
        assert!(engine.players().is_empty());
        assert!(engine.stats().is_empty());
        assert!(engine.check_dependencies().is_clean());
    }
}
