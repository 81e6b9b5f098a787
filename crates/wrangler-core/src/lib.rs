//! Normalization engine for flat sports-event logs.
//!
//! [`NormalizationEngine`] owns an immutable event log and derives four
//! normalized tables from it on demand:
//!
//! - **teams**: distinct `(team_id, team_name)` pairs
//! - **players**: distinct `(player_id, team_id, player_name)` triples
//! - **matches**: one row per match with home/away team ids and goals pivoted
//!   into paired columns
//! - **stats**: per-player per-match goal and minute totals with ratio columns
//!
//! Each table is computed once, on first request, and cached for the lifetime
//! of the engine.

mod dedupe;
mod dependencies;
mod engine;
mod entities;
mod error;
mod matches;
mod stats;

pub use dependencies::check_dependencies;
pub use engine::NormalizationEngine;
pub use entities::{build_players, build_teams};
pub use error::{EngineError, Result};
pub use matches::build_matches;
pub use stats::build_stats;
