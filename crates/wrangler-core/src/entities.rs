//! Leaf projections of the event log onto the team and player tables.
//!
//! Neither projection aggregates. An id that appears with two different
//! attribute values yields two rows.

use wrangler_model::{EventRecord, PlayerRecord, TeamRecord};

use crate::dedupe::dedupe_preserving_order;

pub fn build_teams(events: &[EventRecord]) -> Vec<TeamRecord> {
    dedupe_preserving_order(events.iter().map(|event| TeamRecord {
        team_id: event.team_id,
        team_name: event.team_name.clone(),
    }))
}

pub fn build_players(events: &[EventRecord]) -> Vec<PlayerRecord> {
    dedupe_preserving_order(events.iter().map(|event| PlayerRecord {
        player_id: event.player_id,
        team_id: event.team_id,
        player_name: event.player_name.clone(),
    }))
}
