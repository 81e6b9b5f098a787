//! Match table: home/away pivot of the event log.

use std::collections::HashMap;

use wrangler_model::{EventRecord, MatchRecord, Side};

use crate::dedupe::dedupe_preserving_order;

/// Distinct team ids per `(match_id, side)`, in first-seen order.
type SideTeams = HashMap<(i64, Side), Vec<i64>>;

/// Summed goals per `(match_id, side)`.
type SideGoals = HashMap<(i64, Side), i64>;

fn side_teams(events: &[EventRecord]) -> SideTeams {
    let rows = dedupe_preserving_order(
        events
            .iter()
            .map(|event| (event.match_id, event.side(), event.team_id)),
    );
    let mut teams = SideTeams::new();
    for (match_id, side, team_id) in rows {
        teams.entry((match_id, side)).or_default().push(team_id);
    }
    teams
}

fn side_goals(events: &[EventRecord]) -> SideGoals {
    let mut goals = SideGoals::new();
    for event in events {
        let total = goals.entry((event.match_id, event.side())).or_default();
        *total = total.saturating_add(event.goals_scored);
    }
    goals
}

fn set_side(record: &mut MatchRecord, side: Side, team_id: Option<i64>, goals: Option<i64>) {
    match side {
        Side::Home => {
            record.home_team_id = team_id;
            record.home_goals = goals;
        }
        Side::Away => {
            record.away_team_id = team_id;
            record.away_goals = goals;
        }
    }
}

/// Left-joins one side's team ids and goals onto `rows` by `match_id`.
///
/// A match with no team on `side` keeps a single row with that side unset.
/// A match with several teams on `side` fans out into one row per team.
fn join_side(
    rows: Vec<MatchRecord>,
    side: Side,
    teams: &SideTeams,
    goals: &SideGoals,
) -> Vec<MatchRecord> {
    let mut joined = Vec::with_capacity(rows.len());
    for mut row in rows {
        let key = (row.match_id, side);
        let side_goals = goals.get(&key).copied();
        match teams.get(&key).map(Vec::as_slice) {
            Some([]) | None => {
                set_side(&mut row, side, None, side_goals);
                joined.push(row);
            }
            Some(team_ids) => {
                for &team_id in team_ids {
                    let mut fanned = row.clone();
                    set_side(&mut fanned, side, Some(team_id), side_goals);
                    joined.push(fanned);
                }
            }
        }
    }
    joined
}

/// Builds the match table.
///
/// Rows start from the distinct `(match_id, match_name)` pairs in first-seen
/// order, then the home side and the away side are joined on in turn.
pub fn build_matches(events: &[EventRecord]) -> Vec<MatchRecord> {
    let base = dedupe_preserving_order(
        events
            .iter()
            .map(|event| (event.match_id, event.match_name.clone())),
    );
    let teams = side_teams(events);
    let goals = side_goals(events);

    let mut rows: Vec<MatchRecord> = base
        .into_iter()
        .map(|(match_id, match_name)| MatchRecord {
            match_id,
            match_name,
            home_team_id: None,
            away_team_id: None,
            home_goals: None,
            away_goals: None,
        })
        .collect();
    for side in Side::ALL {
        rows = join_side(rows, side, &teams, &goals);
    }
    rows
}
