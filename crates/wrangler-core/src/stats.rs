//! Per-player per-match statistics.

use std::collections::{BTreeMap, HashMap};

use wrangler_model::{EventRecord, StatRecord};

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    goals_scored: i64,
    minutes_played: i64,
}

/// Sums goals and minutes per `(player_id, match_id)`, ordered by that key.
fn player_match_totals(events: &[EventRecord]) -> BTreeMap<(i64, i64), Totals> {
    events.iter().fold(BTreeMap::new(), |mut acc, event| {
        let totals: &mut Totals = acc.entry((event.player_id, event.match_id)).or_default();
        totals.goals_scored = totals.goals_scored.saturating_add(event.goals_scored);
        totals.minutes_played = totals.minutes_played.saturating_add(event.minutes_played);
        acc
    })
}

fn match_goal_totals(events: &[EventRecord]) -> HashMap<i64, i64> {
    let mut totals = HashMap::new();
    for event in events {
        let total: &mut i64 = totals.entry(event.match_id).or_default();
        *total = total.saturating_add(event.goals_scored);
    }
    totals
}

/// Share of the match's goals scored by one player.
///
/// Returns `NaN` when the match had no goals.
pub(crate) fn goal_fraction(goals_scored: i64, total_goals: i64) -> f64 {
    if total_goals == 0 {
        f64::NAN
    } else {
        goals_scored as f64 / total_goals as f64
    }
}

/// Builds the stats table.
///
/// Rows are ordered by `(player_id, match_id)` ascending and `stat_id` is the
/// 0-based row position in that order.
pub fn build_stats(events: &[EventRecord], full_match_minutes: u32) -> Vec<StatRecord> {
    let match_goals = match_goal_totals(events);
    let full_match_minutes = f64::from(full_match_minutes);

    player_match_totals(events)
        .into_iter()
        .enumerate()
        .map(|(stat_id, ((player_id, match_id), totals))| {
            let total_goals = match_goals.get(&match_id).copied().unwrap_or_default();
            StatRecord {
                stat_id,
                player_id,
                match_id,
                goals_scored: totals.goals_scored,
                minutes_played: totals.minutes_played,
                frac_minutes_played: totals.minutes_played as f64 / full_match_minutes,
                frac_total_goals: goal_fraction(totals.goals_scored, total_goals),
            }
        })
        .collect()
}
