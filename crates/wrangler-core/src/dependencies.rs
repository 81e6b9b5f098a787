//! Functional-dependency and side-cardinality checks over the event log.
//!
//! The checks only report. Extraction never consults them, so an event log
//! that violates an assumption produces the same tables whether or not it
//! was checked.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use wrangler_model::{DependencyIssue, DependencyIssueKind, DependencyReport, EventRecord, Side};

/// Distinct values per key, keys ascending, values in first-seen order.
fn distinct_values<K, V, I>(pairs: I) -> BTreeMap<K, Vec<V>>
where
    K: Ord,
    V: PartialEq,
    I: IntoIterator<Item = (K, V)>,
{
    let mut grouped: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for (key, value) in pairs {
        let values = grouped.entry(key).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }
    grouped
}

fn multi_valued<K, V>(
    kind: DependencyIssueKind,
    grouped: BTreeMap<K, Vec<V>>,
    describe_key: impl Fn(&K) -> String,
) -> impl Iterator<Item = DependencyIssue>
where
    V: Display,
{
    grouped
        .into_iter()
        .filter(|(_, values)| values.len() > 1)
        .map(move |(key, values)| DependencyIssue {
            kind,
            key: describe_key(&key),
            values: values.iter().map(ToString::to_string).collect(),
        })
}

fn side_issues(events: &[EventRecord]) -> Vec<DependencyIssue> {
    let teams = distinct_values(
        events
            .iter()
            .map(|event| ((event.match_id, event.side()), event.team_id)),
    );
    let match_ids: BTreeSet<i64> = events.iter().map(|event| event.match_id).collect();

    let mut issues = Vec::new();
    for match_id in match_ids {
        for side in Side::ALL {
            let team_ids = teams.get(&(match_id, side)).map(Vec::as_slice).unwrap_or(&[]);
            if team_ids.len() != 1 {
                issues.push(DependencyIssue {
                    kind: DependencyIssueKind::for_side(side),
                    key: format!("match {match_id}"),
                    values: team_ids.iter().map(ToString::to_string).collect(),
                });
            }
        }
    }
    issues
}

/// Checks every single-valued assumption the extraction relies on.
pub fn check_dependencies(events: &[EventRecord]) -> DependencyReport {
    let mut issues = Vec::new();

    issues.extend(multi_valued(
        DependencyIssueKind::MatchName,
        distinct_values(
            events
                .iter()
                .map(|event| (event.match_id, event.match_name.as_str())),
        ),
        |id| format!("match {id}"),
    ));
    issues.extend(multi_valued(
        DependencyIssueKind::TeamName,
        distinct_values(
            events
                .iter()
                .map(|event| (event.team_id, event.team_name.as_str())),
        ),
        |id| format!("team {id}"),
    ));
    issues.extend(multi_valued(
        DependencyIssueKind::PlayerName,
        distinct_values(
            events
                .iter()
                .map(|event| (event.player_id, event.player_name.as_str())),
        ),
        |id| format!("player {id}"),
    ));
    issues.extend(multi_valued(
        DependencyIssueKind::PlayerTeam,
        distinct_values(
            events
                .iter()
                .map(|event| ((event.player_id, event.match_id), event.team_id)),
        ),
        |(player_id, match_id)| format!("player {player_id}, match {match_id}"),
    ));
    issues.extend(side_issues(events));

    DependencyReport { issues }
}
