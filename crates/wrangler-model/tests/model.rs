use serde::Serialize;

use wrangler_model::{
    DependencyIssue, DependencyIssueKind, DependencyReport, EngineOptions, MatchRecord,
    PlayerRecord, Side, StatRecord, Table, TeamRecord,
};

fn json_keys<T: Serialize>(value: &T) -> Vec<String> {
    let json = serde_json::to_string(value).expect("serialize");
    // serde_json preserves struct field order when writing to a string
    let mut keys = Vec::new();
    let mut rest = json.as_str();
    while let Some(start) = rest.find('"') {
        let after = &rest[start + 1..];
        let end = after.find('"').expect("closing quote");
        let key = &after[..end];
        let tail = &after[end + 1..];
        if tail.starts_with(':') {
            keys.push(key.to_string());
        }
        rest = tail;
    }
    keys
}

fn sample_stat(frac_total_goals: f64) -> StatRecord {
    StatRecord {
        stat_id: 0,
        player_id: 10,
        match_id: 1,
        goals_scored: 0,
        minutes_played: 45,
        frac_minutes_played: 0.5,
        frac_total_goals,
    }
}

#[test]
fn match_keys_follow_column_order() {
    let record = MatchRecord {
        match_id: 1,
        match_name: "A vs B".to_string(),
        home_team_id: Some(100),
        away_team_id: Some(200),
        home_goals: Some(2),
        away_goals: Some(1),
    };
    assert_eq!(json_keys(&record), MatchRecord::COLUMNS);
}

#[test]
fn team_and_player_keys_follow_column_order() {
    let team = TeamRecord {
        team_id: 100,
        team_name: "Reds".to_string(),
    };
    let player = PlayerRecord {
        player_id: 10,
        team_id: 100,
        player_name: "Ann".to_string(),
    };
    assert_eq!(json_keys(&team), TeamRecord::COLUMNS);
    assert_eq!(json_keys(&player), PlayerRecord::COLUMNS);
}

#[test]
fn stat_keys_follow_column_order() {
    assert_eq!(json_keys(&sample_stat(0.25)), StatRecord::COLUMNS);
}

#[test]
fn nan_fraction_serializes_as_null() {
    let json = serde_json::to_string(&sample_stat(f64::NAN)).expect("serialize");
    assert!(json.ends_with(r#""frac_total_goals":null}"#), "{json}");
}

#[test]
fn missing_side_serializes_as_null() {
    let record = MatchRecord {
        match_id: 7,
        match_name: "Solo".to_string(),
        home_team_id: Some(1),
        away_team_id: None,
        home_goals: Some(0),
        away_goals: None,
    };
    let json = serde_json::to_string(&record).expect("serialize");
    assert_eq!(
        json,
        r#"{"match_id":7,"match_name":"Solo","home_team_id":1,"away_team_id":null,"home_goals":0,"away_goals":null}"#
    );
    assert_eq!(record.team_id(Side::Away), None);
    assert_eq!(record.goals(Side::Home), Some(0));
}

#[test]
fn table_names() {
    assert_eq!(MatchRecord::NAME, "matches");
    assert_eq!(TeamRecord::NAME, "teams");
    assert_eq!(PlayerRecord::NAME, "players");
    assert_eq!(StatRecord::NAME, "stats");
}

#[test]
fn side_prefixes() {
    assert_eq!(Side::ALL, [Side::Home, Side::Away]);
    assert_eq!(Side::from_is_home(true), Side::Home);
    assert_eq!(Side::from_is_home(false), Side::Away);
    assert_eq!(Side::Home.to_string(), "home");
    assert!(!Side::Away.is_home());
}

#[test]
fn default_options() {
    let options = EngineOptions::default();
    assert_eq!(options.full_match_minutes, 90);
    assert!(options.check_dependencies);

    let custom = EngineOptions::new()
        .with_full_match_minutes(120)
        .with_dependency_check(false);
    assert_eq!(custom.full_match_minutes, 120);
    assert!(!custom.check_dependencies);
}

#[test]
fn report_counts_by_kind() {
    let report = DependencyReport {
        issues: vec![
            DependencyIssue {
                kind: DependencyIssueKind::TeamName,
                key: "team 100".to_string(),
                values: vec!["Reds".to_string(), "Red FC".to_string()],
            },
            DependencyIssue {
                kind: DependencyIssueKind::AwaySide,
                key: "match 3".to_string(),
                values: vec![],
            },
        ],
    };
    assert!(!report.is_clean());
    assert_eq!(report.count(DependencyIssueKind::TeamName), 1);
    assert_eq!(report.count(DependencyIssueKind::PlayerName), 0);
    assert_eq!(report.keys(DependencyIssueKind::AwaySide), vec!["match 3"]);
    assert_eq!(
        report.issues[0].message(),
        "team 100 maps to 2 distinct values: Reds, Red FC"
    );
    assert_eq!(report.issues[1].message(), "match 3 has no team on this side");
}
