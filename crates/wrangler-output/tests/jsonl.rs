//! Tests for line-delimited JSON output.

use std::fs;

use tempfile::TempDir;
use wrangler_core::NormalizationEngine;
use wrangler_model::{EventRecord, MatchRecord, StatRecord, Table, TeamRecord};
use wrangler_output::{to_jsonl_string, write_jsonl, write_tables};

fn event(
    match_id: i64,
    team_id: i64,
    player_id: i64,
    is_home: bool,
    goals_scored: i64,
) -> EventRecord {
    EventRecord {
        match_id,
        match_name: format!("Match {match_id}"),
        team_id,
        team_name: format!("Team {team_id}"),
        player_id,
        player_name: format!("Player {player_id}"),
        is_home,
        goals_scored,
        minutes_played: 90,
    }
}

fn sample_engine() -> NormalizationEngine {
    NormalizationEngine::new(vec![
        event(1, 100, 10, true, 2),
        event(1, 200, 20, false, 1),
        event(2, 200, 20, true, 0),
        event(2, 100, 10, false, 0),
    ])
}

#[test]
fn matches_jsonl_snapshot() {
    let engine = sample_engine();
    let jsonl = to_jsonl_string(engine.matches()).unwrap();
    insta::assert_snapshot!(jsonl.trim_end(), @r#"
    {"match_id":1,"match_name":"Match 1","home_team_id":100,"away_team_id":200,"home_goals":2,"away_goals":1}
    {"match_id":2,"match_name":"Match 2","home_team_id":200,"away_team_id":100,"home_goals":0,"away_goals":0}
    "#);
}

#[test]
fn stats_jsonl_snapshot() {
    let engine = sample_engine();
    let jsonl = to_jsonl_string(engine.stats()).unwrap();
    insta::assert_snapshot!(jsonl.trim_end(), @r#"
    {"stat_id":0,"player_id":10,"match_id":1,"goals_scored":2,"minutes_played":90,"frac_minutes_played":1.0,"frac_total_goals":0.6666666666666666}
    {"stat_id":1,"player_id":10,"match_id":2,"goals_scored":0,"minutes_played":90,"frac_minutes_played":1.0,"frac_total_goals":null}
    {"stat_id":2,"player_id":20,"match_id":1,"goals_scored":1,"minutes_played":90,"frac_minutes_played":1.0,"frac_total_goals":0.3333333333333333}
    {"stat_id":3,"player_id":20,"match_id":2,"goals_scored":0,"minutes_played":90,"frac_minutes_played":1.0,"frac_total_goals":null}
    "#);
}

#[test]
fn empty_table_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("teams.jsonl");
    write_jsonl::<TeamRecord>(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn writes_all_tables_into_new_directory() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("output");
    let engine = sample_engine();

    let written = write_tables(&output_dir, &engine).unwrap();
    let names: Vec<&str> = written.iter().map(|table| table.name).collect();
    assert_eq!(names, vec!["teams", "matches", "stats", "players"]);

    for table in &written {
        assert_eq!(table.path, output_dir.join(format!("{}.jsonl", table.name)));
        let contents = fs::read_to_string(&table.path).unwrap();
        assert_eq!(contents.lines().count(), table.rows);
        assert!(contents.is_empty() || contents.ends_with('\n'));
    }

    let stats = fs::read_to_string(output_dir.join("stats.jsonl")).unwrap();
    assert_eq!(stats.lines().count(), engine.stats().len());
    let first = stats.lines().next().unwrap();
    let keys_in_order = StatRecord::COLUMNS
        .iter()
        .map(|column| first.find(&format!("\"{column}\":")).unwrap())
        .collect::<Vec<_>>();
    assert!(keys_in_order.windows(2).all(|pair| pair[0] < pair[1]));

    let matches = fs::read_to_string(output_dir.join("matches.jsonl")).unwrap();
    assert!(matches.starts_with(r#"{"match_id":1,"#));
    assert_eq!(matches.lines().count(), engine.matches().len());
    assert_eq!(MatchRecord::NAME, "matches");
}
