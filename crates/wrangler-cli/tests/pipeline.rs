//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wrangler_cli::pipeline::{RunConfig, default_output_dir, run_pipeline};
use wrangler_model::EngineOptions;

const EVENTS: &str = "\
match_id,match_name,team_id,team_name,player_id,player_name,is_home,goals_scored,minutes_played
1,Reds vs Blues,100,Reds,10,Ann,True,2,90
1,Reds vs Blues,200,Blues,20,Bo,False,1,90
2,Blues vs Reds,200,Blues,20,Bo,True,0,90
2,Blues vs Reds,100,Reds,10,Ann,False,0,45
";

fn write_events(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("events.csv");
    fs::write(&path, contents).expect("write events");
    path
}

#[test]
fn default_output_dir_sits_beside_events() {
    assert_eq!(
        default_output_dir(Path::new("/data/events.csv")),
        PathBuf::from("/data/output")
    );
    assert_eq!(
        default_output_dir(Path::new("events.csv")),
        PathBuf::from("output")
    );
}

#[test]
fn run_writes_four_tables() {
    let dir = TempDir::new().unwrap();
    let events_path = write_events(dir.path(), EVENTS);
    let config = RunConfig::new(&events_path);

    let result = run_pipeline(&config).unwrap();

    assert_eq!(result.event_rows, 4);
    assert_eq!(result.output_dir, Some(dir.path().join("output")));
    assert_eq!(result.dependency_issues, Some(0));
    let rows: Vec<(&str, usize)> = result
        .tables
        .iter()
        .map(|table| (table.name, table.rows))
        .collect();
    assert_eq!(
        rows,
        vec![("teams", 2), ("matches", 2), ("stats", 4), ("players", 2)]
    );
    for table in &result.tables {
        let path = table.path.as_ref().expect("written path");
        assert!(path.is_file(), "{} missing", path.display());
    }

    let matches = fs::read_to_string(dir.path().join("output/matches.jsonl")).unwrap();
    assert_eq!(
        matches.lines().next().unwrap(),
        r#"{"match_id":1,"match_name":"Reds vs Blues","home_team_id":100,"away_team_id":200,"home_goals":2,"away_goals":1}"#
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let events_path = write_events(dir.path(), EVENTS);
    let mut config = RunConfig::new(&events_path);
    config.dry_run = true;
    config.options = EngineOptions::default().with_dependency_check(false);

    let result = run_pipeline(&config).unwrap();

    assert_eq!(result.output_dir, None);
    assert_eq!(result.dependency_issues, None);
    assert!(result.tables.iter().all(|table| table.path.is_none()));
    assert_eq!(result.tables[2].rows, 4);
    assert!(!dir.path().join("output").exists());
}

#[test]
fn dependency_issues_are_counted_not_fatal() {
    let dir = TempDir::new().unwrap();
    let contents = format!("{EVENTS}3,Reds vs Greens,100,Reds FC,10,Ann,True,1,90\n");
    let events_path = write_events(dir.path(), &contents);
    let mut config = RunConfig::new(&events_path);
    config.output_dir = dir.path().join("tables");

    let result = run_pipeline(&config).unwrap();

    // team 100 has two names and match 3 has no away side
    assert_eq!(result.dependency_issues, Some(2));
    assert_eq!(result.tables[0].rows, 3);
    assert!(dir.path().join("tables/teams.jsonl").is_file());
}

#[test]
fn missing_column_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let contents = "match_id,match_name,team_id,team_name,player_id,player_name,goals_scored,minutes_played\n\
                    1,Reds vs Blues,100,Reds,10,Ann,2,90\n";
    let events_path = write_events(dir.path(), contents);

    let err = run_pipeline(&RunConfig::new(&events_path)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("required column 'is_home'"), "{message}");
    assert!(!dir.path().join("output").exists());
}

#[test]
fn zero_minute_match_is_rejected() {
    let dir = TempDir::new().unwrap();
    let events_path = write_events(dir.path(), EVENTS);
    let mut config = RunConfig::new(&events_path);
    config.options = EngineOptions::default().with_full_match_minutes(0);

    let err = run_pipeline(&config).unwrap_err();
    assert!(format!("{err:#}").contains("full_match_minutes"));
}
