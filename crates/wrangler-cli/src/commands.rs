use anyhow::Result;
use comfy_table::Table as ComfyTable;
use wrangler_model::{EngineOptions, MatchRecord, PlayerRecord, StatRecord, Table, TeamRecord};

use wrangler_cli::pipeline::{RunConfig, RunResult, default_output_dir, run_pipeline};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

fn column_row<T: Table>() -> Vec<String> {
    vec![T::NAME.to_string(), T::COLUMNS.join(", ")]
}

pub fn run_tables() -> Result<()> {
    let mut table = ComfyTable::new();
    table.set_header(vec!["Table", "Columns"]);
    apply_table_style(&mut table);
    table.add_row(column_row::<TeamRecord>());
    table.add_row(column_row::<MatchRecord>());
    table.add_row(column_row::<StatRecord>());
    table.add_row(column_row::<PlayerRecord>());
    println!("{table}");
    Ok(())
}

pub fn run_run(args: &RunArgs) -> Result<RunResult> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.events));
    let options = EngineOptions::default()
        .with_full_match_minutes(args.full_match_minutes)
        .with_dependency_check(!args.no_dependency_check);
    let config = RunConfig {
        events_path: args.events.clone(),
        output_dir,
        options,
        dry_run: args.dry_run,
    };
    run_pipeline(&config)
}
