//! The normalization pipeline: ingest, normalize, check, output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};
use wrangler_core::NormalizationEngine;
use wrangler_ingest::load_events;
use wrangler_model::{EngineOptions, MatchRecord, PlayerRecord, StatRecord, Table, TeamRecord};
use wrangler_output::write_tables;

/// Directory name used when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub events_path: PathBuf,
    pub output_dir: PathBuf,
    pub options: EngineOptions,
    pub dry_run: bool,
}

impl RunConfig {
    /// Config writing to the default output directory beside the events file.
    pub fn new(events_path: impl Into<PathBuf>) -> Self {
        let events_path = events_path.into();
        let output_dir = default_output_dir(&events_path);
        Self {
            events_path,
            output_dir,
            options: EngineOptions::default(),
            dry_run: false,
        }
    }
}

/// Row count for one output table, plus its path when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub name: &'static str,
    pub rows: usize,
    pub path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunResult {
    pub events_path: PathBuf,
    pub event_rows: usize,
    /// `None` when the run was a dry run.
    pub output_dir: Option<PathBuf>,
    pub tables: Vec<TableSummary>,
    /// `None` when the dependency check was skipped.
    pub dependency_issues: Option<usize>,
}

/// `<dir of events_path>/output`.
pub fn default_output_dir(events_path: &Path) -> PathBuf {
    events_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_OUTPUT_DIR)
}

fn dry_run_summaries(engine: &NormalizationEngine) -> Vec<TableSummary> {
    let summary = |name, rows| TableSummary {
        name,
        rows,
        path: None,
    };
    vec![
        summary(TeamRecord::NAME, engine.teams().len()),
        summary(MatchRecord::NAME, engine.matches().len()),
        summary(StatRecord::NAME, engine.stats().len()),
        summary(PlayerRecord::NAME, engine.players().len()),
    ]
}

/// Run the full pipeline for one events file.
pub fn run_pipeline(config: &RunConfig) -> Result<RunResult> {
    let span = info_span!("run", events = %config.events_path.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let events = load_events(&config.events_path)
        .with_context(|| format!("load events: {}", config.events_path.display()))?;
    let event_rows = events.len();
    info!(rows = event_rows, "loaded event log");

    // =========================================================================
    // Stage 2: Normalize
    // =========================================================================
    let engine = NormalizationEngine::with_options(events, config.options.clone())
        .context("configure normalization engine")?;

    let dependency_issues = if config.options.check_dependencies {
        let report = engine.check_dependencies();
        if !report.is_clean() {
            info!(
                issues = report.issues.len(),
                "event log violates functional dependencies; tables may contain duplicate keys"
            );
        }
        Some(report.issues.len())
    } else {
        None
    };

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let (tables, output_dir) = if config.dry_run {
        info!("dry run: skipping output");
        (dry_run_summaries(&engine), None)
    } else {
        let written = write_tables(&config.output_dir, &engine)
            .with_context(|| format!("write tables: {}", config.output_dir.display()))?;
        let tables = written
            .into_iter()
            .map(|table| TableSummary {
                name: table.name,
                rows: table.rows,
                path: Some(table.path),
            })
            .collect();
        (tables, Some(config.output_dir.clone()))
    };

    Ok(RunResult {
        events_path: config.events_path.clone(),
        event_rows,
        output_dir,
        tables,
        dependency_issues,
    })
}
