//! Line-delimited JSON writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use wrangler_core::NormalizationEngine;
use wrangler_model::{MatchRecord, PlayerRecord, StatRecord, Table, TeamRecord};

use crate::error::{OutputError, Result};

/// A table written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub name: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

fn serialize_row<T: Serialize + Table>(row: &T) -> Result<String> {
    serde_json::to_string(row).map_err(|source| OutputError::Serialize {
        table: T::NAME,
        source,
    })
}

/// Render rows as line-delimited JSON, each line terminated by `\n`.
///
/// Non-finite floats are written as `null`.
pub fn to_jsonl_string<T: Serialize + Table>(rows: &[T]) -> Result<String> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serialize_row(row)?);
        out.push('\n');
    }
    Ok(out)
}

/// Write rows to `path` as line-delimited JSON, replacing any existing file.
pub fn write_jsonl<T: Serialize + Table>(path: &Path, rows: &[T]) -> Result<()> {
    let write_err = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for row in rows {
        let line = serialize_row(row)?;
        writer.write_all(line.as_bytes()).map_err(write_err)?;
        writer.write_all(b"\n").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    debug!(table = T::NAME, path = %path.display(), rows = rows.len(), "wrote table");
    Ok(())
}

/// Write one table as `<dir>/<name>.jsonl`.
pub fn write_table<T: Serialize + Table>(dir: &Path, rows: &[T]) -> Result<WrittenTable> {
    let path = dir.join(format!("{}.jsonl", T::NAME));
    write_jsonl(&path, rows)?;
    Ok(WrittenTable {
        name: T::NAME,
        path,
        rows: rows.len(),
    })
}

/// Write all four tables into `dir`, creating it if needed.
///
/// Tables are written in the order teams, matches, stats, players.
pub fn write_tables(dir: &Path, engine: &NormalizationEngine) -> Result<Vec<WrittenTable>> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let written = vec![
        write_table::<TeamRecord>(dir, engine.teams())?,
        write_table::<MatchRecord>(dir, engine.matches())?,
        write_table::<StatRecord>(dir, engine.stats())?,
        write_table::<PlayerRecord>(dir, engine.players())?,
    ];
    info!(dir = %dir.display(), tables = written.len(), "wrote output tables");
    Ok(written)
}
