use std::collections::HashMap;
use std::path::Path;

use log::warn;
use snafu::prelude::*;

use crate::scenario::*;

/// One row of the historical table, as read by the CSV and Excel readers.
#[derive(PartialEq, Debug, Clone)]
pub struct HistoricalRow {
    pub year: u32,
    pub state: String,
    pub electoral_votes: u32,
    pub population: Option<u64>,
    pub winner: Option<String>,
    pub runner_up: Option<String>,
}

pub const COL_YEAR: &str = "Year";
pub const COL_STATE: &str = "State";
pub const COL_ELECTORAL_VOTES: &str = "Electoral_Votes";
pub const COL_POPULATION: &str = "Population";
pub const COL_WINNER: &str = "Winner_Party";
pub const COL_RUNNER_UP: &str = "RunnerUp_Party";

/// The positions of the columns of the historical table.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ColumnIndex {
    pub year: usize,
    pub state: usize,
    pub electoral_votes: usize,
    pub population: usize,
    pub winner: usize,
    pub runner_up: Option<usize>,
}

impl ColumnIndex {
    pub fn from_header(header: &[String]) -> ScenarioResult<ColumnIndex> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);
        let required = |name: &str| {
            find(name).context(MissingColumnSnafu {
                column: name.to_string(),
            })
        };
        Ok(ColumnIndex {
            year: required(COL_YEAR)?,
            state: required(COL_STATE)?,
            electoral_votes: required(COL_ELECTORAL_VOTES)?,
            population: required(COL_POPULATION)?,
            winner: required(COL_WINNER)?,
            runner_up: find(COL_RUNNER_UP),
        })
    }
}

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Reads a cell that holds a count. Empty cells are absent.
///
/// Spreadsheet exports sometimes write integers as `1234.0`.
pub fn parse_count(cell: &str, lineno: usize, column: &str) -> ScenarioResult<Option<u64>> {
    let s = cell.trim();
    if s.is_empty() {
        return Ok(None);
    }
    if let Ok(x) = s.parse::<u64>() {
        return Ok(Some(x));
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Ok(Some(f.round() as u64)),
        _ => MalformedCellSnafu {
            lineno,
            column,
            content: s,
        }
        .fail(),
    }
}

/// Reads a year or a number of electoral votes. Values that do not fit are
/// malformed.
pub fn parse_u32(cell: &str, lineno: usize, column: &str) -> ScenarioResult<Option<u32>> {
    match parse_count(cell, lineno, column)? {
        None => Ok(None),
        Some(x) => u32::try_from(x).ok().map(Some).context(MalformedCellSnafu {
            lineno,
            column,
            content: cell.trim(),
        }),
    }
}

pub fn parse_label(cell: &str) -> Option<String> {
    let s = cell.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Groups the rows by state. States keep the order of their first row.
///
/// A state exists in a year when it has electoral votes. A second row for
/// the same state and year is ignored.
pub fn rows_to_timelines(rows: Vec<HistoricalRow>) -> Vec<StateTimeline> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut res: Vec<StateTimeline> = Vec::new();
    for row in rows {
        let pos = *positions.entry(row.state.clone()).or_insert_with(|| {
            res.push(StateTimeline {
                name: row.state.clone(),
                timeline: Vec::new(),
            });
            res.len() - 1
        });
        let tl = &mut res[pos];
        if tl.entry_for_year(row.year).is_some() {
            warn!(
                "rows_to_timelines: duplicate row for {} in {}, ignoring it",
                row.state, row.year
            );
            continue;
        }
        tl.timeline.push(YearEntry {
            year: row.year,
            exists: row.electoral_votes > 0,
            population: row.population,
            electoral_votes: row.electoral_votes,
            winner: row.winner,
            runner_up: row.runner_up,
        });
    }
    res
}

/// Adds the timelines of another source. The entries already present win.
pub fn merge_timelines(into: &mut Vec<StateTimeline>, other: Vec<StateTimeline>) {
    for tl in other {
        match into.iter_mut().find(|t| t.name == tl.name) {
            Some(existing) => {
                for entry in tl.timeline {
                    if existing.entry_for_year(entry.year).is_some() {
                        warn!(
                            "merge_timelines: {} already has an entry for {}, ignoring the new one",
                            tl.name, entry.year
                        );
                    } else {
                        existing.timeline.push(entry);
                    }
                }
            }
            None => into.push(tl),
        }
    }
}
